use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("Invalid dedent to {indent_level} spaces at line {line}, column {column}")]
    InvalidDedent {
        indent_level: usize,
        line: usize,
        column: usize,
    },
    #[error("Unexpected character '{character}' at line {line}, column {column}")]
    UnexpectedCharacter {
        character: char,
        line: usize,
        column: usize,
    },
    #[error("Tabs are not supported for indentation at line {line}, column {column}")]
    TabIndentation { line: usize, column: usize },
    #[error("Invalid numeric literal '{literal}' at line {line}, column {column}")]
    InvalidNumericLiteral {
        literal: String,
        line: usize,
        column: usize,
    },
    #[error("Unterminated string literal at line {line}, column {column}")]
    UnterminatedString { line: usize, column: usize },
    #[error("Unmatched closing '{character}' at line {line}, column {column}")]
    UnmatchedClosingBracket {
        character: char,
        line: usize,
        column: usize,
    },
}

pub type LexResult<T> = Result<T, LexError>;
