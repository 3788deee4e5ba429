use std::{iter::Peekable, str::CharIndices};

use crate::token::{Span, Token, TokenKind, unsupported_statement_keyword};

pub use self::error::{LexError, LexResult};

mod error;

pub struct Lexer<'a> {
    input: &'a str,
    chars: Peekable<CharIndices<'a>>,
    indent_stack: Vec<usize>,
    pending_tokens: Vec<Token<'a>>,
    bracket_depth: usize,
    at_line_start: bool,
    eof_reached: bool,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            indent_stack: vec![0],
            pending_tokens: Vec::new(),
            bracket_depth: 0,
            at_line_start: true,
            eof_reached: false,
            line: 1,
            column: 0,
        }
    }

    pub fn next_token(&mut self) -> LexResult<Token<'a>> {
        if let Some(token) = self.pending_tokens.pop() {
            return Ok(token);
        }

        if self.eof_reached {
            return Ok(Token::new(TokenKind::EOF, self.empty_span()));
        }

        if self.at_line_start {
            self.at_line_start = false;
            let indent_level = self.count_indentation()?;
            let current_indent = self.current_indent();
            let span = self.empty_span();

            if indent_level > current_indent {
                self.indent_stack.push(indent_level);
                return Ok(Token::new(TokenKind::Indent, span));
            } else if indent_level < current_indent {
                while let Some(&top) = self.indent_stack.last() {
                    if top > indent_level {
                        self.indent_stack.pop();
                        self.pending_tokens.push(Token::new(TokenKind::Dedent, span));
                    } else {
                        break;
                    }
                }
                if self.current_indent() != indent_level {
                    return Err(LexError::InvalidDedent {
                        indent_level,
                        line: self.line,
                        column: self.column,
                    });
                }
                if let Some(token) = self.pending_tokens.pop() {
                    return Ok(token);
                }
            }
        }

        self.skip_whitespace();

        let Some(&(start_idx, ch)) = self.chars.peek() else {
            self.eof_reached = true;
            // Close every open block before EOF
            let span = self.empty_span();
            while self.indent_stack.len() > 1 {
                self.indent_stack.pop();
                self.pending_tokens.push(Token::new(TokenKind::Dedent, span));
            }
            if let Some(token) = self.pending_tokens.pop() {
                return Ok(token);
            }
            return Ok(Token::new(TokenKind::EOF, span));
        };

        let line = self.line;
        let column = self.column;
        let next = self.peek_second();
        match ch {
            '\n' => {
                self.at_line_start = true;
                Ok(self.punct(TokenKind::Newline, 1, start_idx, line, column))
            }
            '=' if next == Some('=') => {
                Ok(self.punct(TokenKind::EqualEqual, 2, start_idx, line, column))
            }
            '=' => Ok(self.punct(TokenKind::Equal, 1, start_idx, line, column)),
            '!' if next == Some('=') => {
                Ok(self.punct(TokenKind::NotEqual, 2, start_idx, line, column))
            }
            '<' if next == Some('=') => {
                Ok(self.punct(TokenKind::LessEqual, 2, start_idx, line, column))
            }
            '<' => Ok(self.punct(TokenKind::Less, 1, start_idx, line, column)),
            '>' if next == Some('=') => {
                Ok(self.punct(TokenKind::GreaterEqual, 2, start_idx, line, column))
            }
            '>' => Ok(self.punct(TokenKind::Greater, 1, start_idx, line, column)),
            '+' => Ok(self.punct(TokenKind::Plus, 1, start_idx, line, column)),
            '-' => Ok(self.punct(TokenKind::Minus, 1, start_idx, line, column)),
            '*' => Ok(self.punct(TokenKind::Star, 1, start_idx, line, column)),
            '/' => Ok(self.punct(TokenKind::Slash, 1, start_idx, line, column)),
            '%' => Ok(self.punct(TokenKind::Percent, 1, start_idx, line, column)),
            '|' => Ok(self.punct(TokenKind::Pipe, 1, start_idx, line, column)),
            ':' => Ok(self.punct(TokenKind::Colon, 1, start_idx, line, column)),
            ',' => Ok(self.punct(TokenKind::Comma, 1, start_idx, line, column)),
            '.' if next.is_some_and(|c| c.is_ascii_digit()) => {
                self.read_number(start_idx, line, column)
            }
            '.' => Ok(self.punct(TokenKind::Dot, 1, start_idx, line, column)),
            '(' | '[' | '{' => {
                self.bracket_depth += 1;
                let kind = match ch {
                    '(' => TokenKind::LParen,
                    '[' => TokenKind::LBracket,
                    _ => TokenKind::LBrace,
                };
                Ok(self.punct(kind, 1, start_idx, line, column))
            }
            ')' | ']' | '}' => {
                if self.bracket_depth == 0 {
                    return Err(LexError::UnmatchedClosingBracket {
                        character: ch,
                        line,
                        column,
                    });
                }
                self.bracket_depth -= 1;
                let kind = match ch {
                    ')' => TokenKind::RParen,
                    ']' => TokenKind::RBracket,
                    _ => TokenKind::RBrace,
                };
                Ok(self.punct(kind, 1, start_idx, line, column))
            }
            '"' | '\'' => self.read_string(ch, start_idx, line, column),
            c if c.is_alphabetic() || c == '_' => Ok(self.read_identifier(start_idx, line, column)),
            c if c.is_ascii_digit() => self.read_number(start_idx, line, column),
            _ => Err(LexError::UnexpectedCharacter {
                character: ch,
                line,
                column,
            }),
        }
    }

    fn count_indentation(&mut self) -> LexResult<usize> {
        let mut count = 0;

        // Look ahead on a clone so blank and comment-only lines keep the current indent
        let mut temp_chars = self.chars.clone();
        let mut is_empty_line = true;

        while let Some(&(_, c)) = temp_chars.peek() {
            match c {
                ' ' | '\r' => {
                    temp_chars.next();
                }
                '\t' => {
                    return Err(LexError::TabIndentation {
                        line: self.line,
                        column: self.column,
                    });
                }
                '\n' | '#' => break,
                _ => {
                    is_empty_line = false;
                    break;
                }
            }
        }

        if is_empty_line {
            return Ok(self.current_indent());
        }

        while let Some(&(_, ' ')) = self.chars.peek() {
            self.advance_char();
            count += 1;
        }

        Ok(count)
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            match c {
                ' ' | '\t' | '\r' => {
                    self.advance_char();
                }
                '#' => {
                    while let Some(&(_, c)) = self.chars.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance_char();
                    }
                }
                '\\' if self.peek_second() == Some('\n') => {
                    self.advance_char();
                    self.advance_char();
                }
                // Implicit line joining inside brackets
                '\n' if self.bracket_depth > 0 => {
                    self.advance_char();
                }
                _ => break,
            }
        }
    }

    fn read_identifier(&mut self, start: usize, line: usize, column: usize) -> Token<'a> {
        self.advance_char(); // Consume first char
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_alphanumeric() || c == '_' {
                self.advance_char();
            } else {
                break;
            }
        }

        let end = self.current_index();
        let ident = &self.input[start..end];
        let kind = match ident {
            "if" => TokenKind::If,
            "elif" => TokenKind::Elif,
            "else" => TokenKind::Else,
            "and" => TokenKind::And,
            "or" => TokenKind::Or,
            "not" => TokenKind::Not,
            "in" => TokenKind::In,
            "is" => TokenKind::Is,
            "pass" => TokenKind::Pass,
            "True" => TokenKind::True,
            "False" => TokenKind::False,
            "None" => TokenKind::None,
            _ => match unsupported_statement_keyword(ident) {
                Some(construct) => TokenKind::UnsupportedKeyword(construct),
                None => TokenKind::Identifier(ident),
            },
        };
        Token::new(
            kind,
            Span {
                start,
                end,
                line,
                column,
            },
        )
    }

    fn read_number(&mut self, start: usize, line: usize, column: usize) -> LexResult<Token<'a>> {
        let mut is_float = false;
        self.consume_digits();

        if let Some(&(_, '.')) = self.chars.peek() {
            is_float = true;
            self.advance_char();
            self.consume_digits();
        }

        if let Some(&(_, 'e' | 'E')) = self.chars.peek() {
            let mut lookahead = self.chars.clone();
            lookahead.next();
            if let Some(&(_, '+' | '-')) = lookahead.peek() {
                lookahead.next();
            }
            if lookahead.peek().is_some_and(|&(_, c)| c.is_ascii_digit()) {
                is_float = true;
                self.advance_char();
                if let Some(&(_, '+' | '-')) = self.chars.peek() {
                    self.advance_char();
                }
                self.consume_digits();
            }
        }

        let end = self.current_index();
        let literal = &self.input[start..end];
        let invalid = || LexError::InvalidNumericLiteral {
            literal: literal.to_string(),
            line,
            column,
        };
        if literal.ends_with('_') || literal.contains("__") {
            return Err(invalid());
        }
        let digits = literal.replace('_', "");
        let kind = if is_float {
            TokenKind::Float(digits.parse::<f64>().map_err(|_| invalid())?)
        } else {
            TokenKind::Integer(digits.parse::<i64>().map_err(|_| invalid())?)
        };
        Ok(Token::new(
            kind,
            Span {
                start,
                end,
                line,
                column,
            },
        ))
    }

    fn consume_digits(&mut self) {
        while let Some(&(_, c)) = self.chars.peek() {
            if c.is_ascii_digit() || c == '_' {
                self.advance_char();
            } else {
                break;
            }
        }
    }

    fn read_string(
        &mut self,
        quote: char,
        start: usize,
        line: usize,
        column: usize,
    ) -> LexResult<Token<'a>> {
        self.advance_char(); // Consume opening quote
        let content_start = start + quote.len_utf8();
        while let Some(&(idx, c)) = self.chars.peek() {
            if c == quote {
                self.advance_char(); // Consume closing quote
                return Ok(Token::new(
                    TokenKind::String(&self.input[content_start..idx]),
                    Span {
                        start,
                        end: idx + quote.len_utf8(),
                        line,
                        column,
                    },
                ));
            }
            if c == '\n' {
                break;
            }
            self.advance_char();
            if c == '\\' {
                // Escaped character, including an escaped newline
                if self.advance_char().is_none() {
                    break;
                }
            }
        }
        Err(LexError::UnterminatedString { line, column })
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = LexResult<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_token())
    }
}

impl<'a> Lexer<'a> {
    fn punct(
        &mut self,
        kind: TokenKind<'a>,
        len: usize,
        start: usize,
        line: usize,
        column: usize,
    ) -> Token<'a> {
        for _ in 0..len {
            self.advance_char();
        }
        Token::new(
            kind,
            Span {
                start,
                end: start + len,
                line,
                column,
            },
        )
    }

    fn advance_char(&mut self) -> Option<(usize, char)> {
        let next = self.chars.next();
        if let Some((_, c)) = next {
            if c == '\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
        next
    }

    fn peek_second(&self) -> Option<char> {
        let mut lookahead = self.chars.clone();
        lookahead.next();
        lookahead.next().map(|(_, c)| c)
    }

    fn current_index(&mut self) -> usize {
        self.chars
            .peek()
            .map(|(idx, _)| *idx)
            .unwrap_or(self.input.len())
    }

    fn current_indent(&self) -> usize {
        self.indent_stack.last().copied().unwrap_or(0)
    }

    fn empty_span(&mut self) -> Span {
        let index = self.current_index();
        Span {
            start: index,
            end: index,
            line: self.line,
            column: self.column,
        }
    }
}

pub fn tokenize<'a>(input: &'a str) -> LexResult<Vec<Token<'a>>> {
    let mut lexer = Lexer::new(input);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let is_eof = matches!(token.kind, TokenKind::EOF);
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    Ok(tokens)
}
