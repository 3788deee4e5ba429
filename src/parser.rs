use thiserror::Error;

use crate::ast::{BoolOperator, CompareOperator, Expression, Program, Statement, UnaryOperator};
use crate::lexer::{self, LexError};
use crate::token::{Span, Token, TokenKind};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("Expected {expected}, got {found} at line {line}, column {column}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        line: usize,
        column: usize,
    },
    #[error("Unsupported syntax: {construct} at line {line}, column {column}")]
    UnsupportedSyntax {
        construct: &'static str,
        line: usize,
        column: usize,
    },
    #[error("Invalid escape sequence '{sequence}' at line {line}, column {column}")]
    InvalidEscape {
        sequence: String,
        line: usize,
        column: usize,
    },
}

/// Failure of the source-to-syntax-tree step.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FrontendError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

pub struct Parser<'a> {
    tokens: Vec<Token<'a>>,
    position: usize,
}

impl<'a> Parser<'a> {
    pub fn new(mut tokens: Vec<Token<'a>>) -> Self {
        if !matches!(tokens.last().map(Token::kind), Some(TokenKind::EOF)) {
            let span = tokens.last().map(Token::span).unwrap_or_default();
            tokens.push(Token::new(TokenKind::EOF, span));
        }
        Self {
            tokens,
            position: 0,
        }
    }

    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut statements = Vec::new();
        while !matches!(self.kind(), TokenKind::EOF) {
            if self.consume_newlines() {
                continue;
            }
            statements.push(self.parse_statement()?);
        }
        Ok(Program { statements })
    }

    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        if let Some(construct) = self.kind().unsupported_statement() {
            self.skip_compound_statement();
            return Ok(Statement::Unsupported { construct });
        }
        let start = self.position;
        let parsed = match self.kind() {
            TokenKind::If => self.parse_if(),
            TokenKind::Elif | TokenKind::Else => Err(self.error("statement")),
            _ => self.parse_simple_line(),
        };
        match parsed {
            Err(ParseError::UnsupportedSyntax { construct, .. }) => {
                self.position = start;
                self.skip_compound_statement();
                Ok(Statement::Unsupported { construct })
            }
            other => other,
        }
    }

    fn parse_simple_line(&mut self) -> Result<Statement, ParseError> {
        let statement = self.parse_simple_statement()?;
        self.expect_statement_end()?;
        Ok(statement)
    }

    fn parse_simple_statement(&mut self) -> Result<Statement, ParseError> {
        if matches!(self.kind(), TokenKind::Pass) {
            self.advance();
            return Ok(Statement::Pass);
        }

        let first = self.parse_expression_list()?;
        match self.kind() {
            TokenKind::Equal => {
                let mut targets = vec![first];
                self.advance();
                let mut value = self.parse_expression_list()?;
                while matches!(self.kind(), TokenKind::Equal) {
                    self.advance();
                    targets.push(value);
                    value = self.parse_expression_list()?;
                }
                Ok(Statement::Assign { targets, value })
            }
            TokenKind::Colon => {
                self.advance();
                let annotation = self.parse_annotation()?;
                let value = if matches!(self.kind(), TokenKind::Equal) {
                    self.advance();
                    Some(self.parse_expression_list()?)
                } else {
                    None
                };
                Ok(Statement::AnnAssign {
                    target: first,
                    annotation,
                    value,
                })
            }
            _ => Ok(Statement::Expr(first)),
        }
    }

    fn parse_if(&mut self) -> Result<Statement, ParseError> {
        // Current token is `if` or `elif`
        self.advance();
        let test = self.parse_expression()?;
        self.expect(TokenKind::Colon, ":")?;
        let body = self.parse_block()?;

        let orelse = match self.kind() {
            TokenKind::Elif => vec![self.parse_if()?],
            TokenKind::Else => {
                self.advance();
                self.expect(TokenKind::Colon, ":")?;
                self.parse_block()?
            }
            _ => Vec::new(),
        };

        Ok(Statement::If { test, body, orelse })
    }

    fn parse_block(&mut self) -> Result<Vec<Statement>, ParseError> {
        if !matches!(self.kind(), TokenKind::Newline) {
            // Single-line suite: `if a: pass`
            if let Some(construct) = self.kind().unsupported_statement() {
                self.skip_line();
                return Ok(vec![Statement::Unsupported { construct }]);
            }
            let start = self.position;
            let statement = match self.parse_simple_line() {
                Err(ParseError::UnsupportedSyntax { construct, .. }) => {
                    self.position = start;
                    self.skip_line();
                    Statement::Unsupported { construct }
                }
                other => other?,
            };
            return Ok(vec![statement]);
        }

        self.consume_newlines();
        self.expect(TokenKind::Indent, "indent")?;
        let mut body = Vec::new();
        while !matches!(self.kind(), TokenKind::Dedent | TokenKind::EOF) {
            if self.consume_newlines() {
                continue;
            }
            body.push(self.parse_statement()?);
        }
        if matches!(self.kind(), TokenKind::Dedent) {
            self.advance();
        }
        Ok(body)
    }

    /// Annotations are never translated, so only their source text is kept.
    fn parse_annotation(&mut self) -> Result<String, ParseError> {
        let mut text = self.parse_annotation_atom()?;
        while matches!(self.kind(), TokenKind::Pipe) {
            self.advance();
            text.push_str(" | ");
            text.push_str(&self.parse_annotation_atom()?);
        }
        Ok(text)
    }

    fn parse_annotation_atom(&mut self) -> Result<String, ParseError> {
        let mut text = match *self.kind() {
            TokenKind::None => {
                self.advance();
                return Ok("None".to_string());
            }
            TokenKind::String(raw) => {
                self.advance();
                return Ok(format!("'{raw}'"));
            }
            TokenKind::Identifier(name) => {
                self.advance();
                name.to_string()
            }
            _ => return Err(self.error("type annotation")),
        };

        while matches!(self.kind(), TokenKind::Dot) {
            self.advance();
            text.push('.');
            text.push_str(self.expect_identifier()?);
        }

        if matches!(self.kind(), TokenKind::LBracket) {
            self.advance();
            let mut params = vec![self.parse_annotation()?];
            while matches!(self.kind(), TokenKind::Comma) {
                self.advance();
                params.push(self.parse_annotation()?);
            }
            self.expect(TokenKind::RBracket, "]")?;
            text.push('[');
            text.push_str(&params.join(", "));
            text.push(']');
        }

        Ok(text)
    }

    /// Expression, or a bare tuple such as `1, 2` on either side of `=`.
    fn parse_expression_list(&mut self) -> Result<Expression, ParseError> {
        let first = self.parse_expression()?;
        if !matches!(self.kind(), TokenKind::Comma) {
            return Ok(first);
        }

        let mut elements = vec![first];
        while matches!(self.kind(), TokenKind::Comma) {
            self.advance();
            if self.at_statement_end() || matches!(self.kind(), TokenKind::Equal) {
                break;
            }
            elements.push(self.parse_expression()?);
        }
        Ok(Expression::Tuple(elements))
    }

    pub fn parse_expression(&mut self) -> Result<Expression, ParseError> {
        self.parse_or()
    }

    fn parse_or(&mut self) -> Result<Expression, ParseError> {
        let first = self.parse_and()?;
        if !matches!(self.kind(), TokenKind::Or) {
            return Ok(first);
        }
        let mut values = vec![first];
        while matches!(self.kind(), TokenKind::Or) {
            self.advance();
            values.push(self.parse_and()?);
        }
        Ok(Expression::BoolOp {
            op: BoolOperator::Or,
            values,
        })
    }

    fn parse_and(&mut self) -> Result<Expression, ParseError> {
        let first = self.parse_not()?;
        if !matches!(self.kind(), TokenKind::And) {
            return Ok(first);
        }
        let mut values = vec![first];
        while matches!(self.kind(), TokenKind::And) {
            self.advance();
            values.push(self.parse_not()?);
        }
        Ok(Expression::BoolOp {
            op: BoolOperator::And,
            values,
        })
    }

    fn parse_not(&mut self) -> Result<Expression, ParseError> {
        if matches!(self.kind(), TokenKind::Not) {
            self.advance();
            let operand = self.parse_not()?;
            return Ok(Expression::UnaryOp {
                op: UnaryOperator::Not,
                operand: Box::new(operand),
            });
        }
        self.parse_comparison()
    }

    fn parse_comparison(&mut self) -> Result<Expression, ParseError> {
        let left = self.parse_factor()?;
        let mut ops = Vec::new();
        let mut comparators = Vec::new();

        loop {
            let op = match self.kind() {
                TokenKind::Greater => CompareOperator::Greater,
                TokenKind::GreaterEqual => CompareOperator::GreaterEqual,
                TokenKind::Less => CompareOperator::Less,
                TokenKind::LessEqual => CompareOperator::LessEqual,
                TokenKind::EqualEqual => CompareOperator::Equal,
                TokenKind::NotEqual => CompareOperator::NotEqual,
                TokenKind::In => return Err(self.unsupported("membership test 'in'")),
                TokenKind::Is => return Err(self.unsupported("identity test 'is'")),
                TokenKind::Not => return Err(self.unsupported("membership test 'not in'")),
                kind if kind.is_arithmetic() => {
                    return Err(self.unsupported("arithmetic operator"));
                }
                _ => break,
            };
            self.advance();
            ops.push(op);
            comparators.push(self.parse_factor()?);
        }

        if ops.is_empty() {
            return Ok(left);
        }
        Ok(Expression::Compare {
            left: Box::new(left),
            ops,
            comparators,
        })
    }

    fn parse_factor(&mut self) -> Result<Expression, ParseError> {
        let op = match self.kind() {
            TokenKind::Plus => UnaryOperator::Plus,
            TokenKind::Minus => UnaryOperator::Minus,
            _ => return self.parse_postfix(),
        };
        self.advance();
        let operand = self.parse_factor()?;
        Ok(Expression::UnaryOp {
            op,
            operand: Box::new(operand),
        })
    }

    fn parse_postfix(&mut self) -> Result<Expression, ParseError> {
        let atom = self.parse_atom()?;
        match self.kind() {
            TokenKind::LParen => Err(self.unsupported("function call")),
            TokenKind::LBracket => Err(self.unsupported("subscript")),
            TokenKind::Dot => Err(self.unsupported("attribute access")),
            _ => Ok(atom),
        }
    }

    fn parse_atom(&mut self) -> Result<Expression, ParseError> {
        match *self.kind() {
            TokenKind::Integer(value) => {
                self.advance();
                Ok(Expression::Integer(value))
            }
            TokenKind::Float(value) => {
                self.advance();
                Ok(Expression::Float(value))
            }
            TokenKind::String(_) => {
                // Adjacent literals concatenate: "a" "b" == "ab"
                let mut value = String::new();
                while let TokenKind::String(raw) = *self.kind() {
                    let span = self.span();
                    value.push_str(&decode_string(raw, span)?);
                    self.advance();
                }
                Ok(Expression::String(value))
            }
            TokenKind::True => {
                self.advance();
                Ok(Expression::Boolean(true))
            }
            TokenKind::False => {
                self.advance();
                Ok(Expression::Boolean(false))
            }
            TokenKind::None => {
                self.advance();
                Ok(Expression::None)
            }
            TokenKind::Identifier(name) => {
                self.advance();
                Ok(Expression::Identifier(name.to_string()))
            }
            TokenKind::LParen => self.parse_parenthesized(),
            TokenKind::LBracket => {
                self.advance();
                let elements = self.parse_elements(TokenKind::RBracket, "]")?;
                Ok(Expression::List(elements))
            }
            TokenKind::LBrace => self.parse_dict(),
            _ => Err(self.error("expression")),
        }
    }

    fn parse_parenthesized(&mut self) -> Result<Expression, ParseError> {
        self.expect(TokenKind::LParen, "(")?;
        if matches!(self.kind(), TokenKind::RParen) {
            self.advance();
            return Ok(Expression::Tuple(Vec::new()));
        }

        let first = self.parse_expression()?;
        if matches!(self.kind(), TokenKind::RParen) {
            self.advance();
            return Ok(first);
        }

        self.expect(TokenKind::Comma, ")")?;
        let mut elements = vec![first];
        elements.extend(self.parse_elements(TokenKind::RParen, ")")?);
        Ok(Expression::Tuple(elements))
    }

    /// Comma-separated expressions up to `close`, trailing comma allowed.
    fn parse_elements(
        &mut self,
        close: TokenKind<'static>,
        close_text: &'static str,
    ) -> Result<Vec<Expression>, ParseError> {
        let mut elements = Vec::new();
        while *self.kind() != close {
            elements.push(self.parse_expression()?);
            if matches!(self.kind(), TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(close, close_text)?;
        Ok(elements)
    }

    fn parse_dict(&mut self) -> Result<Expression, ParseError> {
        self.expect(TokenKind::LBrace, "{")?;
        let mut entries = Vec::new();
        while !matches!(self.kind(), TokenKind::RBrace) {
            let key = self.parse_expression()?;
            if matches!(self.kind(), TokenKind::Comma | TokenKind::RBrace) {
                return Err(self.unsupported("set literal"));
            }
            self.expect(TokenKind::Colon, ":")?;
            let value = self.parse_expression()?;
            entries.push((key, value));
            if matches!(self.kind(), TokenKind::Comma) {
                self.advance();
            } else {
                break;
            }
        }
        self.expect(TokenKind::RBrace, "}")?;
        Ok(Expression::Dict(entries))
    }

    /// Skips a statement with its indented block and any `elif`, `else`,
    /// `except` or `finally` clauses that continue it.
    fn skip_compound_statement(&mut self) {
        self.skip_line();
        self.skip_block();
        while matches!(
            self.kind(),
            TokenKind::Elif | TokenKind::Else | TokenKind::Identifier("except" | "finally")
        ) {
            self.skip_line();
            self.skip_block();
        }
    }

    /// Skips to the start of the next logical line.
    fn skip_line(&mut self) {
        while !self.at_statement_end() {
            self.advance();
        }
        if matches!(self.kind(), TokenKind::Newline) {
            self.advance();
        }
    }

    fn skip_block(&mut self) {
        self.consume_newlines();
        if !matches!(self.kind(), TokenKind::Indent) {
            return;
        }
        let mut depth = 0usize;
        loop {
            match self.kind() {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => {
                    depth -= 1;
                    if depth == 0 {
                        self.advance();
                        return;
                    }
                }
                TokenKind::EOF => return,
                _ => {}
            }
            self.advance();
        }
    }

    fn consume_newlines(&mut self) -> bool {
        let mut consumed = false;
        while matches!(self.kind(), TokenKind::Newline) {
            consumed = true;
            self.advance();
        }
        consumed
    }

    fn at_statement_end(&self) -> bool {
        matches!(
            self.kind(),
            TokenKind::Newline | TokenKind::Dedent | TokenKind::EOF
        )
    }

    /// A statement ends at a newline, or at the end of its block or file.
    fn expect_statement_end(&mut self) -> Result<(), ParseError> {
        match self.kind() {
            TokenKind::Newline => {
                self.advance();
                Ok(())
            }
            TokenKind::Dedent | TokenKind::EOF => Ok(()),
            _ => Err(self.error("newline")),
        }
    }

    fn expect_identifier(&mut self) -> Result<&'a str, ParseError> {
        if let TokenKind::Identifier(name) = *self.kind() {
            self.advance();
            Ok(name)
        } else {
            Err(self.error("identifier"))
        }
    }

    fn expect(&mut self, kind: TokenKind<'static>, text: &'static str) -> Result<(), ParseError> {
        if *self.kind() == kind {
            self.advance();
            Ok(())
        } else {
            Err(self.error(text))
        }
    }

    fn advance(&mut self) {
        if self.position + 1 < self.tokens.len() {
            self.position += 1;
        }
    }

    fn current(&self) -> &Token<'a> {
        &self.tokens[self.position]
    }

    fn kind(&self) -> &TokenKind<'a> {
        &self.current().kind
    }

    fn span(&self) -> Span {
        self.current().span
    }

    fn error(&self, expected: &'static str) -> ParseError {
        let span = self.span();
        ParseError::UnexpectedToken {
            expected,
            found: format!("{:?}", self.kind()),
            line: span.line,
            column: span.column,
        }
    }

    fn unsupported(&self, construct: &'static str) -> ParseError {
        let span = self.span();
        ParseError::UnsupportedSyntax {
            construct,
            line: span.line,
            column: span.column,
        }
    }
}

/// Decodes the backslash escapes of a raw string literal body.
///
/// Unknown escapes are kept verbatim, backslash included.
fn decode_string(raw: &str, span: Span) -> Result<String, ParseError> {
    let mut decoded = String::with_capacity(raw.len());
    let mut chars = raw.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        let Some(escaped) = chars.next() else {
            decoded.push('\\');
            break;
        };
        match escaped {
            '\n' => {}
            '\\' => decoded.push('\\'),
            '\'' => decoded.push('\''),
            '"' => decoded.push('"'),
            'n' => decoded.push('\n'),
            'r' => decoded.push('\r'),
            't' => decoded.push('\t'),
            '0'..='7' => {
                // Up to three octal digits: `\0`, `\12`, `\101`
                let mut code = u32::from(escaped) - u32::from('0');
                for _ in 0..2 {
                    match chars.clone().next().and_then(|c| c.to_digit(8)) {
                        Some(digit) => {
                            code = code * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                decoded.extend(char::from_u32(code));
            }
            'a' => decoded.push('\x07'),
            'b' => decoded.push('\x08'),
            'f' => decoded.push('\x0c'),
            'v' => decoded.push('\x0b'),
            'x' | 'u' | 'U' => {
                let width = match escaped {
                    'x' => 2,
                    'u' => 4,
                    _ => 8,
                };
                let digits: String = chars.by_ref().take(width).collect();
                let invalid = || ParseError::InvalidEscape {
                    sequence: format!("\\{escaped}{digits}"),
                    line: span.line,
                    column: span.column,
                };
                if digits.len() != width {
                    return Err(invalid());
                }
                let code = u32::from_str_radix(&digits, 16).map_err(|_| invalid())?;
                decoded.push(char::from_u32(code).ok_or_else(invalid)?);
            }
            other => {
                decoded.push('\\');
                decoded.push(other);
            }
        }
    }

    Ok(decoded)
}

pub fn parse_tokens(tokens: Vec<Token<'_>>) -> Result<Program, ParseError> {
    Parser::new(tokens).parse_program()
}

/// Tokenizes and parses `input` into a [`Program`].
pub fn parse(input: &str) -> Result<Program, FrontendError> {
    let tokens = lexer::tokenize(input)?;
    Ok(parse_tokens(tokens)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;

    fn name(value: &str) -> Expression {
        Expression::Identifier(value.to_string())
    }

    fn parse_single(input: &str) -> Statement {
        let mut program = parse(input).expect("parse failed");
        assert_eq!(program.statements.len(), 1, "expected one statement");
        program.statements.remove(0)
    }

    #[test]
    fn parses_simple_program() {
        let input = indoc! {r#"
            a = b = [1, 2.5, "x"]
            c: dict[str, int] = {"k": -1}
            if a > 1 or not b:
                pass
        "#};
        let program = parse(input).expect("parse failed");

        let expected = Program {
            statements: vec![
                Statement::Assign {
                    targets: vec![name("a"), name("b")],
                    value: Expression::List(vec![
                        Expression::Integer(1),
                        Expression::Float(2.5),
                        Expression::String("x".to_string()),
                    ]),
                },
                Statement::AnnAssign {
                    target: name("c"),
                    annotation: "dict[str, int]".to_string(),
                    value: Some(Expression::Dict(vec![(
                        Expression::String("k".to_string()),
                        Expression::UnaryOp {
                            op: UnaryOperator::Minus,
                            operand: Box::new(Expression::Integer(1)),
                        },
                    )])),
                },
                Statement::If {
                    test: Expression::BoolOp {
                        op: BoolOperator::Or,
                        values: vec![
                            Expression::Compare {
                                left: Box::new(name("a")),
                                ops: vec![CompareOperator::Greater],
                                comparators: vec![Expression::Integer(1)],
                            },
                            Expression::UnaryOp {
                                op: UnaryOperator::Not,
                                operand: Box::new(name("b")),
                            },
                        ],
                    },
                    body: vec![Statement::Pass],
                    orelse: vec![],
                },
            ],
        };

        assert_eq!(program, expected);
    }

    #[test]
    fn and_binds_tighter_than_or() {
        let Statement::If { test, .. } = parse_single("if a or b and c or d:\n    pass\n") else {
            panic!("expected if statement");
        };
        assert_eq!(
            test,
            Expression::BoolOp {
                op: BoolOperator::Or,
                values: vec![
                    name("a"),
                    Expression::BoolOp {
                        op: BoolOperator::And,
                        values: vec![name("b"), name("c")],
                    },
                    name("d"),
                ],
            }
        );
    }

    #[test]
    fn keeps_comparison_chain() {
        let Statement::Expr(expr) = parse_single("a < b <= c") else {
            panic!("expected expression statement");
        };
        assert_eq!(
            expr,
            Expression::Compare {
                left: Box::new(name("a")),
                ops: vec![CompareOperator::Less, CompareOperator::LessEqual],
                comparators: vec![name("b"), name("c")],
            }
        );
    }

    #[test]
    fn parses_tuples() {
        assert_eq!(
            parse_single("t = 1, 2,"),
            Statement::Assign {
                targets: vec![name("t")],
                value: Expression::Tuple(vec![Expression::Integer(1), Expression::Integer(2)]),
            }
        );
        assert_eq!(
            parse_single("t = (1,)"),
            Statement::Assign {
                targets: vec![name("t")],
                value: Expression::Tuple(vec![Expression::Integer(1)]),
            }
        );
        assert_eq!(
            parse_single("t = ()"),
            Statement::Assign {
                targets: vec![name("t")],
                value: Expression::Tuple(vec![]),
            }
        );
        assert_eq!(
            parse_single("t = (1)"),
            Statement::Assign {
                targets: vec![name("t")],
                value: Expression::Integer(1),
            }
        );
    }

    #[test]
    fn parses_elif_as_nested_if() {
        let input = indoc! {"
            if a:
                pass
            elif b:
                x = 1
            else:
                pass
        "};
        let Statement::If { orelse, .. } = parse_single(input) else {
            panic!("expected if statement");
        };
        assert_eq!(
            orelse,
            vec![Statement::If {
                test: name("b"),
                body: vec![Statement::Assign {
                    targets: vec![name("x")],
                    value: Expression::Integer(1),
                }],
                orelse: vec![Statement::Pass],
            }]
        );
    }

    #[test]
    fn parses_single_line_suite() {
        assert_eq!(
            parse_single("if a: pass"),
            Statement::If {
                test: name("a"),
                body: vec![Statement::Pass],
                orelse: vec![],
            }
        );
    }

    #[test]
    fn annotation_without_value() {
        assert_eq!(
            parse_single("x: int | None"),
            Statement::AnnAssign {
                target: name("x"),
                annotation: "int | None".to_string(),
                value: None,
            }
        );
    }

    #[test]
    fn decodes_string_escapes() {
        assert_eq!(
            parse_single(r#"s = 'it\'s' "\t\x41\q""#),
            Statement::Assign {
                targets: vec![name("s")],
                value: Expression::String("it's\tA\\q".to_string()),
            }
        );
    }

    #[test]
    fn errors_on_invalid_escape() {
        let err = parse(r#"s = "\xZZ""#).expect_err("expected parse failure");
        assert!(err.to_string().contains("Invalid escape sequence '\\xZZ'"));
    }

    #[test]
    fn decodes_octal_escapes() {
        assert_eq!(
            parse_single(r#"s = "\012\0\1018""#),
            Statement::Assign {
                targets: vec![name("s")],
                value: Expression::String("\n\0A8".to_string()),
            }
        );
    }

    #[test]
    fn keeps_unsupported_statements_as_opaque_nodes() {
        let input = indoc! {"
            x = 1
            while x:
                x = x - 1
            else:
                pass
            print(x)
            y = 2
        "};
        let program = parse(input).expect("parse failed");
        assert_eq!(
            program.statements,
            vec![
                Statement::Assign {
                    targets: vec![name("x")],
                    value: Expression::Integer(1),
                },
                Statement::Unsupported {
                    construct: "while loop",
                },
                Statement::Unsupported {
                    construct: "function call",
                },
                Statement::Assign {
                    targets: vec![name("y")],
                    value: Expression::Integer(2),
                },
            ]
        );
    }

    #[test]
    fn names_unsupported_constructs() {
        for (input, construct) in [
            ("print(a)", "function call"),
            ("x = a + b", "arithmetic operator"),
            ("x = a * b", "arithmetic operator"),
            ("x += 1", "arithmetic operator"),
            ("if a in b: pass", "membership test 'in'"),
            ("x = {1, 2}", "set literal"),
            ("x = a.b", "attribute access"),
            ("def f():\n    return 1\n", "function definition"),
            ("import os", "import"),
        ] {
            assert_eq!(
                parse_single(input),
                Statement::Unsupported { construct },
                "{input}"
            );
        }
    }

    #[test]
    fn if_bodies_tolerate_unsupported_statements() {
        let input = indoc! {"
            if x > 0:
                print(x)
                for i in items:
                    total = total + i
            elif x < 0: raise ValueError
            else: print(-x)
        "};
        assert_eq!(
            parse_single(input),
            Statement::If {
                test: Expression::Compare {
                    left: Box::new(name("x")),
                    ops: vec![CompareOperator::Greater],
                    comparators: vec![Expression::Integer(0)],
                },
                body: vec![
                    Statement::Unsupported {
                        construct: "function call",
                    },
                    Statement::Unsupported {
                        construct: "for loop",
                    },
                ],
                orelse: vec![Statement::If {
                    test: Expression::Compare {
                        left: Box::new(name("x")),
                        ops: vec![CompareOperator::Less],
                        comparators: vec![Expression::Integer(0)],
                    },
                    body: vec![Statement::Unsupported {
                        construct: "raise statement",
                    }],
                    orelse: vec![Statement::Unsupported {
                        construct: "function call",
                    }],
                }],
            }
        );
    }

    #[test]
    fn expression_parser_reports_unsupported_syntax() {
        let tokens = lexer::tokenize("a + 1").expect("tokenize failed");
        let err = Parser::new(tokens)
            .parse_expression()
            .expect_err("expected parse failure");
        assert_eq!(
            err,
            ParseError::UnsupportedSyntax {
                construct: "arithmetic operator",
                line: 1,
                column: 2,
            }
        );
    }

    #[test]
    fn errors_on_missing_colon() {
        let err = parse("if a\n    pass\n").expect_err("expected parse failure");
        assert!(err.to_string().starts_with("Expected :, got Newline"));
    }
}
