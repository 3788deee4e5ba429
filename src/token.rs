#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind<'a> {
    Identifier(&'a str),
    Integer(i64),
    Float(f64),
    /// Raw literal body between the quotes; escapes are decoded by the parser.
    String(&'a str),
    True,
    False,
    None,

    // Keywords
    If,
    Elif,
    Else,
    And,
    Or,
    Not,
    In,
    Is,
    Pass,

    /// Statement keyword outside the supported subset, carrying the name of
    /// the construct it opens.
    UnsupportedKeyword(&'static str),

    // Operators
    Equal,        // =
    EqualEqual,   // ==
    NotEqual,     // !=
    Less,         // <
    LessEqual,    // <=
    Greater,      // >
    GreaterEqual, // >=
    Plus,         // +
    Minus,        // -
    Star,         // *
    Slash,        // /
    Percent,      // %
    Pipe,         // |

    // Delimiters
    Colon,    // :
    Comma,    // ,
    Dot,      // .
    LParen,   // (
    RParen,   // )
    LBracket, // [
    RBracket, // ]
    LBrace,   // {
    RBrace,   // }

    // Structural
    Newline,
    Indent,
    Dedent,
    EOF,
}

impl TokenKind<'_> {
    /// Construct name for statement kinds the translator refuses to handle.
    pub fn unsupported_statement(&self) -> Option<&'static str> {
        match self {
            Self::UnsupportedKeyword(construct) => Some(*construct),
            _ => None,
        }
    }

    /// Arithmetic operators are lexed so the parser can reject them by name.
    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            Self::Plus | Self::Minus | Self::Star | Self::Slash | Self::Percent
        )
    }
}

/// Maps a keyword that opens an unsupported statement to the construct name.
pub fn unsupported_statement_keyword(ident: &str) -> Option<&'static str> {
    let construct = match ident {
        "while" => "while loop",
        "for" => "for loop",
        "def" => "function definition",
        "class" => "class definition",
        "return" => "return statement",
        "import" | "from" => "import",
        "try" => "try statement",
        "with" => "with statement",
        "raise" => "raise statement",
        "del" => "del statement",
        "assert" => "assert statement",
        "global" | "nonlocal" => "scope declaration",
        "break" | "continue" => "loop control",
        "async" => "async statement",
        _ => return None,
    };
    Some(construct)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'a> {
    pub kind: TokenKind<'a>,
    pub span: Span,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind<'a>, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn kind(&self) -> &TokenKind<'a> {
        &self.kind
    }

    pub fn span(&self) -> Span {
        self.span
    }
}
