//! Syntax tree produced by the frontend.
//!
//! Node shapes follow the source language closely: boolean operators keep all
//! of their operands and comparisons keep the whole comparator chain. Lowering
//! into the translator's restricted model happens in [`crate::node`].

#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    None,
    Identifier(String),
    List(Vec<Expression>),
    Tuple(Vec<Expression>),
    Dict(Vec<(Expression, Expression)>),
    UnaryOp {
        op: UnaryOperator,
        operand: Box<Expression>,
    },
    BoolOp {
        op: BoolOperator,
        values: Vec<Expression>,
    },
    Compare {
        left: Box<Expression>,
        ops: Vec<CompareOperator>,
        comparators: Vec<Expression>,
    },
}

impl Expression {
    /// Short human-readable name of the node kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Integer(_) | Self::Float(_) | Self::String(_) | Self::Boolean(_) | Self::None => {
                "constant"
            }
            Self::Identifier(_) => "name",
            Self::List(_) => "list",
            Self::Tuple(_) => "tuple",
            Self::Dict(_) => "dict",
            Self::UnaryOp { .. } => "unary operation",
            Self::BoolOp { .. } => "boolean operation",
            Self::Compare { .. } => "comparison",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum UnaryOperator {
    Not,
    Plus,
    Minus,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum BoolOperator {
    And,
    Or,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CompareOperator {
    Greater,
    GreaterEqual,
    Less,
    LessEqual,
    Equal,
    NotEqual,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Statement {
    /// `a = b = value`; every target is kept in source order.
    Assign {
        targets: Vec<Expression>,
        value: Expression,
    },
    /// `target: annotation = value`. The annotation is kept as source text.
    AnnAssign {
        target: Expression,
        annotation: String,
        value: Option<Expression>,
    },
    If {
        test: Expression,
        body: Vec<Statement>,
        orelse: Vec<Statement>,
    },
    Pass,
    Expr(Expression),
    /// Statement skipped by the parser because it uses a construct outside
    /// the subset, such as a loop or a function call.
    Unsupported { construct: &'static str },
}

impl Statement {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Assign { .. } => "assignment",
            Self::AnnAssign { .. } => "annotated assignment",
            Self::If { .. } => "if statement",
            Self::Pass => "pass statement",
            Self::Expr(_) => "expression statement",
            Self::Unsupported { construct } => *construct,
        }
    }
}

#[derive(Debug, PartialEq, Clone)]
pub struct Program {
    pub statements: Vec<Statement>,
}
