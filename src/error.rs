use thiserror::Error;

use crate::parser::FrontendError;

/// A syntax-tree shape the translator does not support.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UnsupportedError {
    #[error("Assigned value must be a literal, got {kind}")]
    NonLiteralValue { kind: &'static str },
    #[error("Assignment target must be a name, got {kind}")]
    InvalidTarget { kind: &'static str },
    #[error("Annotated declaration of '{name}' has no value")]
    MissingValue { name: String },
    #[error("Collection literal ({kind}) cannot be used in a condition")]
    CollectionOperand { kind: &'static str },
    #[error("Operand of {context} must be a name or a scalar literal, got {kind}")]
    NestedOperand {
        context: &'static str,
        kind: &'static str,
    },
    #[error("Boolean operation needs at least one operand")]
    EmptyBoolOp,
    #[error("Comparison needs matching operators and comparators, got {ops} and {comparators}")]
    MalformedComparison { ops: usize, comparators: usize },
    #[error("Unsupported statement: {kind}")]
    Statement { kind: &'static str },
}

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Frontend(#[from] FrontendError),
    #[error("Statement {index}: {source}")]
    Unsupported {
        index: usize,
        #[source]
        source: UnsupportedError,
    },
}
