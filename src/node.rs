//! Translator input model and its lowering from the syntax tree.
//!
//! Operand positions only hold names or scalar literals, so a malformed
//! condition cannot reach the renderers: lowering rejects it with an
//! [`UnsupportedError`] instead.

use tracing::warn;

use crate::ast::{BoolOperator, CompareOperator, Expression, Statement, UnaryOperator};
use crate::error::UnsupportedError;
use crate::value::{RuntimeValue, Scalar};

/// Operand of a unary operation or comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Name(String),
    Literal(Scalar),
}

#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionNode {
    NameRef(String),
    Literal(Scalar),
    UnaryOp {
        op: UnaryOperator,
        operand: Operand,
    },
    Compare {
        left: Operand,
        op: CompareOperator,
        right: Operand,
    },
    BoolOp {
        op: BoolOperator,
        left: Box<ExpressionNode>,
        right: Box<ExpressionNode>,
    },
}

/// `(target, value)` pairs of one assignment, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub bindings: Vec<(String, RuntimeValue)>,
}

/// Header of an `if` statement. The body is never rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalHeader {
    pub test: ExpressionNode,
}

impl TryFrom<&Expression> for RuntimeValue {
    type Error = UnsupportedError;

    fn try_from(expr: &Expression) -> Result<Self, Self::Error> {
        match expr {
            Expression::Integer(value) => Ok(Self::Int(*value)),
            Expression::Float(value) => Ok(Self::Float(*value)),
            Expression::String(value) => Ok(Self::Str(value.clone())),
            Expression::Boolean(value) => Ok(Self::Bool(*value)),
            Expression::None => Ok(Self::Nil),
            Expression::List(items) | Expression::Tuple(items) => items
                .iter()
                .map(Self::try_from)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::Sequence),
            Expression::Dict(entries) => {
                let entries = entries
                    .iter()
                    .map(|(key, value)| Ok((Self::try_from(key)?, Self::try_from(value)?)))
                    .collect::<Result<Vec<_>, UnsupportedError>>()?;
                Ok(Self::mapping(entries))
            }
            Expression::UnaryOp { op, operand } => {
                signed_number(*op, operand).ok_or(UnsupportedError::NonLiteralValue {
                    kind: expr.kind_name(),
                })
            }
            Expression::Identifier(_) | Expression::BoolOp { .. } | Expression::Compare { .. } => {
                Err(UnsupportedError::NonLiteralValue {
                    kind: expr.kind_name(),
                })
            }
        }
    }
}

/// Folds `-1`, `+2.5` and nested signs into a numeric literal.
fn signed_number(op: UnaryOperator, operand: &Expression) -> Option<RuntimeValue> {
    let value = match operand {
        Expression::Integer(value) => RuntimeValue::Int(*value),
        Expression::Float(value) => RuntimeValue::Float(*value),
        Expression::UnaryOp { op, operand } => signed_number(*op, operand)?,
        _ => return None,
    };
    match (op, value) {
        (UnaryOperator::Plus, value) => Some(value),
        (UnaryOperator::Minus, RuntimeValue::Int(value)) => {
            value.checked_neg().map(RuntimeValue::Int)
        }
        (UnaryOperator::Minus, RuntimeValue::Float(value)) => Some(RuntimeValue::Float(-value)),
        _ => None,
    }
}

fn lower_operand(expr: &Expression, context: &'static str) -> Result<Operand, UnsupportedError> {
    match expr {
        Expression::Identifier(name) => Ok(Operand::Name(name.clone())),
        Expression::List(_) | Expression::Tuple(_) | Expression::Dict(_) => {
            Err(UnsupportedError::CollectionOperand {
                kind: expr.kind_name(),
            })
        }
        _ => {
            let nested = || UnsupportedError::NestedOperand {
                context,
                kind: expr.kind_name(),
            };
            let value = RuntimeValue::try_from(expr).map_err(|_| nested())?;
            Scalar::try_from(value)
                .map(Operand::Literal)
                .map_err(|_| nested())
        }
    }
}

impl TryFrom<&Expression> for ExpressionNode {
    type Error = UnsupportedError;

    fn try_from(expr: &Expression) -> Result<Self, Self::Error> {
        match expr {
            Expression::Identifier(name) => Ok(Self::NameRef(name.clone())),
            Expression::List(_) | Expression::Tuple(_) | Expression::Dict(_) => {
                Err(UnsupportedError::CollectionOperand {
                    kind: expr.kind_name(),
                })
            }
            Expression::UnaryOp { op, operand } => {
                if let Some(value) = signed_number(*op, operand) {
                    return Scalar::try_from(value)
                        .map(Self::Literal)
                        .map_err(|_| UnsupportedError::NonLiteralValue {
                            kind: expr.kind_name(),
                        });
                }
                Ok(Self::UnaryOp {
                    op: *op,
                    operand: lower_operand(operand, "unary operation")?,
                })
            }
            Expression::Compare {
                left,
                ops,
                comparators,
            } => {
                let (Some(op), Some(right)) = (ops.first(), comparators.first()) else {
                    return Err(UnsupportedError::MalformedComparison {
                        ops: ops.len(),
                        comparators: comparators.len(),
                    });
                };
                if ops.len() != comparators.len() {
                    return Err(UnsupportedError::MalformedComparison {
                        ops: ops.len(),
                        comparators: comparators.len(),
                    });
                }
                if ops.len() > 1 {
                    warn!(
                        dropped = ops.len() - 1,
                        "chained comparison: only the first pair is translated"
                    );
                }
                Ok(Self::Compare {
                    left: lower_operand(left, "comparison")?,
                    op: *op,
                    right: lower_operand(right, "comparison")?,
                })
            }
            Expression::BoolOp { op, values } => {
                let mut values = values.iter();
                let first = values.next().ok_or(UnsupportedError::EmptyBoolOp)?;
                // `a or b or c` becomes `(a or b) or c`
                values.try_fold(
                    Self::try_from(first)?,
                    |left, right| -> Result<Self, UnsupportedError> {
                        Ok(Self::BoolOp {
                            op: *op,
                            left: Box::new(left),
                            right: Box::new(Self::try_from(right)?),
                        })
                    },
                )
            }
            Expression::Integer(_)
            | Expression::Float(_)
            | Expression::String(_)
            | Expression::Boolean(_)
            | Expression::None => {
                let value = RuntimeValue::try_from(expr)?;
                Scalar::try_from(value)
                    .map(Self::Literal)
                    .map_err(|_| UnsupportedError::CollectionOperand {
                        kind: expr.kind_name(),
                    })
            }
        }
    }
}

fn target_name(target: &Expression) -> Result<String, UnsupportedError> {
    match target {
        Expression::Identifier(name) => Ok(name.clone()),
        other => Err(UnsupportedError::InvalidTarget {
            kind: other.kind_name(),
        }),
    }
}

impl TryFrom<&Statement> for Assignment {
    type Error = UnsupportedError;

    fn try_from(statement: &Statement) -> Result<Self, Self::Error> {
        match statement {
            Statement::Assign { targets, value } => {
                let value = RuntimeValue::try_from(value)?;
                let bindings = targets
                    .iter()
                    .map(|target| Ok((target_name(target)?, value.clone())))
                    .collect::<Result<Vec<_>, UnsupportedError>>()?;
                Ok(Self { bindings })
            }
            // Annotations are not carried into the output
            Statement::AnnAssign { target, value, .. } => {
                let name = target_name(target)?;
                let Some(value) = value else {
                    return Err(UnsupportedError::MissingValue { name });
                };
                Ok(Self {
                    bindings: vec![(name, RuntimeValue::try_from(value)?)],
                })
            }
            other => Err(UnsupportedError::Statement {
                kind: other.kind_name(),
            }),
        }
    }
}

impl TryFrom<&Statement> for ConditionalHeader {
    type Error = UnsupportedError;

    fn try_from(statement: &Statement) -> Result<Self, Self::Error> {
        let Statement::If { test, orelse, .. } = statement else {
            return Err(UnsupportedError::Statement {
                kind: statement.kind_name(),
            });
        };
        if !orelse.is_empty() {
            warn!(
                branches = orelse.len(),
                "elif/else branches are not translated"
            );
        }
        Ok(Self {
            test: ExpressionNode::try_from(test)?,
        })
    }
}
