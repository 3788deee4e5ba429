//! Literal values extracted from the syntax tree.

/// An immutable literal value, as written in the source program.
#[derive(Debug, Clone, PartialEq)]
pub enum RuntimeValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Sequence(Vec<RuntimeValue>),
    /// Entries in insertion order. Build through [`RuntimeValue::mapping`] to
    /// get dict-literal key semantics.
    Mapping(Vec<(RuntimeValue, RuntimeValue)>),
    Nil,
}

/// Runtime kind of a value; collections are one kind regardless of contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    Str,
    Sequence,
    Mapping,
    Nil,
}

impl RuntimeValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Nil => ValueKind::Nil,
        }
    }

    /// Builds a mapping the way a dict literal evaluates: a repeated key keeps
    /// the first key and slot and takes the last value written. Keys compare
    /// with [`RuntimeValue::same_key`], so `1`, `1.0` and `True` collide.
    pub fn mapping(entries: impl IntoIterator<Item = (RuntimeValue, RuntimeValue)>) -> Self {
        let mut mapping: Vec<(RuntimeValue, RuntimeValue)> = Vec::new();
        for (key, value) in entries {
            match mapping.iter_mut().find(|(existing, _)| existing.same_key(&key)) {
                Some((_, slot)) => *slot = value,
                None => mapping.push((key, value)),
            }
        }
        Self::Mapping(mapping)
    }

    /// Key equality of dict literals: booleans, integers and floats compare by
    /// numeric value, sequences element-wise.
    pub fn same_key(&self, other: &Self) -> bool {
        match (self.numeric(), other.numeric()) {
            (Some(left), Some(right)) => left.equals(right),
            (None, None) => match (self, other) {
                (Self::Sequence(left), Self::Sequence(right)) => {
                    left.len() == right.len()
                        && left.iter().zip(right).all(|(l, r)| l.same_key(r))
                }
                (Self::Mapping(left), Self::Mapping(right)) => {
                    left.len() == right.len()
                        && left.iter().all(|(key, value)| {
                            right
                                .iter()
                                .any(|(k, v)| key.same_key(k) && value.same_key(v))
                        })
                }
                _ => self == other,
            },
            _ => false,
        }
    }

    fn numeric(&self) -> Option<Number> {
        match self {
            Self::Bool(value) => Some(Number::Int(i64::from(*value))),
            Self::Int(value) => Some(Number::Int(*value)),
            Self::Float(value) => Some(Number::Float(*value)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    fn equals(self, other: Self) -> bool {
        match (self, other) {
            (Self::Int(left), Self::Int(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Int(int), Self::Float(float)) | (Self::Float(float), Self::Int(int)) => {
                // Exact comparison: 2**53 + 1 differs from 2.0**53
                float.fract() == 0.0
                    && float >= -9_223_372_036_854_775_808.0
                    && float < 9_223_372_036_854_775_808.0
                    && float as i64 == int
            }
        }
    }
}

impl From<bool> for RuntimeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RuntimeValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for RuntimeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for RuntimeValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl<T: Into<RuntimeValue>> From<Vec<T>> for RuntimeValue {
    fn from(values: Vec<T>) -> Self {
        Self::Sequence(values.into_iter().map(Into::into).collect())
    }
}

/// Literal allowed as an operand of a condition: no collections.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Nil,
}

impl Scalar {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::Int(_) => ValueKind::Int,
            Self::Float(_) => ValueKind::Float,
            Self::Str(_) => ValueKind::Str,
            Self::Nil => ValueKind::Nil,
        }
    }
}

impl From<Scalar> for RuntimeValue {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Bool(value) => Self::Bool(value),
            Scalar::Int(value) => Self::Int(value),
            Scalar::Float(value) => Self::Float(value),
            Scalar::Str(value) => Self::Str(value),
            Scalar::Nil => Self::Nil,
        }
    }
}

impl TryFrom<RuntimeValue> for Scalar {
    type Error = RuntimeValue;

    /// Hands collections back unchanged.
    fn try_from(value: RuntimeValue) -> Result<Self, Self::Error> {
        match value {
            RuntimeValue::Bool(value) => Ok(Self::Bool(value)),
            RuntimeValue::Int(value) => Ok(Self::Int(value)),
            RuntimeValue::Float(value) => Ok(Self::Float(value)),
            RuntimeValue::Str(value) => Ok(Self::Str(value)),
            RuntimeValue::Nil => Ok(Self::Nil),
            collection @ (RuntimeValue::Sequence(_) | RuntimeValue::Mapping(_)) => Err(collection),
        }
    }
}
