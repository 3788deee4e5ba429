//! Go type inference for literal values.

use std::fmt;

use crate::value::{RuntimeValue, ValueKind};

/// Go type tag inferred for a value or for the members of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetType {
    String,
    Int,
    Float,
    Bool,
    /// Any slice; the element type of a nested slice is not tracked here.
    Slice,
    /// Any map; nested key and value types are not tracked here.
    Map,
    Any,
    Nil,
}

impl TargetType {
    pub fn keyword(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Int => "int",
            Self::Float => "float64",
            Self::Bool => "bool",
            Self::Slice => "[]any",
            Self::Map => "map[any]any",
            Self::Any => "any",
            Self::Nil => "nil",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Fixed mapping from a runtime kind to its Go type tag.
pub fn infer_scalar_type(kind: ValueKind) -> TargetType {
    match kind {
        ValueKind::Bool => TargetType::Bool,
        ValueKind::Int => TargetType::Int,
        ValueKind::Float => TargetType::Float,
        ValueKind::Str => TargetType::String,
        ValueKind::Nil => TargetType::Nil,
        ValueKind::Sequence => TargetType::Slice,
        ValueKind::Mapping => TargetType::Map,
    }
}

/// Element type shared by `items`, or [`TargetType::Any`] when their kinds
/// differ. Nothing can be inferred from zero items, which also yields `Any`.
pub fn infer_collection_type<'v>(items: impl IntoIterator<Item = &'v RuntimeValue>) -> TargetType {
    let mut kinds = items.into_iter().map(RuntimeValue::kind);
    let Some(first) = kinds.next() else {
        return TargetType::Any;
    };
    if kinds.all(|kind| kind == first) {
        infer_scalar_type(first)
    } else {
        TargetType::Any
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_map_to_go_keywords() {
        let cases = [
            (ValueKind::Bool, "bool"),
            (ValueKind::Int, "int"),
            (ValueKind::Float, "float64"),
            (ValueKind::Str, "string"),
            (ValueKind::Nil, "nil"),
        ];
        for (kind, keyword) in cases {
            assert_eq!(infer_scalar_type(kind).keyword(), keyword);
        }
    }

    #[test]
    fn homogeneous_items_keep_their_type() {
        let items = vec![RuntimeValue::Int(1), RuntimeValue::Int(2)];
        assert_eq!(infer_collection_type(&items), TargetType::Int);
    }

    #[test]
    fn mixed_items_widen_to_any() {
        let items = vec![RuntimeValue::Int(1), RuntimeValue::Str("2".to_string())];
        assert_eq!(infer_collection_type(&items), TargetType::Any);
    }

    #[test]
    fn bool_and_int_are_distinct_kinds() {
        let items = vec![RuntimeValue::Bool(true), RuntimeValue::Int(1)];
        assert_eq!(infer_collection_type(&items), TargetType::Any);
    }

    #[test]
    fn empty_collection_is_any() {
        assert_eq!(infer_collection_type(&Vec::<RuntimeValue>::new()), TargetType::Any);
    }

    #[test]
    fn nested_collections_count_as_their_own_kind() {
        let items = vec![
            RuntimeValue::Sequence(vec![RuntimeValue::Int(1)]),
            RuntimeValue::Sequence(vec![RuntimeValue::Str("a".to_string())]),
        ];
        assert_eq!(infer_collection_type(&items), TargetType::Slice);
        assert_eq!(TargetType::Slice.to_string(), "[]any");

        let items = vec![RuntimeValue::Int(1), RuntimeValue::Sequence(vec![])];
        assert_eq!(infer_collection_type(&items), TargetType::Any);
    }
}
