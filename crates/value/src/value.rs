use std::{
    collections::BTreeMap,
    fmt::{self, Display, Formatter},
    sync::Arc,
};

use serde::{Deserialize, Serialize};
use serde_json::Number;

use crate::Kind;

pub type Mapping = BTreeMap<String, Value>;
pub type Sequence = Vec<Value>;

/// A nested structure of mappings, sequences and scalars.
///
/// Containers live behind an [`Arc`]. Cloning a `Value` is shallow: the clone
/// shares container storage with the original, and the first mutation through
/// either side copies the touched container (see [`Value::as_mapping_mut`]).
/// Use [`Value::deep_copy`] to get a value with no shared storage at all.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(from = "serde_json::Value", into = "serde_json::Value")]
pub enum Value {
    Mapping(Arc<Mapping>),
    Sequence(Arc<Sequence>),
    Scalar(Scalar),
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
}

impl Default for Value {
    fn default() -> Self {
        Value::Scalar(Scalar::Null)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&serde_json::Value::from(self), f)
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Mapping(_) => Kind::Mapping,
            Value::Sequence(_) => Kind::Sequence,
            Value::Scalar(_) => Kind::Scalar,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Scalar(Scalar::Null))
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(mapping) => Some(mapping),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Value::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Unique access to the mapping, copying it first if its storage is shared.
    pub fn as_mapping_mut(&mut self) -> Option<&mut Mapping> {
        match self {
            Value::Mapping(mapping) => Some(Arc::make_mut(mapping)),
            _ => None,
        }
    }

    /// Unique access to the sequence, copying it first if its storage is shared.
    pub fn as_sequence_mut(&mut self) -> Option<&mut Sequence> {
        match self {
            Value::Sequence(sequence) => Some(Arc::make_mut(sequence)),
            _ => None,
        }
    }

    /// Returns a structurally equal value that shares no container storage
    /// with `self`.
    pub fn deep_copy(&self) -> Value {
        match self {
            Value::Mapping(mapping) => Value::Mapping(Arc::new(
                mapping
                    .iter()
                    .map(|(key, value)| (key.clone(), value.deep_copy()))
                    .collect(),
            )),
            Value::Sequence(sequence) => {
                Value::Sequence(Arc::new(sequence.iter().map(Value::deep_copy).collect()))
            }
            Value::Scalar(scalar) => Value::Scalar(scalar.clone()),
        }
    }

    /// Whether both values are containers backed by the same storage.
    ///
    /// Scalars never share storage.
    pub fn shares_storage(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Mapping(a), Value::Mapping(b)) => Arc::ptr_eq(a, b),
            (Value::Sequence(a), Value::Sequence(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn clone_shares_storage() {
        let a = value!({ "items": [1, 2, 3] });
        let b = a.clone();
        assert!(a.shares_storage(&b));
    }

    #[test]
    fn deep_copy_shares_nothing() {
        let a = value!({ "items": [1, 2, 3] });
        let b = a.deep_copy();
        assert_eq!(a, b);
        assert!(!a.shares_storage(&b));

        let items_a = &a.as_mapping().unwrap()["items"];
        let items_b = &b.as_mapping().unwrap()["items"];
        assert!(!items_a.shares_storage(items_b));
    }

    #[test]
    fn mutation_after_clone_does_not_leak() {
        let original = value!({ "items": [1, 2, 3] });
        let mut copy = original.clone();

        copy.as_mapping_mut()
            .unwrap()
            .get_mut("items")
            .and_then(Value::as_sequence_mut)
            .unwrap()
            .push(value!(4));

        assert_eq!(original, value!({ "items": [1, 2, 3] }));
        assert_eq!(copy, value!({ "items": [1, 2, 3, 4] }));
        assert!(!original.shares_storage(&copy));
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(value!({ "a": [1, { "b": null }] }), value!({ "a": [1, { "b": null }] }));
        assert_ne!(value!([1, 2]), value!([2, 1]));
        assert_ne!(value!([1]), value!([1, 1]));
        assert_ne!(value!({ "a": 1 }), value!({ "a": 1, "b": 2 }));
        assert_ne!(value!(1), value!(1.0));
        assert_ne!(value!(1), value!("1"));
    }

    #[test]
    fn kind() {
        assert_eq!(value!({}).kind(), Kind::Mapping);
        assert_eq!(value!([]).kind(), Kind::Sequence);
        assert_eq!(value!(true).kind(), Kind::Scalar);
        assert_eq!(Value::default().kind(), Kind::Scalar);
        assert!(Value::default().is_null());
    }
}
