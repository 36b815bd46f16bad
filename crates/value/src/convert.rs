use std::sync::Arc;

use serde_json::Number;

use crate::{Mapping, Scalar, Sequence, Value};

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Value::Scalar(Scalar::Null),
            serde_json::Value::Bool(b) => Value::Scalar(Scalar::Bool(b)),
            serde_json::Value::Number(n) => Value::Scalar(Scalar::Number(n)),
            serde_json::Value::String(s) => Value::Scalar(Scalar::String(s)),
            serde_json::Value::Array(array) => {
                Value::Sequence(Arc::new(array.into_iter().map(Value::from).collect()))
            }
            serde_json::Value::Object(obj) => Value::Mapping(Arc::new(
                obj.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            )),
        }
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Scalar(Scalar::Null) => serde_json::Value::Null,
            Value::Scalar(Scalar::Bool(b)) => serde_json::Value::Bool(*b),
            Value::Scalar(Scalar::Number(n)) => serde_json::Value::Number(n.clone()),
            Value::Scalar(Scalar::String(s)) => serde_json::Value::String(s.clone()),
            Value::Sequence(sequence) => {
                serde_json::Value::Array(sequence.iter().map(serde_json::Value::from).collect())
            }
            Value::Mapping(mapping) => serde_json::Value::Object(
                mapping
                    .iter()
                    .map(|(key, value)| (key.clone(), serde_json::Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Value> for serde_json::Value {
    #[inline]
    fn from(value: Value) -> Self {
        serde_json::Value::from(&value)
    }
}

impl From<Scalar> for Value {
    #[inline]
    fn from(scalar: Scalar) -> Self {
        Value::Scalar(scalar)
    }
}

impl From<Mapping> for Value {
    #[inline]
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(Arc::new(mapping))
    }
}

impl From<Sequence> for Value {
    #[inline]
    fn from(sequence: Sequence) -> Self {
        Value::Sequence(Arc::new(sequence))
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Value::Scalar(Scalar::Bool(b))
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Value::Scalar(Scalar::String(s.to_string()))
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Value::Scalar(Scalar::String(s))
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(n: i64) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

impl From<u64> for Value {
    #[inline]
    fn from(n: u64) -> Self {
        Value::Scalar(Scalar::Number(n.into()))
    }
}

impl From<f64> for Value {
    /// Non-finite numbers have no JSON representation and become null.
    fn from(n: f64) -> Self {
        Number::from_f64(n)
            .map(|n| Value::Scalar(Scalar::Number(n)))
            .unwrap_or_default()
    }
}
