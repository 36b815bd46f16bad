use std::sync::Arc;

use value::Value;

use crate::{parse_index, Pointer};

pub trait ValueExt {
    fn locate(&self, pointer: &Pointer) -> Option<&Value>;

    /// Mutable lookup. Every shared container on the way down is copied
    /// before it is entered, so writes through the result never reach other
    /// clones of `self`.
    fn locate_mut(&mut self, pointer: &Pointer) -> Option<&mut Value>;
}

impl ValueExt for Value {
    fn locate(&self, pointer: &Pointer) -> Option<&Value> {
        traverse(self, &pointer.0)
    }

    fn locate_mut(&mut self, pointer: &Pointer) -> Option<&mut Value> {
        traverse_mut(self, &pointer.0)
    }
}

pub(crate) fn traverse<'a>(root: &'a Value, segments: &[String]) -> Option<&'a Value> {
    segments.iter().try_fold(root, |acc, segment| match acc {
        Value::Mapping(obj) => obj.get(segment),
        Value::Sequence(array) => array.get(parse_index(segment)?),
        Value::Scalar(_) => None,
    })
}

pub(crate) fn traverse_mut<'a>(root: &'a mut Value, segments: &[String]) -> Option<&'a mut Value> {
    segments.iter().try_fold(root, |acc, segment| match acc {
        Value::Mapping(obj) => Arc::make_mut(obj).get_mut(segment),
        Value::Sequence(array) => {
            let index = parse_index(segment)?;
            Arc::make_mut(array).get_mut(index)
        }
        Value::Scalar(_) => None,
    })
}
