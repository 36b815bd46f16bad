use std::sync::Arc;

use pointer::{parse_index, Pointer, APPEND_TOKEN};
use value::{Kind, Value};

use crate::PatchError;

pub(crate) fn add(root: &mut Value, path: &Pointer, value: Value) -> Result<(), PatchError> {
    let (parent_path, key) = match (path.parent(), path.last()) {
        (Some(parent_path), Some(key)) => (parent_path, key),
        _ => {
            *root = value;
            return Ok(());
        }
    };

    match parent_path.get_mut(root)? {
        Value::Mapping(obj) => {
            Arc::make_mut(obj).insert(key.to_string(), value);
        }
        Value::Sequence(array) => {
            let array = Arc::make_mut(array);
            if key == APPEND_TOKEN {
                array.push(value);
                return Ok(());
            }

            let index = parse_index(key).ok_or_else(|| PatchError::InvalidIndex {
                path: parent_path.clone(),
                segment: key.to_string(),
            })?;
            if index > array.len() {
                return Err(PatchError::OutOfBounds {
                    path: parent_path,
                    index,
                    len: array.len(),
                });
            }
            array.insert(index, value);
        }
        Value::Scalar(_) => {
            return Err(PatchError::KindMismatch {
                path: parent_path,
                kind: Kind::Scalar,
            })
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use value::value;

    use crate::{Operation, PatchError};
    use pointer::pointer;

    fn apply(operation: Operation, mut root: value::Value) -> Result<value::Value, PatchError> {
        operation.apply(&mut root).map(|()| root)
    }

    #[test]
    fn root() {
        assert_eq!(
            apply(Operation::add("", "bar"), value!(null)).unwrap(),
            value!("bar")
        );
        assert_eq!(
            apply(Operation::add("", value!([1])), value!({ "a": { "b": 1 } })).unwrap(),
            value!([1])
        );
    }

    #[test]
    fn new_member() {
        assert_eq!(
            apply(Operation::add("/a", "bar"), value!({})).unwrap(),
            value!({ "a": "bar" })
        );
    }

    #[test]
    fn existing_member() {
        assert_eq!(
            apply(Operation::add("/a", "bar"), value!({ "a": "foo" })).unwrap(),
            value!({ "a": "bar" })
        );
    }

    #[test]
    fn empty_key() {
        assert_eq!(
            apply(Operation::add("/", 1i64), value!({})).unwrap(),
            value!({ "": 1 })
        );
    }

    #[test]
    fn twice_is_same_as_once() {
        let once = apply(Operation::add("/a/b", "c"), value!({ "a": {} })).unwrap();
        let twice = apply(Operation::add("/a/b", "c"), once.clone()).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn slice_append() {
        assert_eq!(
            apply(Operation::add("/-", "bar"), value!([1, 2])).unwrap(),
            value!([1, 2, "bar"])
        );
        assert_eq!(
            apply(Operation::add("/a/-", 1i64), value!({ "a": [] })).unwrap(),
            value!({ "a": [1] })
        );
    }

    #[test]
    fn slice_index() {
        assert_eq!(
            apply(Operation::add("/1", "bar"), value!([1, 2])).unwrap(),
            value!([1, "bar", 2])
        );
        assert_eq!(
            apply(Operation::add("/0", "bar"), value!([1, 2])).unwrap(),
            value!(["bar", 1, 2])
        );
        assert_eq!(
            apply(Operation::add("/2", "bar"), value!([1, 2])).unwrap(),
            value!([1, 2, "bar"])
        );
    }

    #[test]
    fn slice_insertion_shifts_elements() {
        let original = vec![10i64, 11, 12, 13];
        for index in 0..=original.len() {
            let result = apply(
                Operation::add(format!("/{}", index), "new"),
                value!(original),
            )
            .unwrap();
            let items = result.as_sequence().unwrap();

            assert_eq!(items.len(), original.len() + 1);
            for i in 0..index {
                assert_eq!(items[i], value!(original[i]));
            }
            assert_eq!(items[index], value!("new"));
            for i in index..original.len() {
                assert_eq!(items[i + 1], value!(original[i]));
            }
        }
    }

    #[test]
    fn slice_index_out_of_bounds() {
        assert_eq!(
            apply(Operation::add("/4", "bar"), value!([1, 2])).unwrap_err(),
            PatchError::OutOfBounds {
                path: pointer!(""),
                index: 4,
                len: 2
            }
        );
        assert!(matches!(
            apply(Operation::add("/3", "bar"), value!([1, 2])),
            Err(PatchError::OutOfBounds { index: 3, .. })
        ));
    }

    #[test]
    fn slice_invalid_index() {
        for path in ["/x", "/-1", "/01", "/1.0"] {
            assert!(matches!(
                apply(Operation::add(path, "bar"), value!([1, 2])),
                Err(PatchError::InvalidIndex { .. })
            ));
        }
    }

    #[test]
    fn non_existent_container() {
        assert_eq!(
            apply(Operation::add("/b/a", "bar"), value!({ "a": "foo" })).unwrap_err(),
            PatchError::NotFound {
                path: pointer!("/b")
            }
        );
    }

    #[test]
    fn scalar_parent() {
        assert_eq!(
            apply(Operation::add("/a/b", "bar"), value!({ "a": "foo" })).unwrap_err(),
            PatchError::KindMismatch {
                path: pointer!("/a"),
                kind: value::Kind::Scalar
            }
        );
    }
}
