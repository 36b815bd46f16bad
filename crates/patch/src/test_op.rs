use pointer::Pointer;
use value::Value;

use crate::PatchError;

pub(crate) fn test(root: &Value, path: &Pointer, expected: &Value) -> Result<(), PatchError> {
    let actual = path.get(root)?;
    if actual != expected {
        return Err(PatchError::ValueMismatch {
            path: path.clone(),
            expected: expected.clone(),
            actual: actual.clone(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pointer::pointer;
    use value::{value, Value};

    use crate::{Operation, PatchError};

    fn apply(operation: Operation, mut root: Value) -> (Value, Result<(), PatchError>) {
        let result = operation.apply(&mut root);
        (root, result)
    }

    #[test]
    fn member() {
        let input = value!({ "a": "bar" });
        let (output, result) = apply(Operation::test("/a", "bar"), input.clone());
        assert!(result.is_ok());
        assert_eq!(output, input);
    }

    #[test]
    fn nested_structure() {
        let input = value!({ "a": { "b": [1, { "c": null }], "d": 1.5 } });
        let (output, result) = apply(
            Operation::test("/a", value!({ "d": 1.5, "b": [1, { "c": null }] })),
            input.clone(),
        );
        assert!(result.is_ok());
        assert_eq!(output, input);

        let (_, result) = apply(Operation::test("", input.clone()), input);
        assert!(result.is_ok());
    }

    #[test]
    fn not_equal() {
        let input = value!({ "a": [1, 2] });
        let (output, result) = apply(Operation::test("/a", value!([2, 1])), input.clone());
        assert_eq!(
            result.unwrap_err(),
            PatchError::ValueMismatch {
                path: pointer!("/a"),
                expected: value!([2, 1]),
                actual: value!([1, 2]),
            }
        );
        assert_eq!(output, input);
    }

    #[test]
    fn scalar_types_must_match() {
        for expected in [value!("1"), value!(1.0), value!(true), value!(null)] {
            let (_, result) = apply(Operation::test("/a", expected), value!({ "a": 1 }));
            assert!(matches!(result, Err(PatchError::ValueMismatch { .. })));
        }
    }

    #[test]
    fn missing_target() {
        let (output, result) = apply(Operation::test("/b", value!(null)), value!({ "a": null }));
        assert_eq!(
            result.unwrap_err(),
            PatchError::NotFound {
                path: pointer!("/b")
            }
        );
        assert_eq!(output, value!({ "a": null }));
    }

    #[test]
    fn mismatch_message() {
        let (_, result) = apply(Operation::test("/a", 2i64), value!({ "a": 1 }));
        assert_eq!(
            result.unwrap_err().to_string(),
            "values not equal at /a: 1 != 2"
        );
    }
}
