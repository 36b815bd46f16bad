use value::Value;

use crate::{Operation, PatchFailure};

/// Applies `operations` to `root` in order.
///
/// Stops at the first failing operation and leaves `root` as that operation
/// left it; earlier steps are not undone. Patch a clone of the value when the
/// original must survive a failure.
pub fn patch(root: &mut Value, operations: &[Operation]) -> Result<(), PatchFailure> {
    for (step, operation) in operations.iter().enumerate() {
        tracing::debug!(
            step,
            op = %operation.kind(),
            path = operation.path(),
            "apply operation"
        );

        if let Err(err) = operation.apply(root) {
            tracing::debug!(step, op = %operation.kind(), error = %err, "operation failed");
            return Err(PatchFailure {
                step,
                op: operation.kind(),
                source: err,
            });
        }
    }

    Ok(())
}
