use pointer::Pointer;
use value::Value;

use crate::PatchError;

/// Unlike add, the target must already exist, so the append token never
/// qualifies.
pub(crate) fn replace(root: &mut Value, path: &Pointer, value: Value) -> Result<(), PatchError> {
    path.get(root)?;
    path.set(root, value)?;
    Ok(())
}
