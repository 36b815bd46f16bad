use pointer::Pointer;
use value::Value;

use crate::PatchError;

/// The target must exist. Later sequence elements shift down by one.
pub(crate) fn remove(root: &mut Value, path: &Pointer) -> Result<(), PatchError> {
    path.delete(root)?;
    Ok(())
}
