use pointer::Pointer;
use value::Value;

use crate::{add::add, remove::remove, PatchError};

/// A remove at `from` followed by an add at `path`.
///
/// If the add fails the source stays removed.
pub(crate) fn move_value(root: &mut Value, from: &Pointer, path: &Pointer) -> Result<(), PatchError> {
    if from.is_proper_prefix_of(path) {
        return Err(PatchError::Cycle {
            from: from.clone(),
            path: path.clone(),
        });
    }

    let value = from.get(root)?.clone();
    remove(root, from)?;
    add(root, path, value)
}

/// An add at `path` of the value found at `from`.
///
/// A shallow copy shares container storage with the source. Both sides stay
/// independent anyway because every write copies shared containers first.
pub(crate) fn copy_value(
    root: &mut Value,
    from: &Pointer,
    path: &Pointer,
    shallow: bool,
) -> Result<(), PatchError> {
    let source = from.get(root)?;
    let value = if shallow {
        source.clone()
    } else {
        source.deep_copy()
    };
    add(root, path, value)
}
