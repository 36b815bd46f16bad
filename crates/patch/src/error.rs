use pointer::{ParsePointerError, Pointer, PointerError};
use value::{Kind, Value};

use crate::OpKind;

#[derive(Debug, thiserror::Error, Clone, Eq, PartialEq)]
pub enum PatchError {
    #[error(transparent)]
    Parse(#[from] ParsePointerError),
    #[error("path not found: {path}")]
    NotFound { path: Pointer },
    #[error("index {index} is out of bounds for length {len} at {path}")]
    OutOfBounds {
        path: Pointer,
        index: usize,
        len: usize,
    },
    #[error("invalid index `{segment}` at {path}")]
    InvalidIndex { path: Pointer, segment: String },
    #[error("cannot add to a {kind} at {path}")]
    KindMismatch { path: Pointer, kind: Kind },
    #[error("cannot move {from} into its own child {path}")]
    Cycle { from: Pointer, path: Pointer },
    #[error("values not equal at {path}: {actual} != {expected}")]
    ValueMismatch {
        path: Pointer,
        expected: Value,
        actual: Value,
    },
    #[error("unsupported operation: `{op}`")]
    UnsupportedOperation { op: String },
}

impl From<PointerError> for PatchError {
    fn from(err: PointerError) -> Self {
        match err {
            PointerError::NotFound { path } => PatchError::NotFound { path },
            PointerError::OutOfBounds { path, index, len } => {
                PatchError::OutOfBounds { path, index, len }
            }
            PointerError::InvalidIndex { path, segment } => {
                PatchError::InvalidIndex { path, segment }
            }
            PointerError::KindMismatch { path, kind } => PatchError::KindMismatch { path, kind },
        }
    }
}

/// The first failing step of a [`patch`](crate::patch) call.
#[derive(Debug, thiserror::Error, Clone, Eq, PartialEq)]
#[error("error applying operation {step} ({op}): {source}")]
pub struct PatchFailure {
    /// Zero-based position of the failing operation.
    pub step: usize,
    pub op: OpKind,
    pub source: PatchError,
}
