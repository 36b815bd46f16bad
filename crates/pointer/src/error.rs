use value::Kind;

use crate::Pointer;

#[derive(Debug, thiserror::Error, Clone, Eq, PartialEq)]
#[error("invalid path expression `{input}`: expected an empty string or a leading `/`")]
pub struct ParsePointerError {
    pub(crate) input: String,
}

impl ParsePointerError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

#[derive(Debug, thiserror::Error, Clone, Eq, PartialEq)]
pub enum PointerError {
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
    #[error("expected a mapping or sequence at {path}, found a {kind}")]
    KindMismatch { path: Pointer, kind: Kind },
}
