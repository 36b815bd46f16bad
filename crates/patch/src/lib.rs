//! Applies RFC 6902 style patch operations (add, remove, replace, move, copy
//! and test) to [`Value`](value::Value) trees.
//!
//! [`patch`] runs a sequence of operations in order and stops at the first
//! failure without rolling back earlier steps. Callers that need an
//! all-or-nothing update should patch a clone of their value.

mod add;
mod error;
mod operation;
mod patch;
mod relocate;
mod remove;
mod replace;
mod test_op;

pub use error::{PatchError, PatchFailure};
pub use operation::{OpKind, Operation};
pub use patch::patch;
