mod macros;

mod convert;
mod kind;
mod value;

pub use kind::Kind;
pub use serde_json::Number;
pub use value::{Mapping, Scalar, Sequence, Value};

#[doc(hidden)]
pub use serde_json as __private_serde_json;
