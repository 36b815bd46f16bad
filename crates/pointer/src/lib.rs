mod macros;

mod error;
mod parser;
mod pointer;
mod value_ext;

pub use error::{ParsePointerError, PointerError};
pub use parser::{parse_index, APPEND_TOKEN};
pub use pointer::Pointer;
pub use value_ext::ValueExt;
