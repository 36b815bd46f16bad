use std::fmt::{self, Display, Formatter};

/// The shape of a [`Value`](crate::Value) node.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Kind {
    Mapping,
    Sequence,
    Scalar,
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Kind::Mapping => "mapping",
            Kind::Sequence => "sequence",
            Kind::Scalar => "scalar",
        })
    }
}
