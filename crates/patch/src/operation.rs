use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use pointer::Pointer;
use serde::{Deserialize, Serialize};
use value::Value;

use crate::{add, relocate, remove, replace, test_op, PatchError};

/// One patch step.
///
/// Paths are kept as written and parsed on every [`apply`](Operation::apply),
/// so a malformed path is reported as [`PatchError::Parse`] by the step that
/// uses it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "OperationRecord", into = "OperationRecord")]
pub enum Operation {
    Add {
        path: String,
        value: Value,
    },
    Remove {
        path: String,
    },
    Replace {
        path: String,
        value: Value,
    },
    Move {
        from: String,
        path: String,
    },
    Copy {
        from: String,
        path: String,
        /// Reuse the source value's storage instead of deep copying it.
        shallow: bool,
    },
    Test {
        path: String,
        value: Value,
    },
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum OpKind {
    Add,
    Remove,
    Replace,
    Move,
    Copy,
    Test,
}

impl OpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            OpKind::Add => "add",
            OpKind::Remove => "remove",
            OpKind::Replace => "replace",
            OpKind::Move => "move",
            OpKind::Copy => "copy",
            OpKind::Test => "test",
        }
    }
}

impl Display for OpKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OpKind {
    type Err = PatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(OpKind::Add),
            "remove" => Ok(OpKind::Remove),
            "replace" => Ok(OpKind::Replace),
            "move" => Ok(OpKind::Move),
            "copy" => Ok(OpKind::Copy),
            "test" => Ok(OpKind::Test),
            _ => Err(PatchError::UnsupportedOperation { op: s.to_string() }),
        }
    }
}

impl Operation {
    pub fn add(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Operation::Add {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn remove(path: impl Into<String>) -> Self {
        Operation::Remove { path: path.into() }
    }

    pub fn replace(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Operation::Replace {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn move_(from: impl Into<String>, path: impl Into<String>) -> Self {
        Operation::Move {
            from: from.into(),
            path: path.into(),
        }
    }

    pub fn copy(from: impl Into<String>, path: impl Into<String>) -> Self {
        Operation::Copy {
            from: from.into(),
            path: path.into(),
            shallow: false,
        }
    }

    pub fn shallow_copy(from: impl Into<String>, path: impl Into<String>) -> Self {
        Operation::Copy {
            from: from.into(),
            path: path.into(),
            shallow: true,
        }
    }

    pub fn test(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Operation::Test {
            path: path.into(),
            value: value.into(),
        }
    }

    pub fn kind(&self) -> OpKind {
        match self {
            Operation::Add { .. } => OpKind::Add,
            Operation::Remove { .. } => OpKind::Remove,
            Operation::Replace { .. } => OpKind::Replace,
            Operation::Move { .. } => OpKind::Move,
            Operation::Copy { .. } => OpKind::Copy,
            Operation::Test { .. } => OpKind::Test,
        }
    }

    /// The target path expression.
    pub fn path(&self) -> &str {
        match self {
            Operation::Add { path, .. }
            | Operation::Remove { path }
            | Operation::Replace { path, .. }
            | Operation::Move { path, .. }
            | Operation::Copy { path, .. }
            | Operation::Test { path, .. } => path.as_str(),
        }
    }

    /// The source path expression of a move or copy.
    pub fn from(&self) -> Option<&str> {
        match self {
            Operation::Move { from, .. } | Operation::Copy { from, .. } => Some(from.as_str()),
            _ => None,
        }
    }

    /// Applies this operation to `root`.
    ///
    /// On error `root` is left as the failing step left it: untouched, except
    /// for a move whose add half failed after the source was already removed.
    pub fn apply(&self, root: &mut Value) -> Result<(), PatchError> {
        match self {
            Operation::Add { path, value } => add::add(root, &Pointer::parse(path)?, value.clone()),
            Operation::Remove { path } => remove::remove(root, &Pointer::parse(path)?),
            Operation::Replace { path, value } => {
                replace::replace(root, &Pointer::parse(path)?, value.clone())
            }
            Operation::Move { from, path } => {
                let path = Pointer::parse(path)?;
                let from = Pointer::parse(from)?;
                relocate::move_value(root, &from, &path)
            }
            Operation::Copy {
                from,
                path,
                shallow,
            } => {
                let path = Pointer::parse(path)?;
                let from = Pointer::parse(from)?;
                relocate::copy_value(root, &from, &path, *shallow)
            }
            Operation::Test { path, value } => test_op::test(root, &Pointer::parse(path)?, value),
        }
    }
}

/// The wire shape of an [`Operation`]: `op`, `path`, and the optional
/// `value`, `from` and `shallow` members.
#[derive(Serialize, Deserialize)]
struct OperationRecord {
    op: String,
    path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    from: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    shallow: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl TryFrom<OperationRecord> for Operation {
    type Error = PatchError;

    fn try_from(record: OperationRecord) -> Result<Self, Self::Error> {
        let OperationRecord {
            op,
            path,
            value,
            from,
            shallow,
        } = record;
        let value = value.unwrap_or_default();
        let from = from.unwrap_or_default();

        Ok(match op.parse::<OpKind>()? {
            OpKind::Add => Operation::Add { path, value },
            OpKind::Remove => Operation::Remove { path },
            OpKind::Replace => Operation::Replace { path, value },
            OpKind::Move => Operation::Move { from, path },
            OpKind::Copy => Operation::Copy {
                from,
                path,
                shallow,
            },
            OpKind::Test => Operation::Test { path, value },
        })
    }
}

impl From<Operation> for OperationRecord {
    fn from(operation: Operation) -> Self {
        let op = operation.kind().as_str().to_string();
        let record = |path, value, from, shallow| OperationRecord {
            op,
            path,
            value,
            from,
            shallow,
        };

        match operation {
            Operation::Add { path, value }
            | Operation::Replace { path, value }
            | Operation::Test { path, value } => record(path, Some(value), None, false),
            Operation::Remove { path } => record(path, None, None, false),
            Operation::Move { from, path } => record(path, None, Some(from), false),
            Operation::Copy {
                from,
                path,
                shallow,
            } => record(path, None, Some(from), shallow),
        }
    }
}
