use std::{
    fmt::{self, Debug, Display, Formatter},
    str::FromStr,
    sync::Arc,
};

use serde::{de::Error, Deserialize, Deserializer, Serialize, Serializer};
use value::{Kind, Value};

use crate::{
    parser::{escape_segment, parse_pointer},
    value_ext::{traverse, traverse_mut},
    ParsePointerError, PointerError, APPEND_TOKEN,
};

/// A parsed path expression addressing one location inside a [`Value`].
#[derive(Clone, Default, Eq, PartialEq, Hash)]
pub struct Pointer(pub(crate) Vec<String>);

impl Display for Pointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for segment in &self.0 {
            f.write_str("/")?;
            f.write_str(&escape_segment(segment))?;
        }

        Ok(())
    }
}

impl Debug for Pointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

impl FromStr for Pointer {
    type Err = ParsePointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pointer(s).map(Self)
    }
}

impl Serialize for Pointer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Pointer {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_pointer(&String::deserialize(deserializer)?)
            .map(Self)
            .map_err(|err| D::Error::custom(err.to_string()))
    }
}

impl Pointer {
    #[inline]
    pub fn root() -> Pointer {
        Pointer(Vec::new())
    }

    #[inline]
    pub fn parse(input: &str) -> Result<Pointer, ParsePointerError> {
        input.parse()
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.is_root()
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// The final segment, or `None` for the root.
    pub fn last(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// The pointer one level up, or `None` for the root.
    pub fn parent(&self) -> Option<Pointer> {
        self.0
            .split_last()
            .map(|(_, parent)| Pointer(parent.to_vec()))
    }

    pub fn starts_with(&self, prefix: &Pointer) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Whether `self` addresses a strict ancestor of `other`.
    pub fn is_proper_prefix_of(&self, other: &Pointer) -> bool {
        self.len() < other.len() && other.starts_with(self)
    }

    pub fn get<'a>(&self, root: &'a Value) -> Result<&'a Value, PointerError> {
        traverse(root, &self.0).ok_or_else(|| PointerError::NotFound { path: self.clone() })
    }

    pub fn get_mut<'a>(&self, root: &'a mut Value) -> Result<&'a mut Value, PointerError> {
        traverse_mut(root, &self.0).ok_or_else(|| PointerError::NotFound { path: self.clone() })
    }

    /// Writes `value` at this location and returns what it replaced.
    ///
    /// The parent must already exist. In a sequence only existing indexes and
    /// the append token are writable.
    pub fn set(&self, root: &mut Value, value: Value) -> Result<Option<Value>, PointerError> {
        let (key, parent_path) = match self.0.split_last() {
            Some(split) => split,
            None => return Ok(Some(std::mem::replace(root, value))),
        };
        let parent = traverse_mut(root, parent_path).ok_or_else(|| PointerError::NotFound {
            path: Pointer(parent_path.to_vec()),
        })?;

        match parent {
            Value::Mapping(obj) => Ok(Arc::make_mut(obj).insert(key.clone(), value)),
            Value::Sequence(array) => {
                let array = Arc::make_mut(array);
                if key == APPEND_TOKEN {
                    array.push(value);
                    return Ok(None);
                }
                let index = crate::parse_index(key).ok_or_else(|| PointerError::InvalidIndex {
                    path: Pointer(parent_path.to_vec()),
                    segment: key.clone(),
                })?;
                match array.get_mut(index) {
                    Some(slot) => Ok(Some(std::mem::replace(slot, value))),
                    None => Err(PointerError::OutOfBounds {
                        path: Pointer(parent_path.to_vec()),
                        index,
                        len: array.len(),
                    }),
                }
            }
            Value::Scalar(_) => Err(PointerError::KindMismatch {
                path: Pointer(parent_path.to_vec()),
                kind: Kind::Scalar,
            }),
        }
    }

    /// Removes the value at this location and returns it. Deleting the root
    /// leaves `null` behind.
    pub fn delete(&self, root: &mut Value) -> Result<Value, PointerError> {
        let (key, parent_path) = match self.0.split_last() {
            Some(split) => split,
            None => return Ok(std::mem::take(root)),
        };
        let not_found = || PointerError::NotFound { path: self.clone() };
        let parent = traverse_mut(root, parent_path).ok_or_else(not_found)?;

        match parent {
            Value::Mapping(obj) => Arc::make_mut(obj)
                .remove(key.as_str())
                .ok_or_else(not_found),
            Value::Sequence(array) => {
                let array = Arc::make_mut(array);
                let index = crate::parse_index(key)
                    .filter(|index| *index < array.len())
                    .ok_or_else(not_found)?;
                Ok(array.remove(index))
            }
            Value::Scalar(_) => Err(not_found()),
        }
    }
}
