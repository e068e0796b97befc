use std::fmt;

use crate::Number;

/// The key of a property in a [Record](super::Record).
///
/// Keys are canonicalized on construction: integers and numbers are stored in
/// their string form, so `PropertyKey::from(1)` and `PropertyKey::from("1")`
/// are the same key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PropertyKey {
    String(String),
}

impl PropertyKey {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::String(s) => s,
        }
    }

    /// Whether the key could be written without quotes in a record literal,
    /// like `age` (as opposed to `"full name"` or `"1"`)
    #[must_use]
    pub fn is_identifier(&self) -> bool {
        let mut chars = self.as_str().chars();

        let Some(first) = chars.next() else {
            return false;
        };

        (first.is_alphabetic() || first == '_' || first == '$')
            && chars.all(|c| c.is_alphanumeric() || c == '_' || c == '$')
    }
}

impl fmt::Display for PropertyKey {
    /// The alternate form (`{:#}`) quotes keys that are not identifiers.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() && !self.is_identifier() {
            write!(f, "{:?}", self.as_str())
        } else {
            f.write_str(self.as_str())
        }
    }
}

impl From<String> for PropertyKey {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for PropertyKey {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<&PropertyKey> for PropertyKey {
    fn from(value: &PropertyKey) -> Self {
        value.clone()
    }
}

impl From<Number> for PropertyKey {
    fn from(value: Number) -> Self {
        Self::String(value.to_string())
    }
}

macro_rules! integer_keys {
    ($($integer: ty),*) => {
        $(
            impl From<$integer> for PropertyKey {
                fn from(value: $integer) -> Self {
                    Self::String(value.to_string())
                }
            }
        )*
    };
}

integer_keys!(i32, i64, u32, u64, usize);
