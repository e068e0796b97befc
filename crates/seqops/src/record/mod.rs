//! Insertion-ordered mappings from [PropertyKey]s to values.

mod key;

pub use key::PropertyKey;

use std::fmt;

use indexmap::{map, IndexMap};

/// A mapping from keys to values that remembers the order in which keys were added.
///
/// Overwriting a key keeps its position. Deleting a key keeps the relative order
/// of all other keys. There is no notion of inherited keys, every key in the
/// record was set on the record itself.
#[derive(Clone, Debug)]
pub struct Record<V> {
    properties: IndexMap<PropertyKey, V>,
}

/// Iterator over the keys of a [Record], in insertion order
pub type Keys<'a, V> = map::Keys<'a, PropertyKey, V>;

/// Iterator over the keys and values of a [Record], in insertion order
pub type Entries<'a, V> = map::Iter<'a, PropertyKey, V>;

impl<V> Record<V> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            properties: IndexMap::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Looks up the value of a property
    #[must_use]
    pub fn get<K: Into<PropertyKey>>(&self, key: K) -> Option<&V> {
        self.properties.get(&key.into())
    }

    #[must_use]
    pub fn contains_key<K: Into<PropertyKey>>(&self, key: K) -> bool {
        self.properties.contains_key(&key.into())
    }

    /// Sets the value of a property, returning the previous value if there was one
    pub fn set<K: Into<PropertyKey>>(&mut self, key: K, value: V) -> Option<V> {
        self.properties.insert(key.into(), value)
    }

    /// Removes a property and returns its value.
    ///
    /// Removing a property that does not exist does nothing.
    pub fn delete<K: Into<PropertyKey>>(&mut self, key: K) -> Option<V> {
        let key = key.into();
        let removed = self.properties.shift_remove(&key);

        if removed.is_none() {
            log::trace!("Deleting absent property {key:?}, nothing to do");
        }

        removed
    }

    /// Returns the keys of the record in insertion order.
    ///
    /// Every call starts over from the first key.
    pub fn keys(&self) -> Keys<'_, V> {
        self.properties.keys()
    }

    pub fn entries(&self) -> Entries<'_, V> {
        self.properties.iter()
    }
}

impl<V> Default for Record<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<PropertyKey>, V> FromIterator<(K, V)> for Record<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value))
                .collect(),
        }
    }
}

impl<V: PartialEq> PartialEq for Record<V> {
    /// Records are equal if they hold equal entries in the same order
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.entries().eq(other.entries())
    }
}

impl<'a, V> IntoIterator for &'a Record<V> {
    type Item = (&'a PropertyKey, &'a V);
    type IntoIter = Entries<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<V: fmt::Display> fmt::Display for Record<V> {
    /// Writes `{ key: value, "other key": value }`, or `{}` if the record is empty
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }

        f.write_str("{ ")?;
        for (index, (key, value)) in self.entries().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key:#}: {value:#}")?;
        }
        f.write_str(" }")
    }
}

/// Creates a [Record] from `key => value` pairs.
///
/// Keys may be anything that converts into a [PropertyKey], values anything
/// that converts into the record's value type.
///
/// ```
/// # use seqops::{record, Record, Value};
/// let person: Record<Value> = record! {
///     "full name" => "Alice Smith",
///     "age" => 25,
///     1 => "one",
/// };
///
/// assert_eq!(person.get(1), Some(&Value::from("one")));
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key: expr => $value: expr),+ $(,)?) => {{
        let mut record = $crate::Record::new();
        $(
            record.set($key, ::std::convert::Into::into($value));
        )+
        record
    }};
}
