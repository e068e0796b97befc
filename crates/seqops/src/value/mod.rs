//! Dynamically typed values, as held by the sequences and records of the notes.

mod number;

pub use number::Number;

use std::{cell::RefCell, fmt, rc::Rc};

use crate::{Record, Sequence};

/// A sequence that can be referenced from more than one place
pub type SharedSequence = Rc<RefCell<Sequence<Value>>>;

/// A record that can be referenced from more than one place
pub type SharedRecord = Rc<RefCell<Record<Value>>>;

/// A dynamically typed value.
///
/// Sequences and records are reference types: cloning a [Value] that holds one
/// yields a second handle to the *same* container, and changes made through
/// either handle are visible through both. A container may (indirectly) hold
/// a handle to itself, in which case it is written as `[Circular]` on re-entry.
#[derive(Clone, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Boolean(bool),
    String(String),
    Number(Number),
    Sequence(SharedSequence),
    Record(SharedRecord),
}

thread_local! {
    /// Containers that are currently being written, innermost last
    static CONTAINERS_BEING_WRITTEN: RefCell<Vec<*const ()>> = const { RefCell::new(Vec::new()) };
}

/// Marks a container as being written until dropped
struct WritingContainer(*const ());

impl WritingContainer {
    /// Returns `None` if the container is already being written further up
    fn enter(container: *const ()) -> Option<Self> {
        CONTAINERS_BEING_WRITTEN.with(|containers| {
            let mut containers = containers.borrow_mut();
            if containers.contains(&container) {
                return None;
            }
            containers.push(container);
            Some(Self(container))
        })
    }
}

impl Drop for WritingContainer {
    fn drop(&mut self) {
        CONTAINERS_BEING_WRITTEN.with(|containers| {
            let mut containers = containers.borrow_mut();
            if let Some(position) = containers.iter().rposition(|&c| c == self.0) {
                containers.remove(position);
            }
        });
    }
}

/// Writes a container unless it is already being written, in which case `[Circular]` is written
fn write_container<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    container: &Rc<RefCell<T>>,
) -> fmt::Result {
    let Some(_guard) = WritingContainer::enter(Rc::as_ptr(container).cast()) else {
        return f.write_str("[Circular]");
    };

    write!(f, "{}", container.borrow())
}

impl Value {
    /// Creates a new sequence value from the given elements
    #[must_use]
    pub fn sequence<I>(elements: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Self>,
    {
        elements
            .into_iter()
            .map(Into::into)
            .collect::<Sequence<Self>>()
            .into()
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&SharedSequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// The `length` of strings (in UTF-16 code units) and sequences
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        match self {
            Self::String(s) => Some(s.encode_utf16().count()),
            Self::Sequence(sequence) => Some(sequence.borrow().len()),
            _ => None,
        }
    }

    /// Returns `true` if both values are handles to the same sequence or record
    #[must_use]
    pub fn is_same_container(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Sequence(a), Self::Sequence(b)) => Rc::ptr_eq(a, b),
            (Self::Record(a), Self::Record(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Undefined, Self::Undefined) | (Self::Null, Self::Null) => true,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            // Containers are compared by identity
            _ => self.is_same_container(other),
        }
    }
}

impl fmt::Display for Value {
    /// The alternate form (`{:#}`) quotes strings, which is how they are written
    /// when nested inside a sequence or a record.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("undefined"),
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) if f.alternate() => write!(f, "{s:?}"),
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Sequence(sequence) => write_container(f, sequence),
            Self::Record(record) => write_container(f, record),
        }
    }
}

impl fmt::Debug for Value {
    /// Containers are written in their display form, which terminates on cycles
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => f.write_str("Undefined"),
            Self::Null => f.write_str("Null"),
            Self::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            Self::String(s) => f.debug_tuple("String").field(s).finish(),
            Self::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Self::Sequence(_) => write!(f, "Sequence({self})"),
            Self::Record(_) => write!(f, "Record({self})"),
        }
    }
}

impl From<Number> for Value {
    fn from(value: Number) -> Self {
        Self::Number(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Number(value.into())
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Number(value.into())
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<Sequence<Value>> for Value {
    fn from(value: Sequence<Value>) -> Self {
        Self::Sequence(Rc::new(RefCell::new(value)))
    }
}

impl From<Record<Value>> for Value {
    fn from(value: Record<Value>) -> Self {
        Self::Record(Rc::new(RefCell::new(value)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn containers_are_shared_between_clones() {
        let numbers = Value::sequence([1, 2, 3]);
        let alias = numbers.clone();

        alias
            .as_sequence()
            .unwrap()
            .borrow_mut()
            .push(Value::from(4));

        assert_eq!(numbers, alias);
        assert_eq!(numbers.to_string(), "[1, 2, 3, 4]");
    }

    #[test]
    fn containers_compare_by_identity() {
        assert_ne!(Value::sequence([1]), Value::sequence([1]));
        assert_eq!(Value::from("a"), Value::from("a".to_string()));
        assert_ne!(Value::from(f64::NAN), Value::from(f64::NAN));
        assert_ne!(Value::Null, Value::Undefined);
    }

    #[test]
    fn nested_strings_are_quoted() {
        let fruits = Value::sequence(["apple", "banana"]);
        fruits
            .as_sequence()
            .unwrap()
            .borrow_mut()
            .push(Value::sequence(["pear", "peach"]));

        assert_eq!(Value::from("apple").to_string(), "apple");
        assert_eq!(
            fruits.to_string(),
            r#"["apple", "banana", ["pear", "peach"]]"#
        );
    }

    #[test]
    fn self_containing_sequence() {
        let numbers = Value::sequence([1]);
        numbers
            .as_sequence()
            .unwrap()
            .borrow_mut()
            .push(numbers.clone());

        assert_eq!(numbers.to_string(), "[1, [Circular]]");
        assert_eq!(format!("{numbers:?}"), "Sequence([1, [Circular]])");

        // Writing the same container twice side by side is not a cycle
        let twice = Value::sequence([numbers.clone(), numbers.clone()]);
        assert_eq!(twice.to_string(), "[[1, [Circular]], [1, [Circular]]]");
    }

    #[test]
    fn records_referencing_each_other() {
        let alice = Value::from(Record::<Value>::new());
        let bob = Value::from(Record::<Value>::new());

        if let (Value::Record(a), Value::Record(b)) = (&alice, &bob) {
            a.borrow_mut().set("friend", bob.clone());
            b.borrow_mut().set("friend", alice.clone());
        }

        assert_eq!(alice.to_string(), "{ friend: { friend: [Circular] } }");
    }

    #[test]
    fn length_of_strings_and_sequences() {
        assert_eq!(Value::from("banana").length(), Some(6));
        assert_eq!(Value::from("€").length(), Some(1));
        assert_eq!(Value::sequence([true, false]).length(), Some(2));
        assert_eq!(Value::from(3).length(), None);
    }
}
