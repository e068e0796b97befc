//! An ordered, index-addressable container.
//!
//! Every positional argument accepts negative values, which count backwards
//! from the end of the sequence (see [resolve](crate::index::resolve)).
//! Operations that return a new [Sequence] never modify the one they were
//! called on, with [Sequence::splice] being the only in-place transformation.

use std::{fmt, slice, vec};

use crate::{
    index::{resolve, resolve_element},
    SequenceError,
};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Sequence<T> {
    elements: Vec<T>,
}

impl<T> Sequence<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element at `index`, or `None` if the index is out of range
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.elements.get(index)
    }

    /// Like [Sequence::get], but negative indices count from the end
    #[must_use]
    pub fn at(&self, index: isize) -> Option<&T> {
        let position = resolve_element(index, self.len())?;
        self.elements.get(position)
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.elements.iter()
    }

    /// Appends an element and returns the new length
    pub fn push(&mut self, element: T) -> usize {
        self.elements.push(element);
        self.len()
    }

    /// Removes `delete_count` elements starting at `start` and inserts `items` in their place.
    ///
    /// `start` is resolved relative to the current length. A `delete_count` of `None`,
    /// or one exceeding the number of remaining elements, removes everything from
    /// `start` onwards.
    ///
    /// Returns the removed elements in their original order.
    ///
    /// ```
    /// # use seqops::Sequence;
    /// let mut numbers = Sequence::from([1, 2, 3, 4, 5]);
    /// let removed = numbers.splice(1, Some(2), [99, 100]);
    ///
    /// assert_eq!(removed, Sequence::from([2, 3]));
    /// assert_eq!(numbers, Sequence::from([1, 99, 100, 4, 5]));
    /// ```
    pub fn splice<I>(&mut self, start: isize, delete_count: Option<usize>, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let start = resolve(start, self.len());
        let remaining = self.len() - start;
        let delete_count = delete_count.map_or(remaining, |count| count.min(remaining));

        log::trace!(
            "Splicing sequence of length {} at {start}, removing {delete_count} elements",
            self.len()
        );

        let removed: Vec<T> = self
            .elements
            .splice(start..start + delete_count, items)
            .collect();
        removed.into()
    }

    /// Creates a new sequence from the elements at `[start, end)`.
    ///
    /// `start` defaults to the beginning and `end` to the end of the sequence. The
    /// elements are cloned one by one, so elements that are handles to shared data
    /// (like [Value::Sequence](crate::Value::Sequence)) keep pointing to the same data.
    ///
    /// ```
    /// # use seqops::Sequence;
    /// let numbers = Sequence::from([1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(numbers.slice(Some(1), Some(3)), Sequence::from([2, 3]));
    /// assert_eq!(numbers.slice(Some(-3), None), Sequence::from([3, 4, 5]));
    /// assert_eq!(numbers.slice(Some(4), Some(1)), Sequence::new());
    /// ```
    #[must_use]
    pub fn slice(&self, start: Option<isize>, end: Option<isize>) -> Self
    where
        T: Clone,
    {
        let start = start.map_or(0, |start| resolve(start, self.len()));
        let end = end.map_or(self.len(), |end| resolve(end, self.len()));

        if end <= start {
            return Self::new();
        }

        self.elements[start..end].to_vec().into()
    }

    /// Calls `f` with every element and its index, collecting the results
    #[must_use]
    pub fn map<U, F>(&self, mut f: F) -> Sequence<U>
    where
        F: FnMut(&T, usize) -> U,
    {
        self.iter()
            .enumerate()
            .map(|(index, element)| f(element, index))
            .collect()
    }

    /// Returns the elements for which `predicate` holds, in order
    #[must_use]
    pub fn filter<P>(&self, mut predicate: P) -> Self
    where
        T: Clone,
        P: FnMut(&T, usize) -> bool,
    {
        self.iter()
            .enumerate()
            .filter(|(index, element)| predicate(element, *index))
            .map(|(_, element)| element.clone())
            .collect()
    }

    /// Combines all elements from left to right, starting with `initial`
    pub fn fold<A, F>(&self, initial: A, mut combine: F) -> A
    where
        F: FnMut(A, &T, usize) -> A,
    {
        self.iter()
            .enumerate()
            .fold(initial, |accumulator, (index, element)| {
                combine(accumulator, element, index)
            })
    }

    /// Combines all elements from left to right, starting with the first one.
    ///
    /// `combine` is first called with the element at index `1`.
    ///
    /// ## Errors
    /// Fails with [SequenceError::EmptySequence] if there is no first element.
    pub fn reduce<F>(&self, mut combine: F) -> Result<T, SequenceError>
    where
        T: Clone,
        F: FnMut(T, &T, usize) -> T,
    {
        let Some((first, rest)) = self.elements.split_first() else {
            log::debug!("Cannot reduce an empty sequence without an initial value");
            return Err(SequenceError::EmptySequence);
        };

        let reduced = rest
            .iter()
            .zip(1..)
            .fold(first.clone(), |accumulator, (element, index)| {
                combine(accumulator, element, index)
            });

        Ok(reduced)
    }

    /// Calls `visit` with every element and its index, in ascending order
    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T, usize),
    {
        for (index, element) in self.iter().enumerate() {
            visit(element, index);
        }
    }
}

impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(elements: Vec<T>) -> Self {
        Self { elements }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(elements: [T; N]) -> Self {
        Self {
            elements: elements.into(),
        }
    }
}

impl<T> From<Sequence<T>> for Vec<T> {
    fn from(sequence: Sequence<T>) -> Self {
        sequence.elements
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: fmt::Display> fmt::Display for Sequence<T> {
    /// Writes `[a, b, c]`.
    ///
    /// Elements are written in their alternate form (`{:#}`), which
    /// [Value](crate::Value) uses to quote nested strings.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (index, element) in self.iter().enumerate() {
            if index != 0 {
                f.write_str(", ")?;
            }
            write!(f, "{element:#}")?;
        }
        f.write_str("]")
    }
}
