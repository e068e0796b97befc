//! Positions relative to either end of a sequence.

/// Turns a possibly negative `index` into a position within `0..=len`.
///
/// Negative values count backwards from the end and saturate at `0`,
/// non-negative values saturate at `len`.
///
/// ```
/// # use seqops::index::resolve;
/// assert_eq!(resolve(2, 5), 2);
/// assert_eq!(resolve(-3, 5), 2);
/// assert_eq!(resolve(-10, 5), 0);
/// assert_eq!(resolve(7, 5), 5);
/// ```
#[must_use]
pub fn resolve(index: isize, len: usize) -> usize {
    if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    }
}

/// Like [resolve], but `None` if the position does not address an element.
#[must_use]
pub fn resolve_element(index: isize, len: usize) -> Option<usize> {
    let position = if index < 0 {
        len.checked_sub(index.unsigned_abs())?
    } else {
        index.unsigned_abs()
    };

    (position < len).then_some(position)
}
