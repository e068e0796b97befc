//! Transformations over ordered sequences and access to keyed records.
//!
//! [Sequence] offers the usual array methods (`splice`, `slice`, `map`,
//! `filter`, `fold`/`reduce`, `for_each`), [Record] is an insertion-ordered
//! mapping whose keys are canonicalized to strings, and [Value] is the
//! dynamically typed element that ties both together.

mod console;
mod error;
pub mod index;
mod record;
mod sequence;
mod value;

pub use console::Console;
pub use error::SequenceError;
pub use record::{Entries, Keys, PropertyKey, Record};
pub use sequence::Sequence;
pub use value::{Number, SharedRecord, SharedSequence, Value};
