use error_derive::Error;

/// Failures of the operations on a [Sequence](crate::Sequence)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// [Sequence::reduce](crate::Sequence::reduce) had neither elements nor an
    /// initial value to start from
    #[msg = "reduce of empty sequence with no initial value"]
    EmptySequence,
}
