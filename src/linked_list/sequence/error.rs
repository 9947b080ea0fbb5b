use alloc::string::String;
use thiserror::Error;

/// Errors reported by the checked operations of a
/// [`SequenceList`](super::SequenceList).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A position or index outside the bounds valid for the operation.
    #[error("position {position} is out of range for a sequence of length {len}")]
    OutOfRange { position: usize, len: usize },
    /// Removal from a sequence with no elements.
    #[error("cannot remove from an empty sequence")]
    Empty,
}

/// A token in the text format that does not parse as an element.
///
/// Elements parsed before the offending token stay in the list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("token {index} ({token:?}) is not a valid element")]
pub struct ParseError<E> {
    /// Zero based index of the token in the input.
    pub index: usize,
    pub token: String,
    #[source]
    pub source: E,
}

pub type Result<T, E = SequenceError> = core::result::Result<T, E>;
