//! The space separated token format.
//!
//! A non-empty list is written as each element followed by a single space,
//! trailing space included. An empty list is written as `0`.

use alloc::string::ToString;
use core::{fmt, str::FromStr};

use super::{error::ParseError, list::SequenceList};

/// Marker written in place of an empty list.
const EMPTY_MARKER: char = '0';

impl<T: fmt::Display> fmt::Display for SequenceList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "{EMPTY_MARKER}");
        }
        for value in self {
            write!(f, "{value} ")?;
        }
        Ok(())
    }
}

impl<T: FromStr> SequenceList<T> {
    /// Parses whitespace separated tokens from `text`, appending each one at
    /// the tail. Returns the number of appended elements.
    ///
    /// # Errors
    ///
    /// Stops at the first token that does not parse as `T`. Elements appended
    /// before it are kept.
    pub fn extend_from_tokens(&mut self, text: &str) -> Result<usize, ParseError<T::Err>> {
        self.append_tokens(text, 0)
    }

    /// Token parsing shared with the stream reader, which numbers tokens
    /// across lines starting at `first_index`.
    pub(crate) fn append_tokens(
        &mut self,
        text: &str,
        first_index: usize,
    ) -> Result<usize, ParseError<T::Err>> {
        let mut appended = 0;
        for token in text.split_whitespace() {
            let value = token.parse().map_err(|source| ParseError {
                index: first_index + appended,
                token: token.to_string(),
                source,
            })?;
            self.insert_last(value);
            appended += 1;
        }
        Ok(appended)
    }
}

/// Reads `text` as a new sequence. Any malformed token fails the whole parse.
impl<T: FromStr> FromStr for SequenceList<T> {
    type Err = ParseError<T::Err>;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut list = Self::new();
        list.extend_from_tokens(text)?;
        Ok(list)
    }
}
