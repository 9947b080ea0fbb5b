//! Reading and writing lists over `std::io` streams.

use core::{fmt, str::FromStr};
use std::{
    io::{self, BufRead, Write},
    string::String,
};

use thiserror::Error;

use super::{error::ParseError, list::SequenceList};

/// Failure while reading a list from a stream.
#[derive(Debug, Error)]
pub enum ReadError<E> {
    #[error("failed to read from stream")]
    Io(#[from] io::Error),
    #[error("malformed element in stream")]
    Parse(#[from] ParseError<E>),
}

impl<T: FromStr> SequenceList<T> {
    /// Appends every token of `reader` until end of stream and returns the
    /// number of appended elements.
    ///
    /// # Errors
    ///
    /// Stops at the first I/O failure or malformed token. Elements read
    /// before the failure stay in the list.
    pub fn read_from<R: BufRead>(&mut self, mut reader: R) -> Result<usize, ReadError<T::Err>> {
        let mut appended = 0;
        let mut line = String::new();
        loop {
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                return Ok(appended);
            }
            appended += self.append_tokens(&line, appended)?;
        }
    }

    /// Reads `reader` as a new sequence, discarding the current contents.
    ///
    /// # Errors
    ///
    /// Same as [`read_from`](Self::read_from).
    pub fn read_new_from<R: BufRead>(&mut self, reader: R) -> Result<usize, ReadError<T::Err>> {
        self.clear();
        self.read_from(reader)
    }
}

impl<T: fmt::Display> SequenceList<T> {
    /// Writes the list in its text format.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}
