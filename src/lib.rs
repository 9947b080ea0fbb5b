#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

pub mod linked_list;

pub use linked_list::sequence::{SequenceError, SequenceList};
