//! # Sequence List
//!
//! An owning singly linked list with a cached tail.
//!
//! ## Core Components
//!
//! - [`list::SequenceList`]: the container. Head/tail insertion, positional
//!   insertion and removal, indexed access and sorted insertion.
//! - [`iter`]: borrowing and owning iterators.
//! - [`error`]: the error types reported by checked operations.
//! - `text` and `stream`: the space separated token format.
//!
//! ## Safety
//!
//! Nodes are linked with raw pointers. The list upholds these invariants
//! internally, no caller action is required:
//!
//! - An empty list has neither head nor tail.
//! - The tail is the node reached from the head after `len - 1` links.
//! - Every node is reachable from exactly one link and is freed exactly once.

mod node;

pub mod error;
pub mod iter;
pub mod list;
mod text;

#[cfg(feature = "std")]
pub mod stream;

#[cfg(test)]
mod tests;

pub use error::{ParseError, Result, SequenceError};
pub use list::SequenceList;

#[cfg(feature = "std")]
pub use stream::ReadError;
