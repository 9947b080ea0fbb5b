//! Linked list implementations.
//!
//! The [`sequence`] module provides an owning, singly linked list. Every node
//! is allocated by the list and freed by it; callers only ever see the values.
//!
//! # Examples
//!
//! ```
//! use sequence_list::linked_list::sequence::SequenceList;
//!
//! let mut list = SequenceList::new();
//! list.insert_last(5);
//! list.insert_last(10);
//! list.insert_first(1);
//! assert_eq!(list.len(), 3);
//!
//! assert_eq!(list.remove_at(1), Ok(5));
//! list.insert_sorted(5);
//!
//! let values: Vec<i32> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 5, 10]);
//! assert_eq!(list.to_string(), "1 5 10 ");
//! ```
pub mod sequence;
