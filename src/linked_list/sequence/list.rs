use alloc::boxed::Box;
use core::{
    cmp::Ordering,
    fmt,
    marker::PhantomData,
    mem,
    ops::{Index, IndexMut},
    ptr::NonNull,
};

use super::{
    error::{Result, SequenceError},
    node::{Link, Node, link_after, unlink_after},
};

/// An owning singly linked list that caches its tail and length.
///
/// Insertion at either end is O(1). Removal at the head is O(1); removal at
/// the tail and every positional operation walk the chain and are O(n).
pub struct SequenceList<T> {
    head: Option<NonNull<Node<T>>>,
    tail: Option<NonNull<Node<T>>>,
    len: usize,
    _marker: PhantomData<Box<Node<T>>>,
}

impl<T> SequenceList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SequenceList {
            head: None,
            tail: None,
            len: 0,
            _marker: PhantomData,
        }
    }

    /// Number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn first(&self) -> Option<&T> {
        self.head.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).data })
    }

    pub fn last(&self) -> Option<&T> {
        self.tail.map(|node| unsafe { &(*node.as_ptr()).data })
    }

    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.tail.map(|node| unsafe { &mut (*node.as_ptr()).data })
    }

    /// Inserts `value` in front of the current head.
    pub fn insert_first(&mut self, value: T) {
        self.link_next(None, value);
    }

    /// Removes the head and returns its value.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list has no elements.
    pub fn remove_first(&mut self) -> Result<T> {
        self.unlink_next(None).ok_or(SequenceError::Empty)
    }

    /// Inserts `value` after the current tail.
    pub fn insert_last(&mut self, value: T) {
        self.link_next(self.tail, value);
    }

    /// Removes the tail and returns its value.
    ///
    /// The chain has no back links, so this walks from the head to the
    /// tail's predecessor.
    ///
    /// # Errors
    ///
    /// [`SequenceError::Empty`] if the list has no elements.
    pub fn remove_last(&mut self) -> Result<T> {
        let prev = match self.len {
            0 => return Err(SequenceError::Empty),
            1 => None,
            len => self.node_at(len - 2),
        };
        self.unlink_next(prev).ok_or(SequenceError::Empty)
    }

    /// Inserts `value` so that it ends up at `position`.
    ///
    /// `position == 0` is [`insert_first`](Self::insert_first) and
    /// `position == len` is [`insert_last`](Self::insert_last).
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `position > len`. The list is left
    /// untouched.
    pub fn insert_at(&mut self, value: T, position: usize) -> Result<()> {
        if position > self.len {
            return Err(self.out_of_range(position));
        }
        let prev = if position == self.len {
            self.tail
        } else {
            position.checked_sub(1).and_then(|index| self.node_at(index))
        };
        self.link_next(prev, value);
        Ok(())
    }

    /// Removes the element at `position` and returns it.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `position >= len`, which includes
    /// every position of an empty list.
    pub fn remove_at(&mut self, position: usize) -> Result<T> {
        if position >= self.len {
            return Err(self.out_of_range(position));
        }
        let prev = position.checked_sub(1).and_then(|index| self.node_at(index));
        let error = self.out_of_range(position);
        self.unlink_next(prev).ok_or(error)
    }

    /// Inserts `value` into an ascending list, keeping it ascending.
    ///
    /// The value goes after every element that is not greater than it, so
    /// equal elements keep their insertion order.
    pub fn insert_sorted(&mut self, value: T)
    where
        T: Ord,
    {
        self.insert_sorted_by(value, T::cmp);
    }

    /// Like [`insert_sorted`](Self::insert_sorted) with a custom order.
    pub fn insert_sorted_by<F>(&mut self, value: T, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut prev = None;
        let mut current = self.head;
        while let Some(node) = current {
            let node = unsafe { node.as_ref() };
            if compare(&node.data, &value) == Ordering::Greater {
                break;
            }
            prev = current;
            current = node.next();
        }
        self.link_next(prev, value);
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= len`.
    pub fn at(&self, index: usize) -> Result<&T> {
        self.node_at(index)
            .map(|node| unsafe { &(*node.as_ptr()).data })
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// [`SequenceError::OutOfRange`] if `index >= len`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T> {
        let error = self.out_of_range(index);
        self.node_at(index)
            .map(|node| unsafe { &mut (*node.as_ptr()).data })
            .ok_or(error)
    }

    /// Drops every element, head first.
    pub fn clear(&mut self) {
        while self.unlink_next(None).is_some() {}
    }

    /// Exchanges the contents of two lists without touching any node.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Moves the whole chain out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    /// Walks `index` links from the head.
    fn node_at(&self, index: usize) -> Option<NonNull<Node<T>>> {
        if index >= self.len {
            return None;
        }
        let mut current = self.head;
        for _ in 0..index {
            current = current.and_then(|node| unsafe { node.as_ref().next() });
        }
        current
    }

    /// Links `value` after `prev`, or at the head when `prev` is `None`.
    fn link_next(&mut self, prev: Option<NonNull<Node<T>>>, value: T) {
        let node = match prev {
            None => link_after(self, value),
            Some(mut prev) => link_after(unsafe { prev.as_mut() }, value),
        };
        if unsafe { node.as_ref() }.next().is_none() {
            self.tail = Some(node);
        }
        self.len += 1;
    }

    /// Unlinks the node after `prev`, or the head when `prev` is `None`.
    fn unlink_next(&mut self, prev: Option<NonNull<Node<T>>>) -> Option<T> {
        // SAFETY: `prev` is a node of this list and every node reachable from
        // the head was allocated by `link_next`.
        let (data, end) = match prev {
            None => {
                let data = unsafe { unlink_after(self) }?;
                (data, self.head.is_none())
            }
            Some(mut prev) => {
                let prev = unsafe { prev.as_mut() };
                let data = unsafe { unlink_after(prev) }?;
                (data, prev.next().is_none())
            }
        };
        // the parent of the removed node is now the end of the chain
        if end {
            self.tail = prev;
        }
        self.len -= 1;
        Some(data)
    }

    fn out_of_range(&self, position: usize) -> SequenceError {
        SequenceError::OutOfRange {
            position,
            len: self.len,
        }
    }
}

#[cfg(test)]
impl<T> SequenceList<T> {
    /// Walks the chain and checks that head, tail and len agree.
    pub(crate) fn assert_invariants(&self) {
        let mut count = 0;
        let mut last = None;
        let mut current = self.head;
        while let Some(node) = current {
            count += 1;
            last = current;
            current = unsafe { node.as_ref().next() };
        }
        assert_eq!(count, self.len, "len does not match the chain");
        assert_eq!(last, self.tail, "tail is not the last node of the chain");
    }
}

impl<T> Link for SequenceList<T> {
    type Target = Node<T>;

    fn next(&self) -> Option<NonNull<Node<T>>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<Node<T>>>) {
        self.head = next;
    }
}

impl<T> Default for SequenceList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for SequenceList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for SequenceList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }

    /// Copy and swap: `self` only changes once the full copy exists.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T: fmt::Debug> fmt::Debug for SequenceList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for SequenceList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for SequenceList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert_last(value);
        }
    }
}

impl<T> Index<usize> for SequenceList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for SequenceList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

unsafe impl<T: Send> Send for SequenceList<T> {}
unsafe impl<T: Sync> Sync for SequenceList<T> {}
