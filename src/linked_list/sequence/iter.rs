use core::{iter::FusedIterator, marker::PhantomData, ptr::NonNull};

use super::{
    list::SequenceList,
    node::{Link, Node},
};

/// An iterator over shared references to the elements of a list.
pub struct Iter<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _list: PhantomData<&'a Node<T>>,
}

/// An iterator over mutable references to the elements of a list.
pub struct IterMut<'a, T> {
    current: Option<NonNull<Node<T>>>,
    remaining: usize,
    _list: PhantomData<&'a mut Node<T>>,
}

/// An owning iterator that drains a list from the head.
pub struct IntoIter<T> {
    list: SequenceList<T>,
}

impl<T> SequenceList<T> {
    /// Iterates from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            current: <Self as Link>::next(self),
            remaining: self.len(),
            _list: PhantomData,
        }
    }

    /// Iterates from head to tail, allowing each element to be modified in place.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut {
            current: <Self as Link>::next(self),
            remaining: self.len(),
            _list: PhantomData,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node = unsafe { &*current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            &node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|current| {
            let node = unsafe { &mut *current.as_ptr() };
            self.current = node.next();
            self.remaining -= 1;
            &mut node.data
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for Iter<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
            _list: PhantomData,
        }
    }
}

impl<'a, T> IntoIterator for &'a SequenceList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut SequenceList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for SequenceList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { list: self }
    }
}

unsafe impl<T: Sync> Send for Iter<'_, T> {}
unsafe impl<T: Sync> Sync for Iter<'_, T> {}
unsafe impl<T: Send> Send for IterMut<'_, T> {}
unsafe impl<T: Sync> Sync for IterMut<'_, T> {}
