use alloc::boxed::Box;
use core::ptr::NonNull;

/// Anything that owns a "next" slot in the chain.
///
/// Both [`Node`] and the list itself implement this, the list's next being
/// its head. Splicing after the list is then the same operation as splicing
/// after a node.
pub(crate) trait Link {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A heap allocated element of a [`SequenceList`](super::SequenceList).
pub(crate) struct Node<T> {
    pub(crate) data: T,
    next: Option<NonNull<Node<T>>>,
}

impl<T> Node<T> {
    /// Allocates a node and leaks it into a raw pointer. The chain becomes
    /// the owner; [`Node::free`] reclaims it.
    fn alloc(data: T, next: Option<NonNull<Self>>) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Self { data, next })))
    }

    /// Frees a node, returning its data and the link it held.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::alloc`], must not have been freed yet and
    /// must no longer be reachable from any link.
    unsafe fn free(node: NonNull<Self>) -> (T, Option<NonNull<Self>>) {
        let boxed = unsafe { Box::from_raw(node.as_ptr()) };
        let Node { data, next } = *boxed;
        (data, next)
    }
}

impl<T> Link for Node<T> {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

/// Links a new node holding `data` directly after `parent` and returns it.
pub(crate) fn link_after<L, T>(parent: &mut L, data: T) -> NonNull<Node<T>>
where
    L: Link<Target = Node<T>>,
{
    let node = Node::alloc(data, parent.next());
    parent.set_next(Some(node));
    node
}

/// Unlinks and frees the node following `parent`, returning its data.
///
/// Returns `None` when `parent` is the end of the chain.
///
/// # Safety
///
/// The node following `parent`, if any, must be a live node allocated by
/// [`link_after`] and `parent` must be its only link.
pub(crate) unsafe fn unlink_after<L, T>(parent: &mut L) -> Option<T>
where
    L: Link<Target = Node<T>>,
{
    let node = parent.next()?;
    let (data, next) = unsafe { Node::free(node) };
    parent.set_next(next);
    Some(data)
}
