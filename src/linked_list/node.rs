use alloc::boxed::Box;

use super::iter::Iter;

/// The slot owning the rest of a chain: either the next node or the end.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single link in a chain.
///
/// Every node is exclusively owned by the slot before it, so a chain has no
/// back references and no cycles.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) next: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn boxed(value: T, next: Link<T>) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// Links `value` in front of the chain owned by `link`.
pub(crate) fn push_front<T>(link: &mut Link<T>, value: T) {
    let next = link.take();
    *link = Some(Node::boxed(value, next));
}

/// Unlinks the first node of the chain owned by `link` and returns its value.
pub(crate) fn pop_front<T>(link: &mut Link<T>) -> Option<T> {
    link.take().map(|node| {
        let Node { value, next } = *node;
        *link = next;
        value
    })
}

/// Walks `steps` nodes forward from `link` and returns the slot reached.
///
/// Stops at the terminating `None` slot if the chain is shorter than `steps`;
/// callers validate positions against their length first.
pub(crate) fn seek_mut<T>(mut link: &mut Link<T>, steps: usize) -> &mut Link<T> {
    for _ in 0..steps {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/// Returns the terminating `None` slot of the chain. O(n): there is no tail pointer.
pub(crate) fn tail_mut<T>(mut link: &mut Link<T>) -> &mut Link<T> {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Walks to the end of the chain and links `value` there.
pub(crate) fn push_back<T>(link: &mut Link<T>, value: T) {
    *tail_mut(link) = Some(Node::boxed(value, None));
}

/// Appends every value to the end of the chain in order, walking to the tail
/// only once.
///
/// `len` is bumped as each node is linked, so it still matches the chain if
/// `values` panics partway through.
pub(crate) fn extend_back<T, I>(link: &mut Link<T>, len: &mut usize, values: I)
where
    I: IntoIterator<Item = T>,
{
    let mut slot = tail_mut(link);
    for value in values {
        let node = slot.insert(Node::boxed(value, None));
        slot = &mut node.next;
        *len += 1;
    }
}

/// Builds a new chain holding clones of `link`'s values in the same order.
pub(crate) fn clone_chain<T: Clone>(link: &Link<T>, len: usize) -> Link<T> {
    let mut head = None;
    let mut cloned = 0;
    extend_back(&mut head, &mut cloned, Iter::new(link, len).cloned());
    head
}

/// Releases the whole chain one node at a time.
///
/// Dropping the head `Box` directly would recurse once per node.
pub(crate) fn drop_chain<T>(link: &mut Link<T>) {
    let mut current = link.take();
    while let Some(mut node) = current {
        current = node.next.take();
    }
}
