use core::iter::FusedIterator;

use super::node::{Link, Node, drop_chain, pop_front};

/// An iterator over shared references to the values of a chain, head first.
pub struct Iter<'a, T> {
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    /// Creates an iterator starting at `head`. `len` must be the chain length.
    pub(crate) fn new(head: &'a Link<T>, len: usize) -> Self {
        Self {
            current: head.as_deref(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// An iterator over mutable references to the values of a chain, head first.
pub struct IterMut<'a, T> {
    current: Option<&'a mut Node<T>>,
    remaining: usize,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(head: &'a mut Link<T>, len: usize) -> Self {
        Self {
            current: head.as_deref_mut(),
            remaining: len,
        }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.take().map(|node| {
            self.current = node.next.as_deref_mut();
            self.remaining -= 1;
            &mut node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

/// An owning iterator that unlinks values from the head of a chain.
///
/// For a queue this is dequeue order, for a stack it is pop order.
pub struct IntoIter<T> {
    head: Link<T>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(head: Link<T>, len: usize) -> Self {
        Self {
            head,
            remaining: len,
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        pop_front(&mut self.head).inspect(|_| self.remaining -= 1)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.head);
    }
}
