use core::{fmt, mem};

use super::{
    iter::{IntoIter, Iter},
    node::{Link, clone_chain, drop_chain, extend_back, pop_front, push_back},
    traits::Queue,
};

/// A FIFO queue over a singly-linked chain.
///
/// Values leave from the head. There is no tail pointer, so each
/// [`enqueue`](Queue::enqueue) walks the whole chain to find the back.
pub struct LinkedQueue<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedQueue<T> {
    /// Creates a new, empty queue.
    pub const fn new() -> Self {
        LinkedQueue { head: None, len: 0 }
    }

    /// Iterates front to back without dequeuing.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }
}

impl<T> Queue for LinkedQueue<T> {
    type Item = T;

    fn enqueue(&mut self, value: T) {
        push_back(&mut self.head, value);
        self.len += 1;
    }

    fn dequeue(&mut self) -> Option<T> {
        pop_front(&mut self.head).inspect(|_| self.len -= 1)
    }

    fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for LinkedQueue<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.head);
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedQueue<T> {
    fn clone(&self) -> Self {
        LinkedQueue {
            head: clone_chain(&self.head, self.len),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        extend_back(&mut self.head, &mut self.len, iter);
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Self::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.head.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a LinkedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
