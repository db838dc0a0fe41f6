use core::{fmt, mem};

use super::{
    iter::{IntoIter, Iter},
    node::{Link, clone_chain, drop_chain, pop_front, push_front},
    traits::Stack,
};
use crate::error::EmptyContainerError;

/// A LIFO stack over a singly-linked chain. The head is the top.
pub struct LinkedStack<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty stack.
    pub const fn new() -> Self {
        LinkedStack { head: None, len: 0 }
    }

    /// Iterates from the top of the stack to the bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }
}

impl<T> Stack for LinkedStack<T> {
    type Item = T;

    fn push(&mut self, value: T) {
        push_front(&mut self.head, value);
        self.len += 1;
    }

    fn pop(&mut self) -> Result<T, EmptyContainerError> {
        let value = pop_front(&mut self.head).ok_or(EmptyContainerError)?;
        self.len -= 1;
        Ok(value)
    }

    fn peek(&self) -> Option<&T> {
        self.head.as_ref().map(|node| &node.value)
    }

    fn len(&self) -> usize {
        self.len
    }
}

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.head);
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedStack<T> {
    fn clone(&self) -> Self {
        LinkedStack {
            head: clone_chain(&self.head, self.len),
            len: self.len,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Pushes in iteration order, so the last value ends up on top.
impl<T> Extend<T> for LinkedStack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.head.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
