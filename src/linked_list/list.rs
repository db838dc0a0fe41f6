use core::{fmt, mem};

use super::{
    iter::{IntoIter, Iter, IterMut},
    node::{Link, clone_chain, drop_chain, extend_back, pop_front, push_back, push_front, seek_mut},
    traits::List,
};
use crate::error::IndexError;

/// An index-addressable list over a singly-linked chain.
///
/// Only the head is stored, so appending and every positional operation walk
/// the chain from the front.
pub struct LinkedList<T> {
    head: Link<T>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        LinkedList { head: None, len: 0 }
    }

    /// Creates a list holding `value`, or an empty list when `value` is `None`.
    ///
    /// ```
    /// use chain_collections::linked_list::prelude::*;
    ///
    /// assert_eq!(LinkedList::of_single(3).len(), 1);
    /// assert!(LinkedList::<i32>::of_single(None).is_empty());
    /// ```
    pub fn of_single(value: impl Into<Option<T>>) -> Self {
        let mut list = Self::new();
        if let Some(value) = value.into() {
            list.append(value);
        }
        list
    }

    /// Creates a list of `values` in iteration order, as if each were appended.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        values.into_iter().collect()
    }

    /// Iterates from the head to the tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.head, self.len)
    }

    /// Iterates from the head to the tail, allowing each value to be modified.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.head, self.len)
    }

    fn check_position(&self, index: usize) -> Result<(), IndexError> {
        if index < self.len {
            Ok(())
        } else {
            Err(IndexError::new(index, self.len))
        }
    }
}

impl<T> List for LinkedList<T> {
    type Item = T;

    fn append(&mut self, value: T) {
        push_back(&mut self.head, value);
        self.len += 1;
    }

    fn insert(&mut self, index: usize, value: T) -> Result<(), IndexError> {
        if index > self.len {
            return Err(IndexError::new(index, self.len));
        }
        push_front(seek_mut(&mut self.head, index), value);
        self.len += 1;
        Ok(())
    }

    fn set(&mut self, index: usize, value: T) -> Result<T, IndexError> {
        let slot = self.get_mut(index)?;
        Ok(mem::replace(slot, value))
    }

    fn get(&self, index: usize) -> Result<&T, IndexError> {
        self.check_position(index)?;
        self.iter()
            .nth(index)
            .ok_or(IndexError::new(index, self.len))
    }

    fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexError> {
        self.check_position(index)?;
        let len = self.len;
        self.iter_mut()
            .nth(index)
            .ok_or(IndexError::new(index, len))
    }

    fn remove(&mut self, index: usize) -> Result<T, IndexError> {
        self.check_position(index)?;
        let value = pop_front(seek_mut(&mut self.head, index))
            .ok_or(IndexError::new(index, self.len))?;
        self.len -= 1;
        Ok(value)
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|item| item == value)
    }

    fn len(&self) -> usize {
        self.len
    }

    fn clear(&mut self) {
        drop_chain(&mut self.head);
        self.len = 0;
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        drop_chain(&mut self.head);
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        LinkedList {
            head: clone_chain(&self.head, self.len),
            len: self.len,
        }
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        extend_back(&mut self.head, &mut self.len, iter);
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        let len = mem::take(&mut self.len);
        IntoIter::new(self.head.take(), len)
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
