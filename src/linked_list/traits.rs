use crate::error::{EmptyContainerError, IndexError};

/// An index-addressable sequence.
///
/// Positions are 0-based. Every positional operation checks its index before
/// touching the chain, so a call that returns [`IndexError`] leaves the list
/// exactly as it was.
pub trait List {
    /// The type of value stored in the list.
    type Item;

    /// Append a value after the last element.
    fn append(&mut self, value: Self::Item);

    /// Insert a value so that it ends up at `index`.
    ///
    /// Valid indices are `0..=len`: `0` makes the value the new head and
    /// `len` makes it the new tail. Elements at or after `index` shift up by one.
    fn insert(&mut self, index: usize, value: Self::Item) -> Result<(), IndexError>;

    /// Replace the value at `index` and return the previous one.
    ///
    /// Valid indices are `0..len`. The chain itself is not relinked.
    fn set(&mut self, index: usize, value: Self::Item) -> Result<Self::Item, IndexError>;

    /// Get a reference to the value at `index`.
    fn get(&self, index: usize) -> Result<&Self::Item, IndexError>;

    /// Get a mutable reference to the value at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Item, IndexError>;

    /// Unlink the element at `index` and return its value.
    ///
    /// Elements after `index` shift down by one.
    fn remove(&mut self, index: usize) -> Result<Self::Item, IndexError>;

    /// Check whether any element equals `value`.
    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq;

    /// Get the number of elements in the list
    fn len(&self) -> usize;

    /// Check if the list is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every element
    fn clear(&mut self);
}

/// A first-in first-out queue.
pub trait Queue {
    /// The type of value stored in the queue.
    type Item;

    /// Add a value at the back of the queue.
    fn enqueue(&mut self, value: Self::Item);

    /// Remove the value at the front of the queue.
    ///
    /// Returns `None` when the queue is empty; that is an expected state,
    /// not an error.
    fn dequeue(&mut self) -> Option<Self::Item>;

    /// Get the value at the front without removing it.
    fn peek(&self) -> Option<&Self::Item>;

    /// Get the number of queued values
    fn len(&self) -> usize;

    /// Check if the queue is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A last-in first-out stack.
pub trait Stack {
    /// The type of value stored in the stack.
    type Item;

    /// Put a value on top of the stack.
    fn push(&mut self, value: Self::Item);

    /// Take the value on top of the stack.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyContainerError`] if the stack holds no values.
    fn pop(&mut self) -> Result<Self::Item, EmptyContainerError>;

    /// Get the value on top without removing it.
    fn peek(&self) -> Option<&Self::Item>;

    /// Get the number of stacked values
    fn len(&self) -> usize;

    /// Check if the stack is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
