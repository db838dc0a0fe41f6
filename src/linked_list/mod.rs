//! Sequential containers over singly-linked chains of owned nodes.
//!
//! Each container owns its chain through the head: every node is boxed and
//! owned by the slot before it, and removing a node moves it out of that slot
//! before its successor is relinked. There is no tail pointer, so appending
//! to a [`list::LinkedList`] or enqueueing onto a [`queue::LinkedQueue`] walks
//! the whole chain.
//!
//! ## Core Components
//!
//! - [`traits`]: The container shapes `List`, `Queue` and `Stack`.
//! - [`list::LinkedList`]: Positional insert, replace, read and remove.
//! - [`queue::LinkedQueue`]: Append at the back, remove from the front.
//! - [`stack::LinkedStack`]: Push and pop at the top.
//! - [`iter`]: Iterators shared by all three containers.
//!
//! # Examples
//!
//! ```
//! use chain_collections::linked_list::prelude::*;
//!
//! let mut list = LinkedList::of([5, 7, 8, 13]);
//! assert_eq!(list.remove(1), Ok(7));
//! assert_eq!(list.set(1, 10), Ok(8));
//! assert_eq!(list.get(1), Ok(&10));
//! assert!(!list.contains(&7));
//!
//! let mut queue = LinkedQueue::new();
//! queue.enqueue(55);
//! queue.enqueue(78);
//! assert_eq!(queue.dequeue(), Some(55));
//!
//! let mut stack = LinkedStack::new();
//! stack.push(228);
//! stack.push(322);
//! assert_eq!(stack.pop(), Ok(322));
//! assert_eq!(stack.len(), 1);
//! ```

pub mod iter;
pub mod list;
pub mod queue;
pub mod stack;
pub mod traits;

mod node;

#[cfg(test)]
mod tests;

pub mod prelude {
    pub use super::list::LinkedList;
    pub use super::queue::LinkedQueue;
    pub use super::stack::LinkedStack;
    pub use super::traits::{List, Queue, Stack};
}
