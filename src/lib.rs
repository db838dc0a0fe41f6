//! Singly-linked sequential containers built on owned node chains.
//!
//! - [`linked_list::list::LinkedList`]: an index-addressable list.
//! - [`linked_list::queue::LinkedQueue`]: a FIFO queue.
//! - [`linked_list::stack::LinkedStack`]: a LIFO stack.
//!
//! The operations live on the [`linked_list::traits`] shapes, so bring
//! [`linked_list::prelude`] into scope before using them.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;

pub use error::{EmptyContainerError, Error, IndexError, Result};
