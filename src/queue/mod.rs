//! String Queue Component
//!
//! A queue of owned text values stored in a singly-linked chain of
//! individually allocated nodes.
//!
//! # Overview
//!
//! - **Insertion** at the head or the tail in O(1), copying the caller's text
//! - **Removal** from the head, handing back the value or copying it into a
//!   caller buffer with silent truncation
//! - **Size** from a maintained counter, never a traversal
//! - **Reverse** in place by relinking existing nodes
//! - **Sort** ascending by byte-wise comparison with an in-place merge sort
//!
//! Allocation failure during insertion is reported as
//! [`QueueError::OutOfMemory`] rather than aborting, and leaves the queue
//! unchanged.
//!
//! # Ownership
//!
//! ```text
//!  Queue ─ head ─▶ Node ─ next ─▶ Node ─ next ─▶ Node ─ next ─▶ ∅
//!    │              │              │              ▲ │
//!    │            value          value            │ value
//!    └──────────────── tail (non-owning) ─────────┘
//! ```
//!
//! The queue owns the first node, each node owns its successor and its
//! value. Dropping the queue releases the chain iteratively.
//!
//! # Example Usage
//!
//! ```rust
//! use strqueue::queue::Queue;
//!
//! let mut queue = Queue::new();
//! queue.insert_tail("b")?;
//! queue.insert_tail("a")?;
//! queue.insert_tail("c")?;
//!
//! queue.sort();
//! assert_eq!(queue.iter().collect::<Vec<_>>(), ["a", "b", "c"]);
//!
//! queue.reverse();
//! assert_eq!(queue.remove_head()?, "c");
//! assert_eq!(queue.size(), 2);
//! # Ok::<(), strqueue::queue::QueueError>(())
//! ```
//!
//! Handle-style callers use [`api`], where an absent queue is an `Option`:
//!
//! ```rust
//! use strqueue::queue::api;
//!
//! let mut queue = api::create();
//! api::insert_head(queue.as_deref_mut(), "hello")?;
//!
//! let mut buf = [0u8; 4];
//! assert_eq!(api::remove_head(queue.as_deref_mut(), Some(&mut buf))?, 3);
//! assert_eq!(&buf, b"hel\0");
//!
//! api::destroy(queue);
//! # Ok::<(), strqueue::queue::QueueError>(())
//! ```

mod alloc;
pub mod api;
mod buffer;
mod error;
mod internal;
mod node;
mod sort;

pub use buffer::copy_truncated;
pub use error::{QueueError, QueueResult};
pub use internal::{Iter, Queue};

#[cfg(test)]
mod tests;
