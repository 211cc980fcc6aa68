//! Handle-level API for the queue
//!
//! These functions take the queue as an `Option` so that callers holding a
//! possibly absent handle get the documented failure instead of a panic:
//! mutating operations fail with [`QueueError::InvalidQueue`], queries
//! report 0 and restructuring is a no-op. Callers that always hold a queue
//! can use the [`Queue`] methods directly.

use crate::queue::alloc::try_box;
pub use crate::queue::buffer::copy_truncated;
pub use crate::queue::error::{QueueError, QueueResult};
pub use crate::queue::internal::{Iter, Queue};

/// Create a new empty queue on the heap.
///
/// Returns `None` only if the allocator cannot provide storage for it.
pub fn create() -> Option<Box<Queue>> {
    match try_box(Queue::new()) {
        Ok(queue) => Some(queue),
        Err(_) => {
            log::warn!("create: allocation failed");
            None
        }
    }
}

/// Release a queue together with every element it holds. No-op on `None`.
pub fn destroy(queue: Option<Box<Queue>>) {
    if let Some(queue) = queue {
        log::trace!("destroy: releasing {} elements", queue.size());
        drop(queue);
    }
}

/// Insert a copy of `value` at the head of the queue.
pub fn insert_head(queue: Option<&mut Queue>, value: &str) -> QueueResult<()> {
    queue.ok_or(QueueError::InvalidQueue)?.insert_head(value)
}

/// Insert a copy of `value` at the tail of the queue.
pub fn insert_tail(queue: Option<&mut Queue>, value: &str) -> QueueResult<()> {
    queue.ok_or(QueueError::InvalidQueue)?.insert_tail(value)
}

/// Remove the head element, optionally copying it into `buf`.
///
/// See [`Queue::remove_head_into`] for the copy contract. Fails with
/// `InvalidQueue` on an absent queue and `EmptyQueue` when nothing is queued.
pub fn remove_head(queue: Option<&mut Queue>, buf: Option<&mut [u8]>) -> QueueResult<usize> {
    queue.ok_or(QueueError::InvalidQueue)?.remove_head_into(buf)
}

/// Number of queued elements, 0 for an absent queue.
pub fn size(queue: Option<&Queue>) -> usize {
    queue.map_or(0, Queue::size)
}

/// Reverse the queue in place. No-op on an absent queue.
pub fn reverse(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.reverse();
    }
}

/// Sort the queue in ascending order. No-op on an absent queue.
pub fn sort(queue: Option<&mut Queue>) {
    if let Some(queue) = queue {
        queue.sort();
    }
}
