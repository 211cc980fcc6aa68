//! Chain nodes
//!
//! Every link in the chain is a raw owning pointer obtained from
//! `Box::leak`. Nodes are never held in a `Box` while linked, so the
//! queue's tail pointer can alias the last node freely. A node returns to a
//! `Box` only through [`Node::reclaim`] when it leaves the chain for good.

use crate::queue::alloc::{size_of_box, try_box};
use crate::queue::error::{QueueError, QueueResult};
use std::ptr::NonNull;

/// Owning link to the next node; `None` is the terminal link.
pub(crate) type Link = Option<NonNull<Node>>;

/// One queued element: an owned copy of the inserted text and its successor.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) value: String,
    pub(crate) next: Link,
}

impl Node {
    /// Allocate a detached node holding an independent copy of `value`.
    ///
    /// The string buffer is reserved to exactly `value.len()` bytes. When the
    /// node allocation fails after the string succeeded, the string is
    /// released on the way out.
    pub(crate) fn try_new(value: &str) -> QueueResult<NonNull<Node>> {
        let mut owned = String::new();
        owned
            .try_reserve_exact(value.len())
            .map_err(|_| QueueError::OutOfMemory { bytes: value.len() })?;
        owned.push_str(value);

        let boxed = try_box(Node {
            value: owned,
            next: None,
        })
        .map_err(|_| QueueError::OutOfMemory {
            bytes: size_of_box::<Node>(),
        })?;
        Ok(NonNull::from(Box::leak(boxed)))
    }

    /// Take back ownership of a node that has been unlinked from its chain.
    ///
    /// # Safety
    ///
    /// `node` must come from [`Node::try_new`], must not be reclaimed twice,
    /// and no other link may still be used to reach it afterwards.
    pub(crate) unsafe fn reclaim(node: NonNull<Node>) -> Box<Node> {
        Box::from_raw(node.as_ptr())
    }
}
