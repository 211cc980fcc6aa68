//! Internal Queue implementation over an owned singly-linked chain
//!
//! The queue owns its head node, every node owns its successor and its
//! value. Links are raw owning pointers (see [`crate::queue::node`]); the
//! tail is a second, non-owning pointer to the last node kept only so that
//! insertion at the back stays O(1).

use crate::queue::buffer::copy_truncated;
use crate::queue::error::{QueueError, QueueResult};
use crate::queue::node::{Link, Node};
use crate::queue::sort;
use std::fmt;
use std::marker::PhantomData;

/// A queue of owned strings backed by a singly-linked chain.
///
/// Invariants held between public operations:
/// - `size` equals the number of nodes reachable from `head`
/// - `head`, `tail` and `size == 0` are all empty together
/// - `tail` points at the last node of the chain, whose link is terminal
pub struct Queue {
    head: Link,
    tail: Link,
    size: usize,
    _owns: PhantomData<Box<Node>>,
}

// SAFETY: every node reachable from `head` is owned by this queue alone and
// only reached through `&self`/`&mut self`, so moving the queue to another
// thread moves that ownership with it.
unsafe impl Send for Queue {}

impl Queue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            head: None,
            tail: None,
            size: 0,
            _owns: PhantomData,
        }
    }

    /// Number of queued elements. O(1).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Insert a copy of `value` at the head.
    ///
    /// On `OutOfMemory` the queue is left unchanged.
    pub fn insert_head(&mut self, value: &str) -> QueueResult<()> {
        let node = Node::try_new(value).inspect_err(|e| log::warn!("insert_head: {e}"))?;

        // SAFETY: node is fresh and not yet reachable from anywhere else.
        unsafe { (*node.as_ptr()).next = self.head };
        self.head = Some(node);
        if self.tail.is_none() {
            self.tail = Some(node);
        }
        self.size += 1;

        log::trace!("insert_head: {} bytes, size {}", value.len(), self.size);
        Ok(())
    }

    /// Insert a copy of `value` at the tail.
    ///
    /// On `OutOfMemory` the queue is left unchanged.
    pub fn insert_tail(&mut self, value: &str) -> QueueResult<()> {
        let node = Node::try_new(value).inspect_err(|e| log::warn!("insert_tail: {e}"))?;

        match self.tail {
            // SAFETY: tail is the live last node of this chain and `&mut self`
            // rules out any other access to it.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node),
        }
        self.tail = Some(node);
        self.size += 1;

        log::trace!("insert_tail: {} bytes, size {}", value.len(), self.size);
        Ok(())
    }

    /// Remove the head element and hand back its value.
    pub fn remove_head(&mut self) -> QueueResult<String> {
        let head = self.head.ok_or(QueueError::EmptyQueue)?;

        // SAFETY: head is owned by this chain; it is unlinked right below and
        // tail is cleared if it pointed at the same node.
        let node = unsafe { Node::reclaim(head) };
        self.head = node.next;
        self.size -= 1;
        if self.head.is_none() {
            self.tail = None;
        }

        log::trace!("remove_head: {} bytes, size {}", node.value.len(), self.size);
        Ok(node.value)
    }

    /// Remove the head element, copying its value into `buf` when given.
    ///
    /// The copy follows [`copy_truncated`]: at most `buf.len() - 1` bytes plus
    /// a `0` terminator, truncating silently. Returns the number of value
    /// bytes copied (0 when no buffer is supplied).
    pub fn remove_head_into(&mut self, buf: Option<&mut [u8]>) -> QueueResult<usize> {
        let value = self.remove_head()?;
        Ok(buf.map_or(0, |buf| copy_truncated(&value, buf)))
    }

    /// First value, if any
    pub fn head(&self) -> Option<&str> {
        // SAFETY: head is a live node borrowed through `&self`.
        self.head.map(|head| unsafe { &(*head.as_ptr()).value }.as_str())
    }

    /// Last value, if any
    pub fn tail(&self) -> Option<&str> {
        // SAFETY: tail is a live node borrowed through `&self`.
        self.tail.map(|tail| unsafe { &(*tail.as_ptr()).value }.as_str())
    }

    /// Iterate values from head to tail
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.head,
            remaining: self.size,
            _queue: PhantomData,
        }
    }

    /// Reverse element order in place.
    ///
    /// Walks the chain once with previous/current/next slots, pointing each
    /// node back at its predecessor. No node is allocated or released.
    pub fn reverse(&mut self) {
        let Some(first) = self.head else {
            return;
        };

        let mut prev: Link = None;
        let mut curr = self.head;
        while let Some(node) = curr {
            // SAFETY: node is a live node of this chain, reached only here.
            unsafe {
                curr = (*node.as_ptr()).next;
                (*node.as_ptr()).next = prev;
            }
            prev = Some(node);
        }

        self.head = prev;
        self.tail = Some(first);
        log::debug!("reversed queue of {} elements", self.size);
    }

    /// Sort values in ascending byte-wise order in place.
    ///
    /// Equal values keep the left-before-right order of each merge; the
    /// overall order of duplicates is not guaranteed stable. The tail is
    /// recovered by one walk over the sorted chain.
    pub fn sort(&mut self) {
        if self.size < 2 {
            return;
        }

        // SAFETY: head starts a well-formed chain owned by this queue and
        // `&mut self` keeps every other access out while it is relinked.
        unsafe {
            self.head = sort::merge_sort(self.head);
            self.tail = sort::last_node(self.head);
        }
        log::debug!("sorted queue of {} elements", self.size);
    }

    /// Release every element, leaving the queue empty and usable.
    pub fn clear(&mut self) {
        let mut link = self.head.take();
        while let Some(node) = link {
            // SAFETY: each node is reclaimed once, after its successor is read.
            let node = unsafe { Node::reclaim(node) };
            link = node.next;
        }
        self.tail = None;
        self.size = 0;
    }

    /// Panic unless head, tail and size agree with the chain.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut count = 0;
        let mut last: Link = None;
        let mut link = self.head;
        while let Some(node) = link {
            count += 1;
            last = Some(node);
            // SAFETY: node is reachable from head, so it is live.
            link = unsafe { (*node.as_ptr()).next };
        }

        assert_eq!(count, self.size, "size must match reachable nodes");
        assert_eq!(self.head.is_none(), self.size == 0);
        assert_eq!(self.tail.is_none(), self.size == 0);
        assert_eq!(self.tail, last, "tail must be the last reachable node");
    }
}

impl Default for Queue {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Queue {
    fn drop(&mut self) {
        // Unlink one node at a time; nodes never free their successors.
        self.clear();
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over queue values, head to tail
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    next: Link,
    remaining: usize,
    _queue: PhantomData<&'a Queue>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        // SAFETY: the queue is borrowed for 'a, so its nodes stay alive and
        // unmodified for as long as the returned reference.
        let node: &'a Node = unsafe { &*node.as_ptr() };
        self.next = node.next;
        self.remaining -= 1;
        Some(node.value.as_str())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}
