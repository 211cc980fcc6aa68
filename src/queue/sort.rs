//! Merge sort over owned links
//!
//! Sorting relinks existing nodes only. The recursion takes a sub-chain,
//! cuts it in two at the midpoint, sorts each half and merges them back by
//! moving whichever head is chosen onto the merged chain. Recursion depth is
//! O(log n); the merge itself is iterative and uses O(1) extra space.
//!
//! The merge does not track the last node, so callers recover the tail with
//! [`last_node`] afterwards. That walk is O(n) and is paid once per sort.
//!
//! All functions here operate on raw links and share one contract: every
//! link passed in must head a well-formed, terminal-ended chain of nodes
//! from [`Node::try_new`] that nothing else reads or writes for the
//! duration of the call.

use crate::queue::node::{Link, Node};
use std::ptr::NonNull;

/// Sort a chain in ascending byte-wise order of its values.
///
/// # Safety
///
/// See the module contract.
pub(crate) unsafe fn merge_sort(chain: Link) -> Link {
    let Some(head) = chain else {
        return None;
    };
    if (*head.as_ptr()).next.is_none() {
        return chain;
    }

    let right = split(head);
    let left = merge_sort(Some(head));
    let right = merge_sort(right);
    merge(left, right)
}

/// Cut the chain after its midpoint and return the detached second half.
///
/// Slow starts at the head and fast one node ahead; fast moves two nodes per
/// step and slow one.
unsafe fn split(head: NonNull<Node>) -> Link {
    let mut slow = head;
    let mut fast = (*head.as_ptr()).next;

    while let Some(ahead) = fast {
        let Some(two_ahead) = (*ahead.as_ptr()).next else {
            break;
        };
        match (*slow.as_ptr()).next {
            Some(next) => slow = next,
            None => break,
        }
        fast = (*two_ahead.as_ptr()).next;
    }

    (*slow.as_ptr()).next.take()
}

/// Merge two sorted chains into one, relinking in place.
///
/// On equal values the left node goes first.
unsafe fn merge(mut left: Link, mut right: Link) -> Link {
    let mut head: Link = None;
    let mut last: Link = None;

    while let (Some(l), Some(r)) = (left, right) {
        let chosen = if (*l.as_ptr()).value <= (*r.as_ptr()).value {
            left = (*l.as_ptr()).next;
            l
        } else {
            right = (*r.as_ptr()).next;
            r
        };
        match last {
            Some(prev) => (*prev.as_ptr()).next = Some(chosen),
            None => head = Some(chosen),
        }
        last = Some(chosen);
    }

    let rest = left.or(right);
    match last {
        Some(prev) => (*prev.as_ptr()).next = rest,
        None => head = rest,
    }
    head
}

/// Walk to the last node of a chain.
///
/// # Safety
///
/// See the module contract.
pub(crate) unsafe fn last_node(chain: Link) -> Link {
    let mut node = chain?;
    while let Some(next) = (*node.as_ptr()).next {
        node = next;
    }
    Some(node)
}
