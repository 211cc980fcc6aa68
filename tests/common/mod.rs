//! Common test utilities and helpers
//!
//! Shared helpers for the integration test binaries.

#![allow(dead_code)]

use strqueue::queue::Queue;

/// Snapshot the queue contents head to tail.
pub fn contents(queue: &Queue) -> Vec<String> {
    queue.iter().map(str::to_owned).collect()
}

/// Remove every element through a buffer of the given capacity and return
/// what was copied out, terminator excluded.
pub fn drain_through_buffer(queue: &mut Queue, capacity: usize) -> Vec<Vec<u8>> {
    let mut out = Vec::new();
    let mut buf = vec![0u8; capacity];
    while let Ok(copied) = queue.remove_head_into(Some(&mut buf)) {
        out.push(buf[..copied].to_vec());
    }
    out
}
