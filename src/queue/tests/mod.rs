//! Test modules for the string queue
//!
//! Tests are organized by functional area.


use crate::queue::Queue;

/// Build a queue by inserting each value at the tail.
pub(super) fn queue_of(values: &[&str]) -> Queue {
    let mut queue = Queue::new();
    for value in values {
        queue.insert_tail(value).unwrap();
    }
    queue.assert_consistent();
    queue
}

/// Snapshot the queue contents head to tail.
pub(super) fn contents(queue: &Queue) -> Vec<String> {
    queue.iter().map(str::to_owned).collect()
}
