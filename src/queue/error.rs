//! Queue Error Types

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueueError {
    #[error("Queue handle is absent")]
    InvalidQueue,

    #[error("Out of memory (failed to allocate {bytes} bytes)")]
    OutOfMemory { bytes: usize },

    #[error("Queue is empty")]
    EmptyQueue,
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;
