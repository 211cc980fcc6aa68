//! Fallible boxing
//!
//! `Box::new` aborts the process when the allocator is exhausted, and
//! `Box::try_new` is not available on stable. Queue storage goes through
//! [`try_box`] instead so exhaustion surfaces as an error the caller can
//! handle.

use std::alloc::{self, Layout};
use std::ptr::NonNull;

/// Move `value` into a new heap allocation, or hand it back on exhaustion.
pub(crate) fn try_box<T>(value: T) -> Result<Box<T>, T> {
    let layout = Layout::new::<T>();
    if layout.size() == 0 {
        return Ok(Box::new(value));
    }

    // SAFETY: layout has a non-zero size.
    let raw = unsafe { alloc::alloc(layout) }.cast::<T>();
    let Some(ptr) = NonNull::new(raw) else {
        return Err(value);
    };

    // SAFETY: ptr is uninitialised memory from the global allocator with
    // exactly `Layout::new::<T>()`. That is the allocation `Box<T>` would
    // have made itself, so `Box::from_raw` may adopt it and dropping the Box
    // later frees it with the same allocator and layout.
    unsafe {
        ptr.as_ptr().write(value);
        Ok(Box::from_raw(ptr.as_ptr()))
    }
}

/// Byte size of a `T` allocation, for error reporting.
pub(crate) fn size_of_box<T>() -> usize {
    Layout::new::<T>().size()
}
