//! Truncating copy-out for removed values

/// Copy at most `buf.len() - 1` bytes of `value` into `buf`, then a `0`
/// terminator.
///
/// Returns the number of value bytes written, terminator excluded. Longer
/// values are truncated silently. A zero-length buffer is left untouched and
/// 0 is returned. Nothing is ever written past `buf.len()`.
pub fn copy_truncated(value: &str, buf: &mut [u8]) -> usize {
    let Some(room) = buf.len().checked_sub(1) else {
        return 0;
    };
    let copied = room.min(value.len());
    buf[..copied].copy_from_slice(&value.as_bytes()[..copied]);
    buf[copied] = 0;
    copied
}
