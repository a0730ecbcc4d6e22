// src/config.rs
//! Construction options for [`Buffer`](crate::Buffer).

/// Options applied when a buffer is created.
///
/// # Examples
///
/// ```
/// use gapbuf::{Buffer, BufferConfig};
///
/// let buf = Buffer::with_config(BufferConfig {
///     initial_capacity: 4096,
///     preallocate: true,
/// });
/// assert_eq!(buf.capacity(), 4096);
/// assert_eq!(buf.len(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferConfig {
    /// Logical capacity announced right after construction
    pub initial_capacity: usize,
    /// Whether reservations also allocate physical storage.
    ///
    /// When `false`, capacity is pure bookkeeping and storage only grows as
    /// content is written.
    pub preallocate: bool,
}

impl Default for BufferConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            preallocate: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty_bookkeeping_only() {
        let config = BufferConfig::default();
        assert_eq!(config.initial_capacity, 0);
        assert!(!config.preallocate);
    }
}
