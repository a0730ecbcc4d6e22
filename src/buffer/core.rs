// src/buffer/core.rs
//! Core buffer structure, bookkeeping queries and appending writes
//!
//! This module provides the [`Buffer`] type. It tracks three quantities: the
//! cursor, the logical content length and a reservable capacity. Its storage
//! is securely zeroed on drop and whenever it is reallocated.

use crate::config::BufferConfig;
use std::fmt;
use tracing::{debug, trace};
use zeroize::Zeroize;

/// Offset of the first byte of every buffer.
pub const BUFFER_START: usize = 0;

/// A cursor-addressed, growable byte buffer.
///
/// Content is only ever appended, and the cursor is only used to navigate
/// and to read back. Capacity is tracked separately from the physical
/// allocation: [`reserve`](Self::reserve) announces a size without
/// validating it against the content length.
///
/// # Memory Safety
///
/// All storage is zeroed with the [`zeroize`] crate when the buffer is
/// dropped, and old allocations are zeroed before being released on growth.
///
/// # Examples
///
/// ```
/// use gapbuf::Buffer;
///
/// let mut buf = Buffer::new();
/// assert_eq!(buf.write(b"hello"), 5);
/// assert_eq!(buf.position(), 5);
/// assert_eq!(buf.len(), 5);
/// assert_eq!(buf.capacity(), 5);
/// ```
#[derive(Clone, Zeroize)]
#[zeroize(drop)]
pub struct Buffer {
    /// Content storage (securely erased on drop)
    pub(crate) data: Vec<u8>,
    /// Cursor, always within `[0, len]`
    pub(crate) pos: usize,
    /// Length of the logical content
    pub(crate) len: usize,
    /// Logical capacity announced to callers
    pub(crate) cap: usize,
    #[zeroize(skip)]
    pub(crate) preallocate: bool,
}

impl Buffer {
    /// Creates an empty buffer with zero position, length and capacity.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::Buffer;
    ///
    /// let buf = Buffer::new();
    /// assert_eq!(buf.position(), 0);
    /// assert_eq!(buf.len(), 0);
    /// assert_eq!(buf.capacity(), 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_config(BufferConfig::default())
    }

    /// Creates an empty buffer announcing `capacity` bytes.
    ///
    /// No storage is allocated up front.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::Buffer;
    ///
    /// let buf = Buffer::with_capacity(1024);
    /// assert_eq!(buf.capacity(), 1024);
    /// assert!(buf.is_empty());
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(BufferConfig {
            initial_capacity: capacity,
            ..BufferConfig::default()
        })
    }

    /// Creates an empty buffer from explicit options.
    pub fn with_config(config: BufferConfig) -> Self {
        let mut buf = Self {
            data: Vec::new(),
            pos: BUFFER_START,
            len: 0,
            cap: 0,
            preallocate: config.preallocate,
        };
        if config.initial_capacity > 0 {
            buf.reserve(config.initial_capacity);
        }
        buf
    }

    /// Creates a buffer holding `data`, with the cursor at the start.
    ///
    /// Length and capacity both equal the vector's length.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::Buffer;
    ///
    /// let buf = Buffer::from_vec(b"abc".to_vec());
    /// assert_eq!(buf.len(), 3);
    /// assert_eq!(buf.capacity(), 3);
    /// assert_eq!(buf.position(), 0);
    /// ```
    pub fn from_vec(data: Vec<u8>) -> Self {
        let len = data.len();
        Self {
            data,
            pos: BUFFER_START,
            len,
            cap: len,
            preallocate: false,
        }
    }

    /// Returns the cursor position.
    #[inline(always)]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Returns the length of the content in bytes.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the buffer holds no content.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the logical capacity.
    ///
    /// This is the value last set by [`reserve`](Self::reserve), grown by
    /// every write. It does not necessarily match the physical allocation.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Returns the number of bytes between the cursor and the end.
    #[inline(always)]
    pub fn remaining(&self) -> usize {
        self.len - self.pos
    }

    /// Returns `true` if the cursor sits at the end of the content.
    #[inline(always)]
    pub fn at_end(&self) -> bool {
        self.pos == self.len
    }

    /// Sets the logical capacity to `new_capacity`.
    ///
    /// Length and position are left alone, and `new_capacity` may be smaller
    /// than the current length. When the buffer was built with
    /// [`BufferConfig::preallocate`], physical storage is grown to at least
    /// `new_capacity` bytes; it is never shrunk.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.reserve(1 << 10);
    /// assert_eq!(buf.capacity(), 1024);
    /// assert_eq!(buf.len(), 0);
    /// ```
    pub fn reserve(&mut self, new_capacity: usize) {
        trace!(from = self.cap, to = new_capacity, "reserve");
        self.cap = new_capacity;
        if self.preallocate && new_capacity > self.data.capacity() {
            self.reallocate(new_capacity);
        }
    }

    /// Appends `bytes` to the end of the content.
    ///
    /// The append happens at the tail regardless of the cursor. Length,
    /// position and capacity all grow by `bytes.len()`, which is returned.
    ///
    /// # Panics
    ///
    /// Aborts like any `Vec` if storage cannot be allocated.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.write(b"Lorem ");
    /// buf.move_to(0);
    /// buf.write(b"ipsum");
    ///
    /// assert_eq!(buf.as_slice(), b"Lorem ipsum");
    /// assert_eq!(buf.position(), 5);
    /// ```
    pub fn write(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len();
        if n == 0 {
            return 0;
        }

        let needed = self.len + n;
        if needed > self.data.capacity() {
            self.reallocate(needed.max(self.data.capacity().saturating_mul(2)));
        }
        self.data.extend_from_slice(bytes);

        self.len = needed;
        self.pos += n;
        self.cap = self.cap.saturating_add(n);
        n
    }

    /// Resets position and length to zero without zeroing the content.
    ///
    /// Capacity is kept. Use [`burn`](Self::burn) to erase the bytes.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
        self.pos = BUFFER_START;
        self.len = 0;
    }

    /// Securely zeros the storage and resets position and length.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.write(b"hunter2");
    /// buf.burn();
    /// assert!(buf.is_empty());
    /// assert_eq!(buf.capacity(), 7);
    /// ```
    pub fn burn(&mut self) {
        // Vec::zeroize wipes the spare capacity too, then clears.
        self.data.zeroize();
        self.pos = BUFFER_START;
        self.len = 0;
    }

    /// Returns all content.
    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[..self.len]
    }

    /// Returns the content from the cursor to the end.
    #[inline]
    pub fn unread(&self) -> &[u8] {
        &self.data[self.pos..self.len]
    }

    /// Moves the content into a fresh allocation of `physical` bytes and
    /// zeros the old one before it is freed.
    fn reallocate(&mut self, physical: usize) {
        let mut grown = Vec::with_capacity(physical);
        grown.extend_from_slice(&self.data);
        let mut old = std::mem::replace(&mut self.data, grown);
        old.zeroize();
        debug!(
            len = self.len,
            physical = self.data.capacity(),
            "grew buffer storage"
        );
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

// Content stays out of logs.
impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("position", &self.pos)
            .field("len", &self.len)
            .field("capacity", &self.cap)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &[u8] = b"Lorem ipsum dolor sit amet";

    #[test]
    fn test_new() {
        let buf = Buffer::new();
        assert_eq!(buf.position(), BUFFER_START);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.capacity(), 0);
        assert!(buf.at_end());
    }

    #[test]
    fn test_reserve_keeps_len() {
        let mut buf = Buffer::new();
        buf.reserve(1 << 10);
        assert_eq!(buf.capacity(), 1 << 10);
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.position(), 0);
        // Bookkeeping only by default.
        assert_eq!(buf.data.capacity(), 0);
    }

    #[test]
    fn test_reserve_below_len_is_accepted() {
        let mut buf = Buffer::new();
        buf.write(TEXT);
        buf.reserve(3);
        assert_eq!(buf.capacity(), 3);
        assert_eq!(buf.len(), TEXT.len());
        assert_eq!(buf.as_slice(), TEXT);
    }

    #[test]
    fn test_preallocate_grows_storage() {
        let mut buf = Buffer::with_config(BufferConfig {
            initial_capacity: 64,
            preallocate: true,
        });
        assert!(buf.data.capacity() >= 64);

        buf.reserve(16);
        assert_eq!(buf.capacity(), 16);
        assert!(buf.data.capacity() >= 64);
    }

    #[test]
    fn test_write_accounting() {
        let mut buf = Buffer::with_capacity(10);
        assert_eq!(buf.write(TEXT), TEXT.len());
        assert_eq!(buf.len(), TEXT.len());
        assert_eq!(buf.position(), TEXT.len());
        assert_eq!(buf.capacity(), 10 + TEXT.len());
    }

    #[test]
    fn test_write_empty_is_noop() {
        let mut buf = Buffer::new();
        buf.write(TEXT);
        assert_eq!(buf.write(&[]), 0);
        assert_eq!(buf.len(), TEXT.len());
        assert_eq!(buf.capacity(), TEXT.len());
    }

    #[test]
    fn test_write_appends_at_tail_from_mid_cursor() {
        let mut buf = Buffer::new();
        buf.write(b"abcdef");
        buf.pos = 2;

        buf.write(b"XY");
        assert_eq!(buf.as_slice(), b"abcdefXY");
        assert_eq!(buf.position(), 4);
        assert_eq!(buf.unread(), b"cdefXY");
    }

    #[test]
    fn test_growth_preserves_content() {
        let mut buf = Buffer::new();
        for _ in 0..100 {
            buf.write(TEXT);
        }
        assert_eq!(buf.len(), 100 * TEXT.len());
        assert!(buf.as_slice().chunks(TEXT.len()).all(|c| c == TEXT));
    }

    #[test]
    fn test_from_vec() {
        let buf = Buffer::from_vec(TEXT.to_vec());
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.len(), TEXT.len());
        assert_eq!(buf.capacity(), TEXT.len());
        assert_eq!(buf.remaining(), TEXT.len());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut buf = Buffer::new();
        buf.write(TEXT);
        buf.clear();
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.capacity(), TEXT.len());
    }

    #[test]
    fn test_burn() {
        let mut buf = Buffer::new();
        buf.write(TEXT);
        buf.burn();
        assert!(buf.is_empty());
        assert_eq!(buf.position(), 0);
        assert_eq!(buf.as_slice(), b"");
        assert_eq!(buf.capacity(), TEXT.len());
    }

    #[test]
    fn test_debug_hides_content() {
        let mut buf = Buffer::new();
        buf.write(b"secret");
        let shown = format!("{:?}", buf);
        assert!(shown.contains("len: 6"));
        assert!(!shown.contains("secret"));
    }
}
