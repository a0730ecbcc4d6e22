// src/buffer/cursor.rs
//! Cursor movement and sequential reads

use super::core::Buffer;
use crate::error::{BufferError, Result};
use tracing::trace;

/// Result of a [`Buffer::read`]: the number of bytes copied, and whether the
/// cursor reached the end of the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ReadOutcome {
    /// Content remains after the cursor
    More(usize),
    /// The cursor sits at the end of the content
    End(usize),
}

impl ReadOutcome {
    /// Number of bytes copied.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Self::More(n) | Self::End(n) => n,
        }
    }

    /// Returns `true` if the end of the content was reached.
    #[inline]
    pub fn is_end(self) -> bool {
        matches!(self, Self::End(_))
    }
}

impl Buffer {
    /// Moves the cursor to `target` and returns the displacement.
    ///
    /// Targets outside `[0, len]` leave the cursor where it is and return 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::Buffer;
    ///
    /// let mut buf = Buffer::new();
    /// buf.write(b"0123456789");
    ///
    /// assert_eq!(buf.move_to(4), -6);
    /// assert_eq!(buf.move_to(-1), 0);
    /// assert_eq!(buf.move_to(11), 0);
    /// assert_eq!(buf.position(), 4);
    /// ```
    pub fn move_to(&mut self, target: isize) -> isize {
        match self.checked_target(target) {
            Some(new_pos) => {
                let delta = target - self.pos as isize;
                self.pos = new_pos;
                delta
            }
            None => 0,
        }
    }

    /// Moves the cursor by `delta` and returns the displacement applied.
    ///
    /// Same bounds as [`move_to`](Self::move_to): a move that would leave the
    /// content does nothing and returns 0.
    pub fn move_by(&mut self, delta: isize) -> isize {
        match (self.pos as isize).checked_add(delta) {
            Some(target) => self.move_to(target),
            None => 0,
        }
    }

    /// Moves the cursor to `target`, reporting out-of-range targets.
    ///
    /// # Errors
    ///
    /// Returns [`BufferError::PositionOutOfBounds`] if `target` is outside
    /// `[0, len]`. The cursor does not move in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::{Buffer, BufferError};
    ///
    /// let mut buf = Buffer::new();
    /// buf.write(b"abc");
    /// assert_eq!(buf.try_move_to(1)?, 1);
    /// assert_eq!(buf.try_move_to(4), Err(BufferError::PositionOutOfBounds));
    /// # Ok::<(), BufferError>(())
    /// ```
    pub fn try_move_to(&mut self, target: isize) -> Result<usize> {
        let new_pos = self
            .checked_target(target)
            .ok_or(BufferError::PositionOutOfBounds)?;
        self.pos = new_pos;
        Ok(new_pos)
    }

    /// Copies bytes from the cursor into `dst` and advances the cursor.
    ///
    /// Copies `min(dst.len(), remaining())` bytes. The outcome is
    /// [`ReadOutcome::End`] whenever the cursor ends up at the end of the
    /// content, including when nothing was left to copy.
    ///
    /// # Examples
    ///
    /// ```
    /// use gapbuf::{Buffer, ReadOutcome};
    ///
    /// let mut buf = Buffer::new();
    /// buf.write(b"hello world");
    /// buf.move_to(0);
    ///
    /// let mut word = [0u8; 6];
    /// assert_eq!(buf.read(&mut word), ReadOutcome::More(6));
    /// assert_eq!(&word, b"hello ");
    ///
    /// let mut rest = [0u8; 16];
    /// assert_eq!(buf.read(&mut rest), ReadOutcome::End(5));
    /// assert_eq!(buf.read(&mut rest), ReadOutcome::End(0));
    /// ```
    pub fn read(&mut self, dst: &mut [u8]) -> ReadOutcome {
        let available = &self.data[self.pos..self.len];
        let n = dst.len().min(available.len());
        dst[..n].copy_from_slice(&available[..n]);
        self.pos += n;

        if self.at_end() {
            ReadOutcome::End(n)
        } else {
            ReadOutcome::More(n)
        }
    }

    fn checked_target(&self, target: isize) -> Option<usize> {
        let checked = usize::try_from(target).ok().filter(|&t| t <= self.len);
        if checked.is_none() {
            trace!(requested = target, len = self.len, "cursor move out of bounds");
        }
        checked
    }
}
