// src/buffer/io.rs
//! `std::io` adapters so streams, files and sockets can be layered on a buffer

use super::core::Buffer;
use crate::error::BufferError;
use std::io::{self, BufRead, Read, Seek, SeekFrom, Write};

impl Write for Buffer {
    /// Appends at the tail. Never fails.
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Buffer::write(self, buf))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for Buffer {
    /// Reads from the cursor. The end of content shows up as `Ok(0)`.
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        Ok(Buffer::read(self, buf).count())
    }
}

impl BufRead for Buffer {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        Ok(self.unread())
    }

    fn consume(&mut self, amt: usize) {
        self.pos = self.pos.saturating_add(amt).min(self.len);
    }
}

impl Seek for Buffer {
    /// Seeks within `[0, len]`.
    ///
    /// Unlike `std::io::Cursor`, seeking past the end is rejected with
    /// [`io::ErrorKind::InvalidInput`] and the cursor stays put.
    fn seek(&mut self, style: SeekFrom) -> io::Result<u64> {
        let target = match style {
            SeekFrom::Start(offset) => isize::try_from(offset).ok(),
            SeekFrom::End(delta) => isize::try_from(delta)
                .ok()
                .and_then(|d| (self.len as isize).checked_add(d)),
            SeekFrom::Current(delta) => isize::try_from(delta)
                .ok()
                .and_then(|d| (self.pos as isize).checked_add(d)),
        }
        .ok_or(BufferError::PositionOutOfBounds)?;

        let pos = self.try_move_to(target)?;
        Ok(pos as u64)
    }

    fn stream_position(&mut self) -> io::Result<u64> {
        Ok(self.pos as u64)
    }
}
