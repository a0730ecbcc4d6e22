// src/lib.rs
//! # Cursor-Addressed Byte Buffer
//!
//! A growable byte buffer with a movable cursor, meant as the storage
//! primitive of a text editor or any other line-oriented tool.
//!
//! Features:
//! - Independent cursor, length and capacity bookkeeping
//! - Clamped absolute and relative cursor movement reporting the displacement
//! - Sequential reads that report the end of content alongside the byte count
//! - `std::io::{Read, Write, BufRead, Seek}` adapters for layering streams
//! - Secure memory zeroing using `zeroize` on drop and on reallocation
//!
//! ```
//! use gapbuf::prelude::*;
//!
//! let mut buf = Buffer::new();
//! buf.write(b"Lorem ipsum dolor sit amet");
//! buf.move_to(6);
//!
//! let mut word = [0u8; 5];
//! assert_eq!(buf.read(&mut word), ReadOutcome::More(5));
//! assert_eq!(&word, b"ipsum");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod buffer;
pub mod config;
pub mod error;

// Re-export main types
pub use buffer::{BUFFER_START, Buffer, ReadOutcome};
pub use config::BufferConfig;
pub use error::{BufferError, Result, ResultExt};

/// Commonly used imports.
pub mod prelude {
    pub use crate::buffer::{BUFFER_START, Buffer, ReadOutcome};
    pub use crate::config::BufferConfig;
    pub use crate::error::{BufferError, Result, ResultExt};
}
