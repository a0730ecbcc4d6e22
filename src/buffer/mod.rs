// src/buffer/mod.rs
//! Cursor-addressed byte buffer

pub mod core;
pub(crate) mod cursor;
pub(crate) mod io;

pub use self::core::{BUFFER_START, Buffer};
pub use cursor::ReadOutcome;
