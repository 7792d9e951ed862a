//! # MyArch Core
//!
//! Core components for the MyArch archive library.
//!
//! This crate provides the building blocks shared by the codec and
//! container layers:
//!
//! - [`bytestream`]: little-endian fixed-width integer I/O
//! - [`entry`]: archive entry metadata
//! - [`error`]: error types
//!
//! ## Architecture
//!
//! MyArch is a layered stack:
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │ CLI                                            │
//! │     myarch compress / extract / list           │
//! ├────────────────────────────────────────────────┤
//! │ Container (myarch-archive)                     │
//! │     MYARCH header/entry records, fs traversal  │
//! ├────────────────────────────────────────────────┤
//! │ Codec (myarch-lz77)                            │
//! │     LZ77 tokenize/detokenize                   │
//! ├────────────────────────────────────────────────┤
//! │ ByteStream (this crate)                        │
//! │     ByteReader/ByteWriter, entries, errors     │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use myarch_core::bytestream::ByteReader;
//! use std::io::Cursor;
//!
//! let data = vec![0x34, 0x12];
//! let mut reader = ByteReader::new(Cursor::new(data));
//! assert_eq!(reader.read_u16().unwrap(), 0x1234);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod bytestream;
pub mod entry;
pub mod error;

// Re-exports for convenience
pub use bytestream::{ByteReader, ByteWriter};
pub use entry::{EntryInfo, EntryKind};
pub use error::{MyArchError, Result};
