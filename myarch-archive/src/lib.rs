//! # MyArch Archive
//!
//! The MYARCH container format: packs a file or directory tree into one
//! binary stream of LZ77-tokenized entries and restores it byte-for-byte.
//!
//! ## Wire format
//!
//! All integers are little-endian:
//!
//! ```text
//! magic:        6 bytes, ASCII "MYARCH"
//! entries...:   repeated until EOF:
//!   entry_type: u8         (0x01 = file, 0x02 = directory)
//!   path_len:   u16        (> 0)
//!   path:       path_len bytes, UTF-8 relative path, '/'-separated
//!   [if file]
//!     token_count: u32     (0 = empty file)
//!     tokens...:   token_count x { offset: u16, length: u16, literal: u8 }
//! ```
//!
//! Bit 15 of each token's length field marks the presence of the trailing
//! literal; see `myarch_lz77::token`. Entries appear in pre-order tree
//! traversal order, so a directory's record precedes its descendants'.
//!
//! ## Entry points
//!
//! [`compress`] and [`decompress`] are the two operations the
//! presentation layer invokes. Both report progress through a callback
//! invoked synchronously with a monotonic 0..=100 percentage, and both
//! are single sequential passes with exclusive ownership of their
//! streams: run to completion or fail, no partial recovery, entries
//! already on disk left in place.
//!
//! ```no_run
//! use std::path::Path;
//!
//! myarch_archive::compress(
//!     Path::new("photos"),
//!     Path::new("photos.myarch"),
//!     |pct| eprintln!("{pct}%"),
//! )?;
//!
//! myarch_archive::decompress(
//!     Path::new("photos.myarch"),
//!     Path::new("restored"),
//!     |_| {},
//! )?;
//! # Ok::<(), myarch_core::MyArchError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod reader;
pub mod writer;

// Re-exports
pub use reader::{ArchiveEntry, ArchiveReader};
pub use writer::{ArchiveWriter, write_tree};

use myarch_core::error::{MyArchError, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// The six-byte archive magic.
pub const MAGIC: &[u8; 6] = b"MYARCH";

/// Compress `input` (a file or directory) into a new archive at
/// `archive_path`.
///
/// `progress` receives percentages of input bytes processed, ending at
/// 100. The output file is created up front and is left behind, possibly
/// incomplete, when the operation fails.
pub fn compress(
    input: &Path,
    archive_path: &Path,
    mut progress: impl FnMut(u8),
) -> Result<()> {
    if !input.is_file() && !input.is_dir() {
        return Err(MyArchError::invalid_input_path(input));
    }

    let out = File::create(archive_path).map_err(|e| MyArchError::io_at(archive_path, e))?;
    let sink = BufWriter::new(out);

    write_tree(input, sink, &mut progress)?;
    Ok(())
}

/// Extract every entry of the archive at `archive_path` under
/// `output_dir`.
///
/// `progress` receives percentages of compressed bytes consumed, ending
/// at 100. Extraction is a single pass in stored order; on failure the
/// entries already materialized stay on disk.
pub fn decompress(
    archive_path: &Path,
    output_dir: &Path,
    mut progress: impl FnMut(u8),
) -> Result<()> {
    let total = std::fs::metadata(archive_path)
        .map_err(|e| MyArchError::io_at(archive_path, e))?
        .len();

    let file = File::open(archive_path).map_err(|e| MyArchError::io_at(archive_path, e))?;
    let mut reader = ArchiveReader::new(BufReader::new(file))?;

    while let Some(entry) = reader.read_entry()? {
        entry.materialize(output_dir)?;

        let pct = if total == 0 {
            100
        } else {
            ((reader.bytes_read() as f64 / total as f64) * 100.0)
                .round()
                .min(100.0) as u8
        };
        progress(pct);
    }

    progress(100);
    Ok(())
}
