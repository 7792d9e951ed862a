//! Error types for MyArch operations.
//!
//! This module provides a single error type covering every failure mode of
//! archive creation and extraction: host I/O failures, structural problems
//! in the archive stream, and decode-time back-reference violations. All
//! errors are terminal for the current operation; nothing is retried.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for MyArch operations.
#[derive(Debug, Error)]
pub enum MyArchError {
    /// I/O error from the underlying reader/writer or the host filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// I/O error with the path on which it occurred.
    #[error("I/O error on '{}': {source}", path.display())]
    IoAt {
        /// Path being read or written when the error occurred.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// Input path is neither a regular file nor a directory.
    #[error("Invalid input path: '{}' is neither a file nor a directory", path.display())]
    InvalidInputPath {
        /// The offending path.
        path: PathBuf,
    },

    /// Structurally invalid archive data.
    #[error("Corrupt archive: {message}")]
    CorruptArchive {
        /// Description of the problem.
        message: String,
    },

    /// The stream ended before a complete field could be read.
    #[error("Truncated input: expected {expected} more bytes")]
    TruncatedInput {
        /// Number of bytes that were expected but not available.
        expected: usize,
    },

    /// A back-reference points before the start of the decoded output.
    #[error("Invalid back-reference: offset {offset} exceeds {available} decoded bytes")]
    InvalidBackReference {
        /// The offending offset.
        offset: usize,
        /// Number of bytes decoded so far.
        available: usize,
    },
}

/// Result type alias for MyArch operations.
pub type Result<T> = std::result::Result<T, MyArchError>;

impl MyArchError {
    /// Create an I/O error carrying the path it happened on.
    pub fn io_at(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::IoAt {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid input path error.
    pub fn invalid_input_path(path: impl Into<PathBuf>) -> Self {
        Self::InvalidInputPath { path: path.into() }
    }

    /// Create a corrupt archive error.
    pub fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptArchive {
            message: message.into(),
        }
    }

    /// Create a truncated input error.
    pub fn truncated(expected: usize) -> Self {
        Self::TruncatedInput { expected }
    }

    /// Create an invalid back-reference error.
    pub fn invalid_back_reference(offset: usize, available: usize) -> Self {
        Self::InvalidBackReference { offset, available }
    }
}
