//! Archive entry metadata.
//!
//! This module defines the entry kind tag used on the wire and the
//! `EntryInfo` struct that represents one file or directory record when
//! listing an archive. Entries are transient: they are produced during a
//! single write or read pass and never retained across operations.

use crate::error::{MyArchError, Result};
use std::path::Path;

/// Entry kind (file or directory).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryKind {
    /// Regular file.
    #[default]
    File,
    /// Directory.
    Directory,
}

impl EntryKind {
    /// Wire byte for a file entry.
    pub const FILE_TAG: u8 = 0x01;
    /// Wire byte for a directory entry.
    pub const DIRECTORY_TAG: u8 = 0x02;

    /// Encode as the single-byte wire tag.
    pub fn to_tag(self) -> u8 {
        match self {
            Self::File => Self::FILE_TAG,
            Self::Directory => Self::DIRECTORY_TAG,
        }
    }

    /// Decode from the single-byte wire tag.
    pub fn from_tag(tag: u8) -> Result<Self> {
        match tag {
            Self::FILE_TAG => Ok(Self::File),
            Self::DIRECTORY_TAG => Ok(Self::Directory),
            other => Err(MyArchError::corrupt(format!(
                "unknown entry type tag {other:#04x}"
            ))),
        }
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }
}

/// Metadata for one entry in an archive, as reported by a listing pass.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    /// Relative path of the entry within the archive, `/`-separated.
    pub name: String,
    /// The kind of entry.
    pub kind: EntryKind,
    /// Number of tokens stored for the entry (zero for directories and
    /// empty files).
    pub token_count: u32,
    /// Decoded size in bytes (zero for directories).
    pub size: u64,
}

impl EntryInfo {
    /// Create metadata for a file entry.
    pub fn file(name: impl Into<String>, token_count: u32, size: u64) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
            token_count,
            size,
        }
    }

    /// Create metadata for a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
            token_count: 0,
            size: 0,
        }
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.kind.is_file()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Validate the entry path for extraction.
    ///
    /// Returns an error if the path is empty, absolute, or contains a
    /// parent-directory component, so that a crafted archive cannot write
    /// outside the extraction root.
    pub fn validate_path(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(MyArchError::corrupt("empty entry path"));
        }

        let path = Path::new(&self.name);
        if path.is_absolute() {
            return Err(MyArchError::corrupt(format!(
                "absolute entry path '{}'",
                self.name
            )));
        }

        for component in path.components() {
            match component {
                std::path::Component::ParentDir => {
                    return Err(MyArchError::corrupt(format!(
                        "entry path '{}' escapes the output directory",
                        self.name
                    )));
                }
                std::path::Component::Normal(s) => {
                    if s.to_string_lossy().contains('\0') {
                        return Err(MyArchError::corrupt(format!(
                            "entry path '{}' contains a NUL byte",
                            self.name
                        )));
                    }
                }
                _ => {}
            }
        }

        Ok(())
    }
}

impl std::fmt::Display for EntryInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let type_char = if self.is_dir() { 'd' } else { '-' };
        write!(
            f,
            "{}{:>10} {:>10} {}",
            type_char, self.size, self.token_count, self.name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tag_roundtrip() {
        assert_eq!(EntryKind::from_tag(0x01).unwrap(), EntryKind::File);
        assert_eq!(EntryKind::from_tag(0x02).unwrap(), EntryKind::Directory);
        assert_eq!(EntryKind::File.to_tag(), 0x01);
        assert_eq!(EntryKind::Directory.to_tag(), 0x02);
    }

    #[test]
    fn test_kind_unknown_tag() {
        let err = EntryKind::from_tag(0x7F).unwrap_err();
        assert!(matches!(err, MyArchError::CorruptArchive { .. }));
    }

    #[test]
    fn test_entry_constructors() {
        let file = EntryInfo::file("dir/a.txt", 3, 40);
        assert!(file.is_file());
        assert_eq!(file.token_count, 3);
        assert_eq!(file.size, 40);

        let dir = EntryInfo::directory("dir");
        assert!(dir.is_dir());
        assert_eq!(dir.size, 0);
    }

    #[test]
    fn test_validate_path_safe() {
        assert!(EntryInfo::file("subdir/file.txt", 0, 0).validate_path().is_ok());
    }

    #[test]
    fn test_validate_path_traversal() {
        assert!(EntryInfo::file("../escape", 0, 0).validate_path().is_err());
        assert!(
            EntryInfo::file("a/../../escape", 0, 0)
                .validate_path()
                .is_err()
        );
    }

    #[test]
    fn test_validate_path_absolute_and_empty() {
        assert!(EntryInfo::file("/etc/passwd", 0, 0).validate_path().is_err());
        assert!(EntryInfo::file("", 0, 0).validate_path().is_err());
    }
}
