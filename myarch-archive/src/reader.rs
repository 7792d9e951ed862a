//! Archive reader.
//!
//! [`ArchiveReader`] verifies the magic and streams entries in stored
//! order. Each entry can be listed (metadata only) or materialized onto
//! the filesystem. Reading is strictly single-pass; progress during
//! extraction is derived from the count of compressed bytes consumed, so
//! no pre-scan over the stream is needed.

use crate::MAGIC;
use myarch_core::bytestream::ByteReader;
use myarch_core::entry::{EntryInfo, EntryKind};
use myarch_core::error::{MyArchError, Result};
use myarch_lz77::{Token, detokenize};
use std::fs;
use std::io::Read;
use std::path::Path;

/// One deserialized archive record: a typed relative path and, for
/// files, the token sequence that expands to the file's bytes.
#[derive(Debug, Clone)]
pub struct ArchiveEntry {
    /// The kind of entry.
    pub kind: EntryKind,
    /// Relative path within the archive.
    pub name: String,
    /// Token payload; empty for directories and empty files.
    pub tokens: Vec<Token>,
}

impl ArchiveEntry {
    /// Listing metadata for this entry.
    pub fn info(&self) -> EntryInfo {
        match self.kind {
            EntryKind::Directory => EntryInfo::directory(self.name.clone()),
            EntryKind::File => EntryInfo::file(
                self.name.clone(),
                self.tokens.len() as u32,
                self.tokens.iter().map(Token::decoded_len).sum(),
            ),
        }
    }

    /// Recreate this entry under `output_root`.
    ///
    /// The entry path is validated first so a crafted archive cannot
    /// reach outside the output root. Parent directories are created
    /// before files even though the pre-order invariant should have
    /// created them already; an archive written by other tooling may
    /// omit directory records.
    pub fn materialize(&self, output_root: &Path) -> Result<()> {
        self.info().validate_path()?;
        let full_path = output_root.join(&self.name);

        match self.kind {
            EntryKind::Directory => {
                fs::create_dir_all(&full_path)
                    .map_err(|e| MyArchError::io_at(&full_path, e))?;
            }
            EntryKind::File => {
                let data = detokenize(&self.tokens)?;
                if let Some(parent) = full_path.parent() {
                    fs::create_dir_all(parent).map_err(|e| MyArchError::io_at(parent, e))?;
                }
                fs::write(&full_path, data).map_err(|e| MyArchError::io_at(&full_path, e))?;
            }
        }

        Ok(())
    }
}

/// Streams MYARCH entry records from a byte source.
#[derive(Debug)]
pub struct ArchiveReader<R: Read> {
    reader: ByteReader<R>,
}

impl<R: Read> ArchiveReader<R> {
    /// Create a reader and verify the archive magic.
    pub fn new(source: R) -> Result<Self> {
        let mut reader = ByteReader::new(source);

        let magic = reader.read_bytes(MAGIC.len())?;
        if magic != MAGIC {
            return Err(MyArchError::corrupt(format!(
                "bad magic {:02x?}, expected {:02x?}",
                magic, MAGIC
            )));
        }

        Ok(Self { reader })
    }

    /// Total bytes consumed so far, magic included.
    pub fn bytes_read(&self) -> u64 {
        self.reader.bytes_read()
    }

    /// Read the next entry, or `None` at a clean end of stream.
    ///
    /// A stream that ends in the middle of an entry fails with
    /// `TruncatedInput`; structural nonsense (zero-length path, unknown
    /// type tag, non-UTF-8 path) fails with `CorruptArchive`.
    pub fn read_entry(&mut self) -> Result<Option<ArchiveEntry>> {
        if self.reader.is_eof()? {
            return Ok(None);
        }

        let kind = EntryKind::from_tag(self.reader.read_u8()?)?;

        let path_len = self.reader.read_u16()?;
        if path_len == 0 {
            return Err(MyArchError::corrupt("zero-length entry path"));
        }
        let path_bytes = self.reader.read_bytes(path_len as usize)?;
        let name = String::from_utf8(path_bytes)
            .map_err(|_| MyArchError::corrupt("entry path is not valid UTF-8"))?;

        let tokens = match kind {
            EntryKind::Directory => Vec::new(),
            EntryKind::File => {
                let token_count = self.reader.read_u32()?;
                let mut tokens = Vec::new();
                for _ in 0..token_count {
                    tokens.push(Token::read_from(&mut self.reader)?);
                }
                tokens
            }
        };

        Ok(Some(ArchiveEntry { kind, name, tokens }))
    }

    /// Consume the stream and return metadata for every entry.
    pub fn entries(mut self) -> Result<Vec<EntryInfo>> {
        let mut infos = Vec::new();
        while let Some(entry) = self.read_entry()? {
            infos.push(entry.info());
        }
        Ok(infos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::ArchiveWriter;
    use std::io::Cursor;

    fn archive_with(build: impl FnOnce(&mut ArchiveWriter<Vec<u8>>)) -> Vec<u8> {
        let mut writer = ArchiveWriter::new(Vec::new()).unwrap();
        build(&mut writer);
        writer.finish().unwrap()
    }

    #[test]
    fn test_empty_archive_lists_nothing() {
        let bytes = archive_with(|_| {});
        let reader = ArchiveReader::new(Cursor::new(bytes)).unwrap();
        assert!(reader.entries().unwrap().is_empty());
    }

    #[test]
    fn test_bad_magic_rejected() {
        let err = ArchiveReader::new(Cursor::new(b"MYARCX".to_vec())).unwrap_err();
        assert!(matches!(err, MyArchError::CorruptArchive { .. }));
    }

    #[test]
    fn test_short_magic_truncated() {
        let err = ArchiveReader::new(Cursor::new(b"MYA".to_vec())).unwrap_err();
        assert!(matches!(err, MyArchError::TruncatedInput { .. }));
    }

    #[test]
    fn test_listing_reports_names_and_sizes() {
        let bytes = archive_with(|w| {
            w.add_directory("tree").unwrap();
            w.add_file("tree/hello.txt", b"hello hello hello").unwrap();
            w.add_file("tree/empty.bin", &[]).unwrap();
        });

        let infos = ArchiveReader::new(Cursor::new(bytes)).unwrap().entries().unwrap();
        assert_eq!(infos.len(), 3);

        assert!(infos[0].is_dir());
        assert_eq!(infos[0].name, "tree");

        assert!(infos[1].is_file());
        assert_eq!(infos[1].name, "tree/hello.txt");
        assert_eq!(infos[1].size, 17);

        assert_eq!(infos[2].token_count, 0);
        assert_eq!(infos[2].size, 0);
    }

    #[test]
    fn test_zero_path_length_rejected() {
        let mut bytes = b"MYARCH".to_vec();
        bytes.push(EntryKind::DIRECTORY_TAG);
        bytes.extend_from_slice(&0u16.to_le_bytes());

        let mut reader = ArchiveReader::new(Cursor::new(bytes)).unwrap();
        let err = reader.read_entry().unwrap_err();
        assert!(matches!(err, MyArchError::CorruptArchive { .. }));
    }

    #[test]
    fn test_unknown_entry_tag_rejected() {
        let mut bytes = b"MYARCH".to_vec();
        bytes.push(0x99);

        let mut reader = ArchiveReader::new(Cursor::new(bytes)).unwrap();
        assert!(matches!(
            reader.read_entry().unwrap_err(),
            MyArchError::CorruptArchive { .. }
        ));
    }

    #[test]
    fn test_truncated_token_list_rejected() {
        let full = archive_with(|w| {
            w.add_file("a.bin", b"abcabcabc").unwrap();
        });
        // Chop the final token in half.
        let cut = full.len() - 3;

        let mut reader = ArchiveReader::new(Cursor::new(full[..cut].to_vec())).unwrap();
        assert!(matches!(
            reader.read_entry().unwrap_err(),
            MyArchError::TruncatedInput { .. }
        ));
    }

    #[test]
    fn test_truncated_path_rejected() {
        let mut bytes = b"MYARCH".to_vec();
        bytes.push(EntryKind::FILE_TAG);
        bytes.extend_from_slice(&10u16.to_le_bytes());
        bytes.extend_from_slice(b"shrt");

        let mut reader = ArchiveReader::new(Cursor::new(bytes)).unwrap();
        assert!(matches!(
            reader.read_entry().unwrap_err(),
            MyArchError::TruncatedInput { .. }
        ));
    }

    #[test]
    fn test_non_utf8_path_rejected() {
        let mut bytes = b"MYARCH".to_vec();
        bytes.push(EntryKind::FILE_TAG);
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&[0xFF, 0xFE]);

        let mut reader = ArchiveReader::new(Cursor::new(bytes)).unwrap();
        assert!(matches!(
            reader.read_entry().unwrap_err(),
            MyArchError::CorruptArchive { .. }
        ));
    }

    #[test]
    fn test_entry_roundtrip_preserves_content() {
        let payload = b"the rain in spain stays mainly in the plain";
        let bytes = archive_with(|w| {
            w.add_file("doc.txt", payload).unwrap();
        });

        let mut reader = ArchiveReader::new(Cursor::new(bytes)).unwrap();
        let entry = reader.read_entry().unwrap().unwrap();
        assert_eq!(entry.name, "doc.txt");
        assert_eq!(detokenize(&entry.tokens).unwrap(), payload);
        assert!(reader.read_entry().unwrap().is_none());
    }

    #[test]
    fn test_bytes_read_tracks_consumption() {
        let bytes = archive_with(|w| {
            w.add_file("a", b"xyz").unwrap();
        });
        let total = bytes.len() as u64;

        let mut reader = ArchiveReader::new(Cursor::new(bytes)).unwrap();
        reader.read_entry().unwrap();
        assert_eq!(reader.bytes_read(), total);
    }
}
