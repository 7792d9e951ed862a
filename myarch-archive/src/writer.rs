//! Archive writer.
//!
//! [`ArchiveWriter`] serializes entries into a MYARCH stream;
//! [`write_tree`] walks a file or directory tree and feeds it to the
//! writer in pre-order, so a directory's record always precedes the
//! records of its descendants and the reader can create parents first.

use crate::MAGIC;
use myarch_core::bytestream::ByteWriter;
use myarch_core::entry::EntryKind;
use myarch_core::error::{MyArchError, Result};
use myarch_lz77::tokenize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes MYARCH entry records to a byte sink.
#[derive(Debug)]
pub struct ArchiveWriter<W: Write> {
    writer: ByteWriter<W>,
}

impl<W: Write> ArchiveWriter<W> {
    /// Create a writer and emit the archive magic.
    pub fn new(sink: W) -> Result<Self> {
        let mut writer = ByteWriter::new(sink);
        writer.write_bytes(MAGIC)?;
        Ok(Self { writer })
    }

    /// Total bytes emitted so far, magic included.
    pub fn bytes_written(&self) -> u64 {
        self.writer.bytes_written()
    }

    /// Write one entry header (type tag, path length, path bytes).
    fn write_header(&mut self, kind: EntryKind, name: &str) -> Result<()> {
        let path_len = u16::try_from(name.len())
            .map_err(|_| MyArchError::invalid_input_path(name))?;
        if path_len == 0 {
            return Err(MyArchError::invalid_input_path(name));
        }

        self.writer.write_u8(kind.to_tag())?;
        self.writer.write_u16(path_len)?;
        self.writer.write_bytes(name.as_bytes())?;
        Ok(())
    }

    /// Append a directory entry.
    pub fn add_directory(&mut self, name: &str) -> Result<()> {
        self.write_header(EntryKind::Directory, name)
    }

    /// Append a file entry, tokenizing `data`.
    ///
    /// An empty `data` buffer produces a valid entry with zero tokens.
    pub fn add_file(&mut self, name: &str, data: &[u8]) -> Result<()> {
        self.write_header(EntryKind::File, name)?;

        let tokens = tokenize(data);
        self.writer.write_u32(tokens.len() as u32)?;
        for token in &tokens {
            token.write_to(&mut self.writer)?;
        }
        Ok(())
    }

    /// Flush and return the underlying sink.
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer.into_inner())
    }
}

/// Walk `input` (a file or directory) and write every entry to `sink`.
///
/// Progress is reported as a 0..=100 percentage of input bytes consumed,
/// emitted after each file and once more on completion. The walk uses an
/// explicit work stack rather than call-stack recursion, so pathological
/// nesting depth cannot overflow the stack; children are pushed in
/// reverse enumeration order to keep the popped order equal to the
/// enumeration order.
pub fn write_tree<W: Write>(
    input: &Path,
    sink: W,
    progress: &mut dyn FnMut(u8),
) -> Result<W> {
    let total_bytes = scan_total_bytes(input)?;
    let base = input.parent().map(Path::to_path_buf).unwrap_or_default();

    let mut writer = ArchiveWriter::new(sink)?;
    let mut processed: u64 = 0;
    let mut stack: Vec<PathBuf> = vec![input.to_path_buf()];

    while let Some(path) = stack.pop() {
        let name = archive_name(&path, &base);

        if path.is_dir() {
            writer.add_directory(&name)?;

            let mut children: Vec<PathBuf> = Vec::new();
            let dir = fs::read_dir(&path).map_err(|e| MyArchError::io_at(&path, e))?;
            for child in dir {
                let child = child.map_err(|e| MyArchError::io_at(&path, e))?;
                children.push(child.path());
            }
            for child in children.into_iter().rev() {
                stack.push(child);
            }
        } else if path.is_file() {
            let data = fs::read(&path).map_err(|e| MyArchError::io_at(&path, e))?;
            writer.add_file(&name, &data)?;

            processed += data.len() as u64;
            progress(percent(processed, total_bytes));
        }
        // Sockets, fifos and the like are skipped, matching the walk that
        // sized the archive up front.
    }

    progress(100);
    writer.finish()
}

/// Sum the sizes of all regular files under `path`.
///
/// Fails with `InvalidInputPath` when `path` is neither a regular file
/// nor a directory.
fn scan_total_bytes(path: &Path) -> Result<u64> {
    if path.is_file() {
        let meta = fs::metadata(path).map_err(|e| MyArchError::io_at(path, e))?;
        return Ok(meta.len());
    }
    if !path.is_dir() {
        return Err(MyArchError::invalid_input_path(path));
    }

    let mut total = 0u64;
    let mut stack: Vec<PathBuf> = vec![path.to_path_buf()];

    while let Some(dir) = stack.pop() {
        let entries = fs::read_dir(&dir).map_err(|e| MyArchError::io_at(&dir, e))?;
        for entry in entries {
            let entry = entry.map_err(|e| MyArchError::io_at(&dir, e))?;
            let child = entry.path();
            if child.is_dir() {
                stack.push(child);
            } else if child.is_file() {
                let meta = fs::metadata(&child).map_err(|e| MyArchError::io_at(&child, e))?;
                total += meta.len();
            }
        }
    }

    Ok(total)
}

/// Compute the `/`-separated archive name of `path` relative to `base`,
/// falling back to the bare file name when stripping yields nothing.
fn archive_name(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);

    let name: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    if name.is_empty() {
        path.file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        name.join("/")
    }
}

/// Integer progress percentage, rounded to nearest.
fn percent(processed: u64, total: u64) -> u8 {
    if total == 0 {
        return 100;
    }
    let pct = (processed as f64 / total as f64) * 100.0;
    pct.round().min(100.0) as u8
}
