//! Byte-level I/O for the archive wire format.
//!
//! This module provides `ByteReader` and `ByteWriter` for reading and
//! writing fixed-width little-endian integers over any `Read`/`Write`
//! implementation. The archive format is defined in terms of these
//! primitives and is little-endian regardless of host architecture.
//!
//! # Example
//!
//! ```
//! use myarch_core::bytestream::{ByteReader, ByteWriter};
//! use std::io::Cursor;
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = ByteWriter::new(&mut output);
//!     writer.write_u16(0x1234).unwrap();
//!     writer.write_u32(0xDEADBEEF).unwrap();
//! }
//! assert_eq!(output, [0x34, 0x12, 0xEF, 0xBE, 0xAD, 0xDE]);
//!
//! let mut reader = ByteReader::new(Cursor::new(&output));
//! assert_eq!(reader.read_u16().unwrap(), 0x1234);
//! assert_eq!(reader.read_u32().unwrap(), 0xDEADBEEF);
//! ```

use crate::error::{MyArchError, Result};
use std::io::{Read, Write};

/// A reader for little-endian integers wrapping any `Read` implementation.
///
/// Short reads surface as [`MyArchError::TruncatedInput`] carrying the
/// number of missing bytes, so callers can distinguish a truncated field
/// from a clean end of stream (see [`ByteReader::is_eof`]).
#[derive(Debug)]
pub struct ByteReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// One byte of lookahead filled by `is_eof`.
    pending: Option<u8>,
    /// Total bytes consumed (for progress reporting).
    total_read: u64,
}

impl<R: Read> ByteReader<R> {
    /// Create a new `ByteReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            pending: None,
            total_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `ByteReader` and return the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Total number of bytes consumed so far.
    pub fn bytes_read(&self) -> u64 {
        self.total_read
    }

    /// Fill `buf` completely or fail with `TruncatedInput`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        let mut filled = 0;

        if let Some(byte) = self.pending.take() {
            if buf.is_empty() {
                self.pending = Some(byte);
                return Ok(());
            }
            buf[0] = byte;
            filled = 1;
        }

        while filled < buf.len() {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => return Err(MyArchError::truncated(buf.len() - filled)),
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }

        self.total_read += buf.len() as u64;
        Ok(())
    }

    /// Read a single byte.
    pub fn read_u8(&mut self) -> Result<u8> {
        let mut buf = [0u8; 1];
        self.fill(&mut buf)?;
        Ok(buf[0])
    }

    /// Read a little-endian `u16`.
    pub fn read_u16(&mut self) -> Result<u16> {
        let mut buf = [0u8; 2];
        self.fill(&mut buf)?;
        Ok(u16::from_le_bytes(buf))
    }

    /// Read a little-endian `u32`.
    pub fn read_u32(&mut self) -> Result<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf)?;
        Ok(u32::from_le_bytes(buf))
    }

    /// Read exactly `len` bytes.
    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; len];
        self.fill(&mut buf)?;
        Ok(buf)
    }

    /// Check whether the stream is exhausted.
    ///
    /// Performs a one-byte probe; a byte read this way is buffered and
    /// returned by the next read call.
    pub fn is_eof(&mut self) -> Result<bool> {
        if self.pending.is_some() {
            return Ok(false);
        }

        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(true),
                Ok(_) => {
                    self.pending = Some(byte[0]);
                    return Ok(false);
                }
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// A writer for little-endian integers wrapping any `Write` implementation.
#[derive(Debug)]
pub struct ByteWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Total bytes emitted.
    total_written: u64,
}

impl<W: Write> ByteWriter<W> {
    /// Create a new `ByteWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            total_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume this `ByteWriter` and return the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Total number of bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.total_written
    }

    /// Write a single byte.
    pub fn write_u8(&mut self, value: u8) -> Result<()> {
        self.write_bytes(&[value])
    }

    /// Write a `u16` in little-endian order.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Write a `u32` in little-endian order.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_bytes(&value.to_le_bytes())
    }

    /// Write a byte slice verbatim.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.writer.write_all(bytes)?;
        self.total_written += bytes.len() as u64;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_write_little_endian() {
        let mut output = Vec::new();
        let mut writer = ByteWriter::new(&mut output);
        writer.write_u8(0x01).unwrap();
        writer.write_u16(0xABCD).unwrap();
        writer.write_u32(0x01020304).unwrap();
        assert_eq!(writer.bytes_written(), 7);
        drop(writer);

        assert_eq!(output, [0x01, 0xCD, 0xAB, 0x04, 0x03, 0x02, 0x01]);
    }

    #[test]
    fn test_read_little_endian() {
        let data = [0x01u8, 0xCD, 0xAB, 0x04, 0x03, 0x02, 0x01];
        let mut reader = ByteReader::new(Cursor::new(&data));

        assert_eq!(reader.read_u8().unwrap(), 0x01);
        assert_eq!(reader.read_u16().unwrap(), 0xABCD);
        assert_eq!(reader.read_u32().unwrap(), 0x01020304);
        assert_eq!(reader.bytes_read(), 7);
    }

    #[test]
    fn test_truncated_u32() {
        let data = [0x01u8, 0x02];
        let mut reader = ByteReader::new(Cursor::new(&data));

        let err = reader.read_u32().unwrap_err();
        assert!(matches!(err, MyArchError::TruncatedInput { expected: 2 }));
    }

    #[test]
    fn test_truncated_empty() {
        let mut reader = ByteReader::new(Cursor::new(&[] as &[u8]));
        assert!(matches!(
            reader.read_u16().unwrap_err(),
            MyArchError::TruncatedInput { .. }
        ));
    }

    #[test]
    fn test_read_bytes() {
        let data = b"MYARCHrest";
        let mut reader = ByteReader::new(Cursor::new(&data[..]));
        assert_eq!(reader.read_bytes(6).unwrap(), b"MYARCH");
        assert_eq!(reader.read_bytes(4).unwrap(), b"rest");
    }

    #[test]
    fn test_eof_probe_does_not_lose_bytes() {
        let data = [0xAAu8, 0xBB];
        let mut reader = ByteReader::new(Cursor::new(&data));

        assert!(!reader.is_eof().unwrap());
        assert_eq!(reader.read_u16().unwrap(), 0xBBAA);
        assert!(reader.is_eof().unwrap());
    }

    #[test]
    fn test_roundtrip() {
        let mut output = Vec::new();
        {
            let mut writer = ByteWriter::new(&mut output);
            writer.write_u16(0).unwrap();
            writer.write_u16(u16::MAX).unwrap();
            writer.write_u32(0).unwrap();
            writer.write_u32(u32::MAX).unwrap();
        }

        let mut reader = ByteReader::new(Cursor::new(&output));
        assert_eq!(reader.read_u16().unwrap(), 0);
        assert_eq!(reader.read_u16().unwrap(), u16::MAX);
        assert_eq!(reader.read_u32().unwrap(), 0);
        assert_eq!(reader.read_u32().unwrap(), u32::MAX);
        assert!(reader.is_eof().unwrap());
    }
}
