//! LZ77 token type and its wire encoding.
//!
//! A token is a back-reference `(offset, length)` optionally followed by
//! one literal byte. `offset == 0 && length == 0` denotes a pure-literal
//! token. On the wire a token is always five bytes:
//!
//! ```text
//! offset:  u16 (little-endian)
//! length:  u16 (little-endian; bit 15 = has-literal flag, bits 0..=14 = length)
//! literal: u8  (meaningful only when the flag is set, written as 0 otherwise)
//! ```
//!
//! The flag bit exists so that a literal byte value of `0x00` is
//! distinguishable from "no trailing literal"; without it, inputs ending
//! in NUL bytes would not survive a round-trip.

use myarch_core::bytestream::{ByteReader, ByteWriter};
use myarch_core::error::Result;
use std::io::{Read, Write};

/// Mask selecting the length bits of the on-wire length field.
const LENGTH_MASK: u16 = 0x7FFF;

/// Flag bit marking the presence of a trailing literal.
const HAS_LITERAL_FLAG: u16 = 0x8000;

/// Size of one encoded token in bytes.
pub const TOKEN_WIRE_SIZE: u64 = 5;

/// One unit of LZ77 output.
///
/// Represents "copy `length` bytes starting `offset` bytes before the
/// current output position, then emit the literal if present".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    /// Back-reference distance; 0 together with `length == 0` means no
    /// back-reference.
    pub offset: u16,
    /// Number of bytes to copy from the back-reference.
    pub length: u16,
    /// Trailing literal byte, if any.
    pub literal: Option<u8>,
}

impl Token {
    /// Create a pure-literal token with no back-reference.
    pub fn literal(byte: u8) -> Self {
        Self {
            offset: 0,
            length: 0,
            literal: Some(byte),
        }
    }

    /// Create a back-reference token.
    pub fn back_reference(offset: u16, length: u16, literal: Option<u8>) -> Self {
        Self {
            offset,
            length,
            literal,
        }
    }

    /// Check whether this token carries no back-reference.
    pub fn is_literal_only(&self) -> bool {
        self.offset == 0 && self.length == 0
    }

    /// Number of decoded bytes this token expands to.
    pub fn decoded_len(&self) -> u64 {
        self.length as u64 + u64::from(self.literal.is_some())
    }

    /// Serialize this token.
    pub fn write_to<W: Write>(&self, writer: &mut ByteWriter<W>) -> Result<()> {
        writer.write_u16(self.offset)?;

        let mut length_field = self.length & LENGTH_MASK;
        if self.literal.is_some() {
            length_field |= HAS_LITERAL_FLAG;
        }
        writer.write_u16(length_field)?;
        writer.write_u8(self.literal.unwrap_or(0))?;
        Ok(())
    }

    /// Deserialize one token.
    pub fn read_from<R: Read>(reader: &mut ByteReader<R>) -> Result<Self> {
        let offset = reader.read_u16()?;
        let length_field = reader.read_u16()?;
        let byte = reader.read_u8()?;

        let literal = if length_field & HAS_LITERAL_FLAG != 0 {
            Some(byte)
        } else {
            None
        };

        Ok(Self {
            offset,
            length: length_field & LENGTH_MASK,
            literal,
        })
    }
}
