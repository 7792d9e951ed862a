//! LZ77 detokenizer.
//!
//! Replays a token sequence into the byte buffer it was produced from.
//! Back-reference copies are performed byte by byte so a copy may read
//! bytes it has just appended; this self-overlap is how repeated runs
//! expand from a single short token.

use crate::token::Token;
use myarch_core::error::{MyArchError, Result};

/// Detokenize a token sequence.
///
/// Fails with [`MyArchError::InvalidBackReference`] when a token's offset
/// reaches before the start of the decoded output. An empty token slice
/// yields an empty buffer.
pub fn detokenize(tokens: &[Token]) -> Result<Vec<u8>> {
    let mut output = Vec::new();

    for token in tokens {
        if token.length > 0 {
            let offset = token.offset as usize;
            if offset == 0 || offset > output.len() {
                return Err(MyArchError::invalid_back_reference(offset, output.len()));
            }

            let start = output.len() - offset;
            for i in 0..token.length as usize {
                let byte = output[start + i];
                output.push(byte);
            }
        }

        if let Some(byte) = token.literal {
            output.push(byte);
        }
    }

    Ok(output)
}
