//! # MyArch LZ77
//!
//! The LZ77 match engine behind the MYARCH container format.
//!
//! [`tokenize`] turns a byte buffer into a sequence of [`Token`] values,
//! each a back-reference over a 4 KiB window (matches capped at 18 bytes)
//! followed by an optional literal. [`detokenize`] reverses the process
//! exactly; the round-trip holds for every input, empty and NUL-heavy
//! buffers included.
//!
//! ## Example
//!
//! ```rust
//! use myarch_lz77::{detokenize, tokenize};
//!
//! let input = b"abracadabra abracadabra";
//! let tokens = tokenize(input);
//! assert!(tokens.len() < input.len());
//! assert_eq!(detokenize(&tokens).unwrap(), input);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod decode;
pub mod encode;
pub mod token;

// Re-exports
pub use decode::detokenize;
pub use encode::{MAX_MATCH, WINDOW_SIZE, tokenize};
pub use token::{TOKEN_WIRE_SIZE, Token};
