//! Error type for the deserializing side.
//!
//! Serialize-side capacity insufficiency is never an error in this crate;
//! it is reported as a required length. Errors here cover parse and decode
//! failures only.

use thiserror::Error;

/// Deserialization failure.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastError {
    /// Input ended before the value was complete.
    #[error("unexpected end of input: needed {needed} bytes, only {available} available")]
    UnexpectedEof {
        /// Bytes the operation required.
        needed: usize,
        /// Bytes actually available.
        available: usize,
    },

    /// Input does not parse as the expected value.
    #[error("invalid input: {message}")]
    InvalidData {
        /// What was wrong with the input.
        message: &'static str,
    },

    /// Base64 input length is not a multiple of 4.
    #[error("base64 input length {len} is not a multiple of 4")]
    Base64Length {
        /// Offending input length.
        len: usize,
    },

    /// Byte outside the base64 alphabet.
    #[error("invalid base64 symbol {byte:#04x} at offset {offset}")]
    Base64Symbol {
        /// The offending byte.
        byte: u8,
        /// Its offset in the input.
        offset: usize,
    },
}

/// Convenience alias for deserializing operations.
pub type Result<T> = core::result::Result<T, CastError>;
