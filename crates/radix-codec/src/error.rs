use crate::Format;
use radix_buffers::AllocError;
use thiserror::Error;

/// Error type for every encode and decode operation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input length breaks the format's structure (odd Base16 text, a
    /// Base85 text that is not a whole number of 5-symbol blocks, or a
    /// Base32/Base64 tail no encoder produces).
    #[error("invalid {format} input length {len}")]
    Length { format: Format, len: usize },
    /// A symbol outside the alphabet, or a pad symbol where none may appear.
    #[error("invalid {format} character {byte:#04x} at offset {offset}")]
    InvalidCharacter { format: Format, byte: u8, offset: usize },
    /// A Base85 block whose value does not fit in 32 bits.
    #[error("{format} block at offset {offset} overflows 32 bits")]
    Overflow { format: Format, offset: usize },
    /// The digit accumulator could not grow.
    #[error("resource exhausted: {0}")]
    ResourceExhausted(#[from] AllocError),
    /// No format goes by this name, extension or radix.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    /// The payload length given to an exact Base85 decode cannot be the
    /// length the text was encoded from.
    #[error("cannot trim {decoded} decoded bytes to {requested}")]
    LengthMismatch { decoded: usize, requested: usize },
}

impl CodecError {
    pub(crate) fn invalid_character(format: Format, byte: u8, offset: usize) -> Self {
        CodecError::InvalidCharacter {
            format,
            byte,
            offset,
        }
    }
}
