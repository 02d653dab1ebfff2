//! Lossless text encodings for binary payloads.
//!
//! This crate converts bytes to and from six printable encodings:
//! - Base16, Base32 and Base64 by bit-packing, with `=` padding for the
//!   latter two
//! - Base58 and Base62 by big-integer radix conversion, keeping leading
//!   zero bytes as leading zero symbols
//! - Base85 by packing 4-byte blocks into 5 base-85 digits
//!
//! Every operation takes the whole input and returns the whole output. The
//! alphabets are compile-time constants, so any number of threads may
//! encode and decode at once.
//!
//! # Example
//!
//! ```
//! use radix_codec::{decode, encode, Format};
//!
//! let encoded = encode(Format::Base64, b"Man").unwrap();
//! assert_eq!(encoded, "TWFu");
//! assert_eq!(decode(Format::Base64, &encoded).unwrap(), b"Man");
//!
//! let format: Format = "base58".parse().unwrap();
//! assert_eq!(encode(format, &[0, 0, 1]).unwrap(), "112");
//! ```

pub mod alphabet;
mod base85;
mod big_int;
mod constants;
mod error;
mod fixed_group;
mod format;

pub use alphabet::Alphabet;
pub use base85::{from_base85, from_base85_exact, to_base85};
pub use big_int::{from_base58, from_base62, to_base58, to_base62};
pub use constants::{
    BASE16_SYMBOLS, BASE32_SYMBOLS, BASE58_SYMBOLS, BASE62_SYMBOLS, BASE64_SYMBOLS,
    BASE85_SYMBOLS, PAD,
};
pub use error::CodecError;
pub use fixed_group::{from_base16, from_base32, from_base64, to_base16, to_base32, to_base64};
pub use format::{Descriptor, Format};

/// Encodes `payload` as text in `format`.
pub fn encode(format: Format, payload: &[u8]) -> Result<String, CodecError> {
    format.encode(payload)
}

/// Decodes `text` in `format` back into bytes.
pub fn decode(format: Format, text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    format.decode(text)
}
