//! Base58 and Base62: whole-payload conversion through a big integer.
//!
//! The payload is read as one big-endian base-256 number and rewritten in
//! the target radix, one input digit at a time, by multiplying a growable
//! accumulator and propagating the carry. Leading zero bytes do not change
//! the number, so each one is written as a leading zero symbol instead.

use crate::{CodecError, Format};
use radix_buffers::Digits;

/// Digits of base `to` needed for a `len`-digit number in base `from`, plus
/// one digit of headroom.
fn estimate_digits(len: usize, from: u32, to: u32) -> usize {
    let ratio = f64::from(from).ln() / f64::from(to).ln();
    (len as f64 * ratio).ceil() as usize + 1
}

pub(crate) fn encode(payload: &[u8], format: Format) -> Result<String, CodecError> {
    let alphabet = format.alphabet();
    let radix = alphabet.radix();

    let zeros = payload.iter().take_while(|&&byte| byte == 0).count();
    let rest = &payload[zeros..];

    let mut digits = Digits::with_capacity(estimate_digits(rest.len(), 256, radix))?;
    for &byte in rest {
        digits.mul_add(radix, 256, u32::from(byte))?;
    }

    let mut text = String::with_capacity(zeros + digits.len());
    text.extend(std::iter::repeat(char::from(alphabet.zero())).take(zeros));
    text.extend(digits.iter_be().map(|digit| char::from(alphabet.symbol(digit))));
    Ok(text)
}

pub(crate) fn decode(text: &[u8], format: Format) -> Result<Vec<u8>, CodecError> {
    let alphabet = format.alphabet();
    let radix = alphabet.radix();

    let zeros = text
        .iter()
        .take_while(|&&symbol| symbol == alphabet.zero())
        .count();

    let mut digits = Digits::with_capacity(estimate_digits(text.len() - zeros, radix, 256))?;
    for (offset, &symbol) in text.iter().enumerate().skip(zeros) {
        let digit = alphabet
            .index_of(symbol)
            .ok_or_else(|| CodecError::invalid_character(format, symbol, offset))?;
        digits.mul_add(256, radix, u32::from(digit))?;
    }

    let mut payload = vec![0u8; zeros];
    payload.extend(digits.iter_be());
    Ok(payload)
}

/// Encodes bytes as Bitcoin-alphabet Base58.
///
/// Every leading zero byte becomes a leading `1`.
///
/// # Example
///
/// ```
/// use radix_codec::to_base58;
///
/// assert_eq!(to_base58(b"Hello World!").unwrap(), "2NEpo7TZRRrLZSi2U");
/// assert_eq!(to_base58(&[0, 0, 0x28, 0x7f, 0xb4, 0xcd]).unwrap(), "11233QC4");
/// ```
pub fn to_base58(payload: &[u8]) -> Result<String, CodecError> {
    encode(payload, Format::Base58)
}

/// Decodes Base58, turning each leading `1` back into a zero byte.
pub fn from_base58(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    decode(text.as_ref(), Format::Base58)
}

/// Encodes bytes as Base62. Every leading zero byte becomes a leading `0`.
pub fn to_base62(payload: &[u8]) -> Result<String, CodecError> {
    encode(payload, Format::Base62)
}

/// Decodes Base62, turning each leading `0` back into a zero byte.
pub fn from_base62(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    decode(text.as_ref(), Format::Base62)
}
