//! Base16, Base32 and Base64: bit-packing codecs with fixed symbol groups.
//!
//! Input bytes form a bit-stream, most significant bit first, that is cut
//! into 4, 5 or 6 bit symbols. Symbols are handled in groups (2, 8 or 4
//! symbols) that correspond to a whole number of bytes (1, 5 or 3). Base32
//! and Base64 pad the last group with `=`.

use crate::{CodecError, Format};

/// Bit layout of one power-of-two format.
struct Layout {
    bits: u32,
    group_symbols: usize,
    pad: Option<u8>,
}

impl Layout {
    fn of(format: Format) -> Self {
        let descriptor = format.descriptor();
        debug_assert!(descriptor.radix.is_power_of_two());
        let bits = descriptor.radix.trailing_zeros();
        // Smallest run of symbols that ends on a byte boundary.
        let group_symbols = 8 >> (bits | 8).trailing_zeros().min(3);
        debug_assert_eq!(descriptor.group_symbols, Some(group_symbols));
        Self {
            bits,
            group_symbols,
            pad: descriptor.pad,
        }
    }

    fn is_pad(&self, symbol: u8) -> bool {
        self.pad == Some(symbol)
    }

    /// Bytes carried by `data` leading symbols of a group, or `None` when no
    /// encoder ends a group after that many symbols.
    fn bytes_for(&self, data: usize) -> Option<usize> {
        let bits = self.bits as usize;
        let bytes = data * bits / 8;
        let full = data == self.group_symbols;
        (full || (bytes > 0 && (bytes * 8).div_ceil(bits) == data)).then_some(bytes)
    }
}

pub(crate) fn encode(payload: &[u8], format: Format) -> String {
    let layout = Layout::of(format);
    let alphabet = format.alphabet();
    let bits = layout.bits;
    let mask = (1u32 << bits) - 1;

    let data_len = (payload.len() * 8).div_ceil(bits as usize);
    let text_len = match layout.pad {
        Some(_) => data_len.div_ceil(layout.group_symbols) * layout.group_symbols,
        None => data_len,
    };
    let mut text = String::with_capacity(text_len);

    let mut acc = 0u32;
    let mut acc_bits = 0u32;
    for &byte in payload {
        acc = (acc << 8) | u32::from(byte);
        acc_bits += 8;
        while acc_bits >= bits {
            acc_bits -= bits;
            text.push(char::from(alphabet.symbol(((acc >> acc_bits) & mask) as u8)));
        }
        acc &= (1 << acc_bits) - 1;
    }
    if acc_bits > 0 {
        text.push(char::from(alphabet.symbol(((acc << (bits - acc_bits)) & mask) as u8)));
    }
    if let Some(pad) = layout.pad {
        while text.len() < text_len {
            text.push(char::from(pad));
        }
    }
    text
}

pub(crate) fn decode(text: &[u8], format: Format) -> Result<Vec<u8>, CodecError> {
    let layout = Layout::of(format);
    let alphabet = format.alphabet();
    let group = layout.group_symbols;
    let bits = layout.bits;

    if layout.pad.is_none() && text.len() % group != 0 {
        return Err(CodecError::Length {
            format,
            len: text.len(),
        });
    }

    // A short tail counts as if the producer had padded it.
    let groups = text.len().div_ceil(group);
    let group_bits = group as u32 * bits;
    let mut payload = Vec::with_capacity(groups * group * bits as usize / 8);

    for (g, chunk) in text.chunks(group).enumerate() {
        let start = g * group;
        let last = g + 1 == groups;

        let mut acc = 0u64;
        let mut data = 0usize;
        for (i, &symbol) in chunk.iter().enumerate() {
            let offset = start + i;
            if layout.is_pad(symbol) {
                if !last {
                    return Err(CodecError::invalid_character(format, symbol, offset));
                }
                continue;
            }
            let digit = match alphabet.index_of(symbol) {
                Some(digit) if data == i => digit,
                _ => return Err(CodecError::invalid_character(format, symbol, offset)),
            };
            acc = (acc << bits) | u64::from(digit);
            data += 1;
        }

        let Some(bytes) = layout.bytes_for(data) else {
            let offset = start + data;
            return Err(if offset < text.len() {
                CodecError::invalid_character(format, text[offset], offset)
            } else {
                CodecError::Length {
                    format,
                    len: text.len(),
                }
            });
        };

        let value = acc << ((group - data) as u32 * bits);
        for k in 1..=bytes as u32 {
            payload.push((value >> (group_bits - 8 * k)) as u8);
        }
    }

    Ok(payload)
}

/// Encodes bytes as upper-case hexadecimal.
///
/// # Example
///
/// ```
/// use radix_codec::to_base16;
///
/// assert_eq!(to_base16(&[0xAB, 0xCD]), "ABCD");
/// ```
pub fn to_base16(payload: &[u8]) -> String {
    encode(payload, Format::Base16)
}

/// Decodes upper-case hexadecimal. Lower-case digits are rejected.
pub fn from_base16(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    decode(text.as_ref(), Format::Base16)
}

/// Encodes bytes as RFC 4648 Base32, padded to a multiple of 8 symbols.
pub fn to_base32(payload: &[u8]) -> String {
    encode(payload, Format::Base32)
}

/// Decodes Base32, with or without trailing padding.
pub fn from_base32(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    decode(text.as_ref(), Format::Base32)
}

/// Encodes bytes as standard Base64, padded to a multiple of 4 symbols.
///
/// # Example
///
/// ```
/// use radix_codec::{from_base64, to_base64};
///
/// let encoded = to_base64(b"hello world");
/// assert_eq!(encoded, "aGVsbG8gd29ybGQ=");
/// assert_eq!(from_base64(&encoded).unwrap(), b"hello world");
/// ```
pub fn to_base64(payload: &[u8]) -> String {
    encode(payload, Format::Base64)
}

/// Decodes standard Base64, with or without trailing padding.
pub fn from_base64(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    decode(text.as_ref(), Format::Base64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_byte_counts() {
        let base64 = Layout::of(Format::Base64);
        let counts: Vec<_> = (0..=4).map(|n| base64.bytes_for(n)).collect();
        assert_eq!(counts, [None, None, Some(1), Some(2), Some(3)]);

        let base32 = Layout::of(Format::Base32);
        let counts: Vec<_> = (0..=8).map(|n| base32.bytes_for(n)).collect();
        assert_eq!(
            counts,
            [None, None, Some(1), None, Some(2), Some(3), None, Some(4), Some(5)]
        );

        let base16 = Layout::of(Format::Base16);
        assert_eq!(base16.bytes_for(2), Some(1));
    }

    #[test]
    fn base32_padding_lengths() {
        let expected = [
            "",
            "MY======",
            "MZXQ====",
            "MZXW6===",
            "MZXW6YQ=",
            "MZXW6YTB",
            "MZXW6YTBOI======",
        ];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(to_base32(&b"foobar"[..n]), *want);
        }
    }

    #[test]
    fn base64_padding_lengths() {
        let expected = ["", "Zg==", "Zm8=", "Zm9v", "Zm9vYg==", "Zm9vYmE=", "Zm9vYmFy"];
        for (n, want) in expected.iter().enumerate() {
            assert_eq!(to_base64(&b"foobar"[..n]), *want);
        }
    }

    #[test]
    fn base32_rfc_vectors_decode() {
        for (n, text) in ["MY======", "MZXQ====", "MZXW6===", "MZXW6YQ=", "MZXW6YTB"]
            .iter()
            .enumerate()
        {
            assert_eq!(from_base32(text).unwrap(), &b"foobar"[..n + 1]);
        }
    }

    #[test]
    fn short_tail_is_padded_implicitly() {
        assert_eq!(from_base64("Zg").unwrap(), b"f");
        assert_eq!(from_base64("Zm8").unwrap(), b"fo");
        assert_eq!(from_base32("MZXW6").unwrap(), b"foo");
        assert_eq!(from_base32("MZXW6YQ").unwrap(), b"foob");
    }

    #[test]
    fn impossible_tail_length() {
        assert_eq!(
            from_base64("Zm9vY"),
            Err(CodecError::Length {
                format: Format::Base64,
                len: 5
            })
        );
        assert_eq!(
            from_base32("MZX"),
            Err(CodecError::Length {
                format: Format::Base32,
                len: 3
            })
        );
    }

    #[test]
    fn pad_outside_final_group() {
        assert_eq!(
            from_base64("Zg==Zm9v"),
            Err(CodecError::invalid_character(Format::Base64, b'=', 2))
        );
    }

    #[test]
    fn symbol_after_pad() {
        assert_eq!(
            from_base64("Zg=v"),
            Err(CodecError::invalid_character(Format::Base64, b'v', 3))
        );
    }

    #[test]
    fn pad_run_of_illegal_length() {
        assert_eq!(
            from_base64("Z==="),
            Err(CodecError::invalid_character(Format::Base64, b'=', 1))
        );
        assert_eq!(
            from_base64("Zm9v===="),
            Err(CodecError::invalid_character(Format::Base64, b'=', 4))
        );
        assert_eq!(
            from_base32("MZX====="),
            Err(CodecError::invalid_character(Format::Base32, b'=', 3))
        );
    }

    #[test]
    fn base16_has_no_padding() {
        assert_eq!(
            from_base16("0="),
            Err(CodecError::invalid_character(Format::Base16, b'=', 1))
        );
    }
}
