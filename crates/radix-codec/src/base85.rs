//! Base85: every 4-byte block becomes 5 base-85 digits.
//!
//! A short final block is zero-filled before encoding and the text carries
//! no record of it, so [`from_base85`] always returns a multiple of 4 bytes.
//! When the payload length is known, [`from_base85_exact`] trims the fill.

use crate::alphabet::BASE85;
use crate::{CodecError, Format};

const BLOCK_BYTES: usize = 4;
const BLOCK_SYMBOLS: usize = 5;

fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Encodes bytes as Base85, 5 symbols per started 4-byte block.
///
/// # Example
///
/// ```
/// use radix_codec::to_base85;
///
/// assert_eq!(to_base85(&[0, 0, 0, 0]), "!!!!!");
/// assert_eq!(to_base85(b"Man "), "9jqo^");
/// ```
pub fn to_base85(payload: &[u8]) -> String {
    let mut text = String::with_capacity(payload.len().div_ceil(BLOCK_BYTES) * BLOCK_SYMBOLS);
    for block in payload.chunks(BLOCK_BYTES) {
        let mut bytes = [0u8; BLOCK_BYTES];
        bytes[..block.len()].copy_from_slice(block);
        let mut value = u32::from_be_bytes(bytes);

        let mut symbols = [0u8; BLOCK_SYMBOLS];
        for symbol in symbols.iter_mut().rev() {
            *symbol = BASE85.symbol((value % 85) as u8);
            value /= 85;
        }
        text.extend(symbols.iter().map(|&symbol| char::from(symbol)));
    }
    text
}

/// Decodes Base85, ignoring spaces, tabs and line breaks.
pub fn from_base85(text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
    let format = Format::Base85;
    let symbols: Vec<(usize, u8)> = text
        .as_ref()
        .iter()
        .copied()
        .enumerate()
        .filter(|&(_, byte)| !is_whitespace(byte))
        .collect();

    if symbols.len() % BLOCK_SYMBOLS != 0 {
        return Err(CodecError::Length {
            format,
            len: symbols.len(),
        });
    }

    let mut payload = Vec::with_capacity(symbols.len() / BLOCK_SYMBOLS * BLOCK_BYTES);
    for block in symbols.chunks_exact(BLOCK_SYMBOLS) {
        let mut value = 0u64;
        for &(offset, symbol) in block {
            let digit = BASE85
                .index_of(symbol)
                .ok_or_else(|| CodecError::invalid_character(format, symbol, offset))?;
            value = value * 85 + u64::from(digit);
        }
        let value = u32::try_from(value).map_err(|_| CodecError::Overflow {
            format,
            offset: block[0].0,
        })?;
        payload.extend_from_slice(&value.to_be_bytes());
    }
    Ok(payload)
}

/// Decodes Base85 produced from a payload of exactly `len` bytes.
///
/// The zero fill of the last block is dropped. Fails when `len` does not
/// fall within the final block or the dropped bytes are not zero.
///
/// # Example
///
/// ```
/// use radix_codec::{from_base85_exact, to_base85};
///
/// let text = to_base85(b"hello");
/// assert_eq!(text.len(), 10);
/// assert_eq!(from_base85_exact(&text, 5).unwrap(), b"hello");
/// ```
pub fn from_base85_exact(text: impl AsRef<[u8]>, len: usize) -> Result<Vec<u8>, CodecError> {
    let mut payload = from_base85(text)?;
    let mismatch = CodecError::LengthMismatch {
        decoded: payload.len(),
        requested: len,
    };
    if len > payload.len() || len + BLOCK_BYTES <= payload.len() {
        return Err(mismatch);
    }
    if payload[len..].iter().any(|&byte| byte != 0) {
        return Err(mismatch);
    }
    payload.truncate(len);
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_block() {
        assert_eq!(to_base85(&[0; 4]), "!!!!!");
        assert_eq!(from_base85("!!!!!").unwrap(), [0; 4]);
    }

    #[test]
    fn max_block() {
        assert_eq!(to_base85(&[0xFF; 4]), "s8W-!");
        assert_eq!(from_base85("s8W-!").unwrap(), [0xFF; 4]);
    }

    #[test]
    fn short_block_is_zero_filled() {
        assert_eq!(to_base85(&[0xFF]), to_base85(&[0xFF, 0, 0, 0]));
        assert_eq!(from_base85(to_base85(&[0xFF])).unwrap(), [0xFF, 0, 0, 0]);
    }

    #[test]
    fn skips_whitespace() {
        assert_eq!(
            from_base85(" 9jqo^\r\n\t!!!!!").unwrap(),
            [b'M', b'a', b'n', b' ', 0, 0, 0, 0]
        );
    }

    #[test]
    fn length_counts_only_symbols() {
        assert_eq!(
            from_base85("!!!! \n"),
            Err(CodecError::Length {
                format: Format::Base85,
                len: 4
            })
        );
    }

    #[test]
    fn invalid_character_reports_original_offset() {
        assert_eq!(
            from_base85(" !!!v!"),
            Err(CodecError::invalid_character(Format::Base85, b'v', 4))
        );
        assert_eq!(
            from_base85("!!z!!"),
            Err(CodecError::invalid_character(Format::Base85, b'z', 2))
        );
    }

    #[test]
    fn overflowing_block() {
        assert_eq!(
            from_base85("!!!!!uuuuu"),
            Err(CodecError::Overflow {
                format: Format::Base85,
                offset: 5
            })
        );
        // 85^5 - 1 overflows, "s8W-!" is u32::MAX, "s8W-\"" is one past it.
        assert!(from_base85("s8W-\"").is_err());
    }

    #[test]
    fn exact_length() {
        for len in 0..=9 {
            let payload: Vec<u8> = (1..=len as u8).collect();
            let text = to_base85(&payload);
            assert_eq!(from_base85_exact(&text, len).unwrap(), payload);
        }
    }

    #[test]
    fn exact_length_out_of_range() {
        let text = to_base85(b"abcde");
        assert_eq!(
            from_base85_exact(&text, 9),
            Err(CodecError::LengthMismatch {
                decoded: 8,
                requested: 9
            })
        );
        assert_eq!(
            from_base85_exact(&text, 4),
            Err(CodecError::LengthMismatch {
                decoded: 8,
                requested: 4
            })
        );
    }

    #[test]
    fn exact_length_refuses_to_drop_data() {
        let text = to_base85(b"abcdefg");
        assert!(matches!(
            from_base85_exact(&text, 5),
            Err(CodecError::LengthMismatch { .. })
        ));
    }
}
