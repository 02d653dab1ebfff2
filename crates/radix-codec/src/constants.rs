/// Base16 symbols. Decoding accepts this case only.
pub const BASE16_SYMBOLS: &[u8; 16] = b"0123456789ABCDEF";

/// RFC 4648 Base32 symbols.
pub const BASE32_SYMBOLS: &[u8; 32] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Bitcoin Base58 symbols (no `0`, `O`, `I` or `l`).
pub const BASE58_SYMBOLS: &[u8; 58] =
    b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base62 symbols: digits, then upper case, then lower case.
pub const BASE62_SYMBOLS: &[u8; 62] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Standard base64 alphabet as a byte array.
pub const BASE64_SYMBOLS: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// The 85 consecutive ASCII characters from `!` (0x21) to `u` (0x75).
pub const BASE85_SYMBOLS: &[u8; 85] =
    b"!\"#$%&'()*+,-./0123456789:;<=>?@ABCDEFGHIJKLMNOPQRSTUVWXYZ[\\]^_`abcdefghijklmnopqrstu";

/// Padding character for Base32 and Base64.
pub const PAD: u8 = b'=';
