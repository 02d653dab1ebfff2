//! Alphabet tables and their reverse lookups.

use crate::constants::{
    BASE16_SYMBOLS, BASE32_SYMBOLS, BASE58_SYMBOLS, BASE62_SYMBOLS, BASE64_SYMBOLS,
    BASE85_SYMBOLS,
};

const NOT_FOUND: u8 = u8::MAX;

/// An ordered set of printable ASCII symbols, one per digit value.
///
/// The reverse table is built at compile time, so `index_of` is a single
/// array lookup. Building an alphabet from duplicate, non-printable or too
/// many symbols fails const evaluation.
///
/// # Example
///
/// ```
/// use radix_codec::alphabet::BASE58;
///
/// assert_eq!(BASE58.radix(), 58);
/// assert_eq!(BASE58.zero(), b'1');
/// assert_eq!(BASE58.index_of(b'A'), Some(9));
/// assert_eq!(BASE58.index_of(b'0'), None);
/// ```
#[derive(Debug)]
pub struct Alphabet {
    symbols: &'static [u8],
    index: [u8; 256],
}

impl Alphabet {
    pub const fn new(symbols: &'static [u8]) -> Self {
        assert!(symbols.len() >= 2, "an alphabet needs at least two symbols");
        assert!(symbols.len() < NOT_FOUND as usize, "too many symbols");

        let mut index = [NOT_FOUND; 256];
        let mut i = 0;
        while i < symbols.len() {
            let symbol = symbols[i];
            assert!(symbol.is_ascii_graphic(), "symbols must be printable ASCII");
            assert!(index[symbol as usize] == NOT_FOUND, "symbols must be distinct");
            index[symbol as usize] = i as u8;
            i += 1;
        }
        Self { symbols, index }
    }

    /// Number of symbols, which is also the numeric base.
    pub const fn radix(&self) -> u32 {
        self.symbols.len() as u32
    }

    pub const fn symbols(&self) -> &'static [u8] {
        self.symbols
    }

    /// The symbol standing for `digit`.
    ///
    /// # Panics
    ///
    /// Panics if `digit` is not below the radix.
    #[inline]
    pub fn symbol(&self, digit: u8) -> u8 {
        self.symbols[digit as usize]
    }

    /// The symbol for digit zero.
    pub const fn zero(&self) -> u8 {
        self.symbols[0]
    }

    /// Digit value of `symbol`, or `None` if it is not part of the alphabet.
    #[inline]
    pub fn index_of(&self, symbol: u8) -> Option<u8> {
        match self.index[symbol as usize] {
            NOT_FOUND => None,
            digit => Some(digit),
        }
    }

    pub fn contains(&self, symbol: u8) -> bool {
        self.index_of(symbol).is_some()
    }
}

pub static BASE16: Alphabet = Alphabet::new(BASE16_SYMBOLS);
pub static BASE32: Alphabet = Alphabet::new(BASE32_SYMBOLS);
pub static BASE58: Alphabet = Alphabet::new(BASE58_SYMBOLS);
pub static BASE62: Alphabet = Alphabet::new(BASE62_SYMBOLS);
pub static BASE64: Alphabet = Alphabet::new(BASE64_SYMBOLS);
pub static BASE85: Alphabet = Alphabet::new(BASE85_SYMBOLS);
