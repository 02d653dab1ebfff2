//! Buffers used by the radix codecs.
//!
//! The only buffer so far is [`Digits`], the growable accumulator behind the
//! Base58/Base62 big-integer conversion.

mod digits;

pub use digits::{AllocError, Digits};
