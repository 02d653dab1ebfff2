//! Format tags, their constant descriptors, and dispatch to the codecs.

use crate::alphabet::{self, Alphabet};
use crate::constants::PAD;
use crate::{base85, big_int, fixed_group, CodecError};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, trace};

/// One of the six supported text encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Format {
    Base16,
    Base32,
    Base58,
    Base62,
    Base64,
    Base85,
}

/// Constant description of a format.
///
/// `group_bytes` input bytes become exactly `group_symbols` symbols for the
/// block formats; the big-integer formats have no fixed grouping.
#[derive(Debug)]
pub struct Descriptor {
    pub radix: u32,
    pub alphabet: &'static Alphabet,
    pub group_bytes: Option<usize>,
    pub group_symbols: Option<usize>,
    pub pad: Option<u8>,
}

static BASE16: Descriptor = Descriptor {
    radix: 16,
    alphabet: &alphabet::BASE16,
    group_bytes: Some(1),
    group_symbols: Some(2),
    pad: None,
};

static BASE32: Descriptor = Descriptor {
    radix: 32,
    alphabet: &alphabet::BASE32,
    group_bytes: Some(5),
    group_symbols: Some(8),
    pad: Some(PAD),
};

static BASE58: Descriptor = Descriptor {
    radix: 58,
    alphabet: &alphabet::BASE58,
    group_bytes: None,
    group_symbols: None,
    pad: None,
};

static BASE62: Descriptor = Descriptor {
    radix: 62,
    alphabet: &alphabet::BASE62,
    group_bytes: None,
    group_symbols: None,
    pad: None,
};

static BASE64: Descriptor = Descriptor {
    radix: 64,
    alphabet: &alphabet::BASE64,
    group_bytes: Some(3),
    group_symbols: Some(4),
    pad: Some(PAD),
};

static BASE85: Descriptor = Descriptor {
    radix: 85,
    alphabet: &alphabet::BASE85,
    group_bytes: Some(4),
    group_symbols: Some(5),
    pad: None,
};

impl Format {
    pub const ALL: [Format; 6] = [
        Format::Base16,
        Format::Base32,
        Format::Base58,
        Format::Base62,
        Format::Base64,
        Format::Base85,
    ];

    pub fn descriptor(self) -> &'static Descriptor {
        match self {
            Format::Base16 => &BASE16,
            Format::Base32 => &BASE32,
            Format::Base58 => &BASE58,
            Format::Base62 => &BASE62,
            Format::Base64 => &BASE64,
            Format::Base85 => &BASE85,
        }
    }

    pub fn alphabet(self) -> &'static Alphabet {
        self.descriptor().alphabet
    }

    pub fn radix(self) -> u32 {
        self.descriptor().radix
    }

    /// Lower-case name, also used as the file extension.
    pub const fn name(self) -> &'static str {
        match self {
            Format::Base16 => "base16",
            Format::Base32 => "base32",
            Format::Base58 => "base58",
            Format::Base62 => "base62",
            Format::Base64 => "base64",
            Format::Base85 => "base85",
        }
    }

    pub const fn extension(self) -> &'static str {
        self.name()
    }

    /// What the format is typically used for.
    pub const fn description(self) -> &'static str {
        match self {
            Format::Base16 => "data dumps, hashes, memory addresses",
            Format::Base32 => "tokens, e.g. two-factor authentication secrets",
            Format::Base58 => "cryptocurrency addresses, e.g. Bitcoin",
            Format::Base62 => "links, URLs, unique identifiers",
            Format::Base64 => "email attachments, APIs, embedded images",
            Format::Base85 => "PDF, PostScript, compact binary text",
        }
    }

    pub fn from_radix(radix: u32) -> Result<Self, CodecError> {
        Format::ALL
            .into_iter()
            .find(|format| format.radix() == radix)
            .ok_or_else(|| CodecError::UnsupportedFormat(radix.to_string()))
    }

    /// Picks the format named by the final extension of `path`, e.g.
    /// `notes.txt.base64`.
    pub fn from_extension(path: impl AsRef<Path>) -> Result<Self, CodecError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| CodecError::UnsupportedFormat(path.display().to_string()))?;
        Format::ALL
            .into_iter()
            .find(|format| extension.eq_ignore_ascii_case(format.extension()))
            .ok_or_else(|| CodecError::UnsupportedFormat(extension.to_string()))
    }

    pub fn encode(self, payload: &[u8]) -> Result<String, CodecError> {
        trace!(format = %self, len = payload.len(), "encoding payload");
        match self {
            Format::Base16 | Format::Base32 | Format::Base64 => {
                Ok(fixed_group::encode(payload, self))
            }
            Format::Base58 | Format::Base62 => big_int::encode(payload, self),
            Format::Base85 => Ok(base85::to_base85(payload)),
        }
    }

    pub fn decode(self, text: impl AsRef<[u8]>) -> Result<Vec<u8>, CodecError> {
        let text = text.as_ref();
        trace!(format = %self, len = text.len(), "decoding text");
        let decoded = match self {
            Format::Base16 | Format::Base32 | Format::Base64 => fixed_group::decode(text, self),
            Format::Base58 | Format::Base62 => big_int::decode(text, self),
            Format::Base85 => base85::from_base85(text),
        };
        if let Err(err) = &decoded {
            debug!(format = %self, %err, "decoding failed");
        }
        decoded
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Accepts `base64`, `b64` or `64` in any case.
impl FromStr for Format {
    type Err = CodecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let digits = lower
            .strip_prefix("base")
            .or_else(|| lower.strip_prefix('b'))
            .unwrap_or(lower.as_str());
        digits
            .parse::<u32>()
            .ok()
            .and_then(|radix| Format::from_radix(radix).ok())
            .ok_or_else(|| CodecError::UnsupportedFormat(s.to_string()))
    }
}
