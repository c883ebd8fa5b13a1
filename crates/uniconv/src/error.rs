use thiserror::Error;

/// A malformed unit sequence or unrepresentable code point observed during
/// conversion.
///
/// Every error aborts the entire conversion at the exact decode or encode
/// step that observed it; there is no partial output and no substitution.
/// Decode-side errors report the offset in source *units*; encode-side
/// [`InvalidCodePoint`](ConvertError::InvalidCodePoint) reports the offset
/// in *code points* pulled from the decoder.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConvertError {
    /// A UTF-8 sequence starts with a continuation byte, is truncated, or
    /// decodes to a value above U+10FFFF. `byte` is the lead byte of the
    /// offending sequence.
    #[error("invalid UTF-8 sequence starting with {byte:#04x} at unit offset {offset}")]
    InvalidEncoding {
        /// Lead byte of the malformed sequence.
        byte: u8,
        /// Unit offset of the lead byte in the source.
        offset: usize,
    },

    /// A decoded or to-be-encoded value lies in the surrogate band without
    /// being a paired surrogate, or exceeds U+10FFFF.
    #[error("invalid code point U+{value:04X} at offset {offset}")]
    InvalidCodePoint {
        /// The offending value.
        value: u32,
        /// Unit offset on decode, code-point offset on encode.
        offset: usize,
    },

    /// A UTF-16 high surrogate is not immediately followed by a low
    /// surrogate. `unit` is the high surrogate itself when the source ended,
    /// or the invalid follower otherwise.
    #[error("misplaced UTF-16 surrogate {unit:#06x} at unit offset {offset}")]
    MisplacedSurrogate {
        /// The offending unit.
        unit: u16,
        /// Unit offset of the offending unit in the source.
        offset: usize,
    },

    /// The active codepage has no byte for this code point.
    #[error("code point U+{value:04X} has no mapping in the active code page")]
    UnmappableCharacter {
        /// The unmappable code point.
        value: u32,
    },
}

/// Returned by [`set_code_page`](crate::set_code_page) when a codepage was
/// already installed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("a code page was already installed for this process")]
pub struct SetCodePageError(pub(crate) ());
