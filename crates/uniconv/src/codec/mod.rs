//! The five codecs and the traits tying them together.
//!
//! A [`Codec`] pairs a storage-unit type with two streaming halves: a
//! decoder turning units into code points and an encoder turning code points
//! back into units. Both halves are plain iterators so that a
//! [`Transcoder`](crate::Transcoder) can nest one inside the other without
//! any intermediate buffer.
//!
//! Decoders fuse after yielding an error: once a malformed sequence is
//! observed the stream is over, there is no resynchronization.

pub mod narrow;
pub mod utf8;
pub mod utf16;
pub mod utf32;
pub mod wide;

#[cfg(test)]
mod tests;

use crate::error::ConvertError;
use crate::unit::{NarrowUnit, Unit, WideUnit};

/// A decoded Unicode scalar value.
///
/// Kept as a bare `u32` rather than `char` so the UTF-32 codec can pass
/// values through unvalidated; every validating codec rejects surrogates and
/// values above [`MAX_CODE_POINT`] itself.
pub type CodePoint = u32;

/// The largest valid code point, U+10FFFF.
pub const MAX_CODE_POINT: CodePoint = 0x10_FFFF;

pub(crate) const HIGH_SURROGATE_BASE: u32 = 0xD7C0;
pub(crate) const LOW_SURROGATE_BASE: u32 = 0xDC00;
pub(crate) const TEN_BIT_MASK: u32 = 0x3FF;

#[inline]
pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xD800
}

#[inline]
pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    unit & 0xFC00 == 0xDC00
}

#[inline]
pub(crate) fn is_surrogate(value: u32) -> bool {
    value & 0xFFFF_F800 == 0xD800
}

/// One encoding: a storage-unit type plus its decode and encode state
/// machines.
pub trait Codec {
    /// The code-unit type this encoding stores text in.
    type Unit: Unit;

    /// Streaming decoder over a source of units.
    type Decoder<I>: Iterator<Item = Result<CodePoint, ConvertError>>
    where
        I: Iterator<Item = Self::Unit>;

    /// Streaming encoder over a source of code points.
    type Encoder<I>: Iterator<Item = Result<Self::Unit, ConvertError>>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>;

    /// Builds the decoder half over `src`.
    fn decoder<I>(src: I) -> Self::Decoder<I>
    where
        I: Iterator<Item = Self::Unit>;

    /// Builds the encoder half over `points`.
    fn encoder<I>(points: I) -> Self::Encoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>;
}

/// Maps a storage-unit type to its canonical codec, letting call sites omit
/// the source codec when the unit type makes it unambiguous.
///
/// Bare `u8` means UTF-8; narrow codepage text is explicitly typed as
/// [`NarrowUnit`], and wide text as [`WideUnit`].
pub trait SelectCodec: Unit {
    /// The canonical codec for this unit type.
    type Codec: Codec<Unit = Self>;
}

impl SelectCodec for u8 {
    type Codec = utf8::Utf8;
}

impl SelectCodec for u16 {
    type Codec = utf16::Utf16;
}

impl SelectCodec for u32 {
    type Codec = utf32::Utf32;
}

impl SelectCodec for NarrowUnit {
    type Codec = narrow::Narrow;
}

impl SelectCodec for WideUnit {
    type Codec = wide::Wide;
}
