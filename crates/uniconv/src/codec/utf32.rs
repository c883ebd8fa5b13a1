//! UTF-32: identity pass-through, one unit per code point.
//!
//! Neither direction validates. This mirrors the other codecs' division of
//! labor: legacy and UTF-8/16 decoders validate on the way *in*, encoders on
//! the way *out*, so a UTF-32 hop in the middle never needs to re-check. The
//! consequence — raw `u32` buffers with surrogates or out-of-range values
//! survive a UTF-32 → UTF-32 conversion — is deliberate.

use crate::codec::{Codec, CodePoint};
use crate::error::ConvertError;

/// The UTF-32 codec. Storage unit: `u32`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf32;

impl Codec for Utf32 {
    type Unit = u32;

    type Decoder<I>
        = Utf32Decoder<I>
    where
        I: Iterator<Item = u32>;

    type Encoder<I>
        = Utf32Encoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>;

    fn decoder<I>(src: I) -> Utf32Decoder<I>
    where
        I: Iterator<Item = u32>,
    {
        Utf32Decoder::new(src)
    }

    fn encoder<I>(points: I) -> Utf32Encoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>,
    {
        Utf32Encoder::new(points)
    }
}

/// Pass-through decoder: every unit is already a code point.
#[derive(Debug, Clone)]
pub struct Utf32Decoder<I> {
    src: I,
}

impl<I> Utf32Decoder<I> {
    pub(crate) fn new(src: I) -> Self {
        Self { src }
    }
}

impl<I> Iterator for Utf32Decoder<I>
where
    I: Iterator<Item = u32>,
{
    type Item = Result<CodePoint, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.src.next().map(Ok)
    }
}

/// Pass-through encoder: emits each code point as one unit, forwarding
/// upstream decode errors.
#[derive(Debug, Clone)]
pub struct Utf32Encoder<I> {
    points: I,
    failed: bool,
}

impl<I> Utf32Encoder<I> {
    pub(crate) fn new(points: I) -> Self {
        Self {
            points,
            failed: false,
        }
    }
}

impl<I> Iterator for Utf32Encoder<I>
where
    I: Iterator<Item = Result<CodePoint, ConvertError>>,
{
    type Item = Result<u32, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let item = self.points.next()?;
        if item.is_err() {
            self.failed = true;
        }
        Some(item)
    }
}
