//! Wide: the platform's native wide encoding.
//!
//! Nothing here re-implements an algorithm: wide *is* UTF-16 where
//! [`WideChar`] is 16-bit (Windows) and UTF-32 where it is 32-bit, so both
//! halves delegate to the matching Unicode codec through thin unwrap/rewrap
//! adapters over [`WideUnit`]. Which inner codec is used is fixed at compile
//! time.

use crate::codec::{Codec, CodePoint};
use crate::error::ConvertError;
use crate::unit::WideUnit;

#[cfg(windows)]
type InnerDecoder<I> = crate::codec::utf16::Utf16Decoder<I>;
#[cfg(not(windows))]
type InnerDecoder<I> = crate::codec::utf32::Utf32Decoder<I>;

#[cfg(windows)]
type InnerEncoder<I> = crate::codec::utf16::Utf16Encoder<I>;
#[cfg(not(windows))]
type InnerEncoder<I> = crate::codec::utf32::Utf32Encoder<I>;

/// The wide codec. Storage unit: [`WideUnit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Wide;

impl Codec for Wide {
    type Unit = WideUnit;

    type Decoder<I>
        = WideDecoder<I>
    where
        I: Iterator<Item = WideUnit>;

    type Encoder<I>
        = WideEncoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>;

    fn decoder<I>(src: I) -> WideDecoder<I>
    where
        I: Iterator<Item = WideUnit>,
    {
        WideDecoder::new(src)
    }

    fn encoder<I>(points: I) -> WideEncoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>,
    {
        WideEncoder::new(points)
    }
}

// Unwraps WideUnit to the raw width the inner codec expects.
#[derive(Debug, Clone)]
struct RawWide<I>(I);

impl<I> Iterator for RawWide<I>
where
    I: Iterator<Item = WideUnit>,
{
    type Item = crate::unit::WideChar;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(WideUnit::get)
    }
}

/// Streaming wide decoder: the platform-matching Unicode decoder over raw
/// wide units.
#[derive(Debug, Clone)]
pub struct WideDecoder<I> {
    inner: InnerDecoder<RawWide<I>>,
}

impl<I> WideDecoder<I> {
    pub(crate) fn new(src: I) -> Self {
        Self {
            inner: InnerDecoder::new(RawWide(src)),
        }
    }
}

impl<I> Iterator for WideDecoder<I>
where
    I: Iterator<Item = WideUnit>,
{
    type Item = Result<CodePoint, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

/// Streaming wide encoder: the platform-matching Unicode encoder, rewrapped
/// into [`WideUnit`]s.
#[derive(Debug, Clone)]
pub struct WideEncoder<I> {
    inner: InnerEncoder<I>,
}

impl<I> WideEncoder<I> {
    pub(crate) fn new(points: I) -> Self {
        Self {
            inner: InnerEncoder::new(points),
        }
    }
}

impl<I> Iterator for WideEncoder<I>
where
    I: Iterator<Item = Result<CodePoint, ConvertError>>,
{
    type Item = Result<WideUnit, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|result| result.map(WideUnit::new))
    }
}
