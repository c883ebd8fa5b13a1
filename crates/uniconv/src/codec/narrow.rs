//! Narrow: the platform's single-byte encoding, via the injected codepage.
//!
//! Both halves are pure table lookups; the codec performs no locale work of
//! its own. The [`Codec`] impl reads the process-wide table from
//! [`active_code_page`]; `with_page` constructors take an explicit table for
//! callers juggling more than one.

use crate::codec::{Codec, CodePoint};
use crate::codepage::{CodePage, active_code_page};
use crate::error::ConvertError;
use crate::unit::NarrowUnit;

/// The narrow (codepage) codec. Storage unit: [`NarrowUnit`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Narrow;

impl Codec for Narrow {
    type Unit = NarrowUnit;

    type Decoder<I>
        = NarrowDecoder<I>
    where
        I: Iterator<Item = NarrowUnit>;

    type Encoder<I>
        = NarrowEncoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>;

    fn decoder<I>(src: I) -> NarrowDecoder<I>
    where
        I: Iterator<Item = NarrowUnit>,
    {
        NarrowDecoder::new(src)
    }

    fn encoder<I>(points: I) -> NarrowEncoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>,
    {
        NarrowEncoder::new(points)
    }
}

/// Narrow decoder: a total 256-entry lookup, one unit per code point.
pub struct NarrowDecoder<I> {
    src: I,
    page: &'static dyn CodePage,
}

impl<I> NarrowDecoder<I> {
    pub(crate) fn new(src: I) -> Self {
        Self::with_page(src, active_code_page())
    }

    /// Decodes through `page` instead of the process-wide codepage.
    pub fn with_page(src: I, page: &'static dyn CodePage) -> Self {
        Self { src, page }
    }
}

impl<I> Iterator for NarrowDecoder<I>
where
    I: Iterator<Item = NarrowUnit>,
{
    type Item = Result<CodePoint, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        let unit = self.src.next()?;
        Some(Ok(self.page.decode_byte(unit.get())))
    }
}

/// Narrow encoder: one byte per code point, or
/// [`ConvertError::UnmappableCharacter`] when the codepage has none.
pub struct NarrowEncoder<I> {
    points: I,
    page: &'static dyn CodePage,
    failed: bool,
}

impl<I> NarrowEncoder<I> {
    pub(crate) fn new(points: I) -> Self {
        Self::with_page(points, active_code_page())
    }

    /// Encodes through `page` instead of the process-wide codepage.
    pub fn with_page(points: I, page: &'static dyn CodePage) -> Self {
        Self {
            points,
            page,
            failed: false,
        }
    }
}

impl<I> Iterator for NarrowEncoder<I>
where
    I: Iterator<Item = Result<CodePoint, ConvertError>>,
{
    type Item = Result<NarrowUnit, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let value = match self.points.next()? {
            Ok(value) => value,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };
        match self.page.encode_code_point(value) {
            Some(byte) => Some(Ok(NarrowUnit::new(byte))),
            None => {
                self.failed = true;
                Some(Err(ConvertError::UnmappableCharacter { value }))
            }
        }
    }
}
