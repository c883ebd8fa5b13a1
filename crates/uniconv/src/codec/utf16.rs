//! UTF-16: one unit per BMP code point, surrogate pairs above U+FFFF.

use crate::codec::{
    Codec, CodePoint, HIGH_SURROGATE_BASE, LOW_SURROGATE_BASE, MAX_CODE_POINT, TEN_BIT_MASK,
    is_high_surrogate, is_low_surrogate, is_surrogate,
};
use crate::error::ConvertError;

/// The UTF-16 codec. Storage unit: `u16`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf16;

impl Codec for Utf16 {
    type Unit = u16;

    type Decoder<I>
        = Utf16Decoder<I>
    where
        I: Iterator<Item = u16>;

    type Encoder<I>
        = Utf16Encoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>;

    fn decoder<I>(src: I) -> Utf16Decoder<I>
    where
        I: Iterator<Item = u16>,
    {
        Utf16Decoder::new(src)
    }

    fn encoder<I>(points: I) -> Utf16Encoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>,
    {
        Utf16Encoder::new(points)
    }
}

/// Streaming UTF-16 decoder. A high surrogate consumes its low-surrogate
/// follower in the same step.
#[derive(Debug, Clone)]
pub struct Utf16Decoder<I> {
    src: I,
    offset: usize,
    failed: bool,
}

impl<I> Utf16Decoder<I> {
    pub(crate) fn new(src: I) -> Self {
        Self {
            src,
            offset: 0,
            failed: false,
        }
    }
}

impl<I> Iterator for Utf16Decoder<I>
where
    I: Iterator<Item = u16>,
{
    type Item = Result<CodePoint, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let unit = self.src.next()?;
        let start = self.offset;
        self.offset += 1;
        if is_high_surrogate(unit) {
            let Some(low) = self.src.next() else {
                self.failed = true;
                return Some(Err(ConvertError::MisplacedSurrogate {
                    unit,
                    offset: start,
                }));
            };
            self.offset += 1;
            if !is_low_surrogate(low) {
                self.failed = true;
                return Some(Err(ConvertError::MisplacedSurrogate {
                    unit: low,
                    offset: start + 1,
                }));
            }
            let value =
                ((CodePoint::from(unit) - HIGH_SURROGATE_BASE) << 10) | (CodePoint::from(low) & TEN_BIT_MASK);
            return Some(Ok(value));
        }
        let value = CodePoint::from(unit);
        if is_surrogate(value) {
            // A low surrogate with no preceding high surrogate.
            self.failed = true;
            return Some(Err(ConvertError::InvalidCodePoint {
                value,
                offset: start,
            }));
        }
        Some(Ok(value))
    }
}

/// Streaming UTF-16 encoder. Supplementary-plane code points occupy the
/// two-slot buffer as a high/low surrogate pair.
#[derive(Debug, Clone)]
pub struct Utf16Encoder<I> {
    points: I,
    buf: [u16; 2],
    len: u8,
    at: u8,
    pulled: usize,
    failed: bool,
}

impl<I> Utf16Encoder<I> {
    pub(crate) fn new(points: I) -> Self {
        Self {
            points,
            buf: [0; 2],
            len: 0,
            at: 0,
            pulled: 0,
            failed: false,
        }
    }
}

impl<I> Iterator for Utf16Encoder<I>
where
    I: Iterator<Item = Result<CodePoint, ConvertError>>,
{
    type Item = Result<u16, ConvertError>;

    #[allow(clippy::cast_possible_truncation)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if self.at < self.len {
            let unit = self.buf[usize::from(self.at)];
            self.at += 1;
            return Some(Ok(unit));
        }
        let value = match self.points.next()? {
            Ok(value) => value,
            Err(err) => {
                self.failed = true;
                return Some(Err(err));
            }
        };
        let point = self.pulled;
        self.pulled += 1;
        if value > MAX_CODE_POINT || is_surrogate(value) {
            self.failed = true;
            return Some(Err(ConvertError::InvalidCodePoint {
                value,
                offset: point,
            }));
        }
        if value >= 0x1_0000 {
            self.buf[0] = ((value >> 10) + HIGH_SURROGATE_BASE) as u16;
            self.buf[1] = ((value & TEN_BIT_MASK) + LOW_SURROGATE_BASE) as u16;
            self.len = 2;
        } else {
            self.buf[0] = value as u16;
            self.len = 1;
        }
        self.at = 1;
        Some(Ok(self.buf[0]))
    }
}
