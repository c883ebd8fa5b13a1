//! UTF-8: variable-length sequences of one to four bytes.
//!
//! Decoding derives the sequence length from the lead byte's run of leading
//! one bits, folds six bits out of each continuation byte, then masks off
//! the lead byte's length-marker bits. A lone continuation byte in lead
//! position, a sequence cut short by end of input, and any value decoding
//! above U+10FFFF are all [`ConvertError::InvalidEncoding`].

use crate::codec::{Codec, CodePoint, MAX_CODE_POINT};
use crate::error::ConvertError;

/// The UTF-8 codec. Storage unit: `u8`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8;

impl Codec for Utf8 {
    type Unit = u8;

    type Decoder<I>
        = Utf8Decoder<I>
    where
        I: Iterator<Item = u8>;

    type Encoder<I>
        = Utf8Encoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>;

    fn decoder<I>(src: I) -> Utf8Decoder<I>
    where
        I: Iterator<Item = u8>,
    {
        Utf8Decoder::new(src)
    }

    fn encoder<I>(points: I) -> Utf8Encoder<I>
    where
        I: Iterator<Item = Result<CodePoint, ConvertError>>,
    {
        Utf8Encoder::new(points)
    }
}

// Strips the lead byte's length-marker bits: the value of an N-byte sequence
// carries at most 7/11/16/21 payload bits.
const LENGTH_MASKS: [u32; 4] = [0x7F, 0x7FF, 0xFFFF, 0x1F_FFFF];

// Sequence length implied by a lead byte, clamped to 4 as in the classic
// bit-counting formulation. Continuation leads (one leading one) are
// rejected before this is consulted.
fn sequence_len(lead: u8) -> usize {
    match lead.leading_ones() as usize {
        0 => 1,
        n => n.min(4),
    }
}

/// Streaming UTF-8 decoder. Each `next()` consumes exactly one encoded
/// sequence from the source.
#[derive(Debug, Clone)]
pub struct Utf8Decoder<I> {
    src: I,
    offset: usize,
    failed: bool,
}

impl<I> Utf8Decoder<I> {
    pub(crate) fn new(src: I) -> Self {
        Self {
            src,
            offset: 0,
            failed: false,
        }
    }
}

impl<I> Iterator for Utf8Decoder<I>
where
    I: Iterator<Item = u8>,
{
    type Item = Result<CodePoint, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let lead = self.src.next()?;
        let start = self.offset;
        self.offset += 1;
        if lead & 0x80 == 0 {
            return Some(Ok(CodePoint::from(lead)));
        }
        if lead & 0xC0 == 0x80 {
            self.failed = true;
            return Some(Err(ConvertError::InvalidEncoding {
                byte: lead,
                offset: start,
            }));
        }
        let len = sequence_len(lead);
        let mut value = CodePoint::from(lead);
        for _ in 1..len {
            let Some(byte) = self.src.next() else {
                self.failed = true;
                return Some(Err(ConvertError::InvalidEncoding {
                    byte: lead,
                    offset: start,
                }));
            };
            self.offset += 1;
            value = (value << 6) | CodePoint::from(byte & 0x3F);
        }
        value &= LENGTH_MASKS[len - 1];
        if value > MAX_CODE_POINT {
            self.failed = true;
            return Some(Err(ConvertError::InvalidEncoding {
                byte: lead,
                offset: start,
            }));
        }
        Some(Ok(value))
    }
}

/// Streaming UTF-8 encoder. Buffers the one to four bytes of the current
/// code point and pulls the next point only once they are drained.
#[derive(Debug, Clone)]
pub struct Utf8Encoder<I> {
    points: I,
    buf: [u8; 4],
    len: u8,
    at: u8,
    pulled: usize,
    failed: bool,
}

impl<I> Utf8Encoder<I> {
    pub(crate) fn new(points: I) -> Self {
        Self {
            points,
            buf: [0; 4],
            len: 0,
            at: 0,
            pulled: 0,
            failed: false,
        }
    }
}

impl<I> Iterator for Utf8Encoder<I>
where
    I: Iterator<Item = Result<CodePoint, ConvertError>>,
{
    type Item = Result<u8, ConvertError>;

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
        if value > MAX_CODE_POINT {
            self.failed = true;
            return Some(Err(ConvertError::InvalidCodePoint {
                value,
                offset: point,
            }));
        }
        self.len = encode(value, &mut self.buf);
        self.at = 1;
        Some(Ok(self.buf[0]))
    }
}

// Standard bit packing for the four magnitude ranges. The caller has already
// rejected values above U+10FFFF.
#[allow(clippy::cast_possible_truncation)]
fn encode(value: CodePoint, buf: &mut [u8; 4]) -> u8 {
    debug_assert!(value <= MAX_CODE_POINT);
    if value < 0x80 {
        buf[0] = value as u8;
        1
    } else if value < 0x800 {
        buf[0] = 0xC0 | (value >> 6) as u8;
        buf[1] = 0x80 | (value & 0x3F) as u8;
        2
    } else if value < 0x1_0000 {
        buf[0] = 0xE0 | (value >> 12) as u8;
        buf[1] = 0x80 | ((value >> 6) & 0x3F) as u8;
        buf[2] = 0x80 | (value & 0x3F) as u8;
        3
    } else {
        buf[0] = 0xF0 | (value >> 18) as u8;
        buf[1] = 0x80 | ((value >> 12) & 0x3F) as u8;
        buf[2] = 0x80 | ((value >> 6) & 0x3F) as u8;
        buf[3] = 0x80 | (value & 0x3F) as u8;
        4
    }
}
