//! Direct encoding-to-encoding conversion by cursor composition.

use crate::codec::Codec;
use crate::error::ConvertError;

/// A lazy, forward-only cursor over the destination units of a conversion.
///
/// `From`'s decoder is nested inside `To`'s encoder: each `next()` either
/// emits the next unit buffered for the current code point or pulls exactly
/// one more point from the decoder, which in turn advances over exactly one
/// encoded source sequence. No text is materialized in between — the only
/// buffer anywhere is the encoder's, holding one code point's units.
///
/// The transcoder is single-pass and fused after the first error; restart by
/// constructing a new one. It is finite iff the source iterator is finite.
///
/// ```rust
/// use uniconv::{Transcoder, Utf8, Utf16};
///
/// let greek = "\u{03BA}\u{03CC}\u{03C3}\u{03BC}\u{03B5}";
/// let units: Vec<u16> = Transcoder::<Utf16, Utf8, _>::new(greek.bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
/// assert_eq!(units, [0x03BA, 0x03CC, 0x03C3, 0x03BC, 0x03B5]);
/// ```
pub struct Transcoder<To, From, I>
where
    To: Codec,
    From: Codec,
    I: Iterator<Item = From::Unit>,
{
    units: To::Encoder<From::Decoder<I>>,
}

impl<To, From, I> Transcoder<To, From, I>
where
    To: Codec,
    From: Codec,
    I: Iterator<Item = From::Unit>,
{
    /// Binds a transcoder over a source of `From` units.
    pub fn new(src: I) -> Self {
        Self {
            units: To::encoder(From::decoder(src)),
        }
    }
}

impl<To, From, I> Iterator for Transcoder<To, From, I>
where
    To: Codec,
    From: Codec,
    I: Iterator<Item = From::Unit>,
{
    type Item = Result<To::Unit, ConvertError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.units.next()
    }
}
