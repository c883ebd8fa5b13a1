//! The convert entry points.
//!
//! Four call shapes, differing only in how the source range is bounded: a
//! slice bounded by its own length, a nul-terminated iterator, an iterator
//! with an explicit count, and a plain finite iterator. All of them build
//! one [`Transcoder`], drain it into a fresh `Vec`, and abort on the first
//! error; the source is never mutated. For other destination containers,
//! drive a [`Transcoder`] directly and `collect()` into whatever implements
//! `FromIterator`.

use alloc::vec::Vec;

use crate::codec::{Codec, SelectCodec};
use crate::error::ConvertError;
use crate::transcoder::Transcoder;

/// Converts a whole slice, resolving the source codec from its unit type.
///
/// ```rust
/// use uniconv::{Utf32, convert};
///
/// let points = convert::<Utf32, _>("h\u{00E9}!".as_bytes()).unwrap();
/// assert_eq!(points, [0x68, 0xE9, 0x21]);
/// ```
///
/// # Errors
///
/// The first malformed sequence or unrepresentable code point aborts the
/// conversion; see [`ConvertError`].
pub fn convert<To, U>(src: &[U]) -> Result<Vec<To::Unit>, ConvertError>
where
    To: Codec,
    U: SelectCodec,
{
    Transcoder::<To, U::Codec, _>::new(src.iter().copied()).collect()
}

/// Converts a whole slice with an explicitly named source codec.
///
/// # Errors
///
/// See [`ConvertError`].
pub fn convert_from<To, From>(src: &[From::Unit]) -> Result<Vec<To::Unit>, ConvertError>
where
    To: Codec,
    From: Codec,
{
    Transcoder::<To, From, _>::new(src.iter().copied()).collect()
}

/// Converts any finite iterator of storage units.
///
/// # Errors
///
/// See [`ConvertError`].
pub fn convert_iter<To, U>(src: impl IntoIterator<Item = U>) -> Result<Vec<To::Unit>, ConvertError>
where
    To: Codec,
    U: SelectCodec,
{
    Transcoder::<To, U::Codec, _>::new(src.into_iter()).collect()
}

/// Converts at most `count` storage units from an iterator. A shorter
/// source simply ends early.
///
/// # Errors
///
/// See [`ConvertError`].
pub fn convert_n<To, U>(
    src: impl IntoIterator<Item = U>,
    count: usize,
) -> Result<Vec<To::Unit>, ConvertError>
where
    To: Codec,
    U: SelectCodec,
{
    Transcoder::<To, U::Codec, _>::new(src.into_iter().take(count)).collect()
}

/// Converts up to (and excluding) the first [`Unit::NUL`]. Units after the
/// terminator are never read.
///
/// The source may be unbounded; the caller must guarantee a terminator
/// exists or this will not return.
///
/// # Errors
///
/// See [`ConvertError`].
pub fn convert_nul<To, U>(src: impl IntoIterator<Item = U>) -> Result<Vec<To::Unit>, ConvertError>
where
    To: Codec,
    U: SelectCodec,
{
    Transcoder::<To, U::Codec, _>::new(src.into_iter().take_while(|unit| !unit.is_nul())).collect()
}
