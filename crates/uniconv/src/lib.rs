//! Composable transcoding between narrow, wide, UTF-8, UTF-16 and UTF-32
//! text.
//!
//! Each encoding is a [`Codec`]: a storage-unit type paired with a streaming
//! decoder (units → code points) and encoder (code points → units). A
//! [`Transcoder`] nests any decoder inside any encoder, converting directly
//! between two encodings while buffering at most one code point's encoded
//! output. The [`convert`] family drives a transcoder over a slice, a
//! nul-terminated sequence, a counted iterator, or a plain iterator range.
//!
//! ```rust
//! use uniconv::{Utf16, convert};
//!
//! let units = convert::<Utf16, _>("gr\u{00FC}n".as_bytes()).unwrap();
//! assert_eq!(units, [0x67, 0x72, 0xFC, 0x6E]);
//! ```
//!
//! The narrow codec routes through a process-wide [`CodePage`] table, which
//! defaults to [`Latin1`] until [`set_code_page`] installs another one.

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

pub mod codec;
mod codepage;
mod convert;
mod error;
mod transcoder;
mod unit;

#[cfg(test)]
mod tests;

pub use codec::{Codec, CodePoint, MAX_CODE_POINT, SelectCodec};
pub use codec::{narrow::Narrow, utf8::Utf8, utf16::Utf16, utf32::Utf32, wide::Wide};
pub use codepage::{CodePage, Latin1, SlicedTable, active_code_page, set_code_page};
pub use convert::{convert, convert_from, convert_iter, convert_n, convert_nul};
pub use error::{ConvertError, SetCodePageError};
pub use transcoder::Transcoder;
pub use unit::{NarrowUnit, Unit, WideChar, WideUnit};
