//! Storage-unit types shared by all codecs.
//!
//! The Unicode codecs store text in plain `u8`/`u16`/`u32` code units. The
//! platform-native encodings use distinct newtypes so the codec resolver can
//! tell narrow (codepage) bytes apart from UTF-8 bytes, and wide units apart
//! from whichever Unicode width they happen to share.

use core::fmt;

/// The platform's native wide-character width: 16-bit on Windows, 32-bit
/// elsewhere. Resolved once at compile time; there is no runtime branching.
#[cfg(windows)]
pub type WideChar = u16;
/// The platform's native wide-character width: 16-bit on Windows, 32-bit
/// elsewhere. Resolved once at compile time; there is no runtime branching.
#[cfg(not(windows))]
pub type WideChar = u32;

/// A fixed-width code unit of some encoding.
///
/// `NUL` is the terminator value recognized by
/// [`convert_nul`](crate::convert_nul).
pub trait Unit: Copy + Eq + fmt::Debug {
    /// The zero unit, used as the sequence terminator.
    const NUL: Self;

    /// Whether this unit is the terminator.
    #[inline]
    fn is_nul(self) -> bool {
        self == Self::NUL
    }
}

impl Unit for u8 {
    const NUL: Self = 0;
}

impl Unit for u16 {
    const NUL: Self = 0;
}

impl Unit for u32 {
    const NUL: Self = 0;
}

/// One unit of narrow text in the active codepage encoding.
///
/// Deliberately not interchangeable with `u8`: a bare byte slice resolves to
/// the UTF-8 codec, narrow text must be explicitly typed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct NarrowUnit(u8);

impl NarrowUnit {
    /// Wraps a raw codepage byte.
    #[must_use]
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }

    /// The raw codepage byte.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl From<u8> for NarrowUnit {
    fn from(byte: u8) -> Self {
        Self(byte)
    }
}

impl Unit for NarrowUnit {
    const NUL: Self = Self(0);
}

/// One unit of wide text in the platform's native wide encoding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct WideUnit(WideChar);

impl WideUnit {
    /// Wraps a raw wide character unit.
    #[must_use]
    pub const fn new(unit: WideChar) -> Self {
        Self(unit)
    }

    /// The raw wide character unit.
    #[must_use]
    pub const fn get(self) -> WideChar {
        self.0
    }
}

impl From<WideChar> for WideUnit {
    fn from(unit: WideChar) -> Self {
        Self(unit)
    }
}

impl Unit for WideUnit {
    const NUL: Self = Self(0);
}
