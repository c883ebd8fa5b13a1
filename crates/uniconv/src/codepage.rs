//! The injected codepage collaborator for the narrow codec.
//!
//! Tables come from outside this crate; the codecs only ever call
//! [`CodePage::decode_byte`] and [`CodePage::encode_code_point`]. A single
//! table can be installed process-wide with [`set_code_page`]; until then
//! [`Latin1`] is active. The slot is write-once and read-only afterwards, so
//! concurrent conversions need no locking.

use core::cell::UnsafeCell;
use core::sync::atomic::{AtomicU8, Ordering};

use crate::error::SetCodePageError;

/// A locale codepage: a read-only mapping between narrow bytes and Unicode
/// code points.
pub trait CodePage: Sync {
    /// Maps a narrow byte to its code point. Total: every byte decodes.
    fn decode_byte(&self, byte: u8) -> u32;

    /// Maps a code point to its narrow byte, or `None` when the codepage has
    /// no representation for it.
    fn encode_code_point(&self, code_point: u32) -> Option<u8>;
}

/// ISO-8859-1: bytes map to U+0000..=U+00FF verbatim. The default codepage.
#[derive(Debug, Clone, Copy, Default)]
pub struct Latin1;

impl CodePage for Latin1 {
    fn decode_byte(&self, byte: u8) -> u32 {
        u32::from(byte)
    }

    fn encode_code_point(&self, code_point: u32) -> Option<u8> {
        u8::try_from(code_point).ok()
    }
}

/// A codepage backed by prebuilt two-stage lookup tables.
///
/// Decode is a direct 256-entry lookup. Encode selects a 128-entry slice of
/// `to_byte` via `slice_index[code_point >> 7]` and indexes it with the low
/// 7 bits; a zero byte there means "no mapping" (except for U+0000 itself).
/// Table construction lives with the platform/locale layer, not here.
#[derive(Debug, Clone, Copy)]
pub struct SlicedTable {
    to_code_point: &'static [u32; 256],
    slice_index: &'static [u8],
    to_byte: &'static [u8],
}

impl SlicedTable {
    /// Wraps prebuilt tables. `slice_index` and `to_byte` may be shorter
    /// than the full code-point range; out-of-range lookups are unmappable.
    #[must_use]
    pub const fn new(
        to_code_point: &'static [u32; 256],
        slice_index: &'static [u8],
        to_byte: &'static [u8],
    ) -> Self {
        Self {
            to_code_point,
            slice_index,
            to_byte,
        }
    }
}

impl CodePage for SlicedTable {
    fn decode_byte(&self, byte: u8) -> u32 {
        self.to_code_point[usize::from(byte)]
    }

    fn encode_code_point(&self, code_point: u32) -> Option<u8> {
        let slice = *self.slice_index.get((code_point >> 7) as usize)?;
        let index = (usize::from(slice) << 7) | (code_point as usize & 0x7F);
        let byte = *self.to_byte.get(index)?;
        if byte == 0 && code_point != 0 {
            return None;
        }
        Some(byte)
    }
}

const UNSET: u8 = 0;
const SETTING: u8 = 1;
const SET: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(UNSET);

struct PageSlot(UnsafeCell<&'static dyn CodePage>);

// The cell is written exactly once, between the UNSET -> SETTING transition
// and the Release store of SET; readers only dereference after observing SET
// with Acquire.
unsafe impl Sync for PageSlot {}

static ACTIVE: PageSlot = PageSlot(UnsafeCell::new(&Latin1));

/// Installs the process-wide codepage used by the narrow codec.
///
/// May be called at most once; later calls fail with [`SetCodePageError`]
/// and leave the installed codepage untouched.
///
/// # Errors
///
/// Fails if a codepage was already installed (or is being installed on
/// another thread).
pub fn set_code_page(page: &'static dyn CodePage) -> Result<(), SetCodePageError> {
    if STATE
        .compare_exchange(UNSET, SETTING, Ordering::Acquire, Ordering::Relaxed)
        .is_err()
    {
        return Err(SetCodePageError(()));
    }
    unsafe {
        *ACTIVE.0.get() = page;
    }
    STATE.store(SET, Ordering::Release);
    Ok(())
}

/// The currently active codepage: the installed one, or [`Latin1`] before
/// any installation.
#[must_use]
pub fn active_code_page() -> &'static dyn CodePage {
    if STATE.load(Ordering::Acquire) == SET {
        unsafe { *ACTIVE.0.get() }
    } else {
        &Latin1
    }
}
