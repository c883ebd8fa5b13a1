use alloc::vec::Vec;

use crate::codec::narrow::{NarrowDecoder, NarrowEncoder};
use crate::codepage::tests::PRIVATE_USE_TABLE;
use crate::{
    ConvertError, Latin1, Narrow, NarrowUnit, Utf8, Wide, WideUnit, convert, convert_from,
    set_code_page,
};

fn narrow(bytes: &[u8]) -> Vec<NarrowUnit> {
    bytes.iter().copied().map(NarrowUnit::new).collect()
}

#[test]
fn narrow_decodes_through_the_default_latin1_codepage() {
    let out = convert_from::<Utf8, Narrow>(&narrow(b"caf\xE9")).unwrap();
    assert_eq!(out, "caf\u{00E9}".as_bytes());
}

#[test]
fn narrow_encode_maps_into_the_codepage() {
    let out = convert_from::<Narrow, Utf8>("caf\u{00E9}".as_bytes()).unwrap();
    assert_eq!(out, narrow(b"caf\xE9"));
}

#[test]
fn narrow_encode_reports_unmappable_characters() {
    let err = convert_from::<Narrow, Utf8>("a\u{1F642}".as_bytes()).unwrap_err();
    assert_eq!(err, ConvertError::UnmappableCharacter { value: 0x1F642 });
}

#[test]
fn narrow_resolves_from_the_unit_type() {
    let out = convert::<Utf8, _>(narrow(b"ok").as_slice()).unwrap();
    assert_eq!(out, b"ok");
}

// The one place allowed to install the process-wide codepage. Installing
// Latin-1 keeps every other test's narrow expectations valid regardless of
// ordering.
#[test]
fn code_page_installs_exactly_once() {
    static PAGE: Latin1 = Latin1;
    set_code_page(&PAGE).unwrap();
    assert!(set_code_page(&PAGE).is_err());
    assert_eq!(crate::active_code_page().decode_byte(0xE9), 0xE9);
}

#[test]
fn explicit_page_construction_bypasses_the_global_slot() {
    let decoded: Vec<u32> =
        NarrowDecoder::with_page(narrow(&[0x41, 0x42]).into_iter(), &PRIVATE_USE_TABLE)
            .collect::<Result<_, _>>()
            .unwrap();
    assert_eq!(decoded, [0xF041, 0xF042]);

    let encoded: Vec<NarrowUnit> = NarrowEncoder::with_page(
        decoded.iter().copied().map(Ok),
        &PRIVATE_USE_TABLE,
    )
    .collect::<Result<_, _>>()
    .unwrap();
    assert_eq!(encoded, narrow(&[0x41, 0x42]));
}

#[test]
fn explicit_page_encode_reports_unmappable_characters() {
    let err = NarrowEncoder::with_page(core::iter::once(Ok(0x41)), &PRIVATE_USE_TABLE)
        .collect::<Result<Vec<_>, _>>()
        .unwrap_err();
    assert_eq!(err, ConvertError::UnmappableCharacter { value: 0x41 });
}

#[test]
fn wide_round_trips_utf8_text() {
    let original = "Pr\u{00FC}fung \u{1F642}".as_bytes();
    let wide = convert_from::<Wide, Utf8>(original).unwrap();
    let back = convert_from::<Utf8, Wide>(&wide).unwrap();
    assert_eq!(back, original);
}

#[cfg(not(windows))]
#[test]
fn wide_units_are_one_per_code_point_on_this_platform() {
    let wide = convert_from::<Wide, Utf8>("\u{1F642}".as_bytes()).unwrap();
    assert_eq!(wide, [WideUnit::new(0x1F642)]);
}

#[cfg(windows)]
#[test]
fn wide_units_are_surrogate_pairs_on_this_platform() {
    let wide = convert_from::<Wide, Utf8>("\u{1F642}".as_bytes()).unwrap();
    assert_eq!(wide, [WideUnit::new(0xD83D), WideUnit::new(0xDE42)]);
}

#[test]
fn wide_resolves_from_the_unit_type() {
    let units: Vec<WideUnit> = "hi".chars().map(|ch| WideUnit::new(ch as _)).collect();
    let out = convert::<Utf8, _>(units.as_slice()).unwrap();
    assert_eq!(out, b"hi");
}
