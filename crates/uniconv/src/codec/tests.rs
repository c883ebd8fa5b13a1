use alloc::{vec, vec::Vec};

use rstest::rstest;

use super::utf8::{Utf8Decoder, Utf8Encoder};
use super::utf16::Utf16Encoder;
use crate::{ConvertError, Utf8, Utf16, Utf32, convert_from};

fn utf8_units(cp: u32) -> Vec<u8> {
    Utf8Encoder::new(core::iter::once(Ok(cp)))
        .collect::<Result<_, _>>()
        .unwrap()
}

fn utf16_units(cp: u32) -> Vec<u16> {
    Utf16Encoder::new(core::iter::once(Ok(cp)))
        .collect::<Result<_, _>>()
        .unwrap()
}

#[rstest]
#[case(0x24, vec![0x24])]
#[case(0x7F, vec![0x7F])]
#[case(0x80, vec![0xC2, 0x80])]
#[case(0x7FF, vec![0xDF, 0xBF])]
#[case(0x800, vec![0xE0, 0xA0, 0x80])]
#[case(0xFFFF, vec![0xEF, 0xBF, 0xBF])]
#[case(0x1_0000, vec![0xF0, 0x90, 0x80, 0x80])]
#[case(0x10_FFFF, vec![0xF4, 0x8F, 0xBF, 0xBF])]
fn utf8_boundary_code_points_encode_to_exact_bytes(#[case] cp: u32, #[case] bytes: Vec<u8>) {
    assert_eq!(utf8_units(cp), bytes);
}

#[rstest]
#[case(0xFFFF, vec![0xFFFF])]
#[case(0x1_0000, vec![0xD800, 0xDC00])]
#[case(0x10_FFFF, vec![0xDBFF, 0xDFFF])]
fn utf16_surrogate_boundary(#[case] cp: u32, #[case] units: Vec<u16>) {
    assert_eq!(utf16_units(cp), units);
}

#[test]
fn utf8_decodes_multi_byte_sequences() {
    // "κό" plus a supplementary-plane point.
    let bytes = [0xCE, 0xBA, 0xCF, 0x8C, 0xF0, 0x9F, 0x99, 0x82];
    let points = convert_from::<Utf32, Utf8>(&bytes).unwrap();
    assert_eq!(points, [0x03BA, 0x03CC, 0x1F642]);
}

#[test]
fn lone_continuation_byte_is_invalid_encoding() {
    let err = convert_from::<Utf32, Utf8>(&[0x80]).unwrap_err();
    assert_eq!(err, ConvertError::InvalidEncoding { byte: 0x80, offset: 0 });
}

#[test]
fn truncated_utf8_sequence_is_invalid_encoding() {
    let err = convert_from::<Utf32, Utf8>(&[0x41, 0xE2, 0x82]).unwrap_err();
    assert_eq!(err, ConvertError::InvalidEncoding { byte: 0xE2, offset: 1 });
}

#[test]
fn lone_high_surrogate_is_misplaced() {
    let err = convert_from::<Utf32, Utf16>(&[0xD800]).unwrap_err();
    assert_eq!(
        err,
        ConvertError::MisplacedSurrogate { unit: 0xD800, offset: 0 }
    );
}

#[test]
fn high_surrogate_with_invalid_follower_is_misplaced() {
    let err = convert_from::<Utf32, Utf16>(&[0xD800, 0x0041]).unwrap_err();
    assert_eq!(
        err,
        ConvertError::MisplacedSurrogate { unit: 0x0041, offset: 1 }
    );
}

#[test]
fn lone_low_surrogate_is_invalid_code_point() {
    let err = convert_from::<Utf32, Utf16>(&[0xDC00]).unwrap_err();
    assert_eq!(
        err,
        ConvertError::InvalidCodePoint { value: 0xDC00, offset: 0 }
    );
}

#[test]
fn utf16_decodes_pairs_and_singles_mixed() {
    let units = [0x0048, 0xD83D, 0xDE42, 0x0021];
    let points = convert_from::<Utf32, Utf16>(&units).unwrap();
    assert_eq!(points, [0x48, 0x1F642, 0x21]);
}

#[test]
fn utf32_passes_invalid_values_through_unvalidated() {
    // Deliberate asymmetry: the UTF-32 lanes do not validate.
    let raw = [0xD800, 0x0041, 0x11_0000];
    let out = convert_from::<Utf32, Utf32>(&raw).unwrap();
    assert_eq!(out, raw);
}

#[test]
fn utf16_encoder_rejects_surrogate_code_points() {
    let err = convert_from::<Utf16, Utf32>(&[0x41, 0xD800]).unwrap_err();
    assert_eq!(
        err,
        ConvertError::InvalidCodePoint { value: 0xD800, offset: 1 }
    );
}

#[test]
fn utf8_encoder_rejects_out_of_range_code_points() {
    let err = convert_from::<Utf8, Utf32>(&[0x11_0000]).unwrap_err();
    assert_eq!(
        err,
        ConvertError::InvalidCodePoint { value: 0x11_0000, offset: 0 }
    );
}

#[test]
fn decoder_is_fused_after_an_error() {
    let mut decoder = Utf8Decoder::new([0x80u8, 0x41].into_iter());
    assert!(matches!(decoder.next(), Some(Err(_))));
    assert!(decoder.next().is_none());
    assert!(decoder.next().is_none());
}

#[test]
fn encoder_pulls_one_code_point_at_a_time() {
    // Three units for one point, then the next point starts.
    let points = [Ok(0x20AC), Ok(0x24)];
    let mut encoder = Utf8Encoder::new(points.into_iter());
    assert_eq!(encoder.next(), Some(Ok(0xE2)));
    assert_eq!(encoder.next(), Some(Ok(0x82)));
    assert_eq!(encoder.next(), Some(Ok(0xAC)));
    assert_eq!(encoder.next(), Some(Ok(0x24)));
    assert_eq!(encoder.next(), None);
}
