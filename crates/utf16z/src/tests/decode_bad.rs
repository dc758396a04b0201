use std::{vec, vec::Vec};

use rstest::rstest;

use crate::{ByteCursor, CodePoints, DecodeError, decode_code_point};

#[rstest]
#[case::orphan_continuation(b"\x80\0", DecodeError::OrphanContinuation(0x80), 1)]
#[case::orphan_continuation_high(b"\xBF\0", DecodeError::OrphanContinuation(0xBF), 1)]
#[case::two_byte_cut_by_terminator(b"\xC3\0", DecodeError::BadContinuation(0), 1)]
#[case::two_byte_cut_by_slice_end(b"\xC3", DecodeError::BadContinuation(0), 1)]
#[case::two_byte_bad_tail(b"\xC3A\0", DecodeError::BadContinuation(b'A'), 1)]
#[case::overlong_ascii(b"\xC1\x81\0", DecodeError::Overlong(0x41), 2)]
#[case::overlong_nul(b"\xC0\x80\0", DecodeError::Overlong(0), 2)]
#[case::three_byte_bad_first_tail(b"\xE2A\xAC\0", DecodeError::BadContinuation(b'A'), 1)]
#[case::three_byte_bad_second_tail(b"\xE2\x82A\0", DecodeError::BadContinuation(b'A'), 1)]
#[case::three_byte_cut_short(b"\xE2\x82", DecodeError::BadContinuation(0), 1)]
#[case::overlong_three_byte(b"\xE0\x80\xAF\0", DecodeError::Overlong(0x2F), 3)]
#[case::reserved_surrogate_d800(b"\xED\xA0\x80\0", DecodeError::SurrogateCodePoint(0xD800), 3)]
#[case::reserved_surrogate_db7f(b"\xED\xAD\xBF\0", DecodeError::SurrogateCodePoint(0xDB7F), 3)]
#[case::reserved_surrogate_dc00(b"\xED\xB0\x80\0", DecodeError::SurrogateCodePoint(0xDC00), 3)]
#[case::reserved_surrogate_dfff(b"\xED\xBF\xBF\0", DecodeError::SurrogateCodePoint(0xDFFF), 3)]
#[case::noncharacter_fffe(b"\xEF\xBF\xBE\0", DecodeError::NonCharacter(0xFFFE), 3)]
#[case::noncharacter_ffff(b"\xEF\xBF\xBF\0", DecodeError::NonCharacter(0xFFFF), 3)]
#[case::four_byte_bad_tail(b"\xF0\x90\x80A\0", DecodeError::BadContinuation(b'A'), 1)]
#[case::overlong_four_byte(b"\xF0\x80\x80\xAF\0", DecodeError::Overlong(0x2F), 4)]
#[case::above_unicode_range(b"\xF4\x90\x80\x80\0", DecodeError::OutOfRange(0x0011_0000), 4)]
#[case::five_byte_form(b"\xF8\x88\x80\x80\x80\0", DecodeError::ObsoleteForm(5), 5)]
#[case::five_byte_bad_tail(b"\xF8\x88A\x80\x80\0", DecodeError::BadContinuation(b'A'), 1)]
#[case::six_byte_form(b"\xFC\x84\x80\x80\x80\x80\0", DecodeError::ObsoleteForm(6), 6)]
#[case::six_byte_cut_short(b"\xFC\x84\x80\0", DecodeError::BadContinuation(0), 1)]
#[case::fe_lead(b"\xFE\x80\x80\x80\x80\x80\0", DecodeError::ObsoleteForm(6), 6)]
#[case::ff_lead(b"\xFF\x80\x80\x80\x80\x80\0", DecodeError::ObsoleteForm(6), 6)]
fn rejects_and_still_advances(
    #[case] source: &[u8],
    #[case] want: DecodeError,
    #[case] consumed: usize,
) {
    let mut cursor = ByteCursor::new(source);
    assert_eq!(decode_code_point(&mut cursor), Some(Err(want)));
    assert_eq!(cursor.pos(), consumed);
}

#[test]
fn resumes_at_the_point_of_failure() {
    // Only the lead byte is consumed on failure, so decoding restarts on the
    // first continuation byte rather than skipping ahead.
    let scalars: Vec<_> = CodePoints::new(b"\xE2\x82A\0").collect();
    assert_eq!(
        scalars,
        vec![
            Err(DecodeError::BadContinuation(b'A')),
            Err(DecodeError::OrphanContinuation(0x82)),
            Ok(0x41),
        ]
    );
}

#[test]
fn run_of_orphans_flags_each_byte() {
    let scalars: Vec<_> = CodePoints::new(b"\x80\x81\x82\0").collect();
    assert_eq!(
        scalars,
        vec![
            Err(DecodeError::OrphanContinuation(0x80)),
            Err(DecodeError::OrphanContinuation(0x81)),
            Err(DecodeError::OrphanContinuation(0x82)),
        ]
    );
}

#[test]
fn error_messages_name_the_offender() {
    use std::string::ToString;

    let err = DecodeError::OrphanContinuation(0x80);
    assert_eq!(err.to_string(), "orphaned continuation byte 0x80");
    let err = DecodeError::SurrogateCodePoint(0xD800);
    assert_eq!(err.to_string(), "reserved surrogate code point U+D800");
    let err = DecodeError::ObsoleteForm(6);
    assert_eq!(err.to_string(), "obsolete 6-byte form");
}
