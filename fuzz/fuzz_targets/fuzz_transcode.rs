#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf16z::{ByteCursor, decode_code_point, transcode};

const SENTINEL: u16 = 0xABAB;

#[derive(Arbitrary, Debug)]
struct Case {
    source: Vec<u8>,
    cap_bytes: u16,
}

fuzz_target!(|case: Case| {
    let mut dest = vec![SENTINEL; 128];
    let cap_bytes = (case.cap_bytes as usize) % (dest.len() * 2 + 16);
    transcode(&case.source, &mut dest, cap_bytes);

    // Nothing beyond the unit budget may be touched, and any budget of at
    // least one unit must contain a terminator.
    let units = (cap_bytes / 2).min(dest.len());
    assert!(dest[units..].iter().all(|&unit| unit == SENTINEL));
    if units > 0 {
        let end = dest[..units]
            .iter()
            .position(|&unit| unit == 0)
            .expect("missing terminator");

        // The content never ends in the high half of a split pair: a high
        // surrogate immediately before the terminator must be a lone
        // surrogate scalar the source spelled out itself (three-byte form),
        // never the first half of a four-byte scalar.
        if let Some(&last) = dest[..end].last() {
            if (0xD800..=0xDBFF).contains(&last) {
                let mut saw_three_byte_surrogate = false;
                let mut cursor = ByteCursor::new(&case.source);
                while let Some(decoded) = decode_code_point(&mut cursor) {
                    if decoded == Ok(u32::from(last)) {
                        saw_three_byte_surrogate = true;
                        break;
                    }
                }
                assert!(saw_three_byte_surrogate, "dangling high surrogate");
            }
        }
    }

    // The decoder always makes forward progress, 1 to 6 bytes per call.
    let mut cursor = ByteCursor::new(&case.source);
    loop {
        let before = cursor.pos();
        if decode_code_point(&mut cursor).is_none() {
            break;
        }
        let consumed = cursor.pos() - before;
        assert!((1..=6).contains(&consumed), "consumed {consumed} bytes");
    }
});
