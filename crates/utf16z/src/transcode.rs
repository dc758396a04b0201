//! The surrogate encoder and bounded writer.
//!
//! Drives the decoder over a null-terminated source and writes 16-bit units
//! into a caller-owned destination. The destination capacity is expressed in
//! **bytes** — the caller-facing contract sizes the buffer with
//! `size_of_val` — and is converted to a unit budget internally, with one
//! unit reserved for the terminator before the loop starts.

use core::mem;

use crate::{cursor::ByteCursor, decode::decode_code_point};

/// Unit substituted for every sequence the decoder rejects: `'?'`.
pub const REPLACEMENT: u16 = b'?' as u16;

const UNIT: usize = mem::size_of::<u16>();

/// Transcodes the null-terminated UTF-8 string `source` into `dest`,
/// truncating at the capacity and always null-terminating.
///
/// `dest_size_bytes` is the destination capacity in bytes; the effective
/// content budget is `dest_size_bytes / 2 − 1` units (clamped to the length
/// of `dest`), the last unit being reserved for the terminator. The writer
/// stops at the source terminator or when the budget runs out, whichever
/// comes first. A scalar above U+FFFF is written as a surrogate pair only
/// when both halves fit; the output never ends in a dangling high surrogate.
/// Rejected sequences are written as [`REPLACEMENT`].
///
/// If the capacity cannot hold even the terminator (`dest_size_bytes < 2` or
/// `dest` is empty), nothing is written.
///
/// # Examples
///
/// ```rust
/// use utf16z::transcode;
///
/// let mut out = [0u16; 4];
/// // 6 bytes of capacity: two content units plus the terminator.
/// transcode(b"ABC\0", &mut out, 6);
/// assert_eq!(out, [0x41, 0x42, 0x0000, 0x0000]);
/// ```
pub fn transcode(source: &[u8], dest: &mut [u16], dest_size_bytes: usize) {
    let units = (dest_size_bytes / UNIT).min(dest.len());
    let Some(budget) = units.checked_sub(1) else {
        return;
    };

    let mut cursor = ByteCursor::new(source);
    let mut at = 0;
    while at < budget {
        let Some(decoded) = decode_code_point(&mut cursor) else {
            break;
        };
        let scalar = decoded.unwrap_or(u32::from(REPLACEMENT));

        if let Ok(unit) = u16::try_from(scalar) {
            dest[at] = unit;
            at += 1;
        } else {
            if budget - at < 2 {
                // Not enough room for the pair; stop before the high half.
                break;
            }
            let value = scalar - 0x10000;
            dest[at] = 0xD800 + ((value >> 10) & 0x3FF) as u16;
            dest[at + 1] = 0xDC00 + (value & 0x3FF) as u16;
            at += 2;
        }
    }

    dest[at] = 0;
}
