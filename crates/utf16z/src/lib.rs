//! Bounded transcoding of null-terminated UTF-8 byte strings into fixed-size,
//! null-terminated UTF-16 buffers.
//!
//! The engine is a single-pass, allocation-free transform over caller-owned
//! buffers. A [`ByteCursor`] walks the source one code point at a time via
//! [`decode_code_point`], advancing past consumed bytes even when decoding
//! fails so malformed input can never stall the caller. [`transcode`] drives
//! the decoder against a destination whose capacity is given in **bytes**
//! (the buffer holds 16-bit units), substitutes `'?'` for every rejected
//! sequence, never splits a surrogate pair across the capacity limit, and
//! always leaves the output null-terminated.
//!
//! Malformed input is an expected condition, not a failure: nothing here
//! returns an error to the caller of [`transcode`]. The [`DecodeError`]
//! taxonomy is for code that drives the decoder directly.
//!
//! # Examples
//!
//! ```rust
//! use utf16z::transcode;
//!
//! // A fixed display-name field; capacity is passed in bytes.
//! let mut field = [0u16; 8];
//! let cap = size_of_val(&field);
//! transcode(b"caf\xC3\xA9\0", &mut field, cap);
//! assert_eq!(&field[..5], &[0x63, 0x61, 0x66, 0xE9, 0x0000]);
//! ```
//!
//! Invalid sequences surface as literal `'?'` units:
//!
//! ```rust
//! use utf16z::transcode;
//!
//! let mut field = [0u16; 4];
//! let cap = size_of_val(&field);
//! transcode(b"\xC0\x80\0", &mut field, cap); // overlong NUL
//! assert_eq!(&field[..2], &[0x003F, 0x0000]);
//! ```
#![no_std]

#[cfg(test)]
extern crate std;

mod cursor;
mod decode;
mod details;
mod error;
mod transcode;

#[cfg(test)]
mod tests;

pub use cursor::ByteCursor;
pub use decode::{CodePoints, decode_code_point};
pub use details::{DeviceDetails, DeviceRole, NAME_UNITS};
pub use error::DecodeError;
pub use transcode::{REPLACEMENT, transcode};
