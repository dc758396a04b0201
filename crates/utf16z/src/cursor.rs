//! Byte cursor over a null-terminated source string.
//!
//! The original contract hands the decoder a pointer that is advanced past
//! however many bytes each call consumed, even on failure. [`ByteCursor`]
//! keeps that contract without pointer arithmetic: an immutable byte view
//! plus a forward-only position.

use core::fmt;

use bstr::BStr;

/// A forward-only cursor into a null-terminated byte string.
///
/// The end of the underlying slice acts as an implicit terminator: reads past
/// it yield `0`. A source missing its trailing NUL therefore still ends
/// cleanly, and a multi-byte sequence cut short by the end of the slice fails
/// its continuation check exactly as it would on a real NUL byte.
#[derive(Clone)]
pub struct ByteCursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Creates a cursor at the start of `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    /// Number of bytes consumed so far.
    #[must_use]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The unconsumed tail of the source.
    #[must_use]
    pub fn rest(&self) -> &'a [u8] {
        &self.bytes[self.pos..]
    }

    /// Reads the byte `offset` positions ahead without consuming anything.
    /// Past the end of the slice this reads `0`.
    pub(crate) fn byte_at(&self, offset: usize) -> u8 {
        self.bytes.get(self.pos + offset).copied().unwrap_or(0)
    }

    /// Moves the cursor forward. Callers only advance over bytes they have
    /// read through [`byte_at`](Self::byte_at), so the position never leaves
    /// the slice.
    pub(crate) fn advance(&mut self, n: usize) {
        self.pos += n;
    }
}

impl fmt::Debug for ByteCursor<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteCursor")
            .field("consumed", &BStr::new(&self.bytes[..self.pos]))
            .field("rest", &BStr::new(self.rest()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::ByteCursor;

    #[test]
    fn implicit_terminator_past_the_slice() {
        let cursor = ByteCursor::new(b"ab");
        assert_eq!(cursor.byte_at(0), b'a');
        assert_eq!(cursor.byte_at(2), 0);
        assert_eq!(cursor.byte_at(100), 0);
    }

    #[test]
    fn advance_moves_the_window() {
        let mut cursor = ByteCursor::new(b"abc\0");
        cursor.advance(2);
        assert_eq!(cursor.pos(), 2);
        assert_eq!(cursor.rest(), b"c\0");
        assert_eq!(cursor.byte_at(0), b'c');
    }
}
