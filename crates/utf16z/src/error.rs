use thiserror::Error;

/// Why a byte sequence failed to decode to a Unicode scalar.
///
/// Every variant is absorbed identically by [`transcode`](crate::transcode):
/// the offending sequence becomes a single `'?'` unit in the output. The
/// taxonomy exists for callers that drive
/// [`decode_code_point`](crate::decode_code_point) directly and for tests.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// A continuation byte (`10xxxxxx`) appeared where a leading byte was
    /// expected.
    #[error("orphaned continuation byte 0x{0:02X}")]
    OrphanContinuation(u8),

    /// A byte inside a multi-byte sequence did not match `10xxxxxx`. The NUL
    /// terminator cutting a sequence short lands here as well.
    #[error("malformed continuation byte 0x{0:02X}")]
    BadContinuation(u8),

    /// A structurally sound sequence encoded a scalar representable in fewer
    /// bytes.
    #[error("overlong encoding of U+{0:04X}")]
    Overlong(u32),

    /// A structurally sound three-byte sequence landed on one of the reserved
    /// UTF-16 surrogate code points.
    #[error("reserved surrogate code point U+{0:04X}")]
    SurrogateCodePoint(u32),

    /// A structurally sound three-byte sequence landed on U+FFFE or U+FFFF.
    #[error("non-character U+{0:04X}")]
    NonCharacter(u32),

    /// A four-byte sequence decoded to a value above U+10FFFF.
    #[error("value 0x{0:X} outside the Unicode range")]
    OutOfRange(u32),

    /// A five- or six-byte form, illegal since RFC 3629. Rejected even when
    /// its continuation bytes are well-formed.
    #[error("obsolete {0}-byte form")]
    ObsoleteForm(u8),
}
