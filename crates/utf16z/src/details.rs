//! Device-descriptor collaborator surface.
//!
//! The transcoder's primary caller is a device-enumeration layer that copies
//! a narrow device-name string (an OS-supplied byte string or a literal such
//! as `"Default Device"`) into fixed-size UTF-16 fields inside a descriptor
//! record. The record is modeled here so that contract stays testable: a name
//! field is always fully written and terminated, whatever bytes the OS hands
//! back.

use core::fmt;

use crate::transcode::transcode;

/// Units in a descriptor name field, terminator included.
pub const NAME_UNITS: usize = 256;

const NAME_BYTES: usize = NAME_UNITS * size_of::<u16>();

/// Where a device sits in the host's default-device ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceRole {
    /// The host's global default output device.
    GlobalDefault,
    /// Any other enumerated device.
    #[default]
    NotDefault,
}

/// A device descriptor with fixed-capacity, null-terminated UTF-16 name
/// fields.
///
/// Fields start zeroed and are rewritten in place; the record never holds
/// unterminated text.
#[derive(Clone, PartialEq, Eq)]
pub struct DeviceDetails {
    device_id: [u16; NAME_UNITS],
    display_name: [u16; NAME_UNITS],
    role: DeviceRole,
}

impl DeviceDetails {
    /// Creates a descriptor with empty name fields.
    #[must_use]
    pub fn new(role: DeviceRole) -> Self {
        Self {
            device_id: [0; NAME_UNITS],
            display_name: [0; NAME_UNITS],
            role,
        }
    }

    /// The device's role.
    #[must_use]
    pub fn role(&self) -> DeviceRole {
        self.role
    }

    /// Rewrites the display name from a narrow byte string. The field is
    /// cleared first, then transcoded against its full byte capacity, so it
    /// ends up terminated regardless of the input's validity or length.
    pub fn set_display_name(&mut self, name: &[u8]) {
        self.display_name.fill(0);
        transcode(name, &mut self.display_name, NAME_BYTES);
    }

    /// Rewrites the device identifier from a narrow byte string.
    pub fn set_device_id(&mut self, id: &[u8]) {
        self.device_id.fill(0);
        transcode(id, &mut self.device_id, NAME_BYTES);
    }

    /// The display-name units up to, not including, the terminator.
    #[must_use]
    pub fn display_name(&self) -> &[u16] {
        until_nul(&self.display_name)
    }

    /// The device-identifier units up to, not including, the terminator.
    #[must_use]
    pub fn device_id(&self) -> &[u16] {
        until_nul(&self.device_id)
    }
}

impl fmt::Debug for DeviceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeviceDetails")
            .field("role", &self.role)
            .field("device_id", &Wide(self.device_id()))
            .field("display_name", &Wide(self.display_name()))
            .finish()
    }
}

fn until_nul(field: &[u16]) -> &[u16] {
    let end = field.iter().position(|&unit| unit == 0).unwrap_or(field.len());
    &field[..end]
}

/// Renders a UTF-16 field as readable text without allocating.
struct Wide<'a>(&'a [u16]);

impl fmt::Debug for Wide<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("\"")?;
        for decoded in char::decode_utf16(self.0.iter().copied()) {
            match decoded {
                Ok(c) => write!(f, "{}", c.escape_debug())?,
                Err(_) => f.write_str("\u{FFFD}")?,
            }
        }
        f.write_str("\"")
    }
}
