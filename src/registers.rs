//! CC1101 command strobes, register addresses and lookup tables
//!
//! Everything the driver puts on the wire comes from this module. The
//! tables are immutable and only reached through the validated
//! [`Channel`](crate::types::Channel) and
//! [`PowerLevel`](crate::types::PowerLevel) conversions.

/// Command strobes (single-byte writes)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Strobe {
    /// Enable RX (`SRX`)
    Rx = 0x34,
    /// Enable TX (`STX`)
    Tx = 0x35,
    /// Exit RX/TX and return to idle (`SIDLE`)
    Stop = 0x36,
}

impl Strobe {
    /// Get the command byte
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Strobe {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Rx => defmt::write!(f, "SRX"),
            Self::Tx => defmt::write!(f, "STX"),
            Self::Stop => defmt::write!(f, "SIDLE"),
        }
    }
}

/// Register addresses
pub mod reg {
    /// Channel number (`CHANNR`)
    pub const CHANNR: u8 = 0x0A;

    /// Power amplifier table (`PATABLE`), single-byte write to entry 0
    pub const PATABLE: u8 = 0x3E;

    /// Burst-write flag ORed into the header byte
    pub const WRITE_BURST: u8 = 0x40;
}

/// Length of the configuration blob
pub const INIT_BLOB_LEN: usize = 48;

/// Modem configuration blob, written verbatim on start.
///
/// Byte 0 is a burst-write header for `IOCFG2` (`0x00 | WRITE_BURST`);
/// the remaining 47 bytes fill `IOCFG2` through `TEST0`.
pub static INIT_BLOB: [u8; INIT_BLOB_LEN] = [
    0x40, 0x2E, 0x2E, 0x0D, 0x07, 0xD3, 0x91, 0xFF, 0x04, //
    0x32, 0x00, 0x4B, 0x06, 0x00, 0x22, 0xB7, 0x55, 0x8A, //
    0x93, 0x00, 0x23, 0x3B, 0x50, 0x07, 0x30, 0x18, 0x16, //
    0x6C, 0x03, 0x40, 0x91, 0x87, 0x6B, 0xF8, 0x56, 0x10, //
    0xE9, 0x2A, 0x00, 0x1F, 0x40, 0x00, 0x59, 0x7F, 0x3F, //
    0x81, 0x35, 0x09,
];

/// `CHANNR` values for AirWire channels 0-16
pub const CHANNEL_CODES: [u8; 17] = [
    0x4B, 0x45, 0x33, 0x27, 0x1B, 0x15, 0x0F, 0x03, 0x5E, //
    0x58, 0x52, 0x3E, 0x39, 0x2C, 0x21, 0x89, 0x37,
];

/// `PATABLE` values for transmit power levels 0-10
pub const POWER_CODES: [u8; 11] = [
    0x03, 0x15, 0x1C, 0x27, 0x66, 0x8E, 0x89, 0xCD, 0xC4, 0xC1, 0xC0,
];

/// `PATABLE` value used while receiving
pub const RX_PA_CODE: u8 = 0x89;
