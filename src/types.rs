//! Shared types used across the modem driver
//!
//! Channel numbers and power levels are only constructed through checked
//! conversions, so every table lookup downstream is in range.

use core::fmt;

use crate::registers::{Strobe, CHANNEL_CODES, POWER_CODES, RX_PA_CODE};

/// Rejected configuration input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Channel number outside 0-16
    ChannelOutOfRange(u8),
    /// Power level outside 0-10
    PowerOutOfRange(u8),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ChannelOutOfRange(ch) => {
                write!(f, "channel {ch} out of range (0-{})", Channel::MAX.index())
            }
            Self::PowerOutOfRange(p) => {
                write!(f, "power level {p} out of range (0-{})", PowerLevel::MAX.index())
            }
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ConfigError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::ChannelOutOfRange(ch) => defmt::write!(f, "ChannelOutOfRange({})", ch),
            Self::PowerOutOfRange(p) => defmt::write!(f, "PowerOutOfRange({})", p),
        }
    }
}

/// AirWire RF channel (0-16)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Number of channels
    pub const COUNT: usize = CHANNEL_CODES.len();

    /// Lowest channel
    pub const MIN: Self = Self(0);

    /// Highest channel
    #[allow(clippy::cast_possible_truncation)]
    pub const MAX: Self = Self((Self::COUNT - 1) as u8);

    /// Create a channel, rejecting numbers past the table
    pub const fn new(index: u8) -> Result<Self, ConfigError> {
        if (index as usize) < Self::COUNT {
            Ok(Self(index))
        } else {
            Err(ConfigError::ChannelOutOfRange(index))
        }
    }

    /// Get the channel number
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// `CHANNR` value for this channel
    #[must_use]
    pub const fn code(self) -> u8 {
        CHANNEL_CODES[self.0 as usize]
    }

    /// Next channel, wrapping from 16 back to 0
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 == Self::MAX.0 {
            Self::MIN
        } else {
            Self(self.0 + 1)
        }
    }

    /// Previous channel, wrapping from 0 to 16
    #[must_use]
    pub const fn prev(self) -> Self {
        if self.0 == 0 {
            Self::MAX
        } else {
            Self(self.0 - 1)
        }
    }

    /// Iterate over every channel in order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..Self::MAX.0 + 1).map(Self)
    }
}

impl TryFrom<u8> for Channel {
    type Error = ConfigError;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Self::new(index)
    }
}

impl From<Channel> for u8 {
    fn from(ch: Channel) -> Self {
        ch.0
    }
}

impl Default for Channel {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Debug for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Channel({})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for Channel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "CH{}", self.0);
    }
}

/// Transmit power level (0-10)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PowerLevel(u8);

impl PowerLevel {
    /// Number of power levels
    pub const COUNT: usize = POWER_CODES.len();

    /// Lowest power
    pub const MIN: Self = Self(0);

    /// Highest power
    #[allow(clippy::cast_possible_truncation)]
    pub const MAX: Self = Self((Self::COUNT - 1) as u8);

    /// Create a power level, rejecting levels past the table
    pub const fn new(level: u8) -> Result<Self, ConfigError> {
        if (level as usize) < Self::COUNT {
            Ok(Self(level))
        } else {
            Err(ConfigError::PowerOutOfRange(level))
        }
    }

    /// Get the level number
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// `PATABLE` value for this level
    #[must_use]
    pub const fn code(self) -> u8 {
        POWER_CODES[self.0 as usize]
    }
}

impl TryFrom<u8> for PowerLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Self::new(level)
    }
}

impl fmt::Debug for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PowerLevel({})", self.0)
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for PowerLevel {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "P{}", self.0);
    }
}

/// Radio direction
///
/// Power only exists for transmit; the receiver always loads
/// [`RX_PA_CODE`] into `PATABLE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RfMode {
    /// Receive the DCC stream
    #[default]
    Receive,
    /// Transmit at the given power
    Transmit(PowerLevel),
}

impl RfMode {
    /// Build a mode from the raw `transmit`/`power` pair.
    ///
    /// `power` is only checked when transmitting.
    pub const fn from_raw(transmit: bool, power: u8) -> Result<Self, ConfigError> {
        if transmit {
            match PowerLevel::new(power) {
                Ok(level) => Ok(Self::Transmit(level)),
                Err(e) => Err(e),
            }
        } else {
            Ok(Self::Receive)
        }
    }

    /// Check if transmitting
    #[must_use]
    pub const fn is_transmit(self) -> bool {
        matches!(self, Self::Transmit(_))
    }

    /// Strobe that puts the chip into this mode
    #[must_use]
    pub const fn strobe(self) -> Strobe {
        match self {
            Self::Receive => Strobe::Rx,
            Self::Transmit(_) => Strobe::Tx,
        }
    }

    /// `PATABLE` value for this mode
    #[must_use]
    pub const fn pa_code(self) -> u8 {
        match self {
            Self::Receive => RX_PA_CODE,
            Self::Transmit(level) => level.code(),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for RfMode {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Receive => defmt::write!(f, "RX"),
            Self::Transmit(level) => defmt::write!(f, "TX({})", level),
        }
    }
}

/// Everything the modem needs to be started
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ModemConfig {
    /// RF channel
    pub channel: Channel,
    /// Direction and transmit power
    pub mode: RfMode,
}

impl ModemConfig {
    /// Create a receive configuration
    #[must_use]
    pub const fn receive(channel: Channel) -> Self {
        Self {
            channel,
            mode: RfMode::Receive,
        }
    }

    /// Create a transmit configuration
    #[must_use]
    pub const fn transmit(channel: Channel, power: PowerLevel) -> Self {
        Self {
            channel,
            mode: RfMode::Transmit(power),
        }
    }

    /// Validate a raw `(channel, transmit, power)` triple
    pub const fn from_raw(channel: u8, transmit: bool, power: u8) -> Result<Self, ConfigError> {
        let channel = match Channel::new(channel) {
            Ok(ch) => ch,
            Err(e) => return Err(e),
        };
        match RfMode::from_raw(transmit, power) {
            Ok(mode) => Ok(Self { channel, mode }),
            Err(e) => Err(e),
        }
    }

    /// Same mode, different channel
    #[must_use]
    pub const fn with_channel(self, channel: Channel) -> Self {
        Self {
            channel,
            mode: self.mode,
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ModemConfig {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} {}", self.channel, self.mode);
    }
}
