//! Driver error type

use core::fmt;

use crate::types::ConfigError;

/// Modem driver error, generic over the bus and pin error types
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<SpiE, PinE> {
    /// SPI write or flush failed
    Spi(SpiE),
    /// Enable line could not be driven
    Pin(PinE),
    /// Channel or power level rejected
    Config(ConfigError),
    /// Channel change or keep-alive before the modem was started
    NotStarted,
}

impl<SpiE, PinE> Error<SpiE, PinE> {
    /// Check if the error came from the hardware rather than the caller
    #[must_use]
    pub const fn is_bus_fault(&self) -> bool {
        matches!(self, Self::Spi(_) | Self::Pin(_))
    }
}

impl<SpiE, PinE> From<ConfigError> for Error<SpiE, PinE> {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl<SpiE: fmt::Debug, PinE: fmt::Debug> fmt::Display for Error<SpiE, PinE> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Spi(e) => write!(f, "SPI error: {e:?}"),
            Self::Pin(e) => write!(f, "enable pin error: {e:?}"),
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::NotStarted => f.write_str("modem not started"),
        }
    }
}

#[cfg(feature = "embedded")]
impl<SpiE, PinE> defmt::Format for Error<SpiE, PinE> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Spi(_) => defmt::write!(f, "Spi"),
            Self::Pin(_) => defmt::write!(f, "Pin"),
            Self::Config(e) => defmt::write!(f, "Config({})", e),
            Self::NotStarted => defmt::write!(f, "NotStarted"),
        }
    }
}
