//! CC1101 Modem Driver
//!
//! Starts the modem in receive or transmit mode on one of the 17
//! AirWire channels, retunes it, and keeps it in that mode.
//!
//! The driver owns the SPI bus, the chip-select line and a delay source.
//! Bus clock and mode (see [`crate::config::SPI_FREQUENCY_HZ`] and
//! [`crate::config::SPI_MODE`]) are set when the HAL bus is built.
//!
//! ```text
//! start_modem    STOP | BLOB(48) | PATABLE,pa | CHANNR,ch | RX/TX
//! change_channel STOP |            PATABLE,pa | CHANNR,ch | RX/TX
//! keep_alive                                              | RX/TX
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use crate::config::SETTLE_DELAY_MS;
use crate::error::Error;
use crate::hal::spi::{BusError, ModemBus};
use crate::sequence;
use crate::types::{Channel, ModemConfig, RfMode};

/// Whether the chip has been configured
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ModemState {
    /// Nothing written yet (or the last start failed)
    #[default]
    Uninitialized,
    /// Start completed with this configuration
    Configured(ModemConfig),
}

impl ModemState {
    /// Configuration, if started
    #[must_use]
    pub const fn config(&self) -> Option<ModemConfig> {
        match self {
            Self::Uninitialized => None,
            Self::Configured(config) => Some(*config),
        }
    }
}

#[cfg(feature = "embedded")]
impl defmt::Format for ModemState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Uninitialized => defmt::write!(f, "Uninitialized"),
            Self::Configured(config) => defmt::write!(f, "Configured({})", config),
        }
    }
}

/// Blocking CC1101 driver
pub struct Modem<SPI, P, D> {
    bus: ModemBus<SPI, P>,
    delay: D,
    state: ModemState,
}

impl<SPI, P, D> Modem<SPI, P, D>
where
    SPI: SpiBus<u8>,
    P: OutputPin,
    D: DelayNs,
{
    /// Bind the driver to a bus, an output pin for chip select and a delay.
    ///
    /// Nothing is written until [`Self::start_modem`].
    #[must_use]
    pub const fn new(spi: SPI, enable: P, delay: D) -> Self {
        Self {
            bus: ModemBus::new(spi, enable),
            delay,
            state: ModemState::Uninitialized,
        }
    }

    /// Start the modem from raw values.
    ///
    /// `channel` must be 0-16. `power` must be 0-10 when `transmit` is
    /// set and is ignored otherwise. Invalid input is rejected before
    /// anything touches the bus.
    pub fn start_modem(
        &mut self,
        channel: u8,
        transmit: bool,
        power: u8,
    ) -> Result<(), BusError<SPI, P>> {
        let config = ModemConfig::from_raw(channel, transmit, power)?;
        self.start(config)
    }

    /// Start the modem: stop, load the configuration blob, set power and
    /// channel, then enter the requested mode.
    pub fn start(&mut self, config: ModemConfig) -> Result<(), BusError<SPI, P>> {
        #[cfg(feature = "embedded")]
        defmt::debug!("cc1101: start {}", config);

        // A failed start leaves the chip half-configured
        self.state = ModemState::Uninitialized;

        self.bus.idle()?;
        self.delay.delay_ms(SETTLE_DELAY_MS);
        self.bus.write_frames(&sequence::start_frames(&config))?;

        self.state = ModemState::Configured(config);

        #[cfg(feature = "embedded")]
        defmt::info!("cc1101: running {}", config);

        Ok(())
    }

    /// Retune to a raw channel number (0-16), keeping mode and power
    pub fn change_channel(&mut self, channel: u8) -> Result<(), BusError<SPI, P>> {
        let current = self.require_config()?;
        let channel = Channel::new(channel)?;
        self.retune(current, channel)
    }

    /// Retune to `channel`, keeping mode and power
    pub fn set_channel(&mut self, channel: Channel) -> Result<(), BusError<SPI, P>> {
        let current = self.require_config()?;
        self.retune(current, channel)
    }

    /// Step to the next channel (16 wraps to 0)
    pub fn next_channel(&mut self) -> Result<Channel, BusError<SPI, P>> {
        let current = self.require_config()?;
        let channel = current.channel.next();
        self.retune(current, channel)?;
        Ok(channel)
    }

    fn retune(&mut self, current: ModemConfig, channel: Channel) -> Result<(), BusError<SPI, P>> {
        let config = current.with_channel(channel);

        #[cfg(feature = "embedded")]
        defmt::debug!("cc1101: retune {} -> {}", current.channel, channel);

        self.bus.write_frames(&sequence::retune_frames(&config))?;
        self.state = ModemState::Configured(config);
        Ok(())
    }

    /// Re-issue the RX/TX strobe so the chip stays in its mode.
    ///
    /// Call periodically; the driver does not schedule itself.
    pub fn keep_alive(&mut self) -> Result<(), BusError<SPI, P>> {
        let current = self.require_config()?;

        #[cfg(feature = "embedded")]
        defmt::trace!("cc1101: keep-alive {}", current.mode);

        self.bus
            .write_frames(&sequence::keep_alive_frames(current.mode))
    }

    /// Send the chip to idle. The configuration is kept, so the next
    /// keep-alive or channel change brings it back up.
    pub fn idle(&mut self) -> Result<(), BusError<SPI, P>> {
        self.require_config()?;
        self.bus.write_frames(&sequence::idle_frames())
    }

    fn require_config(&self) -> Result<ModemConfig, BusError<SPI, P>> {
        self.state.config().ok_or(Error::NotStarted)
    }

    /// Driver state
    #[must_use]
    pub const fn state(&self) -> ModemState {
        self.state
    }

    /// Active configuration, if started
    #[must_use]
    pub const fn config(&self) -> Option<ModemConfig> {
        self.state.config()
    }

    /// Active channel, if started
    #[must_use]
    pub fn channel(&self) -> Option<Channel> {
        self.config().map(|c| c.channel)
    }

    /// Active mode, if started
    #[must_use]
    pub fn mode(&self) -> Option<RfMode> {
        self.config().map(|c| c.mode)
    }

    /// Check if [`Self::start`] has completed
    #[must_use]
    pub const fn is_started(&self) -> bool {
        matches!(self.state, ModemState::Configured(_))
    }

    /// Give back the bus, the enable pin and the delay
    pub fn release(self) -> (SPI, P, D) {
        let (spi, enable) = self.bus.release();
        (spi, enable, self.delay)
    }
}
