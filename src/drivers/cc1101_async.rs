//! Async CC1101 Modem Driver
//!
//! Same bus traffic as [`super::cc1101::Modem`], for use from embassy
//! tasks with `embedded-hal-async` peripherals.

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use embedded_hal_async::spi::SpiBus;

use super::cc1101::ModemState;
use crate::config::SETTLE_DELAY_MS;
use crate::error::Error;
use crate::hal::spi::{AsyncModemBus, BusError};
use crate::sequence;
use crate::types::{Channel, ModemConfig, RfMode};

/// Async CC1101 driver
pub struct AsyncModem<SPI, P, D> {
    bus: AsyncModemBus<SPI, P>,
    delay: D,
    state: ModemState,
}

impl<SPI, P, D> AsyncModem<SPI, P, D>
where
    SPI: SpiBus<u8>,
    P: OutputPin,
    D: DelayNs,
{
    /// Bind the driver. Nothing is written until [`Self::start_modem`].
    #[must_use]
    pub const fn new(spi: SPI, enable: P, delay: D) -> Self {
        Self {
            bus: AsyncModemBus::new(spi, enable),
            delay,
            state: ModemState::Uninitialized,
        }
    }

    /// Start the modem from raw values (see [`super::cc1101::Modem::start_modem`])
    pub async fn start_modem(
        &mut self,
        channel: u8,
        transmit: bool,
        power: u8,
    ) -> Result<(), BusError<SPI, P>> {
        let config = ModemConfig::from_raw(channel, transmit, power)?;
        self.start(config).await
    }

    /// Start the modem with a validated configuration
    pub async fn start(&mut self, config: ModemConfig) -> Result<(), BusError<SPI, P>> {
        #[cfg(feature = "embedded")]
        defmt::debug!("cc1101: start {}", config);

        self.state = ModemState::Uninitialized;

        self.bus.idle()?;
        self.delay.delay_ms(SETTLE_DELAY_MS).await;
        self.bus
            .write_frames(&sequence::start_frames(&config))
            .await?;

        self.state = ModemState::Configured(config);

        #[cfg(feature = "embedded")]
        defmt::info!("cc1101: running {}", config);

        Ok(())
    }

    /// Retune to a raw channel number (0-16), keeping mode and power
    pub async fn change_channel(&mut self, channel: u8) -> Result<(), BusError<SPI, P>> {
        let current = self.require_config()?;
        let channel = Channel::new(channel)?;
        self.retune(current, channel).await
    }

    /// Retune to `channel`, keeping mode and power
    pub async fn set_channel(&mut self, channel: Channel) -> Result<(), BusError<SPI, P>> {
        let current = self.require_config()?;
        self.retune(current, channel).await
    }

    /// Step to the next channel (16 wraps to 0)
    pub async fn next_channel(&mut self) -> Result<Channel, BusError<SPI, P>> {
        let current = self.require_config()?;
        let channel = current.channel.next();
        self.retune(current, channel).await?;
        Ok(channel)
    }

    async fn retune(
        &mut self,
        current: ModemConfig,
        channel: Channel,
    ) -> Result<(), BusError<SPI, P>> {
        let config = current.with_channel(channel);

        #[cfg(feature = "embedded")]
        defmt::debug!("cc1101: retune {} -> {}", current.channel, channel);

        self.bus
            .write_frames(&sequence::retune_frames(&config))
            .await?;
        self.state = ModemState::Configured(config);
        Ok(())
    }

    /// Re-issue the RX/TX strobe
    pub async fn keep_alive(&mut self) -> Result<(), BusError<SPI, P>> {
        let current = self.require_config()?;

        #[cfg(feature = "embedded")]
        defmt::trace!("cc1101: keep-alive {}", current.mode);

        self.bus
            .write_frames(&sequence::keep_alive_frames(current.mode))
            .await
    }

    /// Send the chip to idle, keeping the configuration
    pub async fn idle(&mut self) -> Result<(), BusError<SPI, P>> {
        self.require_config()?;
        self.bus.write_frames(&sequence::idle_frames()).await
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
