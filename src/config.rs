//! System configuration and hardware constants
//!
//! Bus timing, start-up defaults and pin mappings for the AirDCC node.
//! The driver itself only depends on [`SETTLE_DELAY_MS`]; the rest is
//! applied by whoever builds the SPI peripheral and schedules the modem.

use crate::types::{Channel, ModemConfig};

/// SPI clock (CC1101 accepts up to 10 MHz for single-byte writes)
pub const SPI_FREQUENCY_HZ: u32 = 8_000_000;

/// SPI mode 0 (CPOL = 0, CPHA = 0), MSB first
pub const SPI_MODE: embedded_hal::spi::Mode = embedded_hal::spi::MODE_0;

/// Wait after raising the enable line on start, before the first frame
pub const SETTLE_DELAY_MS: u32 = 100;

/// Keep-alive strobe period
pub const KEEP_ALIVE_INTERVAL_MS: u64 = 500;

/// Debounce time for the channel-step button
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Channel used at power-up
pub const DEFAULT_CHANNEL: u8 = 0;

/// Power-up configuration: receive on [`DEFAULT_CHANNEL`]
#[must_use]
pub const fn default_config() -> ModemConfig {
    match Channel::new(DEFAULT_CHANNEL) {
        Ok(ch) => ModemConfig::receive(ch),
        Err(_) => ModemConfig::receive(Channel::MIN),
    }
}

/// Pin assignments for GPIO
pub mod pins {
    //! GPIO pin assignments matching the node wiring

    /// SPI1 SCK
    pub const SPI1_SCK: &str = "PA5";

    /// SPI1 MISO (CC1101 SO)
    pub const SPI1_MISO: &str = "PA6";

    /// SPI1 MOSI (CC1101 SI)
    pub const SPI1_MOSI: &str = "PA7";

    /// CC1101 chip select (active low)
    pub const MODEM_CS: &str = "PA4";

    /// Channel-step push button (active low)
    pub const CHANNEL_BUTTON: &str = "PC13";

    /// Status LED
    pub const LED_STATUS: &str = "PB0";
}
