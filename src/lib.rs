//! AirDCC Modem Library
//!
//! Driver for a Texas Instruments CC1101 RF modem carrying a DCC command
//! stream over the 900 MHz band. Channel assignments are compatible with
//! CVP AirWire throttles.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    APPLICATION (main.rs)                     │
//! │        keep-alive ticker  │  channel-step button             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                         DRIVERS                              │
//! │          Modem (blocking)  │  AsyncModem (async)             │
//! ├─────────────────────────────────────────────────────────────┤
//! │                  SEQUENCE (pure frame plans)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │                           HAL                                │
//! │        ModemBus (SPI framing)  │  EnableLine (GPIO)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! let mut modem = Modem::new(spi, cs_pin, delay);
//! modem.start_modem(3, true, 5)?;   // channel 3, transmit, power 5
//! modem.change_channel(7)?;
//! loop {
//!     modem.keep_alive()?;
//!     // wait KEEP_ALIVE_INTERVAL_MS
//! }
//! ```

#![cfg_attr(feature = "embedded", no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Hardware Abstraction Layer
///
/// Chip-select line and framed SPI writes.
pub mod hal;

/// Peripheral Drivers
///
/// Blocking and async CC1101 drivers.
pub mod drivers;

/// Bus transaction plans
pub mod sequence;

/// Command strobes, register addresses and lookup tables
pub mod registers;

/// Driver error type
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

pub use drivers::cc1101::{Modem, ModemState};
pub use drivers::cc1101_async::AsyncModem;
pub use error::Error;
pub use types::{Channel, ConfigError, ModemConfig, PowerLevel, RfMode};

/// Prelude module for common imports
#[cfg(feature = "embedded")]
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;
    pub use crate::{AsyncModem, Error, Modem, ModemState};

    // Embassy
    pub use embassy_time::{Duration, Instant, Ticker, Timer};

    // Logging
    pub use defmt::{debug, error, info, trace, warn};
}
