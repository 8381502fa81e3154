//! Hardware Abstraction Layer
//!
//! Chip-select handling and framed SPI writes over the `embedded-hal`
//! traits, so the drivers run on any HAL (and on host mocks).

pub mod gpio;
pub mod spi;
