//! Enable Line
//!
//! The CC1101 chip-select is driven from a plain GPIO output rather than
//! by the SPI peripheral, so each frame can be delimited explicitly.

use embedded_hal::digital::OutputPin;

/// Active-low chip-select line
pub struct EnableLine<P> {
    pin: P,
}

impl<P: OutputPin> EnableLine<P> {
    /// Wrap an output pin. The pin is not driven until the first call.
    #[must_use]
    pub const fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Pull the line low to begin a frame
    pub fn select(&mut self) -> Result<(), P::Error> {
        self.pin.set_low()
    }

    /// Raise the line to end a frame (also the idle level)
    pub fn deselect(&mut self) -> Result<(), P::Error> {
        self.pin.set_high()
    }

    /// Give the pin back
    pub fn release(self) -> P {
        self.pin
    }
}
