//! SPI Bus Framing
//!
//! Writes [`Frame`]s to the modem: enable line low, bytes out, wait for
//! the bus to drain, enable line high. Blocking and async flavours share
//! the same framing rules.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiBus;

use super::gpio::EnableLine;
use crate::error::Error;
use crate::sequence::Frame;

/// Error type produced by a bus over `SPI` and pin `P`
pub type BusError<SPI, P> =
    Error<<SPI as embedded_hal::spi::ErrorType>::Error, <P as embedded_hal::digital::ErrorType>::Error>;

/// Blocking SPI bus with a dedicated enable line
pub struct ModemBus<SPI, P> {
    spi: SPI,
    cs: EnableLine<P>,
}

impl<SPI, P> ModemBus<SPI, P>
where
    SPI: SpiBus<u8>,
    P: OutputPin,
{
    /// Create a new bus wrapper
    #[must_use]
    pub const fn new(spi: SPI, cs: P) -> Self {
        Self {
            spi,
            cs: EnableLine::new(cs),
        }
    }

    /// Drive the enable line to its idle level
    pub fn idle(&mut self) -> Result<(), BusError<SPI, P>> {
        self.cs.deselect().map_err(Error::Pin)
    }

    /// Write one frame.
    ///
    /// The enable line is raised again even if the transfer fails; a
    /// transfer error wins over a failure to raise the line.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<(), BusError<SPI, P>> {
        self.cs.select().map_err(Error::Pin)?;
        let transfer = self
            .spi
            .write(frame.as_bytes())
            .and_then(|()| self.spi.flush());
        let released = self.cs.deselect();
        transfer.map_err(Error::Spi)?;
        released.map_err(Error::Pin)
    }

    /// Write frames in order, stopping at the first failure
    pub fn write_frames(&mut self, frames: &[Frame]) -> Result<(), BusError<SPI, P>> {
        for frame in frames {
            self.write_frame(frame)?;
        }
        Ok(())
    }

    /// Give back the bus and the pin
    pub fn release(self) -> (SPI, P) {
        (self.spi, self.cs.release())
    }
}

/// Async SPI bus with a dedicated enable line
pub struct AsyncModemBus<SPI, P> {
    spi: SPI,
    cs: EnableLine<P>,
}

impl<SPI, P> AsyncModemBus<SPI, P>
where
    SPI: embedded_hal_async::spi::SpiBus<u8>,
    P: OutputPin,
{
    /// Create a new bus wrapper
    #[must_use]
    pub const fn new(spi: SPI, cs: P) -> Self {
        Self {
            spi,
            cs: EnableLine::new(cs),
        }
    }

    /// Drive the enable line to its idle level
    pub fn idle(&mut self) -> Result<(), BusError<SPI, P>> {
        self.cs.deselect().map_err(Error::Pin)
    }

    /// Write one frame.
    ///
    /// The enable line is raised again even if the transfer fails; a
    /// transfer error wins over a failure to raise the line.
    pub async fn write_frame(&mut self, frame: &Frame) -> Result<(), BusError<SPI, P>> {
        self.cs.select().map_err(Error::Pin)?;
        let mut transfer = self.spi.write(frame.as_bytes()).await;
        if transfer.is_ok() {
            transfer = self.spi.flush().await;
        }
        let released = self.cs.deselect();
        transfer.map_err(Error::Spi)?;
        released.map_err(Error::Pin)
    }

    /// Write frames in order, stopping at the first failure
    pub async fn write_frames(&mut self, frames: &[Frame]) -> Result<(), BusError<SPI, P>> {
        for frame in frames {
            self.write_frame(frame).await?;
        }
        Ok(())
    }

    /// Give back the bus and the pin
    pub fn release(self) -> (SPI, P) {
        (self.spi, self.cs.release())
    }
}
