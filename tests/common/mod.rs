//! Recording mocks for the `embedded-hal` traits
//!
//! SPI bus, chip-select pin and delay all append to one shared log so
//! tests can check the exact interleaving of pin edges and bus writes.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::spi::ErrorKind;

/// Something that happened on the mocked hardware
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Chip select driven low
    Low,
    /// Chip select driven high
    High,
    /// Bytes written on the bus
    Write(Vec<u8>),
    /// Millisecond delay
    DelayMs(u32),
    /// Microsecond delay
    DelayUs(u32),
    /// Nanosecond delay
    DelayNs(u32),
}

/// Shared event log
#[derive(Clone, Default)]
pub struct Log(Rc<RefCell<Vec<Event>>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Bytes written between each low/high pair
    pub fn frames(&self) -> Vec<Vec<u8>> {
        let mut frames = Vec::new();
        let mut current: Option<Vec<u8>> = None;
        for event in self.0.borrow().iter() {
            match event {
                Event::Low => current = Some(Vec::new()),
                Event::High => {
                    if let Some(frame) = current.take() {
                        frames.push(frame);
                    }
                }
                Event::Write(bytes) => {
                    if let Some(frame) = current.as_mut() {
                        frame.extend_from_slice(bytes);
                    }
                }
                _ => {}
            }
        }
        frames
    }

    /// Every byte written, in order
    pub fn wire(&self) -> Vec<u8> {
        self.frames().concat()
    }

    /// Every write happened with chip select low, and every low was
    /// followed by a high
    pub fn is_well_framed(&self) -> bool {
        let mut selected = false;
        for event in self.0.borrow().iter() {
            match event {
                Event::Low if selected => return false,
                Event::Low => selected = true,
                Event::High => selected = false,
                Event::Write(_) if !selected => return false,
                _ => {}
            }
        }
        !selected
    }

    /// Last level driven on chip select
    pub fn cs_high(&self) -> Option<bool> {
        self.0.borrow().iter().rev().find_map(|e| match e {
            Event::Low => Some(false),
            Event::High => Some(true),
            _ => None,
        })
    }
}

/// SPI failure injected by [`MockSpi::fail_on_write`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockSpiError;

impl embedded_hal::spi::Error for MockSpiError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

/// Recording SPI bus
pub struct MockSpi {
    log: Log,
    writes: usize,
    fail_on: Option<usize>,
}

impl MockSpi {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            writes: 0,
            fail_on: None,
        }
    }

    /// Fail the `n`th write (0-based) without recording it
    pub fn fail_on_write(log: &Log, n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Self::new(log)
        }
    }

    fn record(&mut self, words: &[u8]) -> Result<(), MockSpiError> {
        let index = self.writes;
        self.writes += 1;
        if self.fail_on == Some(index) {
            return Err(MockSpiError);
        }
        self.log.push(Event::Write(words.to_vec()));
        Ok(())
    }
}

impl embedded_hal::spi::ErrorType for MockSpi {
    type Error = MockSpiError;
}

impl embedded_hal::spi::SpiBus<u8> for MockSpi {
    fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.record(words)
    }

    fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.record(write)
    }

    fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let out = words.to_vec();
        words.fill(0);
        self.record(&out)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl embedded_hal_async::spi::SpiBus<u8> for MockSpi {
    async fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        words.fill(0);
        Ok(())
    }

    async fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        self.record(words)
    }

    async fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
        read.fill(0);
        self.record(write)
    }

    async fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
        let out = words.to_vec();
        words.fill(0);
        self.record(&out)
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Pin failure injected by [`MockPin::fail_on_high`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockPinError;

impl embedded_hal::digital::Error for MockPinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

/// Recording chip-select pin
pub struct MockPin {
    log: Log,
    highs: usize,
    fail_on: Option<usize>,
}

impl MockPin {
    pub fn new(log: &Log) -> Self {
        Self {
            log: log.clone(),
            highs: 0,
            fail_on: None,
        }
    }

    /// Fail the `n`th `set_high` (0-based) without recording it
    pub fn fail_on_high(log: &Log, n: usize) -> Self {
        Self {
            fail_on: Some(n),
            ..Self::new(log)
        }
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = MockPinError;
}

impl embedded_hal::digital::OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.push(Event::Low);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        let index = self.highs;
        self.highs += 1;
        if self.fail_on == Some(index) {
            return Err(MockPinError);
        }
        self.log.push(Event::High);
        Ok(())
    }
}

/// Recording delay
pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

impl embedded_hal_async::delay::DelayNs for MockDelay {
    async fn delay_ns(&mut self, ns: u32) {
        self.log.push(Event::DelayNs(ns));
    }

    async fn delay_us(&mut self, us: u32) {
        self.log.push(Event::DelayUs(us));
    }

    async fn delay_ms(&mut self, ms: u32) {
        self.log.push(Event::DelayMs(ms));
    }
}

/// The 48-byte configuration blob as literal bytes
pub const BLOB: [u8; 48] = [
    0x40, 0x2E, 0x2E, 0x0D, 0x07, 0xD3, 0x91, 0xFF, 0x04, 0x32, 0x00, 0x4B, 0x06, 0x00, 0x22, 0xB7,
    0x55, 0x8A, 0x93, 0x00, 0x23, 0x3B, 0x50, 0x07, 0x30, 0x18, 0x16, 0x6C, 0x03, 0x40, 0x91, 0x87,
    0x6B, 0xF8, 0x56, 0x10, 0xE9, 0x2A, 0x00, 0x1F, 0x40, 0x00, 0x59, 0x7F, 0x3F, 0x81, 0x35, 0x09,
];

/// Channel codes 0-16 as literal bytes
pub const CHANNELS: [u8; 17] = [
    0x4B, 0x45, 0x33, 0x27, 0x1B, 0x15, 0x0F, 0x03, 0x5E, 0x58, 0x52, 0x3E, 0x39, 0x2C, 0x21, 0x89,
    0x37,
];

/// Power codes 0-10 as literal bytes
pub const POWERS: [u8; 11] = [0x03, 0x15, 0x1C, 0x27, 0x66, 0x8E, 0x89, 0xCD, 0xC4, 0xC1, 0xC0];
