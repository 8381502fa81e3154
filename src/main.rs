//! AirDCC Node Main Application
//!
//! Brings up the CC1101 in receive mode on the default channel, keeps it
//! there with a periodic strobe, and steps channels on a button press.

#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_stm32::exti::ExtiInput;
use embassy_stm32::gpio::{Level, Output, Pull, Speed};
use embassy_stm32::mode::Blocking;
use embassy_stm32::spi::{self, Spi};
use embassy_stm32::time::Hertz;
use embassy_sync::blocking_mutex::raw::ThreadModeRawMutex;
use embassy_sync::mutex::Mutex;
use embassy_time::Delay;
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use airdcc_modem::prelude::*;

type NodeModem = Modem<Spi<'static, Blocking>, Output<'static>, Delay>;
type SharedModem = Mutex<ThreadModeRawMutex, NodeModem>;

static MODEM: StaticCell<SharedModem> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("AirDCC node v{}", env!("CARGO_PKG_VERSION"));

    let p = embassy_stm32::init(embassy_stm32::Config::default());

    let mut spi_config = spi::Config::default();
    spi_config.frequency = Hertz(SPI_FREQUENCY_HZ);
    spi_config.mode = spi::MODE_0;
    spi_config.bit_order = spi::BitOrder::MsbFirst;
    let spi = Spi::new_blocking(p.SPI1, p.PA5, p.PA7, p.PA6, spi_config);

    // CC1101 CSn idles high
    let cs = Output::new(p.PA4, Level::High, Speed::VeryHigh);

    info!(
        "SPI1 initialized at {} Hz (SCK {}, MOSI {}, MISO {}, CS {})",
        SPI_FREQUENCY_HZ,
        pins::SPI1_SCK,
        pins::SPI1_MOSI,
        pins::SPI1_MISO,
        pins::MODEM_CS
    );

    let modem: &'static SharedModem = MODEM.init(Mutex::new(Modem::new(spi, cs, Delay)));

    let config = default_config();
    match modem.lock().await.start(config) {
        Ok(()) => info!("Modem started: {}", config),
        Err(e) => error!("Modem start failed: {}", e),
    }

    let led = Output::new(p.PB0, Level::Low, Speed::Low);
    let button = ExtiInput::new(p.PC13, p.EXTI13, Pull::Up);
    info!(
        "Channel button on {}, status LED on {}",
        pins::CHANNEL_BUTTON,
        pins::LED_STATUS
    );

    spawner.spawn(keep_alive_task(modem)).unwrap();
    spawner.spawn(channel_button_task(modem, button)).unwrap();
    spawner.spawn(heartbeat_task(led)).unwrap();

    info!("Tasks spawned");
}

/// Re-issue the mode strobe so the modem never drops out of RX/TX
#[embassy_executor::task]
async fn keep_alive_task(modem: &'static SharedModem) {
    let mut ticker = Ticker::every(Duration::from_millis(KEEP_ALIVE_INTERVAL_MS));
    loop {
        ticker.next().await;
        if let Err(e) = modem.lock().await.keep_alive() {
            warn!("Keep-alive failed: {}", e);
        }
    }
}

/// Step to the next channel on each button press
#[embassy_executor::task]
async fn channel_button_task(modem: &'static SharedModem, mut button: ExtiInput<'static>) {
    loop {
        button.wait_for_falling_edge().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if button.is_high() {
            continue;
        }

        match modem.lock().await.next_channel() {
            Ok(channel) => info!("Channel {}", channel),
            Err(e) => warn!("Channel change failed: {}", e),
        }

        button.wait_for_high().await;
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}
