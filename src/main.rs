#![no_std]
#![no_main]

use defmt::println;
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};
use esp32_static_lights::{
    conf::{
        CHAIN_LEDS, IDLE_PERIOD_MS, SECONDARY_LEDS, STATUS_FORMAT, STATUS_LEDS, STRIP_FORMAT,
    },
    encode::buffer_size,
    rmt::RmtPixelDriver,
    Lights,
};
use esp_backtrace as _;
use esp_hal::{
    gpio::{Io, Level, Output},
    prelude::*,
    rmt::Rmt,
    timer::timg,
};
use esp_println as _;
use log::{info, warn};

#[cfg(not(feature = "feather"))]
compile_error!(
    "at least one board feature must be active. Boards:
    - feather
"
);

const STATUS_BUFFER: usize = buffer_size(STATUS_LEDS, STATUS_FORMAT.channels());
const CHAIN_BUFFER: usize = buffer_size(CHAIN_LEDS, STRIP_FORMAT.channels());
const SECONDARY_BUFFER: usize = buffer_size(SECONDARY_LEDS, STRIP_FORMAT.channels());

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    esp_println::logger::init_logger_from_env();
    println!(
        "-- ESP32 Static Lights Application {} --",
        env!("CARGO_PKG_VERSION")
    );
    let peripherals = esp_hal::init(esp_hal::Config::default());

    let io = Io::new(peripherals.GPIO, peripherals.IO_MUX);

    let timg0 = timg::TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    // The onboard pixel has no supply until its power switch is closed.
    let mut status_power = Output::new(io.pins.gpio21, Level::Low);
    status_power.set_high();

    let rmt = Rmt::new(peripherals.RMT, 80.MHz()).unwrap();
    let status = RmtPixelDriver::<_, STATUS_BUFFER>::new(rmt.channel0, io.pins.gpio33).unwrap();
    let chain = RmtPixelDriver::<_, CHAIN_BUFFER>::new(rmt.channel1, io.pins.gpio7).unwrap();
    let secondary =
        RmtPixelDriver::<_, SECONDARY_BUFFER>::new(rmt.channel2, io.pins.gpio10).unwrap();

    let mut lights = Lights::new(status, chain, secondary).unwrap();
    match lights.initialize() {
        Ok(()) => info!("all LED groups set, idling"),
        Err(e) => warn!("LED initialization incomplete: {:?}, idling anyway", e),
    }

    loop {
        Timer::after(Duration::from_millis(IDLE_PERIOD_MS)).await;
    }
}
