//! Firmware entry point for the volkey I2C volume keypad (nRF52840).
//!
//! Two tasks share the work:
//!
//! - `inputs_task` polls the Vol+ / Vol− buttons and advances their
//!   debounce state machines (the "main loop" of the device).
//! - `bus_task` owns the TWIS peripheral and the LED bank and services
//!   master writes and reads.
//!
//! The tasks communicate only through per-field atomics: the keypad
//! protocol state and one `ButtonFlags` per button, all device-lifetime
//! statics.

#![no_std]
#![no_main]

mod bus;
mod button;
mod config;
mod error;
mod inputs;
mod leds;
mod protocol;
mod tick;

use defmt::info;
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::timer::{Frequency, Timer};
use embassy_nrf::{bind_interrupts, peripherals, twis};

use crate::button::ButtonFlags;
use crate::config::{I2C_ADDRESS, I2C_OVERREAD_CHAR};
use crate::leds::LedBank;
use crate::protocol::KeypadState;

bind_interrupts!(struct Irqs {
    TWISPI0 => twis::InterruptHandler<peripherals::TWISPI0>;
});

// Device-lifetime shared state. The bus task writes the keypad state;
// the inputs task writes the button flags; each side only reads the
// other's fields.
static KEYPAD: KeypadState = KeypadState::new();
static VOL_PLUS: ButtonFlags = ButtonFlags::new();
static VOL_MINUS: ButtonFlags = ButtonFlags::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("volkey starting");

    // Free-running 1 MHz tick counter for the button state machines.
    let tick_timer = Timer::new(p.TIMER1);
    tick_timer.set_frequency(Frequency::F1MHz);
    tick_timer.start();

    let leds = LedBank::new([
        Output::new(p.P0_13, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_14, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_15, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_16, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_17, Level::Low, OutputDrive::Standard),
        Output::new(p.P0_20, Level::Low, OutputDrive::Standard),
    ]);

    let vol_plus_pin = Input::new(p.P0_11, Pull::Up);
    let vol_minus_pin = Input::new(p.P0_12, Pull::Up);

    let mut twis_config = twis::Config::default();
    twis_config.address0 = I2C_ADDRESS;
    twis_config.orc = I2C_OVERREAD_CHAR;
    let bus = twis::Twis::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twis_config);

    spawner.must_spawn(inputs::inputs_task(
        tick_timer,
        vol_plus_pin,
        vol_minus_pin,
        &VOL_PLUS,
        &VOL_MINUS,
    ));
    spawner.must_spawn(bus::bus_task(bus, leds, &KEYPAD, &VOL_MINUS, &VOL_PLUS));
}
