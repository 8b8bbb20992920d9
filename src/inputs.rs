//! Button polling task.
//!
//! Samples both button pins at 1 kHz and advances their debounce state
//! machines. Ticks come from TIMER1 free-running at 1 MHz, a wrapping
//! 32-bit counter that [`Uptime`] extends to 64 bits; the 1 kHz poll
//! rate observes every wrap with ample margin.
//!
//! Buttons are wired active-low with internal pull-ups, so a low pin
//! level samples as pressed.

use defmt::info;
use embassy_nrf::gpio::Input;
use embassy_nrf::peripherals::TIMER1;
use embassy_nrf::timer::Timer;
use embassy_time::{Duration, Ticker};

use crate::button::{ButtonChannel, ButtonFlags};
use crate::config::{BUTTON_DEBOUNCE_US, BUTTON_POLL_PERIOD_US, LONG_PRESS_THRESHOLD_US};
use crate::tick::Uptime;

/// Run the polling loop. Never returns.
#[embassy_executor::task]
pub async fn inputs_task(
    mut tick_timer: Timer<'static, TIMER1>,
    vol_plus_pin: Input<'static>,
    vol_minus_pin: Input<'static>,
    vol_plus: &'static ButtonFlags,
    vol_minus: &'static ButtonFlags,
) {
    let mut uptime = Uptime::new();
    let mut plus_ch = ButtonChannel::new(vol_plus, BUTTON_DEBOUNCE_US, LONG_PRESS_THRESHOLD_US);
    let mut minus_ch = ButtonChannel::new(vol_minus, BUTTON_DEBOUNCE_US, LONG_PRESS_THRESHOLD_US);

    info!(
        "inputs: polling buttons at {} Hz",
        1_000_000 / BUTTON_POLL_PERIOD_US
    );

    let mut ticker = Ticker::every(Duration::from_micros(BUTTON_POLL_PERIOD_US));
    loop {
        let now = uptime.extend(tick_timer.cc(0).capture());
        plus_ch.update(vol_plus_pin.is_low(), now);
        minus_ch.update(vol_minus_pin.is_low(), now);
        ticker.next().await;
    }
}
