//! I2C slave (TWIS) bus task.
//!
//! Services the two bus entry points: master writes carrying a
//! write-LED frame, and master reads answered with the one-byte mirror
//! or button-status response. An accepted write drives the LED pins in
//! the same pass, before the next bus event is serviced.
//!
//! Nothing here blocks on anything but the bus itself, and no bus
//! condition is fatal: protocol violations are dropped silently per the
//! wire contract, transport errors are logged and the task resumes
//! listening.

use defmt::{debug, info, warn};
use embassy_nrf::gpio::Output;
use embassy_nrf::peripherals::TWISPI0;
use embassy_nrf::twis::{Command, Twis};

use crate::button::ButtonFlags;
use crate::config::I2C_ADDRESS;
use crate::error::Error;
use crate::leds::LedBank;
use crate::protocol::KeypadState;

/// Longest write frame we accept; anything past the second byte is
/// ignored by the protocol anyway.
const RX_BUF_LEN: usize = 4;

/// Run the slave loop. Never returns.
#[embassy_executor::task]
pub async fn bus_task(
    mut twis: Twis<'static, TWISPI0>,
    mut leds: LedBank<Output<'static>>,
    state: &'static KeypadState,
    vol_minus: &'static ButtonFlags,
    vol_plus: &'static ButtonFlags,
) {
    info!("bus: listening as I2C slave at {=u8:#x}", I2C_ADDRESS);

    loop {
        if let Err(e) = service(&mut twis, &mut leds, state, vol_minus, vol_plus).await {
            warn!("bus: {}", e);
        }
    }
}

/// Service one bus transaction.
async fn service(
    twis: &mut Twis<'static, TWISPI0>,
    leds: &mut LedBank<Output<'static>>,
    state: &KeypadState,
    vol_minus: &ButtonFlags,
    vol_plus: &ButtonFlags,
) -> Result<(), Error> {
    let mut rx = [0u8; RX_BUF_LEN];

    match twis.listen(&mut rx).await.map_err(Error::Listen)? {
        Command::Write(n) => handle_write(state, leds, &rx[..n]),
        Command::Read => respond(twis, state, vol_minus, vol_plus).await?,
        Command::WriteRead(n) => {
            // Combined transaction with repeated start: apply the write,
            // then answer the read that follows it.
            handle_write(state, leds, &rx[..n]);
            respond(twis, state, vol_minus, vol_plus).await?;
        }
    }

    Ok(())
}

fn handle_write(state: &KeypadState, leds: &mut LedBank<Output<'static>>, frame: &[u8]) {
    match state.on_receive(frame) {
        Some(pattern) => {
            leds.apply(pattern);
            debug!("bus: LED pattern {=u8:#x}", pattern);
        }
        None => debug!("bus: dropped {} byte frame", frame.len()),
    }
}

async fn respond(
    twis: &mut Twis<'static, TWISPI0>,
    state: &KeypadState,
    vol_minus: &ButtonFlags,
    vol_plus: &ButtonFlags,
) -> Result<(), Error> {
    let response = [state.on_request(vol_minus, vol_plus)];
    twis.respond_to_read(&response).await.map_err(Error::Respond)?;
    Ok(())
}
