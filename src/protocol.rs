//! I2C keypad wire protocol.
//!
//! The keypad is a register-less slave with a two-byte write frame and a
//! one-byte read response:
//!
//! ```text
//! Write (master → slave), 2 bytes:
//!   Byte 0: command - only 0x40 (write-LED) is recognized
//!   Byte 1: bits[5:0] = LED pattern, bit 6 reserved,
//!           bit 7 = arm LED-mirror read
//!
//! Read (slave → master), 1 byte, one of:
//!   Mirror:  bit 7 = 1, bits[5:0] = current LED pattern
//!   Status:  bit 0 = Vol− pressed   bit 3 = Vol+ pressed
//!            bit 1 = Vol− short     bit 4 = Vol+ short
//!            bit 2 = Vol− long      bit 5 = Vol+ long
//! ```
//!
//! Malformed or unrecognized frames are dropped without touching any
//! state; the protocol has no error channel back to the master.

use core::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::button::ButtonFlags;
use crate::config::{CMD_WRITE_LED, LED_MIRROR_BIT, LED_PATTERN_MASK};

/// Decoded write-LED command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedWrite {
    /// New 6-bit LED pattern (bit i drives indicator i).
    pub pattern: u8,
    /// The next status read must return the LED mirror byte.
    pub arm_mirror: bool,
}

/// Parse a received write frame.
///
/// Returns `None` for short frames and for command codes other than
/// write-LED; the reserved bit 6 of the data byte is masked off. Bytes
/// past the second are ignored.
pub fn parse_led_write(frame: &[u8]) -> Option<LedWrite> {
    if frame.len() < 2 || frame[0] != CMD_WRITE_LED {
        return None;
    }
    let data = frame[1];
    Some(LedWrite {
        pattern: data & LED_PATTERN_MASK,
        arm_mirror: data & LED_MIRROR_BIT != 0,
    })
}

/// Slave-side protocol state shared between the bus handlers.
///
/// Both fields are single atomics; the receive handler writes them, the
/// request handler reads them. The mirror flag is consumed with `swap`
/// so it is honored by exactly one status read, and the handlers order
/// their accesses (pattern store before flag store, flag swap before
/// pattern load) so a mirror reply never carries a pattern older than
/// the write that armed it.
pub struct KeypadState {
    led_pattern: AtomicU8,
    mirror_armed: AtomicBool,
}

impl KeypadState {
    pub const fn new() -> Self {
        Self {
            led_pattern: AtomicU8::new(0),
            mirror_armed: AtomicBool::new(false),
        }
    }

    /// Currently latched LED pattern.
    pub fn led_pattern(&self) -> u8 {
        self.led_pattern.load(Ordering::Relaxed)
    }

    /// Whether the next status read will return the LED mirror byte.
    pub fn mirror_armed(&self) -> bool {
        self.mirror_armed.load(Ordering::Relaxed)
    }

    /// Handle a master write. Accepted frames latch the new pattern and
    /// mirror flag and yield the pattern so the caller can drive the
    /// output pins; anything else is dropped silently.
    pub fn on_receive(&self, frame: &[u8]) -> Option<u8> {
        let cmd = parse_led_write(frame)?;
        self.led_pattern.store(cmd.pattern, Ordering::Relaxed);
        self.mirror_armed.store(cmd.arm_mirror, Ordering::Relaxed);
        Some(cmd.pattern)
    }

    /// Compose the one-byte response for a master read.
    ///
    /// Consuming the button one-shots here is what guarantees each press
    /// classification reaches the master at most once.
    pub fn on_request(&self, vol_minus: &ButtonFlags, vol_plus: &ButtonFlags) -> u8 {
        if self.mirror_armed.swap(false, Ordering::Relaxed) {
            self.led_pattern.load(Ordering::Relaxed) | LED_MIRROR_BIT
        } else {
            button_status(vol_minus, vol_plus)
        }
    }
}

impl Default for KeypadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the button-status byte. Bits [7:6] stay zero.
fn button_status(vol_minus: &ButtonFlags, vol_plus: &ButtonFlags) -> u8 {
    let mut status = 0u8;
    status |= (vol_minus.is_pressed() as u8)
        | ((vol_minus.take_short_press() as u8) << 1)
        | ((vol_minus.take_long_press() as u8) << 2);
    status |= ((vol_plus.is_pressed() as u8) << 3)
        | ((vol_plus.take_short_press() as u8) << 4)
        | ((vol_plus.take_long_press() as u8) << 5);
    status
}
