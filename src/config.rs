//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and protocol
//! constants live here so they can be tuned in one place.

// I2C slave

/// 7-bit I2C address the keypad answers on.
pub const I2C_ADDRESS: u8 = 0x20;

/// Command code for the write-LED frame (first byte of a master write).
pub const CMD_WRITE_LED: u8 = 0x40;

/// Byte clocked out if the master reads past the one-byte response.
pub const I2C_OVERREAD_CHAR: u8 = 0x00;

// LEDs

/// Number of indicator LEDs driven from the pattern byte.
pub const LED_COUNT: usize = 6;

/// Mask selecting the LED pattern bits of the write data byte.
/// Bit 6 is reserved and ignored.
pub const LED_PATTERN_MASK: u8 = 0x3F;

/// Bit 7 of the write data byte arms the LED-mirror read; the same bit
/// marks a mirror response on the wire.
pub const LED_MIRROR_BIT: u8 = 0x80;

// Buttons

/// Level stability required before a raw pin change is accepted (µs).
pub const BUTTON_DEBOUNCE_US: u64 = 50_000;

/// Held duration at or above which a release classifies as a long press (µs).
pub const LONG_PRESS_THRESHOLD_US: u64 = 500_000;

/// Button sampling period (µs). 1 kHz keeps well inside the debounce window.
pub const BUTTON_POLL_PERIOD_US: u64 = 1_000;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   LED 0..5       → P0.13, P0.14, P0.15, P0.16, P0.17, P0.20
//   Button Vol+    → P0.11
//   Button Vol−    → P0.12
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
