//! Indicator LED bank.
//!
//! Six active-high LEDs driven bit-for-bit from the latched pattern
//! byte. Generic over the HAL pin trait so callers pass in their
//! board's GPIO outputs.

use embedded_hal::digital::OutputPin;

use crate::config::LED_COUNT;

/// The six indicator outputs, in pattern bit order.
pub struct LedBank<P: OutputPin> {
    pins: [P; LED_COUNT],
}

impl<P: OutputPin> LedBank<P> {
    pub fn new(pins: [P; LED_COUNT]) -> Self {
        Self { pins }
    }

    /// Drive pin i from bit i of `pattern`.
    pub fn apply(&mut self, pattern: u8) {
        for (i, pin) in self.pins.iter_mut().enumerate() {
            if pattern & (1 << i) != 0 {
                let _ = pin.set_high();
            } else {
                let _ = pin.set_low();
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn pins(&self) -> &[P; LED_COUNT] {
        &self.pins
    }
}
