//! Push-button debouncing and press-duration classification.
//!
//! Each physical button is split across the two execution contexts:
//!
//! - [`ButtonChannel`] is owned by the polling loop. It consumes raw pin
//!   samples plus the current tick count and advances the debounce state
//!   machine.
//! - [`ButtonFlags`] is the shared, atomically accessed view the bus
//!   request handler reads (and clears) when composing a status byte.
//!
//! A release sets exactly one of the short/long one-shot flags, decided
//! by whether the press was held past the long-press threshold. The
//! one-shots latch until consumed, so a classification is reported to
//! the master at most once no matter how the polls and bus reads
//! interleave.

use core::sync::atomic::{AtomicBool, Ordering};

/// Debounced button state shared with the bus context.
///
/// Every field is an individual atomic; the polling loop writes, the bus
/// request handler reads. `Relaxed` ordering is enough because no
/// invariant spans more than one field.
pub struct ButtonFlags {
    pressed: AtomicBool,
    short_press: AtomicBool,
    long_press: AtomicBool,
}

impl ButtonFlags {
    pub const fn new() -> Self {
        Self {
            pressed: AtomicBool::new(false),
            short_press: AtomicBool::new(false),
            long_press: AtomicBool::new(false),
        }
    }

    /// Current debounced level. No side effect.
    pub fn is_pressed(&self) -> bool {
        self.pressed.load(Ordering::Relaxed)
    }

    /// Consume the short-press one-shot. Returns `true` at most once per
    /// release.
    pub fn take_short_press(&self) -> bool {
        self.short_press.swap(false, Ordering::Relaxed)
    }

    /// Consume the long-press one-shot. Returns `true` at most once per
    /// release.
    pub fn take_long_press(&self) -> bool {
        self.long_press.swap(false, Ordering::Relaxed)
    }

    fn set_pressed(&self, level: bool) {
        self.pressed.store(level, Ordering::Relaxed);
    }

    fn raise_short_press(&self) {
        self.short_press.store(true, Ordering::Relaxed);
    }

    fn raise_long_press(&self) {
        self.long_press.store(true, Ordering::Relaxed);
    }
}

impl Default for ButtonFlags {
    fn default() -> Self {
        Self::new()
    }
}

/// Logical press state. The long-press deadline lives only in `Pressed`,
/// so a bounce on the release edge cannot overwrite it.
#[derive(Clone, Copy)]
enum Phase {
    Released,
    Pressed { long_at: u64 },
}

/// Debounce + press-duration state machine for one button.
///
/// Call [`update`](Self::update) with the sampled raw level at a few
/// hundred hertz or more. A raw level must stay put for the debounce
/// delay before it is accepted as the logical level; any flip restarts
/// the window.
pub struct ButtonChannel<'a> {
    flags: &'a ButtonFlags,
    debounce_us: u64,
    long_press_us: u64,
    last_raw: bool,
    stable_at: u64,
    phase: Phase,
}

impl<'a> ButtonChannel<'a> {
    pub const fn new(flags: &'a ButtonFlags, debounce_us: u64, long_press_us: u64) -> Self {
        Self {
            flags,
            debounce_us,
            long_press_us,
            last_raw: false,
            stable_at: 0,
            phase: Phase::Released,
        }
    }

    /// Advance the state machine with one raw sample at tick `now`.
    ///
    /// On a `Released → Pressed` transition the long-press deadline is
    /// armed; on `Pressed → Released` exactly one of the one-shot flags
    /// is raised (threshold equality counts as long).
    pub fn update(&mut self, raw_pressed: bool, now: u64) {
        if raw_pressed != self.last_raw {
            // Any flip restarts the stability window for the new level.
            self.last_raw = raw_pressed;
            self.stable_at = now + self.debounce_us;
            return;
        }

        if now < self.stable_at {
            return;
        }

        match self.phase {
            Phase::Released if raw_pressed => {
                self.phase = Phase::Pressed {
                    long_at: now + self.long_press_us,
                };
                self.flags.set_pressed(true);
            }
            Phase::Pressed { long_at } if !raw_pressed => {
                self.phase = Phase::Released;
                self.flags.set_pressed(false);
                if now >= long_at {
                    self.flags.raise_long_press();
                } else {
                    self.flags.raise_short_press();
                }
            }
            _ => {}
        }
    }

    /// Current debounced level, as visible to the bus context.
    pub fn is_pressed(&self) -> bool {
        self.flags.is_pressed()
    }
}
