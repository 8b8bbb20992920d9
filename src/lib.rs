//! Test-only library interface for volkey.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

// Internal module paths for the actual implementations
#[path = "button.rs"]
mod button_impl;
#[path = "config.rs"]
mod config_impl;
#[cfg(any(test, feature = "embedded"))]
#[path = "leds.rs"]
mod leds_impl;
#[path = "protocol.rs"]
mod protocol_impl;
#[path = "tick.rs"]
mod tick_impl;

pub mod button {
    pub use crate::button_impl::*;
}

pub mod config {
    pub use crate::config_impl::*;
}

#[cfg(any(test, feature = "embedded"))]
pub mod leds {
    pub use crate::leds_impl::*;
}

pub mod protocol {
    pub use crate::protocol_impl::*;
}

pub mod tick {
    pub use crate::tick_impl::*;
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
