//! Unified error type for volkey.
//!
//! Only the bus layer can fail; the protocol itself defines malformed
//! input as silently dropped, not as an error. Implements
//! `defmt::Format` for efficient on-target logging.

use defmt::Format;
use embassy_nrf::twis;

/// Top-level error type used across the firmware.
#[derive(Debug, Format)]
pub enum Error {
    /// TWIS failed while waiting for a bus transaction.
    Listen(twis::Error),

    /// TWIS failed while clocking out the response byte.
    Respond(twis::Error),
}
