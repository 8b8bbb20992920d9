//! Integration tests for volkey host-testable logic.
//!
//! Each test walks a full master-visible scenario: write frames in,
//! response bytes out, with button activity simulated through the
//! polling-side state machines.

use volkey::button::{ButtonChannel, ButtonFlags};
use volkey::config::{BUTTON_DEBOUNCE_US, CMD_WRITE_LED, LONG_PRESS_THRESHOLD_US};
use volkey::protocol::KeypadState;
use volkey::tick::Uptime;

fn channel(flags: &ButtonFlags) -> ButtonChannel<'_> {
    ButtonChannel::new(flags, BUTTON_DEBOUNCE_US, LONG_PRESS_THRESHOLD_US)
}

#[test]
fn write_pattern_then_status_read() {
    // Master writes [0x40, 0x05]: LEDs 0 and 2 on, no mirror armed.
    let state = KeypadState::new();
    let vol_minus = ButtonFlags::new();
    let vol_plus = ButtonFlags::new();

    let pattern = state.on_receive(&[CMD_WRITE_LED, 0x05]);
    assert_eq!(pattern, Some(0x05));

    // The next read is a button-status byte: bit 7 clear, all idle.
    let response = state.on_request(&vol_minus, &vol_plus);
    assert_eq!(response & 0x80, 0);
    assert_eq!(response, 0x00);
}

#[test]
fn armed_mirror_read_is_consumed_once() {
    // Master writes [0x40, 0x81]: LED 0 on, mirror armed.
    let state = KeypadState::new();
    let vol_minus = ButtonFlags::new();
    let vol_plus = ButtonFlags::new();

    state.on_receive(&[CMD_WRITE_LED, 0x81]);
    assert_eq!(state.led_pattern(), 0x01);
    assert!(state.mirror_armed());

    // First read mirrors the LEDs with the marker bit; the one after
    // reverts to button status.
    assert_eq!(state.on_request(&vol_minus, &vol_plus), 0x81);
    assert_eq!(state.on_request(&vol_minus, &vol_plus), 0x00);
}

#[test]
fn long_press_reported_exactly_once() {
    // Vol+ held for 600 ms then released; by the time the master polls,
    // the button is up and only the long-press one-shot is set.
    let state = KeypadState::new();
    let vol_minus = ButtonFlags::new();
    let vol_plus = ButtonFlags::new();
    let mut plus_ch = channel(&vol_plus);

    plus_ch.update(true, 0);
    plus_ch.update(true, BUTTON_DEBOUNCE_US);
    plus_ch.update(false, 600_000);
    plus_ch.update(false, 600_000 + BUTTON_DEBOUNCE_US);

    let first = state.on_request(&vol_minus, &vol_plus);
    assert_eq!(first, 1 << 5);

    let second = state.on_request(&vol_minus, &vol_plus);
    assert_eq!(second, 0x00);
}

#[test]
fn malformed_traffic_never_disturbs_state() {
    let state = KeypadState::new();
    let vol_minus = ButtonFlags::new();
    let vol_plus = ButtonFlags::new();

    state.on_receive(&[CMD_WRITE_LED, 0x23]);

    // Short frame, wrong command, empty frame: all dropped.
    assert!(state.on_receive(&[CMD_WRITE_LED]).is_none());
    assert!(state.on_receive(&[0x10, 0xFF]).is_none());
    assert!(state.on_receive(&[]).is_none());

    assert_eq!(state.led_pattern(), 0x23);
    assert!(!state.mirror_armed());
    assert_eq!(state.on_request(&vol_minus, &vol_plus), 0x00);
}

#[test]
fn press_survives_tick_counter_wrap() {
    // A press straddling the 32-bit wrap of the raw counter still
    // debounces and classifies correctly on the extended timeline.
    let vol_plus = ButtonFlags::new();
    let mut ch = channel(&vol_plus);
    let mut uptime = Uptime::new();

    let press_edge = uptime.extend(0xFFFF_F000); // ~4 ms before the wrap
    ch.update(true, press_edge);

    let accept = uptime.extend(0xFFFF_F000u32.wrapping_add(BUTTON_DEBOUNCE_US as u32));
    assert!(accept > press_edge);
    ch.update(true, accept);
    assert!(vol_plus.is_pressed());

    let release_edge = uptime.extend(0x0010_0000); // well past the wrap
    ch.update(false, release_edge);
    let release_accept = uptime.extend(0x0010_0000 + BUTTON_DEBOUNCE_US as u32);
    ch.update(false, release_accept);

    assert!(vol_plus.take_long_press());
    assert!(!vol_plus.take_short_press());
}
