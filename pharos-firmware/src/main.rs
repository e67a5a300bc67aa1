//! Pharos - Alphanumeric Display Message Scroller
//!
//! Main firmware binary for RP2040-based boards driving a bare
//! LTP-587G 16-segment display: no driver IC, just fifteen GPIO lines,
//! one current-limiting resistor on the common anode, and persistence
//! of vision.
//!
//! A fixed message is spelled out one character at a time, with a
//! brief dark gap after each character so consecutive identical
//! characters can be told apart. The message repeats until power-off.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use pharos_core::message::Message;
use pharos_core::scroller::Scroller;
use pharos_drivers::{MessageScroller, SegmentMux};
use pharos_hal_rp2040::FlexBank;

mod board;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Pharos firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Wiring and timing are compile-time data; catch a bad edit at
    // boot rather than as a ghost segment.
    unwrap!(board::SEGMENT_MAP.validate());
    unwrap!(config::TIMING.validate());
    let message = unwrap!(Message::new(config::MESSAGE));
    info!(
        "Scrolling {} characters at {} µs/slice, {} passes, {} ms gap",
        message.len(),
        config::TIMING.slice_us,
        config::TIMING.dwell_passes,
        config::TIMING.blank_ms
    );

    // Both banks come up floating - the display is dark until the
    // first scan slice.
    let bank_a: FlexBank<'static, { board::BANK_A_LINES }> = FlexBank::new([
        p.PIN_0.into(),
        p.PIN_1.into(),
        p.PIN_2.into(),
        p.PIN_3.into(),
        p.PIN_4.into(),
        p.PIN_5.into(),
        p.PIN_6.into(),
        p.PIN_7.into(),
    ]);
    let bank_b: FlexBank<'static, { board::BANK_B_LINES }> = FlexBank::new([
        p.PIN_8.into(),
        p.PIN_9.into(),
        p.PIN_10.into(),
        p.PIN_11.into(),
        p.PIN_12.into(),
        p.PIN_13.into(),
        p.PIN_14.into(),
    ]);

    let mux = SegmentMux::new(bank_a, bank_b, board::SEGMENT_MAP);
    let engine = Scroller::new(message, config::TIMING);
    let scroller = MessageScroller::new(mux, Delay, engine);

    info!("Display task starting");
    unwrap!(spawner.spawn(tasks::scroll_task(scroller)));
}
