//! The blocking scroll loop
//!
//! Marries the pure engine to the hardware: every engine slice becomes
//! one mux operation followed by a busy-wait of the slice's hold time.
//! There is exactly one thread of control and no other suspension - the
//! loop runs until power is cut.

use embedded_hal::delay::DelayNs;

use pharos_core::scroller::{Drive, Scroller};
use pharos_hal::OutputBank;

use crate::mux::SegmentMux;

/// Scrolls a message on the display, one drive slice at a time.
pub struct MessageScroller<A, B, D> {
    mux: SegmentMux<A, B>,
    delay: D,
    engine: Scroller,
}

impl<A, B, D> MessageScroller<A, B, D>
where
    A: OutputBank,
    B: OutputBank,
    D: DelayNs,
{
    /// Build the loop from a mux, a delay source, and an engine.
    pub fn new(mux: SegmentMux<A, B>, delay: D, engine: Scroller) -> Self {
        Self { mux, delay, engine }
    }

    /// Perform one drive slice: apply the engine's command to the
    /// pins, then hold it for the commanded duration.
    pub fn step(&mut self) {
        let slice = self.engine.step();
        match slice.drive {
            Drive::Energize(segment) => self.mux.activate(segment),
            Drive::FloatAll => self.mux.deactivate_all(),
        }
        self.delay.delay_us(slice.hold_us);
    }

    /// The engine, for progress inspection.
    pub fn engine(&self) -> &Scroller {
        &self.engine
    }

    /// Run the display forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Tear down and hand back the parts.
    pub fn free(self) -> (SegmentMux<A, B>, D) {
        (self.mux, self.delay)
    }
}
