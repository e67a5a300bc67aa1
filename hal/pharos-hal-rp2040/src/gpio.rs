//! Tri-state display line banks over RP2040 GPIO
//!
//! The RP2040 output data register persists while a pin is in input
//! mode, so each line's level is preloaded low once at construction and
//! sinking/floating is purely a direction change afterwards.

use embassy_rp::gpio::{AnyPin, Flex, Pull};
use embassy_rp::Peri;

use pharos_hal::OutputBank;

/// A bank of display lines on RP2040 GPIO pins.
///
/// Bit `i` of a sink mask corresponds to `pins[i]` as passed to
/// [`FlexBank::new`]. Banks hold at most eight lines (one mask byte).
pub struct FlexBank<'d, const N: usize> {
    lines: [Flex<'d>; N],
}

impl<'d, const N: usize> FlexBank<'d, N> {
    /// Create a bank from GPIO pins, starting with every line floating.
    ///
    /// Pulls are disabled: a floating display line must be genuinely
    /// high-impedance, not pulled toward either rail.
    pub fn new(pins: [Peri<'d, AnyPin>; N]) -> Self {
        let mut lines = pins.map(|pin| Flex::new(pin));
        for line in &mut lines {
            line.set_pull(Pull::None);
            // Preload the output level; it only takes effect while the
            // line is in output mode.
            line.set_low();
            line.set_as_input();
        }
        Self { lines }
    }
}

impl<const N: usize> OutputBank for FlexBank<'_, N> {
    fn sink(&mut self, mask: u8) {
        for (i, line) in self.lines.iter_mut().enumerate() {
            if mask & (1 << i) != 0 {
                line.set_as_output();
            } else {
                line.set_as_input();
            }
        }
    }
}
