//! Display line-bank abstractions
//!
//! Provides the tri-state output trait that chip-specific HALs implement
//! for the banks of lines wired to the display's segment cathodes.

/// One bank of up to eight tri-state display lines.
///
/// Every line is in one of two electrical states:
///
/// - **sinking** - configured as an output driven low, completing the
///   circuit from the display's current-limited common anode; the
///   segment on this line lights.
/// - **floating** - configured as a high-impedance input; no current
///   flows and the line is electrically inert.
///
/// There is no driven-high state. The common anode supplies the current;
/// a line only ever sinks it or stays out of the circuit.
pub trait OutputBank {
    /// Sink every line whose bit is set in `mask`; float all others.
    ///
    /// The whole bank is rewritten on each call, so no line can keep a
    /// drive state left over from a previous call.
    fn sink(&mut self, mask: u8);

    /// Float every line in the bank.
    fn float_all(&mut self) {
        self.sink(0);
    }
}
