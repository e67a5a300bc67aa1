//! Board wiring for the LTP-587G harness
//!
//! The display's segment cathodes hang off two GPIO banks; the shared
//! common anode goes through the single current-limiting resistor. No
//! driver IC: a segment lights when its line sinks and every other
//! line floats.
//!
//! Bank A spans GPIO 0-7 (eight lines), bank B spans GPIO 8-14
//! (seven). The top two horizontal segments share one line - with the
//! anode current-limited there is no visible brightness penalty - and
//! the decimal point is left unwired.

use pharos_core::config::{SegmentLines, SegmentMap};

/// Lines in bank A (GPIO 0-7).
pub const BANK_A_LINES: usize = 8;

/// Lines in bank B (GPIO 8-14).
pub const BANK_B_LINES: usize = 7;

/// Which line sinks each segment, in segment-ordinal order
/// (A, C, D, E, F, G, H, K, M, N, P, R, S, T, U).
///
/// Validated at boot; edit alongside the harness, not instead of it.
pub const SEGMENT_MAP: SegmentMap = SegmentMap::new([
    SegmentLines::on_bank_a(0), // A - the joined top pair
    SegmentLines::on_bank_b(1), // C
    SegmentLines::on_bank_b(4), // D
    SegmentLines::on_bank_a(6), // E
    SegmentLines::on_bank_a(7), // F
    SegmentLines::on_bank_a(4), // G
    SegmentLines::on_bank_a(3), // H
    SegmentLines::on_bank_a(2), // K
    SegmentLines::on_bank_a(1), // M
    SegmentLines::on_bank_b(0), // N
    SegmentLines::on_bank_b(2), // P
    SegmentLines::on_bank_b(5), // R
    SegmentLines::on_bank_b(6), // S
    SegmentLines::on_bank_a(5), // T
    SegmentLines::on_bank_b(3), // U
]);
