//! Segment multiplexer
//!
//! The display has more segments than independent drive states, so only
//! one segment is ever energized at a time. [`SegmentMux`] owns both
//! line banks outright - nothing else can touch the pins - and rewrites
//! both banks on every call, so no line keeps drive state from an
//! earlier segment.

use pharos_core::config::SegmentMap;
use pharos_core::segment::Segment;
use pharos_hal::OutputBank;

/// One-segment-at-a-time driver over two tri-state line banks.
pub struct SegmentMux<A, B> {
    bank_a: A,
    bank_b: B,
    map: SegmentMap,
}

impl<A: OutputBank, B: OutputBank> SegmentMux<A, B> {
    /// Take ownership of the banks and start with every line floating.
    ///
    /// The map should have passed [`SegmentMap::validate`] first; the
    /// mux applies descriptors as-is.
    pub fn new(mut bank_a: A, mut bank_b: B, map: SegmentMap) -> Self {
        bank_a.float_all();
        bank_b.float_all();
        Self {
            bank_a,
            bank_b,
            map,
        }
    }

    /// Energize exactly `segment`.
    ///
    /// Every line not named by the segment's descriptor is floated in
    /// the same rewrite, so back-to-back calls for different segments
    /// never overlap electrically, and repeating a call is idempotent.
    pub fn activate(&mut self, segment: Segment) {
        let lines = self.map.get(segment);
        self.bank_a.sink(lines.bank_a);
        self.bank_b.sink(lines.bank_b);
    }

    /// Float every line on both banks.
    ///
    /// Used for the inter-character blank and as the idle state.
    pub fn deactivate_all(&mut self) {
        self.bank_a.float_all();
        self.bank_b.float_all();
    }

    /// Release the banks.
    pub fn free(self) -> (A, B) {
        (self.bank_a, self.bank_b)
    }
}

#[cfg(test)]
mod tests {
    use pharos_core::config::SegmentLines;
    use pharos_core::segment::SEGMENT_COUNT;

    use super::*;

    /// Mock bank recording the last applied sink mask.
    #[derive(Default)]
    struct MockBank {
        sunk: u8,
        writes: usize,
    }

    impl OutputBank for MockBank {
        fn sink(&mut self, mask: u8) {
            self.sunk = mask;
            self.writes += 1;
        }
    }

    /// One line per segment: first eight on bank A, the rest on bank B.
    fn test_map() -> SegmentMap {
        let mut lines = [SegmentLines::on_bank_a(0); SEGMENT_COUNT];
        for (i, entry) in lines.iter_mut().enumerate() {
            *entry = if i < 8 {
                SegmentLines::on_bank_a(i as u8)
            } else {
                SegmentLines::on_bank_b((i - 8) as u8)
            };
        }
        SegmentMap::new(lines)
    }

    fn mux() -> SegmentMux<MockBank, MockBank> {
        SegmentMux::new(MockBank::default(), MockBank::default(), test_map())
    }

    #[test]
    fn starts_with_everything_floating() {
        let mux = mux();
        assert_eq!(mux.bank_a.sunk, 0);
        assert_eq!(mux.bank_b.sunk, 0);
    }

    #[test]
    fn activate_sinks_exactly_one_line() {
        let map = test_map();
        let mut mux = mux();
        for segment in Segment::ALL {
            mux.activate(segment);
            let expected = map.get(segment);
            assert_eq!(mux.bank_a.sunk, expected.bank_a);
            assert_eq!(mux.bank_b.sunk, expected.bank_b);
            let total =
                mux.bank_a.sunk.count_ones() + mux.bank_b.sunk.count_ones();
            assert_eq!(total, 1, "exactly one line driven at any instant");
        }
    }

    #[test]
    fn activate_clears_the_previous_segment() {
        let mut mux = mux();
        mux.activate(Segment::A);
        mux.activate(Segment::N); // bank B line
        // Bank A was rewritten to all-floating as part of the switch.
        assert_eq!(mux.bank_a.sunk, 0);
        assert_eq!(mux.bank_b.sunk, test_map().get(Segment::N).bank_b);
    }

    #[test]
    fn activate_is_idempotent() {
        let mut mux = mux();
        mux.activate(Segment::G);
        let (a, b) = (mux.bank_a.sunk, mux.bank_b.sunk);
        mux.activate(Segment::G);
        assert_eq!((mux.bank_a.sunk, mux.bank_b.sunk), (a, b));
    }

    #[test]
    fn deactivate_all_floats_both_banks() {
        let mut mux = mux();
        mux.activate(Segment::D);
        mux.deactivate_all();
        assert_eq!(mux.bank_a.sunk, 0);
        assert_eq!(mux.bank_b.sunk, 0);
    }

    #[test]
    fn every_call_rewrites_both_banks() {
        let mut mux = mux();
        let before = (mux.bank_a.writes, mux.bank_b.writes);
        mux.activate(Segment::C);
        mux.deactivate_all();
        assert_eq!(mux.bank_a.writes, before.0 + 2);
        assert_eq!(mux.bank_b.writes, before.1 + 2);
    }
}
