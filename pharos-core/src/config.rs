//! Build-time configuration types
//!
//! The wiring map and the scroll timing are data, not behavior: boards
//! define them as constants and the engine consumes them unchanged.
//! Validation runs once at boot so a miswired map or a degenerate
//! timing set is caught before the display loop starts.

use crate::segment::{Segment, SEGMENT_COUNT};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors found while validating build-time configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// A segment's descriptor sinks no line, or more than one.
    LineCount(Segment),
    /// A segment's descriptor sinks a line already claimed by an
    /// earlier segment.
    LineCollision(Segment),
    /// A dwell target of zero scan passes would never show a character.
    ZeroDwell,
    /// The inter-character blank must outlast one drive slice, or
    /// repeated characters blur together.
    BlankTooShort,
}

/// The drive-line pair that selects one segment.
///
/// One bit per bank line; a set bit means "sink this line". A valid
/// descriptor has exactly one bit set across both masks, so applying it
/// lights that segment and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentLines {
    /// Sink mask for bank A.
    pub bank_a: u8,
    /// Sink mask for bank B.
    pub bank_b: u8,
}

impl SegmentLines {
    /// Descriptor for a segment wired to bank A line `bit`.
    pub const fn on_bank_a(bit: u8) -> Self {
        Self {
            bank_a: 1 << bit,
            bank_b: 0,
        }
    }

    /// Descriptor for a segment wired to bank B line `bit`.
    pub const fn on_bank_b(bit: u8) -> Self {
        Self {
            bank_a: 0,
            bank_b: 1 << bit,
        }
    }

    /// Total number of lines this descriptor sinks.
    pub const fn line_count(self) -> u32 {
        self.bank_a.count_ones() + self.bank_b.count_ones()
    }
}

/// Wiring table: one drive-line descriptor per segment.
///
/// Indexed by segment ordinal. The table is specific to how a board
/// harnesses the display; different hardware supplies a different map
/// and revalidates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentMap {
    lines: [SegmentLines; SEGMENT_COUNT],
}

impl SegmentMap {
    /// Build a map from descriptors in segment-ordinal order.
    pub const fn new(lines: [SegmentLines; SEGMENT_COUNT]) -> Self {
        Self { lines }
    }

    /// The descriptor for one segment.
    pub const fn get(&self, segment: Segment) -> SegmentLines {
        self.lines[segment as usize]
    }

    /// Check the map's electrical invariants:
    ///
    /// - every descriptor sinks exactly one line
    /// - no two descriptors sink the same line
    ///
    /// Together these guarantee that activating any one segment can
    /// never partially energize another.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut claimed_a: u8 = 0;
        let mut claimed_b: u8 = 0;
        for segment in Segment::ALL {
            let lines = self.get(segment);
            if lines.line_count() != 1 {
                return Err(ConfigError::LineCount(segment));
            }
            if claimed_a & lines.bank_a != 0 || claimed_b & lines.bank_b != 0 {
                return Err(ConfigError::LineCollision(segment));
            }
            claimed_a |= lines.bank_a;
            claimed_b |= lines.bank_b;
        }
        Ok(())
    }
}

/// Timing parameters for the scroll loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScrollTiming {
    /// How long one segment stays energized within a scan pass (µs).
    pub slice_us: u32,
    /// Full segment-scan passes spent on each character before
    /// advancing.
    pub dwell_passes: u16,
    /// Dark gap between characters, all lines floating (ms).
    pub blank_ms: u32,
}

impl ScrollTiming {
    /// Build a timing set.
    pub const fn new(slice_us: u32, dwell_passes: u16, blank_ms: u32) -> Self {
        Self {
            slice_us,
            dwell_passes,
            blank_ms,
        }
    }

    /// The blank gap in microseconds.
    pub const fn blank_us(&self) -> u32 {
        self.blank_ms * 1_000
    }

    /// Check that the timing can actually render a message: at least
    /// one dwell pass, and a blank gap longer than a single drive
    /// slice (otherwise consecutive identical characters merge).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dwell_passes == 0 {
            return Err(ConfigError::ZeroDwell);
        }
        if self.blank_us() <= self.slice_us {
            return Err(ConfigError::BlankTooShort);
        }
        Ok(())
    }
}

impl Default for ScrollTiming {
    fn default() -> Self {
        // 100 µs per segment makes one full pass 1.5 ms - a glyph
        // refresh far above flicker fusion - and 200 passes holds each
        // character for 0.3 s.
        Self::new(100, 200, 30)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_per_line() -> SegmentMap {
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

    #[test]
    fn valid_map_passes() {
        assert_eq!(one_per_line().validate(), Ok(()));
    }

    #[test]
    fn empty_descriptor_is_rejected() {
        let mut map = one_per_line();
        map.lines[3] = SegmentLines {
            bank_a: 0,
            bank_b: 0,
        };
        assert_eq!(
            map.validate(),
            Err(ConfigError::LineCount(Segment::ALL[3]))
        );
    }

    #[test]
    fn double_descriptor_is_rejected() {
        let mut map = one_per_line();
        map.lines[2] = SegmentLines {
            bank_a: 0b0000_0011,
            bank_b: 0,
        };
        assert_eq!(
            map.validate(),
            Err(ConfigError::LineCount(Segment::ALL[2]))
        );
    }

    #[test]
    fn shared_line_is_rejected() {
        let mut map = one_per_line();
        // Segment 5 claims the same bank A line as segment 1.
        map.lines[5] = SegmentLines::on_bank_a(1);
        assert_eq!(
            map.validate(),
            Err(ConfigError::LineCollision(Segment::ALL[5]))
        );
    }

    #[test]
    fn default_timing_is_valid() {
        assert_eq!(ScrollTiming::default().validate(), Ok(()));
    }

    #[test]
    fn zero_dwell_is_rejected() {
        let timing = ScrollTiming::new(100, 0, 30);
        assert_eq!(timing.validate(), Err(ConfigError::ZeroDwell));
    }

    #[test]
    fn blank_no_longer_than_slice_is_rejected() {
        // 1 ms blank vs 1000 µs slice: equal, not longer.
        let timing = ScrollTiming::new(1_000, 200, 1);
        assert_eq!(timing.validate(), Err(ConfigError::BlankTooShort));
    }
}
