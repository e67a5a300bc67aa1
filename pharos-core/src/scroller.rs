//! The scroll engine
//!
//! A pure state machine over the message: each call to
//! [`Scroller::step`] yields one drive slice - which segment to
//! energize (or none) and how long to hold it - and advances the cycle.
//! Side effects live entirely in the driver layer, so the exact drive
//! sequence is checkable on the host.

use crate::config::ScrollTiming;
use crate::font;
use crate::message::Message;
use crate::segment::{Segment, SEGMENT_COUNT};

/// Electrical intent of one drive slice.
///
/// Per slice exactly one of these is selected - never two segments at
/// once, which keeps the display's shared lines free of unintended
/// current paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Drive {
    /// Sink exactly this segment's line.
    Energize(Segment),
    /// Float every line.
    FloatAll,
}

/// One engine command: what to drive, and for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Slice {
    /// The drive state for this slice.
    pub drive: Drive,
    /// How long to hold it before the next step.
    pub hold_us: u32,
}

/// Engine position within the display cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Scanning the current character, one segment ordinal per slice.
    Scan {
        char_index: usize,
        ordinal: u8,
        pass: u16,
    },
    /// Dark gap after a character's dwell, before the next character.
    Gap { char_index: usize },
}

/// The scroll engine.
///
/// Endless: there is no terminal state, and `step` never fails. The
/// cycle per character is `dwell_passes` full scans of all
/// [`SEGMENT_COUNT`] ordinals, then one blank gap, then the next
/// character (wrapping at the end of the message). The gap is what
/// makes two consecutive identical characters read as two.
#[derive(Debug, Clone)]
pub struct Scroller {
    message: Message,
    timing: ScrollTiming,
    state: State,
}

impl Scroller {
    /// Start a scroller at the first character, first ordinal.
    pub const fn new(message: Message, timing: ScrollTiming) -> Self {
        Self {
            message,
            timing,
            state: State::Scan {
                char_index: 0,
                ordinal: 0,
                pass: 0,
            },
        }
    }

    /// Index of the character currently being displayed (during the
    /// gap, the character just displayed).
    pub const fn char_index(&self) -> usize {
        match self.state {
            State::Scan { char_index, .. } | State::Gap { char_index } => char_index,
        }
    }

    /// Produce the next drive slice and advance the cycle.
    pub fn step(&mut self) -> Slice {
        match self.state {
            State::Scan {
                char_index,
                ordinal,
                pass,
            } => {
                let mask = font::lookup(self.message.byte(char_index));
                let segment = Segment::ALL[ordinal as usize];
                let drive = if mask.contains(segment) {
                    Drive::Energize(segment)
                } else {
                    Drive::FloatAll
                };
                self.state = self.after_scan_slice(char_index, ordinal, pass);
                Slice {
                    drive,
                    hold_us: self.timing.slice_us,
                }
            }
            State::Gap { char_index } => {
                self.state = State::Scan {
                    char_index: self.message.next_index(char_index),
                    ordinal: 0,
                    pass: 0,
                };
                Slice {
                    drive: Drive::FloatAll,
                    hold_us: self.timing.blank_us(),
                }
            }
        }
    }

    /// The state following one scan slice: next ordinal, or next pass,
    /// or the gap once the dwell target is reached.
    const fn after_scan_slice(&self, char_index: usize, ordinal: u8, pass: u16) -> State {
        if (ordinal as usize) + 1 < SEGMENT_COUNT {
            return State::Scan {
                char_index,
                ordinal: ordinal + 1,
                pass,
            };
        }
        if pass + 1 < self.timing.dwell_passes {
            State::Scan {
                char_index,
                ordinal: 0,
                pass: pass + 1,
            }
        } else {
            State::Gap { char_index }
        }
    }
}
