//! Build-time message and timing
//!
//! There is no runtime configuration surface: the message and the
//! timing are constants, changed by editing this file and reflashing.

use pharos_core::config::ScrollTiming;

/// The text spelled out on the display, repeated forever.
///
/// The trailing space reads as a pause between repetitions.
pub const MESSAGE: &str = "HELLO WORLD ";

/// 100 µs per segment slice, 200 scan passes per character, 30 ms dark
/// gap between characters.
pub const TIMING: ScrollTiming = ScrollTiming::new(100, 200, 30);
