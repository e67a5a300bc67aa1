//! Glyph table: character code → segment mask
//!
//! Covers the printable ASCII range (minus backtick and lowercase,
//! which the display cannot render convincingly). Every other code maps
//! to the empty mask, so an unknown character simply shows as blank -
//! absence of an entry is the defined behavior, not an error.

use crate::segment::{Segment, SegmentMask};

// One-letter aliases keep the glyph definitions readable.
const A: u16 = Segment::A.bit();
const C: u16 = Segment::C.bit();
const D: u16 = Segment::D.bit();
const E: u16 = Segment::E.bit();
const F: u16 = Segment::F.bit();
const G: u16 = Segment::G.bit();
const H: u16 = Segment::H.bit();
const K: u16 = Segment::K.bit();
const M: u16 = Segment::M.bit();
const N: u16 = Segment::N.bit();
const P: u16 = Segment::P.bit();
const R: u16 = Segment::R.bit();
const S: u16 = Segment::S.bit();
const T: u16 = Segment::T.bit();
const U: u16 = Segment::U.bit();

/// Look up the segment mask for a character code.
///
/// Pure and total: every code in 0..=255 has an answer, and codes with
/// no glyph return [`SegmentMask::EMPTY`].
pub const fn lookup(code: u8) -> SegmentMask {
    let bits = match code {
        b' ' => 0,
        b'!' => H | M | F | E | D, // smiley face
        b'"' => H | M,
        b'#' => C | D | E | F | M | P | S | U,
        b'$' => A | D | E | F | H | M | P | S | U,
        b'%' => D | H | K | N | P | R | T | U,
        b'&' => A | D | E | F | G | K | N | R | U,
        b'\'' => M,
        b'(' => N | R,
        b')' => K | R,
        b'*' => K | M | N | P | R | S | T | U,
        b'+' => M | P | S | U,
        b',' => T,
        b'-' => P | U,
        b'.' => F,
        b'/' => N | T,
        b'0' => A | C | D | E | F | G | H,
        b'1' => C | D,
        b'2' => A | C | E | F | G | P | U,
        b'3' => A | C | D | E | F | P | U,
        b'4' => C | D | H | P | U,
        b'5' => A | D | E | F | H | P | U,
        b'6' => A | D | E | F | G | H | P | U,
        b'7' => A | C | D,
        b'8' => A | C | D | E | F | G | H | P | U,
        b'9' => A | C | D | E | F | H | P | U,
        b':' => F | U,
        b';' => F | P,
        b'<' => E | F | N | T,
        b'=' => E | F | P | U,
        b'>' => E | F | K | R,
        b'?' => A | C | H | P | S,
        b'@' => A | C | D | E | F | G | S | U,
        b'A' => A | C | D | G | H | P | U,
        b'B' => A | C | D | E | F | M | P | S,
        b'C' => A | E | F | G | H,
        b'D' => A | C | D | E | F | M | S,
        b'E' => A | E | F | G | H | U,
        b'F' => A | G | H | U,
        b'G' => A | D | E | F | G | H | P,
        b'H' => C | D | G | H | P | U,
        b'I' => A | E | F | M | S,
        b'J' => C | D | E | F | G,
        b'K' => G | H | N | R | U,
        b'L' => E | F | G | H,
        b'M' => C | D | G | H | K | N,
        b'N' => C | D | G | H | K | R,
        b'O' => A | C | D | E | F | G | H,
        b'P' => A | C | G | H | P | U,
        b'Q' => A | C | D | E | F | G | H | R,
        b'R' => A | C | G | H | P | R | U,
        b'S' => A | D | E | F | H | P | U,
        b'T' => A | M | S,
        b'U' => C | D | E | F | G | H,
        b'V' => G | H | N | T,
        b'W' => C | D | G | H | R | T,
        b'X' => K | N | R | T,
        b'Y' => C | H | P | S | U,
        b'Z' => A | E | F | N | T,
        b'[' => A | F | G | H,
        b'\\' => K | R,
        b']' => A | C | D | E,
        b'^' => R | T,
        b'_' => E | F,
        b'{' => E | N | S | U,
        b'|' => M | S,
        b'}' => F | K | P | S,
        b'~' => D | E | G | S | U,
        _ => 0,
    };
    SegmentMask::from_bits(bits)
}
