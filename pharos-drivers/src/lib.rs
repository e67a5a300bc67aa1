//! Display driver implementations
//!
//! This crate turns the pure engine commands from `pharos-core` into
//! electrical state on `pharos-hal` line banks:
//!
//! - [`mux::SegmentMux`] - one-segment-at-a-time multiplexer over two
//!   tri-state banks
//! - [`scroll::MessageScroller`] - the blocking scroll loop
//!
//! Everything is generic over the HAL traits, so the same code runs
//! against RP2040 pins and against host-side mocks.

#![no_std]
#![deny(unsafe_code)]

pub mod mux;
pub mod scroll;

pub use mux::SegmentMux;
pub use scroll::MessageScroller;
