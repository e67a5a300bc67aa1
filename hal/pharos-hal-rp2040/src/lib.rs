//! RP2040-specific HAL for the Pharos display firmware
//!
//! Implements the `pharos-hal` traits on RP2040 GPIO:
//!
//! - [`gpio::FlexBank`] - a bank of display lines over `Flex` pins,
//!   switching each line between output-low (sinking) and input
//!   (floating)
//!
//! Timing needs no chip-specific code here: `embassy_time::Delay`
//! already implements `embedded_hal::delay::DelayNs` on top of the
//! RP2040 time driver.

#![no_std]

pub mod gpio;

pub use gpio::FlexBank;
