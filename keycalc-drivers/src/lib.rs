//! Hardware drivers for the keycalc board
//!
//! Concrete implementations of the traits defined in keycalc-core, written
//! against the `RegisterBank` trait from keycalc-hal:
//!
//! - HD44780 character LCD on an 8-bit parallel bus
//! - Interrupt-driven 4x4 matrix keypad

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod keypad;
pub mod lcd;

#[cfg(test)]
pub(crate) mod testing;
