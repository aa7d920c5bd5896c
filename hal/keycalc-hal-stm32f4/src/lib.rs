//! STM32F4-specific HAL for the keycalc firmware
//!
//! Provides the pieces the drivers need on the real chip:
//!
//! - [`Mmio`]: `RegisterBank` doing volatile accesses at the catalog addresses
//! - [`CycleDelay`]: busy-wait `DelayNs` that is safe to use in interrupt
//!   handlers because it does not depend on a timer interrupt
//!
//! Tested against an STM32F446RE running from the 16 MHz HSI.

#![no_std]

pub mod delay;
pub mod mmio;

pub use delay::CycleDelay;
pub use mmio::Mmio;

/// Core clock after reset (HSI)
pub const HSI_HZ: u32 = 16_000_000;
