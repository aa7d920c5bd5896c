//! Keycalc Hardware Abstraction Layer
//!
//! This crate defines the register access seam between the keypad/LCD
//! drivers and the chip. Drivers never touch raw addresses; they go through
//! a [`RegisterBank`], which is implemented by the MMIO bank on real
//! hardware and by in-memory fakes in host tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (keycalc-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keycalc-drivers (keypad, lcd)          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keycalc-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ keycalc-hal-  │       │  host fakes   │
//! │   stm32f4     │       │  (tests)      │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Modules
//!
//! - [`regs`] - Register catalog and the [`RegisterBank`] trait
//! - [`gpio`] - Two-bit-per-pin mode/pull field encoding
//! - [`exti`] - External interrupt line routing helpers

#![no_std]
#![deny(unsafe_code)]

pub mod exti;
pub mod gpio;
pub mod regs;

// Re-export key types at crate root for convenience
pub use gpio::{PinMode, Pull};
pub use regs::{Register, RegisterBank};
