//! Board-agnostic core logic for the keypad calculator firmware
//!
//! This crate contains everything that does not depend on a specific
//! register layout:
//!
//! - Driver traits (character display, key source) and the key code type
//! - Configuration type definitions for the keypad, LCD and calculator
//! - The calculator state machine and its overflow-safe arithmetic

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod calculator;
pub mod config;
pub mod traits;
