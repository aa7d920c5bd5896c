//! Hardware abstraction traits
//!
//! These traits define the interface between the calculator logic
//! and the keypad/LCD driver implementations.

pub mod display;
pub mod keypad;

pub use display::{CharDisplay, DisplayError};
pub use keypad::{KeyCode, KeySource};
