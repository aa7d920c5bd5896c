//! Configuration types
//!
//! Board-agnostic configuration structures. The firmware picks the values;
//! drivers and the calculator only read them.

pub mod hardware;
pub mod types;

pub use hardware::*;
pub use types::*;
