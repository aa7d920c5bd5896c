//! Foreground work
//!
//! The calculator is the only foreground job; it runs on the main task.

pub mod calculator;

pub use calculator::calculator_loop;
