//! HD44780 character LCD
//!
//! 8-bit parallel interface, write-only (RW held low). The controller is
//! never polled for its busy flag; every transfer is followed by a fixed
//! settle delay instead.
//!
//! Wiring:
//! - PA4-PA11: data bus D0-D7
//! - PC8: RS (0 = instruction, 1 = data)
//! - PC9: RW
//! - PC10: E (byte latched on the falling edge)

mod driver;
pub mod instruction;

pub use driver::Lcd;
pub use instruction::Instruction;

use keycalc_hal::gpio::{mode_value, pin_mask};
use keycalc_hal::PinMode;

/// First data bus pin on GPIOA
pub const DATABUS_SHIFT: u8 = 4;

/// GPIOA_ODR bits carrying the data bus
pub const DATABUS_MASK: u32 = pin_mask(DATABUS_SHIFT, 8);

/// GPIOA_MODER value for the data bus outputs
pub const DATABUS_MODER: u32 = mode_value(DATABUS_SHIFT, 8, PinMode::Output);

/// Widest value the data bus can carry
pub const DATABUS_MAX: u32 = 0xFF;

/// Register select line on GPIOC_ODR
pub const RS: u32 = 1 << 8;

/// Read/write line on GPIOC_ODR
pub const RW: u32 = 1 << 9;

/// Enable line on GPIOC_ODR
pub const E: u32 = 1 << 10;

/// GPIOC_MODER value for the RS, RW and E outputs
pub const CONTROL_MODER: u32 = mode_value(8, 3, PinMode::Output);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pin_constants() {
        assert_eq!(DATABUS_MASK, 0x0FF0);
        assert_eq!(DATABUS_MODER, 0x0055_5500);
        assert_eq!(CONTROL_MODER, (1 << 16) | (1 << 18) | (1 << 20));
    }
}
