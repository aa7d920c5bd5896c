//! GPIO port field encoding
//!
//! STM32 GPIO ports configure each pin with a two-bit field in the MODER
//! and PUPDR registers. These helpers build the masks and values for a set
//! of pins so drivers can express "pins 4-7 as outputs" instead of magic
//! hex constants.

/// Number of pins on a GPIO port
pub const PINS_PER_PORT: u8 = 16;

/// Pin mode (MODER field value)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum PinMode {
    /// Digital input (reset state)
    Input = 0b00,
    /// General purpose output
    Output = 0b01,
    /// Alternate function
    Alternate = 0b10,
    /// Analog
    Analog = 0b11,
}

/// Pull configuration (PUPDR field value)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Pull {
    /// No pull resistor
    None = 0b00,
    /// Pull-up resistor
    Up = 0b01,
    /// Pull-down resistor
    Down = 0b10,
}

/// Bitmask with one bit per pin in `pins` (e.g. `0..4` -> `0x000F`)
pub const fn pin_mask(first: u8, count: u8) -> u32 {
    let mut mask = 0u32;
    let mut pin = first;
    while pin < first + count && pin < PINS_PER_PORT {
        mask |= 1 << pin;
        pin += 1;
    }
    mask
}

/// Two-bit field mask covering `count` pins starting at `first`
pub const fn field_mask(first: u8, count: u8) -> u32 {
    field_value(first, count, 0b11)
}

/// Two-bit field value `bits` repeated over `count` pins starting at `first`
pub const fn field_value(first: u8, count: u8, bits: u8) -> u32 {
    let mut value = 0u32;
    let mut pin = first;
    while pin < first + count && pin < PINS_PER_PORT {
        value |= ((bits & 0b11) as u32) << (pin * 2);
        pin += 1;
    }
    value
}

/// MODER value putting `count` pins starting at `first` in `mode`
pub const fn mode_value(first: u8, count: u8, mode: PinMode) -> u32 {
    field_value(first, count, mode as u8)
}

/// PUPDR value giving `count` pins starting at `first` the `pull` resistor
pub const fn pull_value(first: u8, count: u8, pull: Pull) -> u32 {
    field_value(first, count, pull as u8)
}
