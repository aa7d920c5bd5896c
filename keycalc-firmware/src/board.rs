//! Board configuration
//!
//! Pin assignments are fixed by the wiring described in the driver modules;
//! only timing and display behaviour are chosen here.

use keycalc_core::config::{
    CalculatorConfig, CursorStyle, DisplayLines, Font, KeypadConfig, LcdConfig,
    DEFAULT_DEBOUNCE_MS, DEFAULT_MAX_OPERAND_DIGITS,
};
use keycalc_hal_stm32f4::HSI_HZ;

/// Core clock; embassy-stm32 leaves the chip on the HSI by default
pub const CORE_CLOCK_HZ: u32 = HSI_HZ;

pub const KEYPAD: KeypadConfig = KeypadConfig {
    debounce_ms: DEFAULT_DEBOUNCE_MS,
};

pub const LCD: LcdConfig = LcdConfig {
    lines: DisplayLines::Two,
    font: Font::Dots5x8,
    cursor: CursorStyle::Blink,
};

pub const CALCULATOR: CalculatorConfig = CalculatorConfig {
    max_operand_digits: DEFAULT_MAX_OPERAND_DIGITS,
    celebrate_69: true,
};
