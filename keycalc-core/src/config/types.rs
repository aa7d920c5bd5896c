//! Application configuration types

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum digits accepted per operand by default
///
/// Nine decimal digits always fit in an `i32`.
pub const DEFAULT_MAX_OPERAND_DIGITS: u8 = 9;

/// Calculator behaviour settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Digits accepted per operand before further digits are ignored (1-9)
    pub max_operand_digits: u8,
    /// Play the animated sequence when a result equals 69
    pub celebrate_69: bool,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_operand_digits: DEFAULT_MAX_OPERAND_DIGITS,
            celebrate_69: true,
        }
    }
}

impl CalculatorConfig {
    /// Operand digit limit clamped to what an `i32` can always hold
    pub fn operand_digits(&self) -> u8 {
        self.max_operand_digits.clamp(1, DEFAULT_MAX_OPERAND_DIGITS)
    }
}
