//! Calculator state machine
//!
//! Consumes key codes one at a time and drives a [`CharDisplay`]. Layout on
//! the default keypad legend:
//!
//! ```text
//! ┌───┬───┬───┬───┐
//! │ 1 │ 2 │ 3 │ + │   keys  1  2  3  4
//! ├───┼───┼───┼───┤
//! │ 4 │ 5 │ 6 │ - │   keys  5  6  7  8
//! ├───┼───┼───┼───┤
//! │ 7 │ 8 │ 9 │ * │   keys  9 10 11 12
//! ├───┼───┼───┼───┤
//! │ C │ 0 │ = │ / │   keys 13 14 15 16
//! └───┴───┴───┴───┘
//! ```
//!
//! The first operand is typed on row 0, the operator is shown in column 15
//! of row 0 and the second operand is typed on row 1. Equals clears the
//! display and shows the result, which becomes the next first operand.

use embedded_hal::delay::DelayNs;

use super::arithmetic::{evaluate_or_zero, CalcError, Operator};
use super::entry::Expression;
use crate::config::CalculatorConfig;
use crate::traits::{CharDisplay, DisplayError, KeyCode, KeySource};

/// Column where the operator is drawn on row 0
pub const OPERATOR_COLUMN: u8 = 15;

/// The value that triggers the celebration sequence
pub const CELEBRATED_RESULT: i32 = 69;

/// What a key code means to the calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// Append a digit
    Digit(char),
    /// Select an operator
    Operator(Operator),
    /// Evaluate
    Equals,
    /// Reset everything
    Clear,
}

impl KeyAction {
    /// Map a key code to its calculator action
    ///
    /// Returns `None` for the "no key" code.
    pub const fn from_key(key: KeyCode) -> Option<Self> {
        let action = match key.value() {
            0 => return None,
            1 => KeyAction::Digit('1'),
            2 => KeyAction::Digit('2'),
            3 => KeyAction::Digit('3'),
            5 => KeyAction::Digit('4'),
            6 => KeyAction::Digit('5'),
            7 => KeyAction::Digit('6'),
            9 => KeyAction::Digit('7'),
            10 => KeyAction::Digit('8'),
            11 => KeyAction::Digit('9'),
            14 => KeyAction::Digit('0'),
            4 => KeyAction::Operator(Operator::Add),
            8 => KeyAction::Operator(Operator::Subtract),
            12 => KeyAction::Operator(Operator::Multiply),
            16 => KeyAction::Operator(Operator::Divide),
            15 => KeyAction::Equals,
            _ => KeyAction::Clear,
        };
        Some(action)
    }
}

/// Result of handling one key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// Key had no effect in the current state
    Ignored,
    /// Digit appended and echoed
    Digit(char),
    /// Operator selected (or replaced)
    Operator(Operator),
    /// Expression evaluated; `error` is set when the value was forced to 0
    Result {
        value: i32,
        error: Option<CalcError>,
    },
    /// Calculator reset
    Cleared,
}

/// Four-function calculator
#[derive(Debug, Clone)]
pub struct Calculator {
    config: CalculatorConfig,
    expression: Expression,
    first_len: u8,
    second_len: u8,
    operator: Option<Operator>,
    result_displayed: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(CalculatorConfig::default())
    }
}

impl Calculator {
    /// Create a calculator in the cleared state
    pub fn new(config: CalculatorConfig) -> Self {
        Self {
            config,
            expression: Expression::new(),
            first_len: 0,
            second_len: 0,
            operator: None,
            result_displayed: false,
        }
    }

    /// Current expression text (the chained result after equals)
    pub fn expression(&self) -> &str {
        self.expression.as_str()
    }

    /// Whether a result is currently shown
    pub fn result_displayed(&self) -> bool {
        self.result_displayed
    }

    /// Block for one key from `keys` and handle it
    pub fn step<K, D, T>(
        &mut self,
        keys: &mut K,
        display: &mut D,
        delay: &mut T,
    ) -> Result<Outcome, DisplayError>
    where
        K: KeySource,
        D: CharDisplay,
        T: DelayNs,
    {
        let key = keys.get_wait();
        self.handle_key(key, display, delay)
    }

    /// Handle one key press
    pub fn handle_key<D, T>(
        &mut self,
        key: KeyCode,
        display: &mut D,
        delay: &mut T,
    ) -> Result<Outcome, DisplayError>
    where
        D: CharDisplay,
        T: DelayNs,
    {
        match KeyAction::from_key(key) {
            None => Ok(Outcome::Ignored),
            Some(KeyAction::Digit(c)) => self.digit(c, display),
            Some(KeyAction::Operator(op)) => self.select_operator(op, display),
            Some(KeyAction::Equals) => self.equals(display, delay),
            Some(KeyAction::Clear) => self.clear(display),
        }
    }

    fn digit<D: CharDisplay>(&mut self, c: char, display: &mut D) -> Result<Outcome, DisplayError> {
        if self.result_displayed {
            return Ok(Outcome::Ignored);
        }

        let limit = self.config.operand_digits();
        let len = match self.operator {
            None => &mut self.first_len,
            Some(_) => &mut self.second_len,
        };
        if *len >= limit || !self.expression.push(c) {
            return Ok(Outcome::Ignored);
        }
        *len += 1;

        display.print_char(c)?;
        Ok(Outcome::Digit(c))
    }

    fn select_operator<D: CharDisplay>(
        &mut self,
        op: Operator,
        display: &mut D,
    ) -> Result<Outcome, DisplayError> {
        if self.expression.is_empty() || self.second_len > 0 {
            return Ok(Outcome::Ignored);
        }

        let stored = if self.operator.is_some() {
            self.expression.replace_operator(op)
        } else {
            self.expression.push(op.symbol())
        };
        if !stored {
            return Ok(Outcome::Ignored);
        }
        self.operator = Some(op);
        self.result_displayed = false;

        display.cursor_set(OPERATOR_COLUMN, 0)?;
        display.print_char(op.symbol())?;
        display.cursor_set(0, 1)?;
        Ok(Outcome::Operator(op))
    }

    fn equals<D, T>(&mut self, display: &mut D, delay: &mut T) -> Result<Outcome, DisplayError>
    where
        D: CharDisplay,
        T: DelayNs,
    {
        if self.second_len == 0 {
            return Ok(Outcome::Ignored);
        }

        let (value, error) = match self.expression.parse() {
            Ok(expr) => evaluate_or_zero(expr.lhs, expr.op, expr.rhs),
            Err(e) => (0, Some(e)),
        };

        display.clear()?;
        display.print(format_args!("{}", value))?;

        if value == CELEBRATED_RESULT && self.config.celebrate_69 {
            celebrate(display, delay)?;
        }

        // Chain the result as the next first operand
        self.expression.set_value(value);
        self.first_len = self.expression.len() as u8;
        self.second_len = 0;
        self.operator = None;
        self.result_displayed = true;

        Ok(Outcome::Result { value, error })
    }

    fn clear<D: CharDisplay>(&mut self, display: &mut D) -> Result<Outcome, DisplayError> {
        self.expression.clear();
        self.first_len = 0;
        self.second_len = 0;
        self.operator = None;
        self.result_displayed = false;

        display.clear()?;
        Ok(Outcome::Cleared)
    }
}

/// Animated " ... nice." sequence appended after the result
fn celebrate<D, T>(display: &mut D, delay: &mut T) -> Result<(), DisplayError>
where
    D: CharDisplay,
    T: DelayNs,
{
    display.cursor_hide()?;
    delay.delay_ms(1000);
    display.print(format_args!(" "))?;

    for _ in 0..3 {
        delay.delay_ms(150);
        display.print(format_args!("."))?;
    }

    delay.delay_ms(800);
    display.print(format_args!(" nice."))?;

    delay.delay_ms(1000);
    display.cursor_show()
}
