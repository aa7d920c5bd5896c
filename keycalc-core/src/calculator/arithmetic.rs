//! Overflow-safe integer arithmetic
//!
//! Every operation is checked. A failed operation yields a [`CalcError`];
//! the calculator turns that into a displayed `0` via [`evaluate_or_zero`].

/// Arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Character shown on the display and stored in the expression
    pub const fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    /// Parse an operator symbol
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }
}

/// Errors from evaluating an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    /// Result above `i32::MAX`
    Overflow,
    /// Result below `i32::MIN`
    Underflow,
    /// Division by zero
    DivideByZero,
    /// Expression text could not be parsed
    Parse,
}

impl core::fmt::Display for CalcError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CalcError::Overflow => write!(f, "result above i32 range"),
            CalcError::Underflow => write!(f, "result below i32 range"),
            CalcError::DivideByZero => write!(f, "division by zero"),
            CalcError::Parse => write!(f, "malformed expression"),
        }
    }
}

/// Evaluate `lhs op rhs` with overflow detection
pub fn evaluate(lhs: i32, op: Operator, rhs: i32) -> Result<i32, CalcError> {
    match op {
        Operator::Add => lhs.checked_add(rhs).ok_or(if rhs > 0 {
            CalcError::Overflow
        } else {
            CalcError::Underflow
        }),
        Operator::Subtract => lhs.checked_sub(rhs).ok_or(if rhs < 0 {
            CalcError::Overflow
        } else {
            CalcError::Underflow
        }),
        Operator::Multiply => lhs.checked_mul(rhs).ok_or(if (lhs < 0) == (rhs < 0) {
            CalcError::Overflow
        } else {
            CalcError::Underflow
        }),
        Operator::Divide => {
            if rhs == 0 {
                return Err(CalcError::DivideByZero);
            }
            // i32::MIN / -1 is the only overflowing division
            lhs.checked_div(rhs).ok_or(CalcError::Overflow)
        }
    }
}

/// Evaluate, substituting zero for any failure
///
/// Returns the value shown to the user plus the error that forced a zero,
/// if any.
pub fn evaluate_or_zero(lhs: i32, op: Operator, rhs: i32) -> (i32, Option<CalcError>) {
    match evaluate(lhs, op, rhs) {
        Ok(value) => (value, None),
        Err(e) => (0, Some(e)),
    }
}
