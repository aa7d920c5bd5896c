//! Expression entry buffer
//!
//! The calculator keeps what the user typed as text (`"12*34"`) and parses
//! it only when equals is pressed. After a result, the buffer holds the
//! result text so it becomes the first operand of the next calculation.

use core::fmt::Write;

use heapless::String;

use super::arithmetic::{CalcError, Operator};

/// Capacity of the expression buffer
///
/// Large enough for an 11-character chained result (`-2147483648`), one
/// operator and a nine-digit second operand.
pub const EXPRESSION_CAPACITY: usize = 33;

/// A parsed `<lhs><op><rhs>` expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ParsedExpression {
    pub lhs: i32,
    pub op: Operator,
    pub rhs: i32,
}

/// Text of the expression being entered
#[derive(Debug, Clone, Default)]
pub struct Expression {
    text: String<EXPRESSION_CAPACITY>,
}

impl Expression {
    /// Create an empty expression
    pub const fn new() -> Self {
        Self {
            text: String::new(),
        }
    }

    /// Expression text
    pub fn as_str(&self) -> &str {
        self.text.as_str()
    }

    /// Number of characters entered
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if nothing has been entered
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Discard everything entered
    pub fn clear(&mut self) {
        self.text.clear();
    }

    /// Append a digit or operator symbol
    ///
    /// Returns `false` if the buffer is full.
    pub fn push(&mut self, c: char) -> bool {
        self.text.push(c).is_ok()
    }

    /// Replace the trailing operator symbol with `op`
    ///
    /// Returns `false` if the expression does not end in an operator.
    pub fn replace_operator(&mut self, op: Operator) -> bool {
        let ends_in_operator = self
            .text
            .chars()
            .last()
            .and_then(Operator::from_symbol)
            .is_some();
        if !ends_in_operator {
            return false;
        }
        self.text.pop();
        self.push(op.symbol())
    }

    /// Replace the contents with the decimal text of `value`
    pub fn set_value(&mut self, value: i32) {
        self.text.clear();
        // An i32 is at most 11 characters, well under capacity
        let written = write!(self.text, "{}", value);
        debug_assert!(written.is_ok());
    }

    /// Parse the expression as `<lhs><op><rhs>`
    pub fn parse(&self) -> Result<ParsedExpression, CalcError> {
        parse_expression(self.as_str())
    }
}

/// Parse `<lhs><op><rhs>` where `lhs` may carry a leading minus sign
pub fn parse_expression(text: &str) -> Result<ParsedExpression, CalcError> {
    let body_start = usize::from(text.starts_with('-'));
    let op_index = text[body_start..]
        .find(|c: char| Operator::from_symbol(c).is_some())
        .map(|i| i + body_start)
        .ok_or(CalcError::Parse)?;

    let lhs: i32 = text[..op_index].parse().map_err(|_| CalcError::Parse)?;
    let op = text[op_index..]
        .chars()
        .next()
        .and_then(Operator::from_symbol)
        .ok_or(CalcError::Parse)?;
    let rhs: i32 = text[op_index + 1..]
        .parse()
        .map_err(|_| CalcError::Parse)?;

    Ok(ParsedExpression { lhs, op, rhs })
}
