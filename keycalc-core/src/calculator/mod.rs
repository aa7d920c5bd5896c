//! Four-function calculator
//!
//! Board-agnostic: talks to hardware only through [`CharDisplay`],
//! [`KeySource`] and an `embedded_hal` delay.
//!
//! [`CharDisplay`]: crate::traits::CharDisplay
//! [`KeySource`]: crate::traits::KeySource

mod app;
pub mod arithmetic;
pub mod entry;

pub use app::{Calculator, KeyAction, Outcome, CELEBRATED_RESULT, OPERATOR_COLUMN};
pub use arithmetic::{evaluate, evaluate_or_zero, CalcError, Operator};
pub use entry::{parse_expression, Expression, ParsedExpression};
