//! Calculator core.
//!
//! This module provides functionality to:
//! - Apply the eleven scientific unary operations to an operand
//! - Dispatch binary operators between a previous and a current operand
//! - Format numeric results for the display
//! - Classify operator symbols as unary or binary
//!
//! Everything here is stateless; the caller owns the accumulated keypad
//! state and passes it back in on every call.

mod error;
mod evaluation;
mod format;
mod operation;
mod parse;

pub use error::{CalcError, ERROR_MARKER, Result};
pub use evaluation::{
    CalculationRequest, evaluate_binary, evaluate_power, evaluate_unary, try_evaluate_binary,
    try_evaluate_power, try_evaluate_unary,
};
pub use format::{MAX_FRACTION_DIGITS, format_display, format_result, group_thousands};
pub use operation::{BinaryOp, MAX_FACTORIAL, Operator, UnaryOp};
pub use parse::{is_unary, parse_operand};
