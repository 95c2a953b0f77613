//! Operand parsing and operator classification.
//!
//! Operands arrive as the text shown on the display. Only plain decimal
//! notation is accepted, so `NaN`, `inf` and friends never reach an operator.

use lazy_static::lazy_static;
use regex::Regex;

use super::error::{CalcError, Result};
use super::operation::UnaryOp;

lazy_static! {
    /// Optional sign, digits with an optional fraction (or a bare fraction),
    /// optional exponent.
    static ref DECIMAL_NUMBER: Regex = Regex::new(
        r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$"
    ).unwrap();
}

/// Parse decimal operand text into a finite number.
pub fn parse_operand(text: &str) -> Result<f64> {
    if !DECIMAL_NUMBER.is_match(text) {
        return Err(CalcError::InvalidOperand(text.to_string()));
    }

    // Exponents like 1e400 parse to infinity.
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalcError::InvalidOperand(text.to_string())),
    }
}

/// Check whether a symbol names one of the unary operations.
///
/// Unary operators fire as soon as they are pressed; everything else waits
/// for a second operand.
pub fn is_unary(symbol: &str) -> bool {
    UnaryOp::from_symbol(symbol).is_some()
}
