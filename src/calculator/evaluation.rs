//! Operation dispatch.
//!
//! The text entry points are total: they always hand back display text,
//! either a formatted number or [`ERROR_MARKER`]. The `try_*` variants expose
//! the typed failure for callers that want it.

use tracing::{debug, trace};

use super::error::{CalcError, ERROR_MARKER, Result};
use super::format::format_result;
use super::operation::{BinaryOp, Operator, UnaryOp};
use super::parse::parse_operand;

/// A binary calculation as the keypad supplies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalculationRequest {
    /// Operand entered before the operator.
    pub previous: String,
    /// Operand currently on the display.
    pub current: String,
    /// Operator symbol, e.g. `"+"` or `"sin"`.
    pub symbol: String,
}

impl CalculationRequest {
    pub fn new(
        previous: impl Into<String>,
        current: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Self {
        Self {
            previous: previous.into(),
            current: current.into(),
            symbol: symbol.into(),
        }
    }

    /// Evaluate the request, consuming it.
    pub fn evaluate(self) -> String {
        evaluate_binary(&self.previous, &self.current, &self.symbol)
    }
}

/// Apply a unary operation to an operand.
///
/// Unknown symbols are a failure here, since there is no second operand to
/// fall back on.
pub fn try_evaluate_unary(symbol: &str, operand: &str) -> Result<String> {
    let op = UnaryOp::from_symbol(symbol)
        .ok_or_else(|| CalcError::UnknownOperator(symbol.to_string()))?;
    let value = parse_operand(operand)?;
    let result = finite(op.apply(value)?)?;
    Ok(format_result(result))
}

/// Apply a unary operation, returning the error marker on any failure.
pub fn evaluate_unary(symbol: &str, operand: &str) -> String {
    collapse(symbol, try_evaluate_unary(symbol, operand))
}

/// Raise `base` to `exponent`.
pub fn try_evaluate_power(base: &str, exponent: &str) -> Result<String> {
    let base = parse_operand(base)?;
    let exponent = parse_operand(exponent)?;
    let result = finite(BinaryOp::Power.apply(base, exponent)?)?;
    Ok(format_result(result))
}

/// Raise `base` to `exponent`, returning the error marker on any failure.
pub fn evaluate_power(base: &str, exponent: &str) -> String {
    collapse("^", try_evaluate_power(base, exponent))
}

/// Evaluate `previous <symbol> current`.
///
/// Returns `Ok(None)` when the request should leave the display untouched:
/// an operand is not a number yet (the user may still be typing), or the
/// symbol is not a known operator. A unary symbol applies to `previous` and
/// ignores `current`; percentage is the reverse.
pub fn try_evaluate_binary(previous: &str, current: &str, symbol: &str) -> Result<Option<String>> {
    let Ok(current_value) = parse_operand(current) else {
        trace!(current, "current operand incomplete, passing through");
        return Ok(None);
    };

    let operator = Operator::from_symbol(symbol);

    if let Some(Operator::Binary(op)) = operator
        && !op.uses_previous()
    {
        let result = finite(op.apply(0.0, current_value)?)?;
        return Ok(Some(format_result(result)));
    }

    let Ok(previous_value) = parse_operand(previous) else {
        trace!(previous, "previous operand incomplete, passing through");
        return Ok(None);
    };

    let result = match operator {
        Some(Operator::Binary(op)) => op.apply(previous_value, current_value)?,
        Some(Operator::Unary(op)) => op.apply(previous_value)?,
        None => {
            trace!(symbol, "unknown operator, passing through");
            return Ok(None);
        }
    };

    Ok(Some(format_result(finite(result)?)))
}

/// Evaluate `previous <symbol> current` for the display.
///
/// Failures become the error marker; pass-through cases return `current`
/// unchanged.
pub fn evaluate_binary(previous: &str, current: &str, symbol: &str) -> String {
    match try_evaluate_binary(previous, current, symbol) {
        Ok(Some(result)) => result,
        Ok(None) => current.to_string(),
        Err(err) => collapse(symbol, Err(err)),
    }
}

fn finite(value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CalcError::NonFiniteResult)
    }
}

fn collapse(symbol: &str, result: Result<String>) -> String {
    result.unwrap_or_else(|err| {
        debug!(symbol, error = %err, "evaluation failed");
        ERROR_MARKER.to_string()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unary_evaluation() {
        assert_eq!(evaluate_unary("x!", "5"), "120");
        assert_eq!(evaluate_unary("√x", "9"), "3");
        assert_eq!(evaluate_unary("sin⁻¹", "1"), "90");
        assert_eq!(evaluate_unary("1/x", "4"), "0.25");
        assert_eq!(evaluate_unary("sin", "180"), "0");
        assert_eq!(evaluate_unary("log", "100"), "2");
    }

    #[test]
    fn test_unary_failures() {
        assert_eq!(evaluate_unary("1/x", "0"), ERROR_MARKER);
        assert_eq!(evaluate_unary("x!", "-1"), ERROR_MARKER);
        assert_eq!(evaluate_unary("x!", "3.5"), ERROR_MARKER);
        assert_eq!(evaluate_unary("x!", "171"), ERROR_MARKER);
        assert_eq!(evaluate_unary("√x", "-4"), ERROR_MARKER);
        assert_eq!(evaluate_unary("sin⁻¹", "2"), ERROR_MARKER);
        assert_eq!(evaluate_unary("ln", "0"), ERROR_MARKER);
        assert_eq!(evaluate_unary("sin", "abc"), ERROR_MARKER);
        assert_eq!(evaluate_unary("+", "3"), ERROR_MARKER);
    }

    #[test]
    fn test_try_unary_reports_cause() {
        assert_eq!(
            try_evaluate_unary("√x", "-4"),
            Err(CalcError::NegativeSquareRoot)
        );
        assert_eq!(
            try_evaluate_unary("cos", "x"),
            Err(CalcError::InvalidOperand("x".to_string()))
        );
    }

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(evaluate_binary("2", "3", "+"), "5");
        assert_eq!(evaluate_binary("2", "3", "—"), "-1");
        assert_eq!(evaluate_binary("2.5", "4", "×"), "10");
        assert_eq!(evaluate_binary("6", "3", "÷"), "2");
        assert_eq!(evaluate_binary("1", "3", "÷"), "0.3333333333");
        assert_eq!(evaluate_binary("0.1", "0.2", "+"), "0.3");
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(evaluate_binary("6", "0", "÷"), ERROR_MARKER);
        assert_eq!(
            try_evaluate_binary("6", "0", "÷"),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_percentage_ignores_previous() {
        assert_eq!(evaluate_binary("x", "50", "%"), "0.5");
        assert_eq!(evaluate_binary("200", "50", "%"), "0.5");
        assert_eq!(evaluate_binary("50", "", "%"), "");
    }

    #[test]
    fn test_power() {
        assert_eq!(evaluate_binary("2", "10", "^"), "1024");
        assert_eq!(evaluate_power("9", "0.5"), "3");
        assert_eq!(evaluate_power("2", "-1"), "0.5");
        assert_eq!(evaluate_power("a", "2"), ERROR_MARKER);
        assert_eq!(evaluate_power("2", ""), ERROR_MARKER);
    }

    #[test]
    fn test_non_finite_results_are_errors() {
        assert_eq!(evaluate_power("-8", "0.5"), ERROR_MARKER);
        assert_eq!(evaluate_power("10", "400"), ERROR_MARKER);
        assert_eq!(evaluate_binary("1e308", "10", "×"), ERROR_MARKER);
    }

    #[test]
    fn test_unary_symbol_in_binary_position() {
        assert_eq!(evaluate_binary("9", "123", "√x"), "3");
        assert_eq!(evaluate_binary("-9", "123", "√x"), ERROR_MARKER);
        assert_eq!(evaluate_binary("5", "5", "x!"), "120");
    }

    #[test]
    fn test_pass_through() {
        assert_eq!(evaluate_binary("", "7", "+"), "7");
        assert_eq!(evaluate_binary("3", "7.", "+"), "10");
        assert_eq!(evaluate_binary("3", "-", "+"), "-");
        assert_eq!(evaluate_binary("3", "7", "mod"), "7");
        assert_eq!(try_evaluate_binary("3", "7", "mod"), Ok(None));
    }

    #[test]
    fn test_request_evaluates_once() {
        let request = CalculationRequest::new("4", "5", "×");
        assert_eq!(request.evaluate(), "20");
    }
}
