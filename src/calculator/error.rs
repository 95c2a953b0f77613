//! Failure taxonomy for calculator evaluation.
//!
//! Callers of the text entry points never see these: every variant collapses
//! into [`ERROR_MARKER`]. The typed form is kept for the `try_*` API and for
//! logging the cause.

use thiserror::Error;

/// The single opaque failure indicator returned in place of a numeric result.
pub const ERROR_MARKER: &str = "Error";

/// Why an evaluation could not produce a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Operand text is not a decimal number.
    #[error("operand '{0}' is not a decimal number")]
    InvalidOperand(String),

    /// Symbol that names no unary operation.
    #[error("unknown operator '{0}'")]
    UnknownOperator(String),

    #[error("cannot divide by zero")]
    DivisionByZero,

    /// Factorial of a negative or fractional value.
    #[error("factorial requires a non-negative integer")]
    FactorialDomain,

    /// Factorial above 170, whose result does not fit in an `f64`.
    #[error("factorial result too large")]
    FactorialOverflow,

    #[error("cannot take the square root of a negative number")]
    NegativeSquareRoot,

    /// Inverse sine or cosine outside `[-1, 1]`.
    #[error("{symbol} requires an input between -1 and 1")]
    InverseTrigDomain {
        /// Operator symbol that rejected the input.
        symbol: &'static str,
    },

    #[error("{symbol} requires a positive number")]
    LogarithmDomain {
        /// Operator symbol that rejected the input.
        symbol: &'static str,
    },

    /// The computation produced NaN or an infinity.
    #[error("result is not a finite number")]
    NonFiniteResult,
}

/// Result alias used throughout the evaluator.
pub type Result<T> = std::result::Result<T, CalcError>;
