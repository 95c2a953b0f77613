//! # keycalc
//!
//! A keypad calculator engine. Operands travel as decimal text, exactly as a
//! display shows them; results come back as text too, or as the single
//! error marker `"Error"`.
//!
//! ```
//! use keycalc::{evaluate_binary, evaluate_unary, is_unary};
//!
//! assert_eq!(evaluate_unary("√x", "9"), "3");
//! assert_eq!(evaluate_binary("6", "0", "÷"), "Error");
//! assert!(is_unary("sin"));
//! ```

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod logging;

pub use calculator::{
    CalcError, CalculationRequest, ERROR_MARKER, evaluate_binary, evaluate_power, evaluate_unary,
    format_result, is_unary,
};
pub use keypad::{Key, KeypadState};
