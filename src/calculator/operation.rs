//! Operator registry.
//!
//! Every operator the keypad offers is a variant of [`UnaryOp`] or
//! [`BinaryOp`]. Symbols, domain checks and numeric transforms all hang off
//! the enums, so looking an operator up by symbol is a table scan rather than
//! a closure per button.

use super::error::{CalcError, Result};

/// Largest factorial argument whose result is still a finite `f64`.
pub const MAX_FACTORIAL: f64 = 170.0;

/// Single-argument scientific operations. Trigonometry works in degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Reciprocal,
    Factorial,
    SquareRoot,
    Sine,
    Cosine,
    Tangent,
    ArcSine,
    ArcCosine,
    ArcTangent,
    Log10,
    NaturalLog,
}

impl UnaryOp {
    /// All unary operations in keypad order.
    pub const ALL: [Self; 11] = [
        Self::Reciprocal,
        Self::Factorial,
        Self::SquareRoot,
        Self::Sine,
        Self::Cosine,
        Self::Tangent,
        Self::ArcSine,
        Self::ArcCosine,
        Self::ArcTangent,
        Self::Log10,
        Self::NaturalLog,
    ];

    /// The keypad symbol for this operation.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Reciprocal => "1/x",
            Self::Factorial => "x!",
            Self::SquareRoot => "√x",
            Self::Sine => "sin",
            Self::Cosine => "cos",
            Self::Tangent => "tan",
            Self::ArcSine => "sin⁻¹",
            Self::ArcCosine => "cos⁻¹",
            Self::ArcTangent => "tan⁻¹",
            Self::Log10 => "log",
            Self::NaturalLog => "ln",
        }
    }

    /// Human readable name, used in listings.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reciprocal => "reciprocal",
            Self::Factorial => "factorial",
            Self::SquareRoot => "square root",
            Self::Sine => "sine (degrees)",
            Self::Cosine => "cosine (degrees)",
            Self::Tangent => "tangent (degrees)",
            Self::ArcSine => "arcsine (degrees)",
            Self::ArcCosine => "arccosine (degrees)",
            Self::ArcTangent => "arctangent (degrees)",
            Self::Log10 => "base-10 logarithm",
            Self::NaturalLog => "natural logarithm",
        }
    }

    /// Look up a unary operation by its exact keypad symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operation, rejecting inputs outside its domain.
    pub fn apply(self, value: f64) -> Result<f64> {
        match self {
            Self::Reciprocal => {
                if value == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(1.0 / value)
            }
            Self::Factorial => factorial(value),
            Self::SquareRoot => {
                if value < 0.0 {
                    return Err(CalcError::NegativeSquareRoot);
                }
                Ok(value.sqrt())
            }
            Self::Sine => Ok(value.to_radians().sin()),
            Self::Cosine => Ok(value.to_radians().cos()),
            Self::Tangent => Ok(value.to_radians().tan()),
            Self::ArcSine => {
                self.check_unit_interval(value)?;
                Ok(value.asin().to_degrees())
            }
            Self::ArcCosine => {
                self.check_unit_interval(value)?;
                Ok(value.acos().to_degrees())
            }
            Self::ArcTangent => Ok(value.atan().to_degrees()),
            Self::Log10 => {
                self.check_positive(value)?;
                Ok(value.log10())
            }
            Self::NaturalLog => {
                self.check_positive(value)?;
                Ok(value.ln())
            }
        }
    }

    fn check_unit_interval(self, value: f64) -> Result<()> {
        if !(-1.0..=1.0).contains(&value) {
            return Err(CalcError::InverseTrigDomain {
                symbol: self.symbol(),
            });
        }
        Ok(())
    }

    fn check_positive(self, value: f64) -> Result<()> {
        if value <= 0.0 {
            return Err(CalcError::LogarithmDomain {
                symbol: self.symbol(),
            });
        }
        Ok(())
    }
}

/// Product `2 * 3 * ... * value` accumulated in floating point.
///
/// Precision degrades well before the 170 cap; that is accepted.
fn factorial(value: f64) -> Result<f64> {
    if value < 0.0 || value != value.floor() {
        return Err(CalcError::FactorialDomain);
    }
    if value > MAX_FACTORIAL {
        return Err(CalcError::FactorialOverflow);
    }

    // value is an integer in [0, 170] here
    let n = value as u32;
    Ok((2..=n).fold(1.0, |acc, i| acc * f64::from(i)))
}

/// Two-argument operators applied to the previous and current operands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Current operand divided by 100. The previous operand is ignored.
    Percent,
    /// Previous operand raised to the current one.
    Power,
}

impl BinaryOp {
    pub const ALL: [Self; 6] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Percent,
        Self::Power,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            // em dash, as printed on the keypad
            Self::Subtract => "—",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Percent => "%",
            Self::Power => "^",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "addition",
            Self::Subtract => "subtraction",
            Self::Multiply => "multiplication",
            Self::Divide => "division",
            Self::Percent => "percentage",
            Self::Power => "power",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Whether the previous operand takes part in the computation.
    pub fn uses_previous(self) -> bool {
        !matches!(self, Self::Percent)
    }

    pub fn apply(self, previous: f64, current: f64) -> Result<f64> {
        match self {
            Self::Add => Ok(previous + current),
            Self::Subtract => Ok(previous - current),
            Self::Multiply => Ok(previous * current),
            Self::Divide => {
                if current == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(previous / current)
            }
            Self::Percent => Ok(current / 100.0),
            Self::Power => Ok(previous.powf(current)),
        }
    }
}

/// Any operator the keypad can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Operator {
    /// Resolve a keypad symbol. Unknown symbols yield `None`.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        UnaryOp::from_symbol(symbol)
            .map(Self::Unary)
            .or_else(|| BinaryOp::from_symbol(symbol).map(Self::Binary))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Unary(op) => op.symbol(),
            Self::Binary(op) => op.symbol(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Unary(op) => op.name(),
            Self::Binary(op) => op.name(),
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, Self::Unary(_))
    }

    /// Every operator, unary ones first.
    pub fn all() -> impl Iterator<Item = Self> {
        UnaryOp::ALL
            .into_iter()
            .map(Self::Unary)
            .chain(BinaryOp::ALL.into_iter().map(Self::Binary))
    }
}
