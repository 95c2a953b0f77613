//! Key press events.

use std::fmt;
use std::str::FromStr;

use crate::calculator::{BinaryOp, Operator, UnaryOp};

/// A single press on the keypad.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// A decimal digit `0..=9`. Other characters are ignored by the keypad.
    Digit(char),
    /// The decimal point.
    Decimal,
    /// An operator button, carrying its symbol.
    Operator(String),
    Equals,
    Clear,
    Backspace,
}

/// ASCII spellings accepted for the keypad symbols.
const ALIASES: &[(&str, &str)] = &[
    ("-", "—"),
    ("*", "×"),
    ("x", "×"),
    ("/", "÷"),
    ("**", "^"),
    ("sqrt", "√x"),
    ("fact", "x!"),
    ("inv", "1/x"),
    ("asin", "sin⁻¹"),
    ("acos", "cos⁻¹"),
    ("atan", "tan⁻¹"),
];

/// Map an ASCII spelling to its keypad symbol. Anything else is returned
/// unchanged.
pub fn resolve_symbol(token: &str) -> &str {
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == token)
        .map_or(token, |(_, symbol)| *symbol)
}

impl Key {
    /// An operator key for a known operator.
    pub fn operator(op: Operator) -> Self {
        Self::Operator(op.symbol().to_string())
    }

    pub fn unary(op: UnaryOp) -> Self {
        Self::operator(Operator::Unary(op))
    }

    pub fn binary(op: BinaryOp) -> Self {
        Self::operator(Operator::Binary(op))
    }
}

/// Error for a token that names no key.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key '{0}'")]
pub struct UnknownKey(pub String);

impl FromStr for Key {
    type Err = UnknownKey;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();

        if token.len() == 1
            && let Some(c) = token.chars().next()
            && c.is_ascii_digit()
        {
            return Ok(Self::Digit(c));
        }

        match token {
            "." | "," => return Ok(Self::Decimal),
            "=" => return Ok(Self::Equals),
            "C" | "c" | "AC" => return Ok(Self::Clear),
            "<" | "⌫" => return Ok(Self::Backspace),
            _ => {}
        }

        let symbol = resolve_symbol(token);

        if Operator::from_symbol(symbol).is_some() {
            Ok(Self::Operator(symbol.to_string()))
        } else {
            Err(UnknownKey(token.to_string()))
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(c) => write!(f, "{c}"),
            Self::Decimal => f.write_str("."),
            Self::Operator(symbol) => f.write_str(symbol),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Backspace => f.write_str("<"),
        }
    }
}
