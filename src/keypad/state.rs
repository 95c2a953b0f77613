//! Accumulated keypad state.

use serde::Serialize;
use tracing::trace;

use super::key::Key;
use crate::calculator::{ERROR_MARKER, evaluate_binary, evaluate_unary, is_unary};

/// What the display currently holds, as far as entry is concerned.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    /// The user is typing into the current operand.
    #[default]
    Editing,
    /// A binary operator was just pressed; the display still shows the
    /// previous operand and the next digit starts the second one.
    AwaitingOperand,
    /// The display shows a result from a unary operator or `=`. It counts as
    /// a finished operand, but the next digit replaces it.
    Computed,
}

/// Everything the keypad remembers between presses.
///
/// The state is consumed and returned by [`KeypadState::press`], so a front
/// end can keep it wherever it likes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct KeypadState {
    /// Operand on the display.
    pub current: String,
    /// Operand entered before the pending operator. Empty when none.
    pub previous: String,
    /// Binary operator waiting for its second operand.
    pub pending: Option<String>,
    pub entry: Entry,
}

impl Default for KeypadState {
    fn default() -> Self {
        Self {
            current: "0".to_string(),
            previous: String::new(),
            pending: None,
            entry: Entry::Editing,
        }
    }
}

impl KeypadState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text to show on the display.
    pub fn display(&self) -> &str {
        &self.current
    }

    /// Whether the display shows the error marker.
    pub fn is_error(&self) -> bool {
        self.current == ERROR_MARKER
    }

    /// Apply one key press.
    pub fn press(self, key: &Key) -> Self {
        trace!(%key, state = ?self, "key pressed");
        match key {
            Key::Digit(digit) => self.push_digit(*digit),
            Key::Decimal => self.push_decimal(),
            Key::Operator(symbol) if is_unary(symbol) => self.apply_unary(symbol),
            Key::Operator(symbol) => self.apply_binary(symbol),
            Key::Equals => self.equals(),
            Key::Clear => Self::default(),
            Key::Backspace => self.backspace(),
        }
    }

    /// Apply a sequence of key presses in order.
    pub fn press_all<'a>(self, keys: impl IntoIterator<Item = &'a Key>) -> Self {
        keys.into_iter().fold(self, Self::press)
    }

    fn starts_fresh(&self) -> bool {
        self.entry != Entry::Editing || self.is_error()
    }

    fn push_digit(mut self, digit: char) -> Self {
        if !digit.is_ascii_digit() {
            trace!(%digit, "ignoring non-digit key");
            return self;
        }
        if self.starts_fresh() || self.current == "0" {
            self.current = digit.to_string();
        } else {
            self.current.push(digit);
        }
        self.entry = Entry::Editing;
        self
    }

    fn push_decimal(mut self) -> Self {
        if self.starts_fresh() {
            self.current = "0.".to_string();
        } else if !self.current.contains('.') {
            self.current.push('.');
        }
        self.entry = Entry::Editing;
        self
    }

    fn apply_unary(mut self, symbol: &str) -> Self {
        self.current = evaluate_unary(symbol, &self.current);
        self.entry = Entry::Computed;
        self
    }

    fn apply_binary(mut self, symbol: &str) -> Self {
        match &self.pending {
            Some(pending) if self.entry != Entry::AwaitingOperand => {
                let result = evaluate_binary(&self.previous, &self.current, pending);
                self.previous = result.clone();
                self.current = result;
            }
            _ => self.previous = self.current.clone(),
        }
        self.pending = Some(symbol.to_string());
        self.entry = Entry::AwaitingOperand;
        self
    }

    fn equals(mut self) -> Self {
        if self.previous.is_empty() {
            return self;
        }
        if let Some(pending) = self.pending.take() {
            self.current = evaluate_binary(&self.previous, &self.current, &pending);
            self.previous.clear();
            self.entry = Entry::Computed;
        }
        self
    }

    fn backspace(mut self) -> Self {
        if self.is_error() {
            self.current = "0".to_string();
        } else {
            self.current.pop();
            if self.current.is_empty() || self.current == "-" {
                self.current = "0".to_string();
            }
        }
        self.entry = Entry::Editing;
        self
    }
}
