//! Keypad state machine.
//!
//! Turns a stream of key presses into calls on the stateless calculator core.
//! The state lives in a plain value that each press consumes and returns.

mod key;
mod state;

pub use key::{Key, UnknownKey, resolve_symbol};
pub use state::{Entry, KeypadState};
