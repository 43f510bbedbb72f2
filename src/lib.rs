//! A four-function keypad calculator.
//!
//! [`calculator::CalculatorEngine`] is the state machine behind the keypad.
//! [`screen::CalculatorScreen`] is a thin presentation layer that forwards
//! [`keypad::Key`] presses to it and renders the result as text.

pub mod calculator;
pub mod config;
pub mod keypad;
pub mod screen;

pub use calculator::{CalculatorEngine, CalculatorState, Command, HistoryEntry, Operator};
pub use keypad::Key;
pub use screen::CalculatorScreen;
