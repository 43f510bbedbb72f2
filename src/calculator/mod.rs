//! Calculator module implementing the keypad arithmetic engine.
//!
//! This module provides functionality to:
//! - Track numeral entry, pending operators and results
//! - Evaluate computations strictly left to right
//! - Format results for the display and record a session history

mod engine;
mod evaluation;
mod history;

pub use engine::{CalculatorEngine, CalculatorState, Command, Transition};
pub use evaluation::{ERROR_TEXT, Operator, evaluate, format_result, parse_entry};
pub use history::{History, HistoryEntry};
