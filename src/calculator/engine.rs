//! The calculator state machine.
//!
//! [`CalculatorState`] is a plain record with a pure reducer: every
//! [`Command`] turns one state into the next and may emit a
//! [`HistoryEntry`]. [`CalculatorEngine`] owns the live state of one session
//! together with its history and is what a keypad talks to.
//!
//! Evaluation is strictly left to right. Selecting an operator while another
//! is pending and a second operand has been typed evaluates the pending
//! computation first, so `2 + 3 × 4` yields `20`.

use super::evaluation::{Operator, evaluate, format_result, parse_entry};
use super::history::{History, HistoryEntry};
use serde::Serialize;
use tracing::{debug, trace};

const DECIMAL_POINT: char = '.';
const EMPTY_ENTRY: &str = "0";

/// A single user intent understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// A digit `0`-`9` or the decimal point.
    Numeral(char),
    Backspace,
    Operator(Operator),
    Equals,
    Clear,
}

/// The state of one calculator screen.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CalculatorState {
    entry_buffer: String,
    current_value: f64,
    previous_value: f64,
    pending_operator: Option<Operator>,
    is_fresh_entry: bool,
}

/// Result of applying one command to a state.
#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: CalculatorState,
    /// Set only when a pending operator was actually evaluated.
    pub entry: Option<HistoryEntry>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            entry_buffer: EMPTY_ENTRY.to_string(),
            current_value: 0.0,
            previous_value: 0.0,
            pending_operator: None,
            is_fresh_entry: true,
        }
    }
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The literal text being composed, or the last committed value.
    pub fn entry_buffer(&self) -> &str {
        &self.entry_buffer
    }

    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Operand captured when the pending operator was selected.
    pub fn previous_value(&self) -> f64 {
        self.previous_value
    }

    pub fn pending_operator(&self) -> Option<Operator> {
        self.pending_operator
    }

    /// Whether the next numeral replaces the buffer instead of extending it.
    pub fn is_fresh_entry(&self) -> bool {
        self.is_fresh_entry
    }

    /// Compute the state that follows `command`.
    ///
    /// Never fails: input that makes no sense in the current state leaves the
    /// state as it is.
    pub fn reduce(&self, command: Command) -> Transition {
        let mut next = self.clone();
        let entry = match command {
            Command::Numeral(token) => {
                next.input_numeral(token);
                None
            }
            Command::Backspace => {
                next.backspace();
                None
            }
            Command::Operator(op) => next.select_operator(op),
            Command::Equals => next.equals(),
            Command::Clear => {
                next = Self::default();
                None
            }
        };

        Transition { state: next, entry }
    }

    fn input_numeral(&mut self, token: char) {
        if !token.is_ascii_digit() && token != DECIMAL_POINT {
            trace!(?token, "ignoring non-numeral token");
            return;
        }

        if self.is_fresh_entry {
            self.entry_buffer = if token == DECIMAL_POINT {
                "0.".to_string()
            } else {
                token.to_string()
            };
            self.is_fresh_entry = false;
        } else if token == DECIMAL_POINT && self.entry_buffer.contains(DECIMAL_POINT) {
            return;
        } else if self.entry_buffer == EMPTY_ENTRY && token != DECIMAL_POINT {
            self.entry_buffer = token.to_string();
        } else {
            self.entry_buffer.push(token);
        }

        self.current_value = parse_entry(&self.entry_buffer);
    }

    fn backspace(&mut self) {
        if !self.is_fresh_entry && self.entry_buffer.chars().count() > 1 {
            self.entry_buffer.pop();
            self.current_value = parse_entry(&self.entry_buffer);
        } else {
            // Nothing left to delete and a committed value collapse alike
            self.entry_buffer = EMPTY_ENTRY.to_string();
            self.current_value = 0.0;
            self.is_fresh_entry = true;
        }
    }

    fn select_operator(&mut self, op: Operator) -> Option<HistoryEntry> {
        let entry = if self.pending_operator.is_some() && !self.is_fresh_entry {
            self.equals()
        } else {
            None
        };

        self.previous_value = self.current_value;
        self.pending_operator = Some(op);
        self.is_fresh_entry = true;

        entry
    }

    fn equals(&mut self) -> Option<HistoryEntry> {
        let result = evaluate(self.pending_operator, self.previous_value, self.current_value);
        let result_text = format_result(result);

        let entry = self.pending_operator.map(|op| {
            HistoryEntry::new(self.previous_value, op, self.current_value, result_text.clone())
        });

        // The buffer shows the formatted text; the value keeps full precision
        // and stays NaN after an undefined result.
        self.entry_buffer = result_text;
        self.current_value = result;
        self.previous_value = 0.0;
        self.pending_operator = None;
        self.is_fresh_entry = true;

        entry
    }
}

/// One calculator session: the live state plus its history.
#[derive(Clone, Debug, Default)]
pub struct CalculatorEngine {
    state: CalculatorState,
    history: History,
}

impl CalculatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a command, returning the history entry it produced, if any.
    pub fn dispatch(&mut self, command: Command) -> Option<&HistoryEntry> {
        let Transition { state, entry } = self.state.reduce(command);
        trace!(
            ?command,
            buffer = %state.entry_buffer,
            pending = ?state.pending_operator,
            fresh = state.is_fresh_entry,
            "calculator transition"
        );
        self.state = state;

        let entry = entry?;
        debug!(expression = %entry.expression, result = %entry.result, "computation recorded");
        self.history.push(entry);
        self.history.last()
    }

    /// Type a digit or the decimal point.
    pub fn input_numeral(&mut self, token: char) {
        self.dispatch(Command::Numeral(token));
    }

    /// Delete the last typed character.
    pub fn backspace(&mut self) {
        self.dispatch(Command::Backspace);
    }

    /// Select an operator, evaluating a chained computation first.
    pub fn select_operator(&mut self, op: Operator) {
        self.dispatch(Command::Operator(op));
    }

    /// Evaluate the pending computation.
    pub fn equals(&mut self) {
        self.dispatch(Command::Equals);
    }

    /// Reset the active computation. History is kept.
    pub fn clear(&mut self) {
        self.dispatch(Command::Clear);
    }

    /// Reset the computation and drop the history, as on a new session.
    pub fn reset_session(&mut self) {
        debug!(entries = self.history.len(), "resetting calculator session");
        *self = Self::default();
    }

    /// The text the display shows.
    pub fn display_text(&self) -> &str {
        self.state.entry_buffer()
    }

    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}
