//! The presentation side of a calculator: one engine plus the history toggle.
//!
//! The screen forwards keypad intents to its [`CalculatorEngine`] and keeps
//! the one piece of state the engine does not own, whether the history panel
//! is visible.

pub mod render;

pub use render::{render, render_history, render_keypad};

use crate::calculator::CalculatorEngine;
use crate::keypad::Key;

/// A calculator screen with its own session.
#[derive(Clone, Debug, Default)]
pub struct CalculatorScreen {
    engine: CalculatorEngine,
    show_history: bool,
}

impl CalculatorScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the history panel starts visible.
    pub fn with_history_shown(mut self, show_history: bool) -> Self {
        self.show_history = show_history;
        self
    }

    /// Handle one key press.
    pub fn press(&mut self, key: Key) {
        match key.command() {
            Some(command) => {
                self.engine.dispatch(command);
            }
            None => {
                self.show_history = !self.show_history;
                tracing::trace!(show_history = self.show_history, "history panel toggled");
            }
        }
    }

    /// Handle a sequence of key presses in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    pub fn display_text(&self) -> &str {
        self.engine.display_text()
    }

    pub fn show_history(&self) -> bool {
        self.show_history
    }

    pub fn engine(&self) -> &CalculatorEngine {
        &self.engine
    }
}
