//! Keypad keys and the intents they forward.

mod detection;

pub use detection::{KeyParseError, parse_key, parse_keys};

use crate::calculator::{Command, Operator};
use std::fmt;

/// A key on the calculator keypad.
/// Every key except [`Key::ToggleHistory`] maps to an engine command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// A digit or the decimal point
    Numeral(char),
    /// One of the four arithmetic operators
    Operator(Operator),
    /// Evaluate the pending computation
    Equals,
    /// Reset the active computation ("AC")
    Clear,
    /// Delete the last typed character
    Backspace,
    /// Show or hide the history panel
    ToggleHistory,
}

/// The keypad, row by row.
pub const LAYOUT: &[&[Key]] = &[
    &[
        Key::Clear,
        Key::Backspace,
        Key::ToggleHistory,
        Key::Operator(Operator::Divide),
    ],
    &[
        Key::Numeral('7'),
        Key::Numeral('8'),
        Key::Numeral('9'),
        Key::Operator(Operator::Multiply),
    ],
    &[
        Key::Numeral('4'),
        Key::Numeral('5'),
        Key::Numeral('6'),
        Key::Operator(Operator::Subtract),
    ],
    &[
        Key::Numeral('1'),
        Key::Numeral('2'),
        Key::Numeral('3'),
        Key::Operator(Operator::Add),
    ],
    &[Key::Numeral('0'), Key::Numeral('.'), Key::Equals],
];

impl Key {
    /// Get the caption printed on the key.
    pub fn label(&self) -> String {
        match self {
            Self::Numeral(token) => token.to_string(),
            Self::Operator(op) => op.symbol().to_string(),
            Self::Equals => "=".to_string(),
            Self::Clear => "AC".to_string(),
            Self::Backspace => "⌫".to_string(),
            Self::ToggleHistory => "⏱".to_string(),
        }
    }

    /// Get the engine command for this key.
    /// Returns `None` for keys handled by the screen itself.
    pub fn command(&self) -> Option<Command> {
        match self {
            Self::Numeral(token) => Some(Command::Numeral(*token)),
            Self::Operator(op) => Some(Command::Operator(*op)),
            Self::Equals => Some(Command::Equals),
            Self::Clear => Some(Command::Clear),
            Self::Backspace => Some(Command::Backspace),
            Self::ToggleHistory => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

impl From<Operator> for Key {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_has_every_key() {
        let keys: Vec<Key> = LAYOUT.iter().flat_map(|row| row.iter().copied()).collect();
        assert_eq!(keys.len(), 19);

        for digit in '0'..='9' {
            assert!(keys.contains(&Key::Numeral(digit)));
        }
        for op in [
            Operator::Add,
            Operator::Subtract,
            Operator::Multiply,
            Operator::Divide,
        ] {
            assert!(keys.contains(&Key::Operator(op)));
        }
        assert!(keys.contains(&Key::Numeral('.')));
        assert!(keys.contains(&Key::ToggleHistory));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::Clear.label(), "AC");
        assert_eq!(Key::Operator(Operator::Divide).to_string(), "÷");
        assert_eq!(Key::Numeral('7').label(), "7");
    }

    #[test]
    fn test_commands() {
        assert_eq!(Key::Equals.command(), Some(Command::Equals));
        assert_eq!(Key::ToggleHistory.command(), None);
        assert_eq!(Key::Backspace.command(), Some(Command::Backspace));
        assert_eq!(
            Key::from(Operator::Add).command(),
            Some(Command::Operator(Operator::Add))
        );
    }
}
