//! Plain-text rendering of a calculator screen.
//!
//! Renders the history panel, when visible, above the display line.

use super::CalculatorScreen;
use crate::calculator::History;
use crate::keypad::LAYOUT;
use std::fmt::Write;

const HISTORY_TITLE: &str = "History";

/// Render the history panel: a title followed by one line per entry.
pub fn render_history(history: &History) -> String {
    let mut out = String::from(HISTORY_TITLE);
    out.push('\n');
    for entry in history {
        let _ = writeln!(out, "  {}", entry);
    }
    out
}

/// Render the whole screen.
pub fn render(screen: &CalculatorScreen) -> String {
    let mut out = String::new();
    if screen.show_history() {
        out.push_str(&render_history(screen.engine().history()));
    }
    out.push_str(screen.display_text());
    out
}

/// Render the keypad as a grid of captions.
pub fn render_keypad() -> String {
    LAYOUT
        .iter()
        .map(|row| {
            row.iter()
                .map(|key| format!("{:^4}", key.label()))
                .collect::<Vec<_>>()
                .join("")
                .trim_end()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keypad::{Key, parse_keys};

    #[test]
    fn test_render_display_only() {
        let mut screen = CalculatorScreen::new();
        screen.press_all(parse_keys("1 / 4 =").unwrap());
        assert_eq!(render(&screen), "0.25");
    }

    #[test]
    fn test_render_with_history() {
        let mut screen = CalculatorScreen::new();
        screen.press_all(parse_keys("5 ÷ 0 =").unwrap());
        screen.press(Key::ToggleHistory);

        assert_eq!(render(&screen), "History\n  5 ÷ 0 = Error\nError");
    }

    #[test]
    fn test_render_empty_history() {
        assert_eq!(render_history(&History::new()), "History\n");
    }

    #[test]
    fn test_render_keypad() {
        let keypad = render_keypad();
        let rows: Vec<&str> = keypad.lines().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows[0].starts_with(" AC"));
        assert!(rows[4].ends_with('='));
    }
}
