//! Session history of completed computations.

use super::evaluation::{Operator, format_result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A completed computation as shown in the history panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The evaluated expression, e.g. `"5 × 4"`.
    pub expression: String,
    /// The formatted result, e.g. `"20"` or `"Error"`.
    pub result: String,
}

impl HistoryEntry {
    /// Create an entry for `previous <op> current`.
    ///
    /// Operands are rendered with the display formatter so they read the way
    /// they were shown on screen.
    pub fn new(previous: f64, operator: Operator, current: f64, result: impl Into<String>) -> Self {
        Self {
            expression: format!(
                "{} {} {}",
                format_result(previous),
                operator.symbol(),
                format_result(current)
            ),
            result: result.into(),
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression, self.result)
    }
}

/// Append-only, chronologically ordered list of history entries.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed computation.
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, HistoryEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a HistoryEntry;
    type IntoIter = std::slice::Iter<'a, HistoryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
