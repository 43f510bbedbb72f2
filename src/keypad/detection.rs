//! Key detection for typed key sequences.
//!
//! Turns text such as `"12.5 × 3 ="` or `"ac 7 bs"` into keypad keys, so a
//! session can be driven from a command line or a terminal prompt.

use super::Key;
use crate::calculator::Operator;
use lazy_static::lazy_static;
use regex::Regex;
use thiserror::Error;

/// Word aliases for the non-numeral keys.
const KEY_ALIASES: &[(&str, Key)] = &[
    ("=", Key::Equals),
    ("eq", Key::Equals),
    ("equals", Key::Equals),
    ("ac", Key::Clear),
    ("c", Key::Clear),
    ("clear", Key::Clear),
    ("⌫", Key::Backspace),
    ("bs", Key::Backspace),
    ("back", Key::Backspace),
    ("backspace", Key::Backspace),
    ("⏱", Key::ToggleHistory),
    ("h", Key::ToggleHistory),
    ("history", Key::ToggleHistory),
];

lazy_static! {
    /// Matches a run of digits and decimal points.
    static ref NUMERAL_RUN: Regex = Regex::new(r"^[0-9.]+$").unwrap();

    /// Splits a sequence into numeral runs, operator symbols and words.
    static ref KEY_TOKEN: Regex = Regex::new(r"[0-9.]+|[+\-×*÷/=⌫⏱]|[^\s0-9.+\-×*÷/=⌫⏱]+").unwrap();
}

/// A key token that does not name any keypad key.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("unknown key '{0}'")]
    Unknown(String),

    #[error("empty key")]
    Empty,
}

/// Parse a single key by caption or alias.
///
/// A numeral must be exactly one digit or `.`; use [`parse_keys`] for runs
/// such as `"12.5"`.
pub fn parse_key(token: &str) -> Result<Key, KeyParseError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(KeyParseError::Empty);
    }

    let mut chars = trimmed.chars();
    if let (Some(c), None) = (chars.next(), chars.next())
        && (c.is_ascii_digit() || c == '.')
    {
        return Ok(Key::Numeral(c));
    }

    if let Some(op) = Operator::from_symbol(trimmed) {
        return Ok(Key::Operator(op));
    }

    let lower = trimmed.to_lowercase();
    KEY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == lower)
        .map(|(_, key)| *key)
        .ok_or_else(|| KeyParseError::Unknown(trimmed.to_string()))
}

/// Parse a whole key sequence.
///
/// Numeral runs expand into one key per character; whitespace between keys
/// is optional around operator symbols.
pub fn parse_keys(input: &str) -> Result<Vec<Key>, KeyParseError> {
    let mut keys = Vec::new();

    for token in KEY_TOKEN.find_iter(input).map(|m| m.as_str()) {
        if NUMERAL_RUN.is_match(token) {
            keys.extend(token.chars().map(Key::Numeral));
        } else {
            keys.push(parse_key(token)?);
        }
    }

    Ok(keys)
}
