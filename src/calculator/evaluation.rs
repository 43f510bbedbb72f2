//! Arithmetic evaluation and result formatting.
//!
//! Evaluation is strictly binary: one pending operator applied to the
//! captured operand and the current entry. Results are formatted for the
//! display, with `NaN` standing in for an undefined result.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Text shown for an undefined result (division by zero).
pub const ERROR_TEXT: &str = "Error";

/// Fractional digits kept for non-integral results before trimming.
const FRACTION_DIGITS: usize = 8;

/// Enough fractional digits to print any finite double exactly.
const EXACT_FRACTION_DIGITS: usize = 1074;

/// One of the four keypad operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Get the symbol shown on the keypad and in history expressions.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "×",
            Self::Divide => "÷",
        }
    }

    /// Look up an operator by keypad symbol or ASCII alias.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(Self::Add),
            "-" => Some(Self::Subtract),
            "×" | "*" | "x" => Some(Self::Multiply),
            "÷" | "/" => Some(Self::Divide),
            _ => None,
        }
    }

    /// Apply the operator to two operands.
    ///
    /// Division by zero yields `NaN` rather than an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => {
                if rhs != 0.0 {
                    lhs / rhs
                } else {
                    f64::NAN
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluate the pending computation.
///
/// With no pending operator the current value is returned unchanged.
pub fn evaluate(pending: Option<Operator>, previous: f64, current: f64) -> f64 {
    match pending {
        Some(op) => op.apply(previous, current),
        None => current,
    }
}

/// Parse an entry buffer into a number, falling back to zero.
pub fn parse_entry(buffer: &str) -> f64 {
    buffer.parse().unwrap_or(0.0)
}

/// Format a number for the display.
///
/// Integral values lose their decimal point; everything else is rounded
/// half-up to eight fractional digits with trailing zeros removed.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return ERROR_TEXT.to_string();
    }

    if value.is_infinite() {
        let text = if value.is_sign_positive() {
            "Infinity"
        } else {
            "-Infinity"
        };
        return text.to_string();
    }

    if value == 0.0 {
        return "0".to_string();
    }

    if value.fract() == 0.0 {
        return format!("{:.0}", value);
    }

    format_fixed_half_up(value, FRACTION_DIGITS)
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}

/// Fixed-point text with `fraction_digits` digits, ties rounded away from zero.
///
/// Works on the exact decimal expansion of the double, so only a true tie
/// (or anything above it) rounds up.
fn format_fixed_half_up(value: f64, fraction_digits: usize) -> String {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(fraction_digits))
        .collect();
    let mut int_len = int_part.len();

    if frac_part
        .as_bytes()
        .get(fraction_digits)
        .is_some_and(|d| *d >= b'5')
    {
        let mut carry = true;
        for d in digits.iter_mut().rev() {
            if *d == b'9' {
                *d = b'0';
            } else {
                *d += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut out = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(digits[..int_len].iter().map(|&d| d as char));
    out.push('.');
    out.extend(digits[int_len..].iter().map(|&d| d as char));
    out
}
