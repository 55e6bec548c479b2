//! Display value representation and formatting policy
//!
//! The calculator keeps what is on screen as a [`DisplayValue`] rather than
//! as raw text. Text only exists at the edges: while the user is typing a
//! number ([`DisplayValue::Entry`]) and when the display is read.
//!
//! # Formatting policy
//!
//! - Arithmetic, evaluation, trig, `√`, `%` and memory recall produce
//!   [`DisplayValue::Decimal`], which always carries a fractional part
//!   (`15.0`, `0.5`) and switches to exponent form outside
//!   `1e-4 <= |x| < 1e16` (`1e+16`, `1.5e-05`).
//! - `floor` and `ceil` produce [`DisplayValue::Integral`], rendered as
//!   plain integer digits (`3`, not `3.0`).

use super::errors::{CalcError, Result};
use std::fmt;

/// Text shown when the calculator is in the invalid numeric state
pub const ERROR_MARKER: &str = "Error";

/// Text shown at session start and after an operator is selected
pub const INITIAL_DISPLAY: &str = "0";

/// What the display currently holds
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayValue {
    /// Text typed by the user (or injected by the front end), kept verbatim
    Entry(String),
    /// Float-style result
    Decimal(f64),
    /// Integer-valued result of `floor`/`ceil`
    Integral(f64),
    /// The invalid numeric state
    Error,
}

impl DisplayValue {
    pub fn initial() -> Self {
        DisplayValue::Entry(INITIAL_DISPLAY.to_string())
    }

    /// Read the display as a number
    pub fn parse(&self) -> Result<f64> {
        match self {
            DisplayValue::Entry(text) => parse_number(text),
            DisplayValue::Decimal(v) | DisplayValue::Integral(v) => Ok(*v),
            DisplayValue::Error => Err(CalcError::invalid_number(ERROR_MARKER)),
        }
    }

    /// The numeric value of a computed result, `None` for entry text and errors
    pub fn as_number(&self) -> Option<f64> {
        match self {
            DisplayValue::Decimal(v) | DisplayValue::Integral(v) => Some(*v),
            _ => None,
        }
    }

    /// Whether digit entry overwrites the display instead of appending.
    ///
    /// Decided on the rendered text, so an integral `0` result behaves like
    /// the initial display while a decimal `0.0` does not.
    pub fn accepts_overwrite(&self) -> bool {
        let text = self.to_string();
        text == INITIAL_DISPLAY || text == ERROR_MARKER
    }

    pub fn is_error(&self) -> bool {
        match self {
            DisplayValue::Error => true,
            DisplayValue::Entry(text) => text == ERROR_MARKER,
            _ => false,
        }
    }
}

impl Default for DisplayValue {
    fn default() -> Self {
        Self::initial()
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Entry(text) => f.write_str(text),
            DisplayValue::Decimal(v) => f.write_str(&format_decimal(*v)),
            DisplayValue::Integral(v) => f.write_str(&format_integral(*v)),
            DisplayValue::Error => f.write_str(ERROR_MARKER),
        }
    }
}

/// Parse display text as a decimal number.
///
/// Surrounding whitespace is ignored. Accepts an optional sign, fraction and
/// exponent, plus `inf`/`nan`.
pub fn parse_number(text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| CalcError::invalid_number(text))
}

/// Float-style rendering: shortest round-trip digits, always with a
/// fractional part or an exponent.
pub fn format_decimal(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` gives the shortest digits, e.g. "1.5e-5"
    let scientific = format!("{:e}", value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if value != 0.0 && !(-4..16).contains(&exponent) {
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let mut text = format!("{}", value);
    if !text.contains('.') {
        text.push_str(".0");
    }
    text
}

/// Integer rendering for `floor`/`ceil` results
pub fn format_integral(value: f64) -> String {
    if value == 0.0 {
        // ceil(-0.5) is -0.0, shown as plain 0
        return "0".to_string();
    }
    format!("{}", value)
}
