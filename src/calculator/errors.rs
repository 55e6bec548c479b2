//! Error types for the calculator
//!
//! This module defines [`CalcError`]. Every variant except
//! [`CalcError::UnknownKey`] is an *invalid numeric state*: the engine reacts
//! to all of them the same way, by putting the error marker on the display.
//! `UnknownKey` only happens at the boundary, when a label is turned into a
//! [`Key`](super::keys::Key), before any calculator state is touched.
//!
//! No error ever unwinds out of the engine. Handlers return them as values.

use thiserror::Error;

/// Errors produced while interpreting key presses
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// The display text is not a number (e.g. `"abc"`, `"1..2"`, `"Error"`)
    #[error("cannot read {text:?} as a number")]
    InvalidNumber { text: String },

    /// Division with a zero right-hand operand
    #[error("division by zero")]
    DivisionByZero,

    /// Square root of a negative operand
    #[error("square root of negative number {operand}")]
    NegativeSquareRoot { operand: f64 },

    /// Result is undefined for the given input (e.g. `sin(inf)`)
    #[error("math domain error in {what}")]
    Domain { what: String },

    /// Result is too large to represent (e.g. `floor(inf)`, `10^400`)
    #[error("result out of range in {what}")]
    Overflow { what: String },

    /// Label outside the keypad vocabulary
    #[error("unknown key {label:?}")]
    UnknownKey { label: String },
}

impl CalcError {
    pub fn invalid_number(text: impl Into<String>) -> Self {
        Self::InvalidNumber { text: text.into() }
    }

    pub fn domain(what: impl Into<String>) -> Self {
        Self::Domain { what: what.into() }
    }

    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Overflow { what: what.into() }
    }

    pub fn unknown_key(label: impl Into<String>) -> Self {
        Self::UnknownKey {
            label: label.into(),
        }
    }

    /// Whether this error leaves the error marker on the display
    pub fn is_numeric(&self) -> bool {
        !matches!(self, CalcError::UnknownKey { .. })
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
