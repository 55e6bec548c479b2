//! The input/evaluation state machine
//!
//! [`Calculator`] owns the four pieces of session state: the display, the
//! pending operation, the accumulator (left-hand operand) and the memory
//! cell. Key presses are processed one at a time, to completion.
//!
//! # States
//!
//! The machine is either *idle* (no pending operation) or *awaiting the
//! right operand* (an operator or `x^y` was selected). Selecting an operator
//! moves to awaiting; `=` always moves back to idle, even on error.
//!
//! # Errors
//!
//! Every handler degrades to the error marker on the display and hands the
//! [`CalcError`] back as a value. The marker behaves like the initial `"0"`
//! for digit entry, so typing a digit recovers from an error.

use super::display::DisplayValue;
use super::errors::{CalcError, Result};
use super::keys::{Function, Key, MemoryOp, Operator};
use super::ops;
use tracing::{debug, warn};

/// Operation waiting for its right-hand operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingOp {
    Binary(Operator),
    /// Armed by the `x^y` key
    Power,
}

/// What a single key press did
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A digit or point was typed
    Entered,
    /// An operator was stored as pending
    OperatorSelected,
    /// `x^y` captured the base, the exponent is expected next
    AwaitingExponent,
    /// A result was computed and is on the display
    Value(f64),
    /// A memory operation completed, carrying the memory (or recalled) value
    Memory(f64),
    /// The press failed and the display shows the error marker
    Error(CalcError),
}

/// Calculator session state
#[derive(Debug, Clone)]
pub struct Calculator {
    display: DisplayValue,
    pending: Option<PendingOp>,
    accumulator: f64,
    memory: f64,
}

impl Calculator {
    pub fn new() -> Self {
        Calculator {
            display: DisplayValue::initial(),
            pending: None,
            accumulator: 0.0,
            memory: 0.0,
        }
    }

    /// Submit one key press
    pub fn press(&mut self, key: Key) -> Outcome {
        let outcome = match key {
            Key::Digit(_) | Key::Point => {
                if let Some(symbol) = key.entry_char() {
                    self.enter(symbol);
                }
                Outcome::Entered
            }
            Key::Operator(op) => match self.select_operator(op) {
                Ok(()) => Outcome::OperatorSelected,
                Err(e) => Outcome::Error(e),
            },
            Key::Equals => match self.evaluate() {
                Ok(value) => Outcome::Value(value),
                Err(e) => Outcome::Error(e),
            },
            Key::Function(function) => match self.apply_function(function) {
                Ok(Some(value)) => Outcome::Value(value),
                Ok(None) => Outcome::AwaitingExponent,
                Err(e) => Outcome::Error(e),
            },
            Key::Memory(op) => match self.apply_memory(op) {
                Ok(value) => Outcome::Memory(value),
                Err(e) => Outcome::Error(e),
            },
        };

        debug!(key = %key, display = %self.display, pending = ?self.pending, "key pressed");
        outcome
    }

    /// Resolve a button label and submit it.
    ///
    /// Unknown labels are rejected before any state changes.
    pub fn press_label(&mut self, label: &str) -> Result<Outcome> {
        let key: Key = label.parse()?;
        Ok(self.press(key))
    }

    /// Digit or decimal point entry.
    ///
    /// Overwrites `"0"` and the error marker, appends otherwise. A second
    /// point is appended like any other symbol.
    pub fn enter(&mut self, symbol: char) {
        self.display = if self.display.accepts_overwrite() {
            DisplayValue::Entry(symbol.to_string())
        } else {
            let mut text = self.display.to_string();
            text.push(symbol);
            DisplayValue::Entry(text)
        };
    }

    /// Store the display as the left operand and arm `op`.
    ///
    /// On a non-numeric display the accumulator and pending operation keep
    /// their previous values.
    pub fn select_operator(&mut self, op: Operator) -> Result<()> {
        let operand = self.operand()?;
        self.arm(PendingOp::Binary(op), operand);
        Ok(())
    }

    /// The `=` key.
    ///
    /// With nothing pending the display value is returned unchanged (as a
    /// decimal). The pending operation is cleared whatever the outcome.
    pub fn evaluate(&mut self) -> Result<f64> {
        let pending = self.pending.take();
        let accumulator = self.accumulator;

        let result = self.display.parse().and_then(|rhs| match pending {
            None => Ok(rhs),
            Some(PendingOp::Binary(op)) => ops::apply_operator(accumulator, op, rhs),
            Some(PendingOp::Power) => ops::power(accumulator, rhs),
        });

        match result {
            Ok(value) => {
                self.display = DisplayValue::Decimal(value);
                Ok(value)
            }
            Err(e) => self.fail(e),
        }
    }

    /// Scientific function keys.
    ///
    /// Returns `None` for `x^y`, which only captures the base and waits for
    /// the exponent and `=`.
    pub fn apply_function(&mut self, function: Function) -> Result<Option<f64>> {
        let operand = self.operand()?;

        if function == Function::Power {
            self.arm(PendingOp::Power, operand);
            return Ok(None);
        }

        match ops::apply_function(function, operand) {
            Ok(value) => {
                let number = value.as_number();
                self.display = value;
                Ok(number)
            }
            Err(e) => self.fail(e),
        }
    }

    /// Memory keys. The display must be numeric for all three.
    pub fn apply_memory(&mut self, op: MemoryOp) -> Result<f64> {
        let operand = self.operand()?;

        match op {
            MemoryOp::Add => {
                self.memory += operand;
                Ok(self.memory)
            }
            MemoryOp::Clear => {
                self.memory = 0.0;
                Ok(0.0)
            }
            MemoryOp::Recall => {
                self.display = DisplayValue::Decimal(self.memory);
                Ok(self.memory)
            }
        }
    }

    /// The text to render
    pub fn display(&self) -> String {
        self.display.to_string()
    }

    pub fn display_value(&self) -> &DisplayValue {
        &self.display
    }

    /// Replace the display with raw text, as if the front end wrote to it
    pub fn set_display(&mut self, text: &str) {
        self.display = DisplayValue::Entry(text.to_string());
    }

    pub fn pending(&self) -> Option<PendingOp> {
        self.pending
    }

    /// Left-hand operand; only meaningful while an operation is pending
    pub fn accumulator(&self) -> f64 {
        self.accumulator
    }

    pub fn memory(&self) -> f64 {
        self.memory
    }

    pub fn is_error(&self) -> bool {
        self.display.is_error()
    }

    /// Parse the display, switching to the error marker if it is not a number
    fn operand(&mut self) -> Result<f64> {
        match self.display.parse() {
            Ok(value) => Ok(value),
            Err(e) => self.fail(e),
        }
    }

    fn arm(&mut self, pending: PendingOp, operand: f64) {
        self.accumulator = operand;
        self.pending = Some(pending);
        self.display = DisplayValue::initial();
    }

    fn fail<T>(&mut self, error: CalcError) -> Result<T> {
        warn!(error = %error, "invalid numeric state");
        if error.is_numeric() {
            self.display = DisplayValue::Error;
        }
        Err(error)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press_all(calc: &mut Calculator, labels: &[&str]) -> Outcome {
        let mut last = Outcome::Entered;
        for label in labels {
            last = calc.press_label(label).unwrap();
        }
        last
    }

    #[test]
    fn test_initial_state() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.memory(), 0.0);
        assert_eq!(calc.pending(), None);
        assert!(!calc.is_error());
    }

    #[test]
    fn test_digit_entry() {
        let mut calc = Calculator::new();
        calc.enter('5');
        assert_eq!(calc.display(), "5");
        calc.enter('3');
        assert_eq!(calc.display(), "53");
    }

    #[test]
    fn test_second_point_is_appended() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", ".", "2", "."]);
        assert_eq!(calc.display(), "1.2.");

        // and then the display no longer parses
        assert!(calc.select_operator(Operator::Add).is_err());
        assert_eq!(calc.display(), "Error");
    }

    #[test]
    fn test_point_replaces_initial_zero() {
        let mut calc = Calculator::new();
        calc.enter('.');
        assert_eq!(calc.display(), ".");
        calc.enter('5');
        assert_eq!(calc.display(), ".5");
        assert_eq!(calc.evaluate().unwrap(), 0.5);
    }

    #[test]
    fn test_entry_after_result_appends() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["1", "+", "2", "="]);
        assert_eq!(calc.display(), "3.0");
        calc.enter('4');
        assert_eq!(calc.display(), "3.04");
    }

    #[test]
    fn test_entry_after_integral_zero_overwrites() {
        let mut calc = Calculator::new();
        calc.set_display("0.3");
        calc.apply_function(Function::Floor).unwrap();
        assert_eq!(calc.display(), "0");
        calc.enter('7');
        assert_eq!(calc.display(), "7");
    }

    #[test]
    fn test_operator_resets_display() {
        let mut calc = Calculator::new();
        calc.set_display("10");
        calc.select_operator(Operator::Add).unwrap();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.accumulator(), 10.0);
        assert_eq!(calc.pending(), Some(PendingOp::Binary(Operator::Add)));
    }

    #[test]
    fn test_failed_operator_keeps_pending() {
        let mut calc = Calculator::new();
        calc.set_display("4");
        calc.select_operator(Operator::Multiply).unwrap();
        calc.set_display("abc");

        let err = calc.select_operator(Operator::Add).unwrap_err();
        assert!(matches!(err, CalcError::InvalidNumber { .. }));
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.accumulator(), 4.0);
        assert_eq!(calc.pending(), Some(PendingOp::Binary(Operator::Multiply)));
    }

    #[test]
    fn test_evaluate_clears_pending_on_error() {
        let mut calc = Calculator::new();
        calc.set_display("10");
        calc.select_operator(Operator::Divide).unwrap();
        calc.set_display("0");

        assert_eq!(calc.evaluate(), Err(CalcError::DivisionByZero));
        assert_eq!(calc.display(), "Error");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn test_evaluate_parse_failure_clears_pending() {
        let mut calc = Calculator::new();
        calc.set_display("10");
        calc.select_operator(Operator::Add).unwrap();
        calc.set_display("x");

        assert!(calc.evaluate().is_err());
        assert_eq!(calc.pending(), None);
        assert!(calc.is_error());
    }

    #[test]
    fn test_redundant_equals_is_identity() {
        let mut calc = Calculator::new();
        calc.set_display("7");
        assert_eq!(calc.evaluate().unwrap(), 7.0);
        assert_eq!(calc.display(), "7.0");
        assert_eq!(calc.evaluate().unwrap(), 7.0);
        assert_eq!(calc.display(), "7.0");
    }

    #[test]
    fn test_power_flow() {
        let mut calc = Calculator::new();
        calc.set_display("2");
        assert_eq!(calc.apply_function(Function::Power).unwrap(), None);
        assert_eq!(calc.accumulator(), 2.0);
        assert_eq!(calc.pending(), Some(PendingOp::Power));
        assert_eq!(calc.display(), "0");

        calc.set_display("3");
        assert_eq!(calc.evaluate().unwrap(), 8.0);
        assert_eq!(calc.display(), "8.0");
        assert_eq!(calc.pending(), None);
    }

    #[test]
    fn test_floor_and_ceil_render_without_suffix() {
        let mut calc = Calculator::new();
        calc.set_display("3.7");
        assert_eq!(calc.apply_function(Function::Floor).unwrap(), Some(3.0));
        assert_eq!(calc.display(), "3");

        calc.set_display("3.2");
        assert_eq!(calc.apply_function(Function::Ceil).unwrap(), Some(4.0));
        assert_eq!(calc.display(), "4");
    }

    #[test]
    fn test_function_on_error_display() {
        let mut calc = Calculator::new();
        calc.set_display("-4");
        assert!(calc.apply_function(Function::Sqrt).is_err());
        assert!(calc.is_error());

        assert!(matches!(
            calc.apply_function(Function::Sin),
            Err(CalcError::InvalidNumber { .. })
        ));
        assert_eq!(calc.display(), "Error");
    }

    #[test]
    fn test_functions_leave_pending_alone() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "+", "1", "6", "√"]);
        assert_eq!(calc.display(), "4.0");
        assert_eq!(calc.pending(), Some(PendingOp::Binary(Operator::Add)));
        assert_eq!(press_all(&mut calc, &["="]), Outcome::Value(9.0));
    }

    #[test]
    fn test_memory() {
        let mut calc = Calculator::new();
        calc.set_display("25");
        assert_eq!(calc.apply_memory(MemoryOp::Add).unwrap(), 25.0);
        assert_eq!(calc.memory(), 25.0);
        assert_eq!(calc.display(), "25");

        calc.set_display("0");
        assert_eq!(calc.apply_memory(MemoryOp::Recall).unwrap(), 25.0);
        assert_eq!(calc.display(), "25.0");
        assert_eq!(calc.memory(), 25.0);

        assert_eq!(calc.apply_memory(MemoryOp::Clear).unwrap(), 0.0);
        assert_eq!(calc.memory(), 0.0);
        assert_eq!(calc.display(), "25.0");
    }

    #[test]
    fn test_memory_accumulates() {
        let mut calc = Calculator::new();
        press_all(&mut calc, &["5", "M+", "M+"]);
        assert_eq!(calc.memory(), 10.0);
    }

    #[test]
    fn test_memory_on_error_display() {
        let mut calc = Calculator::new();
        calc.set_display("12");
        calc.apply_memory(MemoryOp::Add).unwrap();
        calc.set_display("Error");

        assert!(calc.apply_memory(MemoryOp::Recall).is_err());
        assert!(calc.apply_memory(MemoryOp::Clear).is_err());
        assert_eq!(calc.memory(), 12.0);
        assert!(calc.is_error());
    }

    #[test]
    fn test_unknown_label_leaves_state_alone() {
        let mut calc = Calculator::new();
        calc.set_display("42");
        let err = calc.press_label("tan").unwrap_err();
        assert_eq!(err, CalcError::unknown_key("tan"));
        assert_eq!(calc.display(), "42");
    }

    #[test]
    fn test_press_outcomes() {
        let mut calc = Calculator::new();
        assert_eq!(calc.press(Key::Digit(2)), Outcome::Entered);
        assert_eq!(
            calc.press(Key::Function(Function::Power)),
            Outcome::AwaitingExponent
        );
        assert_eq!(calc.press(Key::Digit(5)), Outcome::Entered);
        assert_eq!(calc.press(Key::Equals), Outcome::Value(32.0));
        assert_eq!(
            calc.press(Key::Operator(Operator::Subtract)),
            Outcome::OperatorSelected
        );
        assert_eq!(calc.press(Key::Memory(MemoryOp::Add)), Outcome::Memory(0.0));
        assert_eq!(
            calc.press(Key::Operator(Operator::Divide)),
            Outcome::OperatorSelected
        );
        assert_eq!(
            calc.press(Key::Equals),
            Outcome::Error(CalcError::DivisionByZero)
        );
    }
}
