//! Keypad vocabulary
//!
//! Button labels are resolved into a [`Key`] exactly once, at the boundary.
//! Everything past that point matches on the enum, so adding a key is a
//! compile error everywhere it is not handled.

use super::errors::{CalcError, Result};
use std::fmt;
use std::str::FromStr;

/// Binary operators selectable from the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Scientific functions. `Power` is the `x^y` key, which does not compute
/// anything by itself but arms a pending power operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Function {
    Sin,
    Cos,
    Power,
    Sqrt,
    Percent,
    Floor,
    Ceil,
}

/// Operations on the single memory cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    Add,
    Clear,
    Recall,
}

/// A single keypad button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `0`..=`9`
    Digit(u8),
    Point,
    Operator(Operator),
    Function(Function),
    Memory(MemoryOp),
    Equals,
}

/// Which handler a key is dispatched to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Entry,
    Operator,
    Function,
    Memory,
    Evaluate,
}

const DIGIT_LABELS: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

impl Key {
    /// Every key, in keypad order (four per row)
    pub const ALL: [Key; 26] = [
        Key::Digit(7),
        Key::Digit(8),
        Key::Digit(9),
        Key::Operator(Operator::Divide),
        Key::Digit(4),
        Key::Digit(5),
        Key::Digit(6),
        Key::Operator(Operator::Multiply),
        Key::Digit(1),
        Key::Digit(2),
        Key::Digit(3),
        Key::Operator(Operator::Subtract),
        Key::Digit(0),
        Key::Point,
        Key::Equals,
        Key::Operator(Operator::Add),
        Key::Function(Function::Sin),
        Key::Function(Function::Cos),
        Key::Function(Function::Power),
        Key::Function(Function::Sqrt),
        Key::Function(Function::Percent),
        Key::Function(Function::Floor),
        Key::Function(Function::Ceil),
        Key::Memory(MemoryOp::Add),
        Key::Memory(MemoryOp::Clear),
        Key::Memory(MemoryOp::Recall),
    ];

    /// The button label
    pub fn label(self) -> &'static str {
        match self {
            Key::Digit(d) => DIGIT_LABELS[usize::from(d.min(9))],
            Key::Point => ".",
            Key::Operator(op) => op.symbol(),
            Key::Function(Function::Sin) => "sin",
            Key::Function(Function::Cos) => "cos",
            Key::Function(Function::Power) => "x^y",
            Key::Function(Function::Sqrt) => "√",
            Key::Function(Function::Percent) => "%",
            Key::Function(Function::Floor) => "floor",
            Key::Function(Function::Ceil) => "ceil",
            Key::Memory(MemoryOp::Add) => "M+",
            Key::Memory(MemoryOp::Clear) => "MC",
            Key::Memory(MemoryOp::Recall) => "MR",
            Key::Equals => "=",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Key::Digit(_) | Key::Point => Category::Entry,
            Key::Operator(_) => Category::Operator,
            Key::Function(_) => Category::Function,
            Key::Memory(_) => Category::Memory,
            Key::Equals => Category::Evaluate,
        }
    }

    /// The character appended to the display for entry keys
    pub fn entry_char(self) -> Option<char> {
        match self {
            Key::Digit(d) if d <= 9 => Some(char::from(b'0' + d)),
            Key::Point => Some('.'),
            _ => None,
        }
    }
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
        }
    }
}

impl FromStr for Key {
    type Err = CalcError;

    fn from_str(label: &str) -> Result<Self> {
        let key = match label {
            "." => Key::Point,
            "+" => Key::Operator(Operator::Add),
            "-" => Key::Operator(Operator::Subtract),
            "*" => Key::Operator(Operator::Multiply),
            "/" => Key::Operator(Operator::Divide),
            "=" => Key::Equals,
            "sin" => Key::Function(Function::Sin),
            "cos" => Key::Function(Function::Cos),
            "x^y" => Key::Function(Function::Power),
            // ASCII alias for shells that cannot type the radical sign
            "√" | "sqrt" => Key::Function(Function::Sqrt),
            "%" => Key::Function(Function::Percent),
            "floor" => Key::Function(Function::Floor),
            "ceil" => Key::Function(Function::Ceil),
            "M+" => Key::Memory(MemoryOp::Add),
            "MC" => Key::Memory(MemoryOp::Clear),
            "MR" => Key::Memory(MemoryOp::Recall),
            _ => {
                let mut chars = label.chars();
                match (chars.next(), chars.next()) {
                    (Some(c @ '0'..='9'), None) => Key::Digit(c as u8 - b'0'),
                    _ => return Err(CalcError::unknown_key(label)),
                }
            }
        };
        Ok(key)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Split a whitespace-separated key script (`"1 0 + 5 ="`) into keys.
///
/// Fails on the first label outside the vocabulary.
pub fn tokenize(script: &str) -> Result<Vec<Key>> {
    script.split_whitespace().map(str::parse).collect()
}
