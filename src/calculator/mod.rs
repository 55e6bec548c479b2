//! Calculator core
//!
//! This module interprets a sequence of button presses:
//! - [`keys`]: the keypad vocabulary, resolved from labels once
//! - [`engine`]: the input/evaluation state machine
//! - [`display`]: display value and its formatting policy
//! - [`ops`]: pure arithmetic and scientific functions
//! - [`errors`]: error types
//! - [`tape`]: bounded log of presses for the front end
//!
//! # Example
//!
//! ```
//! use calctty::calculator::Calculator;
//!
//! let mut calc = Calculator::new();
//! for label in ["1", "0", "+", "5", "="] {
//!     calc.press_label(label).unwrap();
//! }
//! assert_eq!(calc.display(), "15.0");
//! ```

pub mod display;
pub mod engine;
pub mod errors;
pub mod keys;
pub mod ops;
pub mod tape;

pub use engine::{Calculator, Outcome, PendingOp};
pub use errors::CalcError;
pub use keys::{Function, Key, MemoryOp, Operator};
pub use tape::Tape;
