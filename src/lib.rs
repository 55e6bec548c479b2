//! # Introduction
//!
//! CalcTTY is a button-grid calculator for the terminal: basic arithmetic, a
//! handful of scientific functions and a single memory cell. Buttons are
//! clicked with the mouse on a keypad drawn with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Click → Keypad hit-test → Key → Calculator → Display text → TUI
//! ```
//!
//! 1. [`calculator`] — the core: [`calculator::Key`] vocabulary, the
//!    [`calculator::Calculator`] state machine, formatting policy and errors.
//! 2. [`logging`] — `tracing` subscriber setup for the binary.
//! 3. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Keys
//!
//! Digits `0`-`9` and `.`, operators `+ - * /`, `=`, scientific functions
//! `sin cos x^y √ % floor ceil`, memory `M+ MC MR`.

pub mod calculator;
pub mod logging;
pub mod ui;
