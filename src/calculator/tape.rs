// Paper tape: a bounded log of key presses for the current session

use std::collections::VecDeque;
use std::fmt;

/// Default number of lines kept on the tape
pub const DEFAULT_TAPE_LINES: usize = 200;

/// A line of tape output
#[derive(Debug, Clone, PartialEq)]
pub struct TapeLine {
    /// Label of the pressed key
    pub label: String,
    /// Display text after the press
    pub display: String,
    pub is_error: bool,
}

impl fmt::Display for TapeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>5}  →  {}", self.label, self.display)
    }
}

/// Read-only trail of what was pressed, oldest first.
///
/// Not a history: nothing is ever replayed or undone from it.
#[derive(Debug, Clone)]
pub struct Tape {
    lines: VecDeque<TapeLine>,
    capacity: usize,
}

impl Tape {
    pub fn new(capacity: usize) -> Self {
        Tape {
            lines: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, dropping the oldest one when full
    pub fn record(&mut self, label: &str, display: &str, is_error: bool) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(TapeLine {
            label: label.to_string(),
            display: display.to_string(),
            is_error,
        });
    }

    pub fn last(&self) -> Option<&TapeLine> {
        self.lines.back()
    }

    pub fn lines(&self) -> impl ExactSizeIterator<Item = &TapeLine> {
        self.lines.iter()
    }

    /// Lines formatted as `label → display`
    pub fn get_output(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.to_string())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for Tape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_LINES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_format() {
        let mut tape = Tape::default();
        tape.record("7", "7", false);
        tape.record("√", "2.6457513110645907", false);

        assert_eq!(tape.len(), 2);
        assert_eq!(
            tape.get_output(),
            vec![
                "    7  →  7".to_string(),
                "    √  →  2.6457513110645907".to_string(),
            ]
        );
    }

    #[test]
    fn test_oldest_lines_are_dropped() {
        let mut tape = Tape::new(2);
        tape.record("1", "1", false);
        tape.record("2", "12", false);
        tape.record("/", "0", false);

        let labels: Vec<&str> = tape.lines().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["2", "/"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut tape = Tape::new(0);
        tape.record("1", "1", false);
        tape.record("=", "1.0", false);
        assert_eq!(tape.capacity(), 1);
        assert_eq!(tape.len(), 1);
    }
}
