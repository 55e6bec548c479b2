//! Keypad grid rendering and mouse hit-testing
//!
//! The grid is laid out from [`Key::ALL`], four buttons per row. Rendering
//! and hit-testing share [`keypad_cells`] so a click always maps to the
//! button drawn under it.

use crate::calculator::keys::{Category, Key};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Buttons per keypad row
pub const KEYPAD_COLUMNS: usize = 4;

/// Number of keypad rows
pub const KEYPAD_ROWS: usize = Key::ALL.len().div_ceil(KEYPAD_COLUMNS);

/// Screen rectangle of every button inside `area`, in keypad order
pub fn keypad_cells(area: Rect) -> Vec<(Key, Rect)> {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, KEYPAD_ROWS as u32); KEYPAD_ROWS])
        .split(area);

    let mut cells = Vec::with_capacity(Key::ALL.len());
    for (row_area, keys) in rows.iter().zip(Key::ALL.chunks(KEYPAD_COLUMNS)) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![
                Constraint::Ratio(1, KEYPAD_COLUMNS as u32);
                KEYPAD_COLUMNS
            ])
            .split(*row_area);

        for (key, cell) in keys.iter().zip(columns.iter()) {
            cells.push((*key, *cell));
        }
    }
    cells
}

/// The button under terminal cell (`column`, `row`), if any
pub fn key_at(area: Rect, column: u16, row: u16) -> Option<Key> {
    keypad_cells(area)
        .into_iter()
        .find(|(_, cell)| contains(*cell, column, row))
        .map(|(key, _)| key)
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

fn key_color(key: Key) -> Color {
    match key.category() {
        Category::Entry => DEFAULT_THEME.digit_key,
        Category::Operator => DEFAULT_THEME.operator_key,
        Category::Function => DEFAULT_THEME.function_key,
        Category::Memory => DEFAULT_THEME.memory_key,
        Category::Evaluate => DEFAULT_THEME.equals_key,
    }
}

/// Render the keypad, highlighting the most recently clicked key
pub fn render_keypad_pane(frame: &mut Frame, area: Rect, last_pressed: Option<Key>) {
    for (key, cell) in keypad_cells(area) {
        let is_pressed = last_pressed == Some(key);

        let (bg, fg) = if is_pressed {
            (DEFAULT_THEME.key_pressed_bg, DEFAULT_THEME.key_text)
        } else if key.category() == Category::Entry {
            (key_color(key), DEFAULT_THEME.fg)
        } else {
            (key_color(key), DEFAULT_THEME.key_text)
        };

        let border_style = if is_pressed {
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DEFAULT_THEME.border_normal)
        };

        let button = Paragraph::new(key.label())
            .alignment(Alignment::Center)
            .style(Style::default().bg(bg).fg(fg).add_modifier(Modifier::BOLD))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
        frame.render_widget(button, cell);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        assert_eq!(KEYPAD_ROWS, 7);
        let cells = keypad_cells(Rect::new(0, 0, 40, 21));
        assert_eq!(cells.len(), Key::ALL.len());

        // 7 8 9 / on the first row
        let first_row: Vec<&str> = cells[..4].iter().map(|(k, _)| k.label()).collect();
        assert_eq!(first_row, vec!["7", "8", "9", "/"]);
        assert!(cells[..4].iter().all(|(_, r)| r.y == 0 && r.height == 3));
    }

    #[test]
    fn test_hit_testing() {
        let area = Rect::new(2, 5, 40, 21);
        // each button is 10x3
        assert_eq!(key_at(area, 2, 5).map(Key::label), Some("7"));
        assert_eq!(key_at(area, 41, 7).map(Key::label), Some("/"));
        assert_eq!(key_at(area, 12, 8).map(Key::label), Some("5"));
        assert_eq!(key_at(area, 22, 20).map(Key::label), Some("ceil"));
        assert_eq!(key_at(area, 12, 24).map(Key::label), Some("MR"));
    }

    #[test]
    fn test_clicks_outside_buttons() {
        let area = Rect::new(2, 5, 40, 21);
        assert_eq!(key_at(area, 1, 5), None);
        assert_eq!(key_at(area, 42, 5), None);
        assert_eq!(key_at(area, 2, 26), None);
        // the last row only has MC and MR
        assert_eq!(key_at(area, 25, 24), None);
    }
}
