//! Tape pane rendering

use crate::calculator::tape::Tape;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the tape of key presses, pinned to the newest line
pub fn render_tape_pane(frame: &mut Frame, area: Rect, tape: &Tape) {
    let block = Block::default()
        .title(" Tape ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    if tape.is_empty() {
        let paragraph = Paragraph::new("(no keys pressed)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1
    let skip = tape.len().saturating_sub(visible_height);

    let items: Vec<ListItem> = tape
        .lines()
        .skip(skip)
        .map(|line| {
            let color = if line.is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            };
            ListItem::new(line.to_string()).style(Style::default().fg(color))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
