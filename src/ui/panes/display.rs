//! Single-line display pane

use crate::calculator::engine::PendingOp;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Short marker for the pending operation, shown at the left of the display
pub fn pending_marker(pending: Option<PendingOp>) -> &'static str {
    match pending {
        None => "",
        Some(PendingOp::Binary(op)) => op.symbol(),
        Some(PendingOp::Power) => "x^y",
    }
}

/// Render the display text right-aligned, the way a calculator shows it
pub fn render_display_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    pending: Option<PendingOp>,
    is_error: bool,
) {
    let block = Block::default()
        .title(" CalcTTY ")
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(DEFAULT_THEME.border_focused)
                .add_modifier(Modifier::BOLD),
        )
        .padding(Padding::horizontal(1));

    let text_color = if is_error {
        DEFAULT_THEME.error
    } else {
        DEFAULT_THEME.fg
    };

    let marker = pending_marker(pending);
    let inner_width = area.width.saturating_sub(4) as usize; // borders + padding
    let gap = inner_width
        .saturating_sub(marker.chars().count())
        .saturating_sub(text.chars().count());

    let line = Line::from(vec![
        Span::styled(marker, Style::default().fg(DEFAULT_THEME.secondary)),
        Span::raw(" ".repeat(gap)),
        Span::styled(
            text.to_string(),
            Style::default().fg(text_color).add_modifier(Modifier::BOLD),
        ),
    ]);

    let paragraph = Paragraph::new(line)
        .alignment(Alignment::Right)
        .block(block);
    frame.render_widget(paragraph, area);
}
