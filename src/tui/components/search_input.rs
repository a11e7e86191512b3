// Search input box
//
// Renders the query with the terminal cursor parked after the last character.
// Long queries scroll so the end stays visible.

use super::formatters::tail_to_width;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the input box for `query`
///
/// `debouncing` adds a marker while a typed query has not been sent yet.
pub fn render(f: &mut Frame, area: Rect, query: &str, debouncing: bool, ctx: &RenderContext) {
    let theme = ctx.theme;
    let inner_width = area.width.saturating_sub(3) as usize;
    let visible = tail_to_width(query, inner_width);

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(theme.border_type)
        .border_style(Style::default().fg(theme.highlight))
        .title(" Search ");
    if debouncing {
        block = block.title_top(
            Line::styled(" … ", Style::default().fg(theme.muted)).right_aligned(),
        );
    }

    let input = Paragraph::new(format!(" {}", visible))
        .style(Style::default().fg(theme.foreground))
        .block(block);
    f.render_widget(input, area);

    // Border + leading space
    let cursor_x = area.x + 2 + visible.width() as u16;
    let cursor_y = area.y + 1;
    if cursor_x < area.right().saturating_sub(1) && cursor_y < area.bottom() {
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}
