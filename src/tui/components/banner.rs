// Status banner under the results list
//
// One line for the loading indicator, then the error message wrapped to the
// terminal width. Each part exists only while its condition holds; layout
// sizes the area with `height()`.

use super::formatters::wrap_to_width;
use crate::search::SearchState;
use crate::tui::traits::RenderContext;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Columns taken by " ✗ " before the message (continuations indent to match)
const ERROR_INDENT: usize = 3;

/// The error message split into rows for a banner `width` columns wide
fn error_rows(message: &str, width: u16) -> Vec<String> {
    wrap_to_width(message, (width as usize).saturating_sub(ERROR_INDENT))
}

/// Rows the banner needs for this state at `width` columns
pub fn height(state: &SearchState, width: u16) -> u16 {
    let loading = u16::from(state.is_loading());
    let error = if state.has_error() {
        error_rows(state.error_message(), width).len() as u16
    } else {
        0
    };
    loading + error
}

pub fn render(f: &mut Frame, area: Rect, state: &SearchState, ctx: &RenderContext) {
    let theme = ctx.theme;
    let mut lines = Vec::new();

    if state.is_loading() {
        lines.push(Line::from(Span::styled(
            format!(" {} Loading…", ctx.spinner_char()),
            Style::default().fg(theme.loading),
        )));
    }

    if state.has_error() {
        let text_style = Style::default().fg(theme.error);
        for (i, row) in error_rows(state.error_message(), area.width)
            .into_iter()
            .enumerate()
        {
            let lead = if i == 0 {
                Span::styled(" ✗ ", text_style.add_modifier(Modifier::BOLD))
            } else {
                Span::raw(" ".repeat(ERROR_INDENT))
            };
            lines.push(Line::from(vec![lead, Span::styled(row, text_style)]));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}
