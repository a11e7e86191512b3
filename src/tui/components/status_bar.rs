// Status bar component
//
// Result count, next page, and key hints. Narrow terminals get a compact
// icon form without the hints for the focused panel.

use crate::search::RepoSearch;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render<S: RepoSearch>(f: &mut Frame, area: Rect, app: &App<S>) {
    let state = app.session.state();
    let count = state.results().len();
    let next_page = state.cursor().get();
    let bp = Breakpoint::from_width(area.width);

    let logs_hint = if app.show_logs { "Tab:focus  ^L:hide logs" } else { "^L:logs" };

    let status_text = if !bp.at_least(Breakpoint::Normal) {
        format!(" 📦 {} │ ⤓ p{} │ Esc:quit", count, next_page)
    } else if !bp.at_least(Breakpoint::Wide) {
        format!(
            " {} results │ next page {} │ {} │ Esc:quit",
            count, next_page, logs_hint
        )
    } else {
        let focus_hint = app.focus_hint().unwrap_or_default();
        format!(
            " {} │ {} results │ next page {} │ {} │ {}  ^U:clear  Esc:quit",
            app.uptime(),
            count,
            next_page,
            focus_hint,
            logs_hint
        )
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
