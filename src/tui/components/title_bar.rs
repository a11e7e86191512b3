// Title bar component
//
// App name, a spinner while a request is in flight, and the endpoint host.

use crate::search::RepoSearch;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render<S: RepoSearch>(f: &mut Frame, area: Rect, app: &App<S>) {
    let ctx = app.render_context();
    let theme = ctx.theme;

    let indicator = if app.session.state().is_loading() {
        format!(" {} searching", ctx.spinner_char())
    } else {
        String::new()
    };

    let title = Paragraph::new(format!(" 🔍 reposeek{}", indicator))
        .style(Style::default().fg(theme.title).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(theme.title))
                .title_top(
                    Line::styled(
                        format!(" {} ", app.endpoint_host),
                        Style::default().fg(theme.muted),
                    )
                    .right_aligned(),
                ),
        );

    f.render_widget(title, area);
}
