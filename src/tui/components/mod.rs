// Components module - reusable UI building blocks
//
// - Title bar: app name, loading spinner, endpoint host
// - Search input: the query box, owns the terminal cursor
// - Results panel: repository rows with selection and scrollbar
// - Banner: loading indicator and error message
// - Logs panel: system log entries
// - Status bar: counts and key hints
// - Toast: transient overlay

pub mod banner;
pub mod formatters;
pub mod logs_panel;
pub mod results_panel;
pub mod scrollbar;
pub mod search_input;
pub mod status_bar;
pub mod title_bar;
pub mod toast;

pub use logs_panel::LogsPanel;
pub use results_panel::{EmptyHint, ResultsPanel};
pub use toast::Toast;

use crate::search::RepoSearch;
use crate::tui::app::App;
use ratatui::{layout::Rect, Frame};

/// Render the title bar (convenience wrapper)
pub fn render_title<S: RepoSearch>(f: &mut Frame, area: Rect, app: &App<S>) {
    title_bar::render(f, area, app);
}

/// Render the status bar (convenience wrapper)
pub fn render_status<S: RepoSearch>(f: &mut Frame, area: Rect, app: &App<S>) {
    status_bar::render(f, area, app);
}

/// Render the query box
pub fn render_search_input<S: RepoSearch>(f: &mut Frame, area: Rect, app: &App<S>) {
    let ctx = app.render_context();
    search_input::render(
        f,
        area,
        app.session.query(),
        app.session.is_debouncing(),
        &ctx,
    );
}

/// Sync the results panel with the session and render it
pub fn render_results_panel<S: RepoSearch>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let height = area.height.saturating_sub(2) as usize;
    let count = app.session.state().results().len();
    app.results_panel.sync(count, height);

    let state = app.session.state();
    let empty = if app.session.query().is_empty() {
        EmptyHint::NoQuery
    } else if state.is_loading() || app.session.is_debouncing() {
        EmptyHint::Searching
    } else {
        EmptyHint::NoResults
    };

    let ctx = app.render_context();
    app.results_panel
        .render_with_items(f, area, state.results(), empty, &ctx);
}

/// Render the loading/error banner
pub fn render_banner<S: RepoSearch>(f: &mut Frame, area: Rect, app: &App<S>) {
    let ctx = app.render_context();
    banner::render(f, area, app.session.state(), &ctx);
}

/// Sync the logs panel with the log buffer and render it
pub fn render_logs_panel<S: RepoSearch>(f: &mut Frame, area: Rect, app: &mut App<S>) {
    let height = area.height.saturating_sub(2) as usize;
    let entries = app.log_buffer.get_all();
    app.logs_panel.sync_entries(&entries, height);

    let ctx = app.render_context();
    app.logs_panel.render_with_entries(f, area, &entries, &ctx);
}
