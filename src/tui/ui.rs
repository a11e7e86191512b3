// Frame rendering - called once per event-loop iteration
//
// Pure mapping from App state to widgets; the only mutation is panels
// syncing their scroll dimensions and expired toasts being dropped.

use super::app::App;
use super::components::{self, banner};
use super::layout::ScreenAreas;
use crate::search::RepoSearch;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

pub fn draw<S: RepoSearch>(f: &mut Frame, app: &mut App<S>) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    let banner_height = banner::height(app.session.state(), f.area().width);
    let areas = ScreenAreas::compute(f.area(), banner_height, app.show_logs);

    components::render_title(f, areas.title, app);
    components::render_search_input(f, areas.input, app);
    components::render_results_panel(f, areas.results, app);
    if banner_height > 0 {
        components::render_banner(f, areas.banner, app);
    }
    if let Some(logs_area) = areas.logs {
        components::render_logs_panel(f, logs_area, app);
    }
    components::render_status(f, areas.status, app);

    // Toast on top of everything
    if let Some(ref toast) = app.toast {
        toast.render(f, f.area(), &app.theme);
    }

    app.clear_expired_toast();
}
