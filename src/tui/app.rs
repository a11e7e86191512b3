// TUI application state
//
// App ties the search session to the panels: it turns keystrokes into query
// edits and scroll signals, folds background events into the session, and
// holds everything the renderer needs. Generic over the search backend so
// tests can drive it without a network.

use super::actions;
use super::components::{LogsPanel, ResultsPanel, Toast};
use super::input::InputHandler;
use super::scroll::FocusablePanel;
use super::theme::Theme;
use super::traits::{ComponentId, Handled, Interactive, RenderContext};
use crate::config::Config;
use crate::logging::LogBuffer;
use crate::search::state::FetchKind;
use crate::search::{RepoSearch, ResultItem, SearchClient, SearchSession, SessionEvent};
use crossterm::event::{KeyCode, KeyEvent};
use std::time::Instant;

/// Main application state for the TUI
pub struct App<S: RepoSearch = SearchClient> {
    /// Query, results, and request lifecycle
    pub session: SearchSession<S>,

    pub results_panel: ResultsPanel,
    pub logs_panel: LogsPanel,

    /// Shared with the tracing layer
    pub log_buffer: LogBuffer,

    pub theme: Theme,

    /// Which panel receives navigation keys
    pub focused: FocusablePanel,

    /// Whether the logs panel is on screen
    pub show_logs: bool,

    pub toast: Option<Toast>,

    pub should_quit: bool,

    /// When the app started (for uptime display)
    pub start_time: Instant,

    /// Host of the search endpoint, for the title bar
    pub endpoint_host: String,

    /// Advances on every tick; drives spinners
    animation_frame: usize,

    /// Press/repeat filtering for action and navigation keys
    input_handler: InputHandler,
}

impl<S: RepoSearch> App<S> {
    pub fn new(session: SearchSession<S>, config: &Config, log_buffer: LogBuffer) -> Self {
        let endpoint_host = reqwest::Url::parse(&config.search.api_url)
            .ok()
            .and_then(|url| url.host_str().map(str::to_string))
            .unwrap_or_else(|| config.search.api_url.clone());

        Self {
            session,
            results_panel: ResultsPanel::new(),
            logs_panel: LogsPanel::new(),
            log_buffer,
            theme: Theme::by_name(&config.theme),
            focused: FocusablePanel::default(),
            show_logs: config.show_logs,
            toast: None,
            should_quit: false,
            start_time: Instant::now(),
            endpoint_host,
            animation_frame: 0,
            input_handler: InputHandler::default(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Rendering support
    // ─────────────────────────────────────────────────────────────

    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        let focus = match self.focused {
            FocusablePanel::Results => ComponentId::Results,
            FocusablePanel::Logs => ComponentId::Logs,
        };
        RenderContext::new(&self.theme, focus, self.animation_frame)
    }

    pub fn is_focused(&self, panel: FocusablePanel) -> bool {
        self.focused == panel
    }

    /// Get uptime as a formatted string
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        format!(
            "{:02}:{:02}:{:02}",
            seconds / 3600,
            (seconds % 3600) / 60,
            seconds % 60
        )
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Key filtering
    // ─────────────────────────────────────────────────────────────

    /// Returns true if the action bound to `key` should fire
    pub fn handle_key_press(&mut self, key: KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    pub fn handle_key_release(&mut self, key: KeyCode) {
        self.input_handler.handle_key_release(key);
    }

    // ─────────────────────────────────────────────────────────────
    // Query editing
    // ─────────────────────────────────────────────────────────────

    pub fn push_char(&mut self, c: char) {
        let mut query = self.session.query().to_string();
        query.push(c);
        self.set_query(query);
    }

    pub fn pop_char(&mut self) {
        let mut query = self.session.query().to_string();
        if query.pop().is_some() {
            self.set_query(query);
        }
    }

    pub fn clear_query(&mut self) {
        if !self.session.query().is_empty() {
            self.set_query(String::new());
        }
    }

    pub fn set_query(&mut self, query: String) {
        let emptied = query.is_empty();
        self.session.set_query(query);
        if emptied {
            self.results_panel.reset();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Session plumbing
    // ─────────────────────────────────────────────────────────────

    /// Fold a background event into the session
    pub fn handle_session_event(&mut self, event: SessionEvent) {
        let replaces_list =
            matches!(&event, SessionEvent::Completed(done) if done.kind == FetchKind::NewQuery);

        self.session.handle_event(event);

        if replaces_list {
            self.results_panel.reset();
        }
    }

    /// Report the results list position to the session
    pub fn emit_scroll_signal(&mut self) {
        if self.session.on_scroll(self.results_panel.metrics()) {
            tracing::trace!("Scroll reached bottom at {:?}", self.results_panel.metrics());
        }
    }

    /// Route a navigation key to the focused panel
    ///
    /// The results list emits a scroll signal when its view actually moved,
    /// or when a downward key hit a view that was already at its end (a list
    /// shorter than the viewport included).
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled {
        match self.focused {
            FocusablePanel::Results => {
                let offset_before = self.results_panel.metrics().offset;
                let was_at_end = self.results_panel.view_at_end();

                let handled = self.results_panel.handle_key(key);
                if handled.was_handled() {
                    let moved = self.results_panel.metrics().offset != offset_before;
                    let pushed_past_end = was_at_end
                        && matches!(key.code, KeyCode::Down | KeyCode::PageDown | KeyCode::End);
                    if moved || pushed_past_end {
                        self.emit_scroll_signal();
                    }
                }
                handled
            }
            FocusablePanel::Logs => self.logs_panel.handle_key(key),
        }
    }

    pub fn focus_hint(&self) -> Option<&'static str> {
        match self.focused {
            FocusablePanel::Results => self.results_panel.focus_hint(),
            FocusablePanel::Logs => self.logs_panel.focus_hint(),
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Panels and actions
    // ─────────────────────────────────────────────────────────────

    pub fn focus_next(&mut self) {
        self.focused = self.focused.next(self.show_logs);
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
        if !self.show_logs && self.focused == FocusablePanel::Logs {
            self.focused = FocusablePanel::Results;
        }
    }

    /// The highlighted repository, if any
    pub fn selected_item(&self) -> Option<&ResultItem> {
        self.results_panel
            .selected
            .and_then(|idx| self.session.state().results().get(idx))
    }

    pub fn open_selected(&mut self) {
        let Some(url) = self.selected_item().map(|item| item.html_url.clone()) else {
            return;
        };

        match actions::open_in_browser(&url) {
            Ok(()) => {
                tracing::info!("Opened {}", url);
                self.show_toast("↗ Opened in browser");
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.show_toast("✗ Failed to open browser");
            }
        }
    }

    pub fn copy_selected_url(&mut self) {
        let Some(url) = self.selected_item().map(|item| item.html_url.clone()) else {
            return;
        };

        match actions::copy_to_clipboard(&url) {
            Ok(()) => self.show_toast("✓ Copied URL to clipboard"),
            Err(e) => {
                tracing::warn!("{:#}", e);
                self.show_toast("✗ Failed to copy");
            }
        }
    }
}
