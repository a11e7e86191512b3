// TUI module - Terminal User Interface
//
// Owns the terminal for the lifetime of an interactive session:
// - TerminalSession: raw mode, alternate screen and mouse capture, undone on drop
// - Event loop: keyboard/mouse input, redraw ticks, and search session events
// - Key routing: query editing, global actions, focused-panel navigation

pub mod actions;
pub mod app;
pub mod components;
pub mod input;
pub mod layout;
pub mod scroll;
pub mod theme;
pub mod traits;
pub mod ui;

use crate::config::Config;
use crate::logging::LogBuffer;
use crate::search::{RepoSearch, SearchClient, SearchSession, SessionEvent};
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scroll::FocusablePanel;
use std::io::{self, Stdout};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

type Term = Terminal<CrosstermBackend<Stdout>>;

/// Terminal ownership guard
///
/// Entering switches the terminal to raw mode, the alternate screen and
/// mouse capture; dropping restores it, on error paths as well.
pub struct TerminalSession {
    terminal: Term,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;

        let setup = execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
            .context("Failed to setup terminal")
            .and_then(|()| {
                Terminal::new(CrosstermBackend::new(io::stdout()))
                    .context("Failed to create terminal")
            });

        match setup {
            Ok(terminal) => Ok(Self { terminal }),
            Err(e) => {
                let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
                let _ = disable_raw_mode();
                Err(e)
            }
        }
    }

    pub fn terminal(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        );
        let _ = self.terminal.show_cursor();
    }
}

/// Run the TUI
///
/// `initial_query` pre-fills the input box and goes through the normal
/// debounce like typed text.
pub async fn run_tui(
    config: Config,
    log_buffer: LogBuffer,
    initial_query: Option<String>,
) -> Result<()> {
    let client = SearchClient::new(&config.search.api_url)?;
    let (session, mut session_rx) = SearchSession::new(
        Arc::new(client),
        config.search.debounce(),
        config.search.scroll_trigger,
    );

    let mut app = App::new(session, &config, log_buffer);
    if let Some(query) = initial_query.filter(|q| !q.is_empty()) {
        app.set_query(query);
    }

    let mut terminal_session = TerminalSession::enter()?;
    tracing::info!("TUI started against {}", config.search.api_url);

    let result = run_event_loop(terminal_session.terminal(), &mut app, &mut session_rx).await;

    drop(terminal_session);
    tracing::info!("TUI stopped");
    result
}

/// Main event loop
///
/// Waits on three sources at once and redraws after whichever fires:
/// 1. Terminal input (keys, mouse wheel)
/// 2. A redraw tick (advances spinners, expires toasts)
/// 3. Search session events (debounce fires, request completions)
async fn run_event_loop<S: RepoSearch>(
    terminal: &mut Term,
    app: &mut App<S>,
    session_rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| ui::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(session_event) = session_rx.recv() => {
                app.handle_session_event(session_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: release bookkeeping → global → query editing → focused panel
fn handle_key_event<S: RepoSearch>(app: &mut App<S>, key_event: KeyEvent) {
    match key_event.kind {
        KeyEventKind::Release => {
            app.handle_key_release(key_event.code);
            return;
        }
        KeyEventKind::Press => {}
        _ => return,
    }

    if handle_global_keys(app, &key_event) {
        return;
    }

    let key = key_event.code;
    match key {
        KeyCode::Enter => {
            if app.handle_key_press(key) && app.is_focused(FocusablePanel::Results) {
                app.open_selected();
            }
        }
        KeyCode::Tab | KeyCode::BackTab => {
            if app.handle_key_press(key) {
                app.focus_next();
            }
        }
        KeyCode::Backspace => app.pop_char(),
        KeyCode::Char(c)
            if !key_event
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            app.push_char(c);
        }
        KeyCode::Up
        | KeyCode::Down
        | KeyCode::PageUp
        | KeyCode::PageDown
        | KeyCode::Home
        | KeyCode::End => {
            if app.handle_key_press(key) {
                app.dispatch_to_focused(key_event);
            }
        }
        _ => {}
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys<S: RepoSearch>(app: &mut App<S>, key_event: &KeyEvent) -> bool {
    let key = key_event.code;
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key {
        KeyCode::Esc => {
            if app.handle_key_press(key) {
                app.should_quit = true;
            }
            true
        }
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('u') if ctrl => {
            app.clear_query();
            true
        }
        KeyCode::Char('l') if ctrl => {
            if app.handle_key_press(key) {
                app.toggle_logs();
            }
            true
        }
        KeyCode::Char('y') if ctrl => {
            if app.handle_key_press(key) {
                app.copy_selected_url();
            }
            true
        }
        _ => false,
    }
}

/// Handle mouse input: the wheel scrolls the focused panel
fn handle_mouse_event<S: RepoSearch>(app: &mut App<S>, mouse_event: MouseEvent) {
    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    app.dispatch_to_focused(KeyEvent::new(code, KeyModifiers::NONE));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::testing::{page_of, FakeSearch};
    use crate::search::ScrollTrigger;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Press and release, so the next press of the same key triggers again
    fn tap<S: RepoSearch>(app: &mut App<S>, key: KeyEvent) {
        handle_key_event(app, key);
        handle_key_event(
            app,
            KeyEvent::new_with_kind(key.code, key.modifiers, KeyEventKind::Release),
        );
    }

    fn type_text<S: RepoSearch>(app: &mut App<S>, text: &str) {
        for c in text.chars() {
            handle_key_event(app, press(KeyCode::Char(c)));
        }
    }

    fn test_app(
        backend: Arc<FakeSearch>,
    ) -> (App<FakeSearch>, mpsc::UnboundedReceiver<SessionEvent>) {
        let (session, rx) =
            SearchSession::new(backend, Duration::from_millis(500), ScrollTrigger::Exact);
        let app = App::new(session, &Config::default(), LogBuffer::new());
        (app, rx)
    }

    /// Deliver session events until nothing is loading or debouncing
    async fn settle(app: &mut App<FakeSearch>, rx: &mut mpsc::UnboundedReceiver<SessionEvent>) {
        while app.session.is_debouncing() || app.session.state().is_loading() {
            let event = rx.recv().await.expect("event channel closed");
            app.handle_session_event(event);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn typing_edits_query_and_searches_once() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut app, mut rx) = test_app(backend.clone());

        type_text(&mut app, "reacx");
        handle_key_event(&mut app, press(KeyCode::Backspace));
        type_text(&mut app, "t");
        assert_eq!(app.session.query(), "react");

        settle(&mut app, &mut rx).await;
        assert_eq!(backend.calls(), vec![("react".to_string(), 1)]);
        assert_eq!(app.session.state().results().len(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn end_key_on_results_fetches_next_page() {
        let backend = FakeSearch::new(|_, page| match page {
            1 => page_of(10, 1),
            _ => page_of(5, page),
        });
        let (mut app, mut rx) = test_app(backend.clone());

        type_text(&mut app, "react");
        settle(&mut app, &mut rx).await;

        // What the renderer would do with a 6-row list
        app.results_panel.sync(10, 6);
        handle_key_event(&mut app, press(KeyCode::End));
        assert!(app.session.state().is_loading());
        settle(&mut app, &mut rx).await;

        assert_eq!(app.session.state().results().len(), 15);
        assert_eq!(app.session.state().cursor().get(), 3);
        assert_eq!(app.results_panel.selected, Some(9));
    }

    #[tokio::test(start_paused = true)]
    async fn wheel_scroll_away_from_bottom_does_not_fetch() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut app, mut rx) = test_app(backend.clone());

        type_text(&mut app, "react");
        settle(&mut app, &mut rx).await;
        app.results_panel.sync(10, 6);

        handle_mouse_event(
            &mut app,
            MouseEvent {
                kind: MouseEventKind::ScrollDown,
                column: 0,
                row: 0,
                modifiers: KeyModifiers::NONE,
            },
        );
        assert!(!app.session.state().is_loading());
        assert_eq!(backend.calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn keys_that_leave_the_view_still_do_not_fetch() {
        // Page 1 has ten repositories, every later page is empty
        let backend = FakeSearch::new(|_, page| match page {
            1 => page_of(10, 1),
            _ => page_of(0, page),
        });
        let (mut app, mut rx) = test_app(backend.clone());

        type_text(&mut app, "react");
        settle(&mut app, &mut rx).await;
        app.results_panel.sync(10, 6);

        handle_key_event(&mut app, press(KeyCode::End));
        settle(&mut app, &mut rx).await;
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(app.session.state().cursor().get(), 3);

        // Selection moves up inside the bottom screenful; the view does not
        let offset = app.results_panel.metrics().offset;
        handle_key_event(&mut app, press(KeyCode::Up));
        assert_eq!(app.results_panel.selected, Some(8));
        assert_eq!(app.results_panel.metrics().offset, offset);

        assert!(!app.session.state().is_loading());
        assert_eq!(backend.calls().len(), 2);
        assert_eq!(app.session.state().cursor().get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn down_on_a_short_list_asks_for_more() {
        let backend = FakeSearch::new(|_, page| page_of(3, page));
        let (mut app, mut rx) = test_app(backend.clone());

        type_text(&mut app, "react");
        settle(&mut app, &mut rx).await;
        app.results_panel.sync(3, 6);

        // Up has nowhere to go and is not a request for more
        handle_key_event(&mut app, press(KeyCode::Up));
        assert!(!app.session.state().is_loading());

        handle_key_event(&mut app, press(KeyCode::Down));
        assert!(app.session.state().is_loading());
        settle(&mut app, &mut rx).await;

        assert_eq!(
            backend.calls(),
            vec![("react".to_string(), 1), ("react".to_string(), 2)]
        );
        assert_eq!(app.session.state().results().len(), 6);
    }

    #[tokio::test(start_paused = true)]
    async fn ctrl_u_clears_query_and_results() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut app, mut rx) = test_app(backend);

        type_text(&mut app, "react");
        settle(&mut app, &mut rx).await;
        assert_eq!(app.session.state().results().len(), 10);

        handle_key_event(&mut app, ctrl('u'));
        assert_eq!(app.session.query(), "");
        assert!(app.session.state().results().is_empty());
        assert!(!app.session.is_debouncing());
    }

    #[tokio::test(start_paused = true)]
    async fn tab_needs_visible_logs_and_ctrl_l_toggles() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut app, _rx) = test_app(backend);

        tap(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focused, FocusablePanel::Results);

        tap(&mut app, ctrl('l'));
        assert!(app.show_logs);
        tap(&mut app, press(KeyCode::Tab));
        assert_eq!(app.focused, FocusablePanel::Logs);

        // Hiding the panel hands focus back to results
        tap(&mut app, ctrl('l'));
        assert!(!app.show_logs);
        assert_eq!(app.focused, FocusablePanel::Results);
    }

    #[tokio::test(start_paused = true)]
    async fn esc_and_ctrl_c_quit() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));

        let (mut app, _rx) = test_app(backend.clone());
        handle_key_event(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit);

        let (mut app, _rx) = test_app(backend);
        handle_key_event(&mut app, ctrl('c'));
        assert!(app.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn ctrl_letters_do_not_reach_the_query() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut app, _rx) = test_app(backend);

        handle_key_event(&mut app, ctrl('y'));
        handle_key_event(&mut app, KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
        assert_eq!(app.session.query(), "");
    }
}
