// Color themes for the TUI
//
// Two built-in themes, picked by name from config. Components never
// hardcode colors; they read them from the Theme passed in at render time.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    // ─── UI Element Colors ───────────────────────────────────
    pub title: Color,
    pub status_bar: Color,
    pub border: Color,
    pub highlight: Color,

    // ─── Panel Identity Colors ───────────────────────────────
    pub panel_results: Color,
    pub panel_logs: Color,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,

    // ─── Selection Colors ────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Result Rows ─────────────────────────────────────────
    pub repo_name: Color,
    pub stars: Color,
    pub forks: Color,

    // ─── Status Colors ───────────────────────────────────────
    pub loading: Color,
    pub error: Color,
    pub warning: Color,
    pub muted: Color,

    // ─── Border Style ────────────────────────────────────────
    pub border_type: BorderType,
}

impl Theme {
    /// Look up a built-in theme; unknown names fall back to dark
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "light" => Self::light(),
            "dark" => Self::dark(),
            other => {
                tracing::warn!("Unknown theme {:?}, using dark", other);
                Self::dark()
            }
        }
    }

    pub fn dark() -> Self {
        Self {
            title: Color::Cyan,
            status_bar: Color::Gray,
            border: Color::DarkGray,
            highlight: Color::Cyan,
            panel_results: Color::LightBlue,
            panel_logs: Color::Magenta,
            background: Color::Reset,
            foreground: Color::White,
            selection: Color::Rgb(40, 60, 90),
            selection_fg: Color::White,
            repo_name: Color::LightCyan,
            stars: Color::Yellow,
            forks: Color::Green,
            loading: Color::Cyan,
            error: Color::LightRed,
            warning: Color::Yellow,
            muted: Color::DarkGray,
            border_type: BorderType::Rounded,
        }
    }

    pub fn light() -> Self {
        Self {
            title: Color::Blue,
            status_bar: Color::DarkGray,
            border: Color::Gray,
            highlight: Color::Blue,
            panel_results: Color::Blue,
            panel_logs: Color::Magenta,
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Black,
            selection: Color::Rgb(200, 220, 245),
            selection_fg: Color::Black,
            repo_name: Color::Blue,
            stars: Color::Rgb(160, 110, 0),
            forks: Color::Rgb(0, 120, 60),
            loading: Color::Blue,
            error: Color::Red,
            warning: Color::Rgb(180, 100, 0),
            muted: Color::Gray,
            border_type: BorderType::Plain,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
