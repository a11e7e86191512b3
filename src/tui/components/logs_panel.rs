//! Logs panel component
//!
//! Shows the tail of the in-memory log buffer. Follows new entries until the
//! user scrolls or selects; End goes back to following.

use super::formatters::truncate_to_width;
use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::logging::{LogEntry, LogLevel};
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::ScrollState;
use crate::tui::theme::Theme;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub struct LogsPanel {
    /// Scroll state (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Selected log entry index (None = following)
    pub selected: Option<usize>,

    /// Entry count as of the last sync
    entry_count: usize,
}

impl LogsPanel {
    /// Create a new logs panel with auto-follow enabled
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            selected: None,
            entry_count: 0,
        }
    }

    /// Sync with the current log entries (call each frame)
    pub fn sync_entries(&mut self, entries: &[LogEntry], viewport_height: usize) {
        self.entry_count = entries.len();
        self.scroll.update_dimensions(entries.len(), viewport_height);

        if let Some(idx) = self.selected {
            if idx >= entries.len() {
                self.selected = entries.len().checked_sub(1);
            }
        }
    }

    pub fn render_with_entries(
        &self,
        f: &mut Frame,
        area: Rect,
        entries: &[LogEntry],
        ctx: &RenderContext,
    ) {
        let theme = ctx.theme;
        let focused = self.is_focused(ctx);
        let show_target = Breakpoint::from_width(area.width).at_least(Breakpoint::Wide);
        let width = area.width.saturating_sub(3) as usize;

        let (start, end) = self.scroll.visible_range();
        let items: Vec<ListItem> = entries[start..end]
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                let text = truncate_to_width(&format_log_entry(entry, show_target), width);
                let style = if focused && self.selected == Some(start + i) {
                    Style::default()
                        .fg(theme.selection_fg)
                        .bg(theme.selection)
                        .add_modifier(Modifier::BOLD)
                } else {
                    log_level_style(entry.level, theme)
                };
                ListItem::new(text).style(style)
            })
            .collect();

        let title = if self.selected.is_some() && focused {
            " System Logs [select] "
        } else if self.scroll.auto_follow {
            " System Logs "
        } else {
            " System Logs [scroll] "
        };

        let list = List::new(items).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(if focused {
                    theme.panel_logs
                } else {
                    theme.border
                }))
                .title(title),
        );

        f.render_widget(list, area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Minimal);
    }

    /// Stop following and start selecting from the newest entry
    fn start_selection(&mut self) {
        self.scroll.auto_follow = false;
        if self.selected.is_none() && self.entry_count > 0 {
            let last = self.entry_count - 1;
            self.selected = Some(last);
            self.scroll.ensure_visible(last);
        }
    }
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LogsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Logs
    }
}

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for LogsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.entry_count.saturating_sub(1)));
    }

    fn item_count(&self) -> usize {
        self.entry_count
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up => {
                if self.selected.is_none() {
                    self.start_selection();
                } else {
                    self.select_previous();
                }
            }
            KeyCode::Down => {
                if self.selected.is_none() {
                    self.start_selection();
                } else {
                    self.select_next();
                }
            }
            KeyCode::PageUp => {
                self.start_selection();
                self.select_page_up();
            }
            KeyCode::PageDown => {
                self.start_selection();
                self.select_page_down();
            }
            KeyCode::Home => {
                self.start_selection();
                self.select_first();
            }
            KeyCode::End => {
                self.selected = None;
                self.scroll_to_bottom();
                self.scroll.auto_follow = true;
            }
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  End:follow")
    }
}

/// `[HH:MM:SS] LEVEL message`, with the target on wide terminals
fn format_log_entry(entry: &LogEntry, show_target: bool) -> String {
    if show_target {
        format!(
            "[{}] {} {}: {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.target,
            entry.message
        )
    } else {
        format!(
            "[{}] {} {}",
            entry.timestamp.format("%H:%M:%S"),
            entry.level.as_str(),
            entry.message
        )
    }
}

fn log_level_style(level: LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default()
            .fg(theme.error)
            .add_modifier(Modifier::BOLD),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}
