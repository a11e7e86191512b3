//! Results panel component
//!
//! One row per repository: name, stars, forks. Owns its scroll position and
//! selection; the result items themselves live in the search session and are
//! passed in at render time.
//!
//! App turns a handled key into a scroll-bottom check built from
//! [`ResultsPanel::metrics`] when the view moved or was pushed past its end.

use super::formatters::{format_compact_number, format_number, truncate_to_width};
use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::search::{ResultItem, ScrollMetrics};
use crate::tui::layout::Breakpoint;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{
    Component, ComponentId, Handled, Interactive, RenderContext, Scrollable, Selectable,
};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// What to show when there are no rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyHint {
    /// Nothing typed yet
    NoQuery,
    /// Query typed, waiting for the first page
    Searching,
    /// Query answered with zero items
    NoResults,
}

pub struct ResultsPanel {
    scroll: ScrollState,

    /// Highlighted row (None until the user navigates)
    pub selected: Option<usize>,

    /// Item count as of the last sync
    item_count: usize,
}

impl ResultsPanel {
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::manual(),
            selected: None,
            item_count: 0,
        }
    }

    /// Sync with the current result list and viewport (call each frame)
    pub fn sync(&mut self, item_count: usize, viewport_height: usize) {
        self.item_count = item_count;
        self.scroll.update_dimensions(item_count, viewport_height);

        if let Some(idx) = self.selected {
            if idx >= item_count {
                self.selected = item_count.checked_sub(1);
            }
        }
    }

    /// The list was replaced: back to the top, no selection
    pub fn reset(&mut self) {
        self.selected = None;
        self.item_count = 0;
        self.scroll.reset();
    }

    /// Position for the scroll-bottom predicate
    pub fn metrics(&self) -> ScrollMetrics {
        self.scroll.metrics()
    }

    /// Whether the view sits at its last offset (always true for a short list)
    pub fn view_at_end(&self) -> bool {
        self.scroll.at_bottom()
    }

    /// Render rows, or a hint when the list is empty
    pub fn render_with_items(
        &self,
        f: &mut Frame,
        area: Rect,
        items: &[ResultItem],
        empty: EmptyHint,
        ctx: &RenderContext,
    ) {
        let theme = ctx.theme;
        let focused = self.is_focused(ctx);

        let title = if items.is_empty() {
            " Repositories ".to_string()
        } else {
            format!(" Repositories ({}) ", items.len())
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(if focused {
                theme.panel_results
            } else {
                theme.border
            }))
            .title(title);

        if items.is_empty() {
            let hint = match empty {
                EmptyHint::NoQuery => "Type to search repositories",
                EmptyHint::Searching => "Searching…",
                EmptyHint::NoResults => "No repositories found",
            };
            let paragraph = Paragraph::new(hint)
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted))
                .block(block);
            f.render_widget(paragraph, area);
            return;
        }

        // Borders plus one column for the scrollbar
        let row_width = area.width.saturating_sub(3) as usize;
        let compact = !Breakpoint::from_width(area.width).at_least(Breakpoint::Normal);

        let (start, end) = self.scroll.visible_range();
        let rows: Vec<ListItem> = items[start..end]
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let line = result_line(item, row_width, compact, ctx);
                if focused && self.selected == Some(start + i) {
                    ListItem::new(line).style(
                        Style::default()
                            .fg(theme.selection_fg)
                            .bg(theme.selection)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ListItem::new(line)
                }
            })
            .collect();

        f.render_widget(List::new(rows).block(block), area);
        render_scrollbar(f, area, &self.scroll, ScrollbarStyle::Arrows);
    }
}

impl Default for ResultsPanel {
    fn default() -> Self {
        Self::new()
    }
}

/// `full_name ★ watchers ⑂ forks`, name truncated to fit the row
fn result_line(item: &ResultItem, width: usize, compact: bool, ctx: &RenderContext) -> Line<'static> {
    let theme = ctx.theme;
    let fmt: fn(u64) -> String = if compact {
        format_compact_number
    } else {
        format_number
    };
    let stars = format!("★ {}", fmt(item.watchers));
    let forks = format!("⑂ {}", fmt(item.forks));

    // " name  ★ n  ⑂ n"
    let stats_width = stars.width() + forks.width() + 4;
    let name_width = width.saturating_sub(stats_width + 1);
    let name = truncate_to_width(&item.full_name, name_width);
    let gap = width
        .saturating_sub(1 + name.width() + stats_width)
        .max(1);

    Line::from(vec![
        Span::raw(" "),
        Span::styled(name, Style::default().fg(theme.repo_name)),
        Span::raw(" ".repeat(gap)),
        Span::styled(stars, Style::default().fg(theme.stars)),
        Span::raw("  "),
        Span::styled(forks, Style::default().fg(theme.forks)),
    ])
}

impl Component for ResultsPanel {
    fn id(&self) -> ComponentId {
        ComponentId::Results
    }
}

impl Scrollable for ResultsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Selectable for ResultsPanel {
    fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    fn select(&mut self, index: usize) {
        self.selected = Some(index.min(self.item_count.saturating_sub(1)));
    }

    fn item_count(&self) -> usize {
        self.item_count
    }
}

impl Interactive for ResultsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up => self.select_previous(),
            KeyCode::Down => self.select_next(),
            KeyCode::PageUp => self.select_page_up(),
            KeyCode::PageDown => self.select_page_down(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            _ => return Handled::No,
        }
        Handled::Yes
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓:select  Enter:open  ^Y:copy url")
    }
}
