// Scroll state for TUI panels
//
// Each panel owns a ScrollState; App only routes input and renders.
// - Results list: manual scrolling, follows the selection
// - Logs panel: auto-follow so new entries stay in view
//
// The results list reports its position as ScrollMetrics after every scroll
// input; that is what drives next-page fetches.

use crate::search::ScrollMetrics;

/// Scroll state for a single panel
///
/// Owns all state needed for scrolling: position, content size, viewport size.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (row index at top of viewport)
    offset: usize,

    /// Total number of rows in content
    total: usize,

    /// Number of rows visible in viewport
    viewport: usize,

    /// Whether to keep the view pinned to the bottom as content grows
    /// User scrolling up disables this; scrolling to bottom re-enables
    pub auto_follow: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Create scroll state with auto-follow disabled (manual scroll)
    pub fn manual() -> Self {
        Self {
            auto_follow: false,
            ..Self::new()
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// Scroll up by a page
    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    /// Jump to bottom
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Adjust the offset so `index` is inside the viewport
    pub fn ensure_visible(&mut self, index: usize) {
        if index < self.offset {
            self.offset = index;
        } else if self.viewport > 0 && index >= self.offset + self.viewport {
            self.offset = index + 1 - self.viewport;
        }
        self.offset = self.offset.min(self.max_offset());
    }

    /// Forget position and size (content was replaced)
    pub fn reset(&mut self) {
        self.offset = 0;
        self.total = 0;
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Whether the view sits at the last possible offset
    pub fn at_bottom(&self) -> bool {
        self.offset >= self.max_offset()
    }

    /// Current position for the scroll-bottom predicate
    pub fn metrics(&self) -> ScrollMetrics {
        ScrollMetrics::new(self.offset, self.viewport, self.total)
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// Panels that can be focused for input routing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusablePanel {
    /// Search results (default focus)
    #[default]
    Results,
    /// System logs panel
    Logs,
}

impl FocusablePanel {
    /// Tab order; Logs is skipped while the panel is hidden
    pub fn next(self, logs_visible: bool) -> Self {
        match self {
            Self::Results if logs_visible => Self::Logs,
            _ => Self::Results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::ScrollTrigger;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        assert!(scroll.auto_follow);

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_page_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.page_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 10);
    }

    #[test]
    fn test_manual_scroll_mode_stays_put() {
        let mut scroll = ScrollState::manual();

        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 0);

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_page_down_clamps_at_bottom() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(12, 10);
        assert!(!scroll.at_bottom());

        scroll.page_down();
        scroll.page_down();
        assert_eq!(scroll.offset(), 2);
        assert!(scroll.at_bottom());

        // Content that fits is always at its end
        scroll.update_dimensions(4, 10);
        assert!(scroll.at_bottom());
    }

    #[test]
    fn test_ensure_visible() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(30, 10);

        scroll.ensure_visible(9);
        assert_eq!(scroll.offset(), 0);

        scroll.ensure_visible(10);
        assert_eq!(scroll.offset(), 1);

        scroll.ensure_visible(29);
        assert_eq!(scroll.offset(), 20);

        scroll.ensure_visible(3);
        assert_eq!(scroll.offset(), 3);
    }

    #[test]
    fn test_metrics_reach_bottom_exactly() {
        let mut scroll = ScrollState::manual();
        scroll.update_dimensions(10, 8);
        assert!(!scroll.metrics().at_bottom(ScrollTrigger::Exact));

        scroll.page_down();
        assert_eq!(scroll.metrics(), ScrollMetrics::new(2, 8, 10));
        assert!(scroll.metrics().at_bottom(ScrollTrigger::Exact));
    }

    #[test]
    fn test_focus_cycles_only_when_logs_visible() {
        assert_eq!(FocusablePanel::Results.next(false), FocusablePanel::Results);
        assert_eq!(FocusablePanel::Results.next(true), FocusablePanel::Logs);
        assert_eq!(FocusablePanel::Logs.next(true), FocusablePanel::Results);
    }
}
