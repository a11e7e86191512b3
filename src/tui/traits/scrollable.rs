//! Scrollable and Selectable traits
//!
//! Panels own a `ScrollState` and expose it here; the navigation methods
//! come for free.

use super::Component;
use crate::tui::scroll::ScrollState;

/// Trait for components with scrollable content
///
/// Implementors only provide `scroll_state()` and `scroll_state_mut()`.
pub trait Scrollable: Component {
    /// Get immutable reference to scroll state
    fn scroll_state(&self) -> &ScrollState;

    /// Get mutable reference to scroll state
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }
}

/// Extension trait for scrollable content with one selected item
///
/// The default navigation keeps the selection inside the viewport.
pub trait Selectable: Scrollable {
    /// Get the currently selected item index
    fn selected_index(&self) -> Option<usize>;

    /// Set the selected item index (clamped by the implementor)
    fn select(&mut self, index: usize);

    /// Get total number of selectable items
    fn item_count(&self) -> usize;

    /// Select the next item (with bounds checking)
    fn select_next(&mut self) {
        let next = match self.selected_index() {
            Some(current) if current + 1 < self.item_count() => current + 1,
            Some(current) => current,
            None if self.item_count() > 0 => 0,
            None => return,
        };
        self.select(next);
        self.scroll_state_mut().ensure_visible(next);
    }

    /// Select the previous item (with bounds checking)
    fn select_previous(&mut self) {
        let prev = match self.selected_index() {
            Some(current) => current.saturating_sub(1),
            None if self.item_count() > 0 => 0,
            None => return,
        };
        self.select(prev);
        self.scroll_state_mut().ensure_visible(prev);
    }

    /// Select the first item
    fn select_first(&mut self) {
        self.scroll_to_top();
        if self.item_count() > 0 {
            self.select(0);
        }
    }

    /// Select the last item
    fn select_last(&mut self) {
        self.scroll_to_bottom();
        let count = self.item_count();
        if count > 0 {
            self.select(count - 1);
        }
    }

    /// Move the selection by a viewport's worth of rows
    fn select_page_down(&mut self) {
        self.page_down();
        let count = self.item_count();
        if count == 0 {
            return;
        }
        let page = self.scroll_state().viewport().max(1);
        let target = self
            .selected_index()
            .map_or(self.scroll_state().offset(), |i| i + page)
            .min(count - 1);
        self.select(target);
        self.scroll_state_mut().ensure_visible(target);
    }

    fn select_page_up(&mut self) {
        self.page_up();
        if self.item_count() == 0 {
            return;
        }
        let page = self.scroll_state().viewport().max(1);
        let target = self
            .selected_index()
            .map_or(self.scroll_state().offset(), |i| i.saturating_sub(page));
        self.select(target);
        self.scroll_state_mut().ensure_visible(target);
    }
}
