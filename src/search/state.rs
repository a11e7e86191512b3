//! Search state: the result list plus its status flags
//!
//! Pure data - no I/O, no timers. The session decides *when* to call these
//! methods; this module decides *what* each event does to the state:
//!
//! | event                    | results   | cursor     | error          |
//! |--------------------------|-----------|------------|----------------|
//! | new query -> Items       | replaced  | 2          | -              |
//! | new query -> Failed      | cleared   | 1          | message        |
//! | next page -> Items       | appended  | +1         | -              |
//! | next page -> Failed      | unchanged | unchanged  | message        |
//! | any -> Unrecognized      | unchanged | unchanged  | -              |
//!
//! Every completion clears `loading`, whichever request it belongs to.

use super::models::{ResultItem, SearchOutcome};
use super::pagination::PageCursor;

/// Which path issued a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Debounced query: page 1, replaces results
    NewQuery,
    /// Scroll-triggered: page N, appends results
    NextPage,
}

/// A finished request, delivered back to the event loop
#[derive(Debug, Clone)]
pub struct Completion {
    pub kind: FetchKind,
    /// Query the request was issued for (may since have been superseded)
    pub query: String,
    pub page: u32,
    pub outcome: SearchOutcome,
}

/// Result list, page cursor, and status flags
#[derive(Debug, Default)]
pub struct SearchState {
    results: Vec<ResultItem>,
    cursor: PageCursor,
    loading: bool,
    error: String,
}

impl SearchState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Results in display order
    pub fn results(&self) -> &[ResultItem] {
        &self.results
    }

    /// Page number the next scroll fetch will request
    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    /// True while a request is in flight
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Error banner text (empty = no error)
    pub fn error_message(&self) -> &str {
        &self.error
    }

    pub fn has_error(&self) -> bool {
        !self.error.is_empty()
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    /// Query became empty: no search active
    pub fn clear_results(&mut self) {
        self.results.clear();
        self.cursor.reset();
    }

    /// Debounced query fired: page 1 is about to be requested
    pub fn begin_query(&mut self) {
        self.cursor.reset();
        self.loading = true;
    }

    /// Scroll fetch admitted: returns the page to request
    pub fn begin_next_page(&mut self) -> u32 {
        self.loading = true;
        self.cursor.get()
    }

    /// Fold a finished request into the state
    pub fn apply(&mut self, completion: Completion) {
        self.loading = false;

        match (completion.kind, completion.outcome) {
            (FetchKind::NewQuery, SearchOutcome::Items(items)) => {
                self.results = items;
                self.cursor.after_first_page();
            }
            (FetchKind::NewQuery, SearchOutcome::Failed(message)) => {
                self.results.clear();
                self.cursor.reset();
                self.error = message;
            }
            (FetchKind::NextPage, SearchOutcome::Items(items)) => {
                self.results.extend(items);
                self.cursor.advance();
            }
            (FetchKind::NextPage, SearchOutcome::Failed(message)) => {
                self.error = message;
            }
            (_, SearchOutcome::Unrecognized) => {}
        }
    }
}
