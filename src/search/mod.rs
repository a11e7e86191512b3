// Search module - everything between a keystroke and a rendered result list
//
// Pieces:
// - models: ResultItem and the parsed SearchOutcome
// - client: HTTP client for the repository-search endpoint (RepoSearch trait)
// - debounce: cancel-and-reschedule timer for query input
// - pagination: page cursor and the scroll-bottom predicate
// - state: result list + status flags, and how each outcome mutates them
// - session: owns all of the above and turns UI events into requests
//
// Data flow:
//   keystroke -> Session::set_query -> Debouncer -> SessionEvent::DebounceFired
//     -> spawn RepoSearch::search(q, 1) -> SessionEvent::Completed -> replace
//   scroll    -> Session::on_scroll -> spawn RepoSearch::search(q, n)
//     -> SessionEvent::Completed -> append

pub mod client;
pub mod debounce;
pub mod models;
pub mod pagination;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{RepoSearch, SearchClient};
pub use models::{ResultItem, SearchOutcome};
pub use pagination::{ScrollMetrics, ScrollTrigger};
pub use session::{SearchSession, SessionEvent};
pub use state::SearchState;
