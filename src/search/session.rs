// Search session - the controller between UI events and the search backend
//
// Owns the current query, the debouncer and the SearchState. Work that takes
// time (debounce timers, HTTP requests) runs in spawned tokio tasks which
// report back as SessionEvents on one channel; the event loop feeds those
// back into handle_event(). All state mutation therefore happens on the
// event loop, in arrival order.
//
// Ordering rules:
// - The debounced path does not look at `loading`: a fired query is always
//   requested, even while a page fetch is in flight.
// - The scroll path reads the current `loading` flag and backs off.
// - In-flight requests are never cancelled. A response for a superseded
//   query is still applied when it arrives (last write wins).

use super::client::RepoSearch;
use super::debounce::Debouncer;
use super::pagination::{ScrollMetrics, ScrollTrigger};
use super::state::{Completion, FetchKind, SearchState};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Messages from background tasks to the event loop
#[derive(Debug)]
pub enum SessionEvent {
    /// Debounce timer expired for the query typed at `generation`
    DebounceFired { generation: u64, query: String },
    /// A search request finished
    Completed(Completion),
}

/// Search controller, generic over the backend
pub struct SearchSession<S: RepoSearch> {
    backend: Arc<S>,
    query: String,
    state: SearchState,
    debouncer: Debouncer<SessionEvent>,
    /// Bumped on every query edit; stale debounce fires are dropped
    generation: u64,
    trigger: ScrollTrigger,
    events_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl<S: RepoSearch> SearchSession<S> {
    /// Create a session and the receiver the event loop must drain
    pub fn new(
        backend: Arc<S>,
        debounce: Duration,
        trigger: ScrollTrigger,
    ) -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let session = Self {
            backend,
            query: String::new(),
            state: SearchState::new(),
            debouncer: Debouncer::new(debounce, events_tx.clone()),
            generation: 0,
            trigger,
            events_tx,
        };
        (session, events_rx)
    }

    /// Current query text
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    /// Whether a debounced query is waiting to fire
    pub fn is_debouncing(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// The input box changed
    ///
    /// Clears the error banner. An empty query cancels any pending fire and
    /// empties the result list without issuing a request; anything else is
    /// (re)scheduled through the debouncer.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.generation += 1;
        self.state.clear_error();

        if self.query.is_empty() {
            self.debouncer.cancel();
            self.state.clear_results();
            return;
        }

        self.debouncer.schedule(SessionEvent::DebounceFired {
            generation: self.generation,
            query: self.query.clone(),
        });
    }

    /// Feed a background event back into the session
    pub fn handle_event(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::DebounceFired { generation, query } => {
                if generation != self.generation {
                    tracing::trace!("Dropping stale debounce fire for {:?}", query);
                    return;
                }
                tracing::debug!(
                    "Query settled after {:?}: {:?}",
                    self.debouncer.delay(),
                    query
                );
                self.state.begin_query();
                self.spawn_fetch(query, 1, FetchKind::NewQuery);
            }
            SessionEvent::Completed(completion) => {
                if completion.query != self.query {
                    tracing::debug!(
                        "Applying page {} of superseded query {:?} (current {:?})",
                        completion.page,
                        completion.query,
                        self.query
                    );
                }
                self.state.apply(completion);
            }
        }
    }

    /// The result list scrolled
    ///
    /// Returns true if a next-page request was issued.
    pub fn on_scroll(&mut self, metrics: ScrollMetrics) -> bool {
        if !metrics.at_bottom(self.trigger) {
            return false;
        }

        self.state.clear_error();

        if self.query.is_empty() || self.state.is_loading() {
            return false;
        }

        let page = self.state.begin_next_page();
        tracing::debug!("Reached bottom, fetching page {} of {:?}", page, self.query);
        self.spawn_fetch(self.query.clone(), page, FetchKind::NextPage);
        true
    }

    fn spawn_fetch(&self, query: String, page: u32, kind: FetchKind) {
        let backend = Arc::clone(&self.backend);
        let tx = self.events_tx.clone();

        tokio::spawn(async move {
            let outcome = backend.search(&query, page).await;
            let _ = tx.send(SessionEvent::Completed(Completion {
                kind,
                query,
                page,
                outcome,
            }));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::models::SearchOutcome;
    use crate::search::testing::{page_of, FakeSearch};

    fn session_with(
        backend: Arc<FakeSearch>,
    ) -> (
        SearchSession<FakeSearch>,
        mpsc::UnboundedReceiver<SessionEvent>,
    ) {
        SearchSession::new(backend, Duration::from_millis(500), ScrollTrigger::Exact)
    }

    /// Pump one event from the channel into the session
    async fn pump(
        session: &mut SearchSession<FakeSearch>,
        rx: &mut mpsc::UnboundedReceiver<SessionEvent>,
    ) {
        let event = rx.recv().await.expect("event channel closed");
        session.handle_event(event);
    }

    /// A viewport scrolled exactly to the bottom of `rows` rows
    fn bottom_of(rows: usize) -> ScrollMetrics {
        ScrollMetrics::new(rows.saturating_sub(5), 5, rows)
    }

    #[tokio::test(start_paused = true)]
    async fn rapid_typing_issues_one_request_for_last_value() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut session, mut rx) = session_with(backend.clone());

        session.set_query("a");
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.set_query("ab");
        tokio::time::sleep(Duration::from_millis(100)).await;
        session.set_query("abc");

        pump(&mut session, &mut rx).await; // debounce fire
        assert!(session.state().is_loading());
        pump(&mut session, &mut rx).await; // completion

        assert_eq!(backend.calls(), vec![("abc".to_string(), 1)]);
        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn query_then_scroll_scenario() {
        let backend = FakeSearch::new(|_, page| match page {
            1 => page_of(10, 1),
            _ => page_of(5, page),
        });
        let (mut session, mut rx) = session_with(backend.clone());

        session.set_query("react");
        pump(&mut session, &mut rx).await;
        pump(&mut session, &mut rx).await;

        assert_eq!(session.state().results().len(), 10);
        assert_eq!(session.state().cursor().get(), 2);

        assert!(session.on_scroll(bottom_of(10)));
        assert!(session.state().is_loading());
        pump(&mut session, &mut rx).await;

        assert_eq!(session.state().results().len(), 15);
        assert_eq!(session.state().cursor().get(), 3);
        assert_eq!(
            backend.calls(),
            vec![("react".to_string(), 1), ("react".to_string(), 2)]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn empty_query_issues_nothing_and_clears_results() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut session, mut rx) = session_with(backend.clone());

        session.set_query("react");
        pump(&mut session, &mut rx).await;
        pump(&mut session, &mut rx).await;
        assert_eq!(session.state().results().len(), 10);

        // Type then erase before the debounce fires
        session.set_query("reactx");
        session.set_query("");
        assert!(session.state().results().is_empty());
        assert!(!session.is_debouncing());

        // Scrolling with no query does nothing either
        assert!(!session.on_scroll(bottom_of(0)));

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert!(rx.try_recv().is_err());
        assert_eq!(backend.calls(), vec![("react".to_string(), 1)]);
        assert!(session.state().results().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn rate_limit_message_becomes_error_banner() {
        let backend = FakeSearch::new(|_, _| SearchOutcome::Failed("rate limit exceeded".to_string()));
        let (mut session, mut rx) = session_with(backend);

        session.set_query("react");
        pump(&mut session, &mut rx).await;
        pump(&mut session, &mut rx).await;

        assert!(session.state().results().is_empty());
        assert_eq!(session.state().error_message(), "rate limit exceeded");

        // Editing the query clears the banner
        session.set_query("react2");
        assert!(!session.state().has_error());
    }

    #[tokio::test(start_paused = true)]
    async fn page_error_keeps_existing_results() {
        let backend = FakeSearch::new(|_, page| match page {
            1 => page_of(10, 1),
            _ => SearchOutcome::Failed("rate limit exceeded".to_string()),
        });
        let (mut session, mut rx) = session_with(backend);

        session.set_query("react");
        pump(&mut session, &mut rx).await;
        pump(&mut session, &mut rx).await;

        assert!(session.on_scroll(bottom_of(10)));
        pump(&mut session, &mut rx).await;

        assert_eq!(session.state().results().len(), 10);
        assert_eq!(session.state().error_message(), "rate limit exceeded");
        assert_eq!(session.state().cursor().get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn scroll_is_ignored_away_from_bottom_and_while_loading() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut session, mut rx) = session_with(backend.clone());

        session.set_query("react");
        pump(&mut session, &mut rx).await;
        pump(&mut session, &mut rx).await;

        // Not at the bottom
        assert!(!session.on_scroll(ScrollMetrics::new(0, 5, 10)));

        // First bottom hit goes out, second is blocked by loading
        assert!(session.on_scroll(bottom_of(10)));
        assert!(!session.on_scroll(bottom_of(10)));
        pump(&mut session, &mut rx).await;

        assert_eq!(backend.calls().len(), 2);
        assert_eq!(session.state().results().len(), 20);
    }

    #[tokio::test(start_paused = true)]
    async fn debounced_query_ignores_in_flight_page_fetch() {
        let backend = FakeSearch::new(|query, page| match (query, page) {
            ("vue", _) => page_of(3, 1),
            _ => page_of(10, page),
        });
        let (mut session, mut rx) = session_with(backend.clone());

        session.set_query("react");
        pump(&mut session, &mut rx).await;
        pump(&mut session, &mut rx).await;

        // Page fetch goes out, then a new query is typed before it lands
        assert!(session.on_scroll(bottom_of(10)));
        session.set_query("vue");

        // Drain: page-2 completion, debounce fire, vue completion
        while backend.calls().len() < 3 || session.state().is_loading() || session.is_debouncing() {
            pump(&mut session, &mut rx).await;
        }

        let calls = backend.calls();
        assert!(calls.contains(&("react".to_string(), 2)));
        assert!(calls.contains(&("vue".to_string(), 1)));
        assert_eq!(session.state().results().len(), 3);
        assert_eq!(session.state().cursor().get(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn at_or_past_trigger_fires_on_overshoot() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut session, mut rx) =
            SearchSession::new(backend, Duration::from_millis(500), ScrollTrigger::AtOrPast);

        session.set_query("react");
        pump(&mut session, &mut rx).await;
        pump(&mut session, &mut rx).await;

        assert!(session.on_scroll(ScrollMetrics::new(7, 5, 10)));
    }

    #[tokio::test(start_paused = true)]
    async fn late_response_after_clearing_query_still_lands() {
        let backend = FakeSearch::new(|_, page| page_of(10, page));
        let (mut session, mut rx) = session_with(backend.clone());

        session.set_query("react");
        pump(&mut session, &mut rx).await; // debounce fire, request in flight

        // Query erased while page 1 is on its way
        session.set_query("");
        assert!(session.state().results().is_empty());

        // In-flight requests are not cancelled: the last write wins
        pump(&mut session, &mut rx).await;
        assert_eq!(session.query(), "");
        assert_eq!(session.state().results().len(), 10);
        assert!(!session.state().is_loading());

        // Nothing new was requested for the empty query
        assert_eq!(backend.calls(), vec![("react".to_string(), 1)]);
    }
}
