//! Test doubles for driving the session without a network

use super::client::RepoSearch;
use super::models::{ResultItem, SearchOutcome};
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&str, u32) -> SearchOutcome + Send + Sync>;

/// Backend that records calls and answers from a closure
pub struct FakeSearch {
    calls: Mutex<Vec<(String, u32)>>,
    respond: Responder,
}

impl FakeSearch {
    pub fn new(respond: impl Fn(&str, u32) -> SearchOutcome + Send + Sync + 'static) -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            respond: Box::new(respond),
        })
    }

    /// Every (query, page) requested so far, in order
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RepoSearch for FakeSearch {
    async fn search(&self, query: &str, page: u32) -> SearchOutcome {
        self.calls.lock().unwrap().push((query.to_string(), page));
        (self.respond)(query, page)
    }
}

/// `count` items numbered from where page `page` of a 10-per-page listing starts
pub fn page_of(count: u64, page: u32) -> SearchOutcome {
    let base = (page as u64 - 1) * 10;
    SearchOutcome::Items(
        (base..base + count)
            .map(|id| ResultItem {
                id,
                full_name: format!("facebook/react-{}", id),
                html_url: format!("https://github.com/facebook/react-{}", id),
                watchers: 100,
                forks: 10,
            })
            .collect(),
    )
}
