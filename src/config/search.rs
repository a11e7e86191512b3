//! Search configuration: endpoint, debounce, scroll trigger

use crate::search::client::DEFAULT_API_URL;
use crate::search::ScrollTrigger;
use serde::Deserialize;
use std::time::Duration;

/// Default quiet period before a typed query is sent
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;

/// Search settings
#[derive(Debug, Clone)]
pub struct SearchSettings {
    /// Repository-search endpoint; q/page/per_page are appended
    pub api_url: String,
    /// Quiet period after the last keystroke before searching
    pub debounce_ms: u64,
    /// Scroll-bottom comparison (exact or at-or-past)
    pub scroll_trigger: ScrollTrigger,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            scroll_trigger: ScrollTrigger::Exact,
        }
    }
}

/// Search settings as loaded from config file
#[derive(Debug, Deserialize, Default)]
pub struct FileSearch {
    pub api_url: Option<String>,
    pub debounce_ms: Option<u64>,
    pub scroll_trigger: Option<String>,
}

impl SearchSettings {
    /// Create from file config with defaults
    pub fn from_file(file: Option<FileSearch>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = Self::default();

        Self {
            api_url: file.api_url.unwrap_or(defaults.api_url),
            debounce_ms: file.debounce_ms.unwrap_or(defaults.debounce_ms),
            scroll_trigger: file
                .scroll_trigger
                .map(|s| ScrollTrigger::from_str(&s))
                .unwrap_or(defaults.scroll_trigger),
        }
    }

    /// Debounce as a Duration
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}
