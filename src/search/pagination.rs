//! Pagination primitives: the page cursor and the scroll-bottom predicate
//!
//! The predicate mirrors a browser infinite-scroll check:
//! `scrolled + viewport == document height`, where a document shorter than
//! the viewport still has the viewport's height.

/// 1-based page number of the next page to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor(u32);

impl PageCursor {
    /// Cursor for a fresh query (page 1)
    pub fn first() -> Self {
        Self(1)
    }

    /// Page number to request next
    pub fn get(self) -> u32 {
        self.0
    }

    /// Move back to page 1
    pub fn reset(&mut self) {
        self.0 = 1;
    }

    /// Record that the first page has been consumed (next is page 2)
    pub fn after_first_page(&mut self) {
        self.0 = 2;
    }

    /// Move to the following page
    pub fn advance(&mut self) {
        self.0 = self.0.saturating_add(1);
    }
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::first()
    }
}

/// How the scroll-bottom predicate compares positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollTrigger {
    /// `offset + viewport == height`. Never fires if the position
    /// overshoots the bottom.
    #[default]
    Exact,
    /// `offset + viewport >= height`
    AtOrPast,
}

impl ScrollTrigger {
    /// Parse from config string; unknown values fall back to `Exact`
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "at-or-past" | "at_or_past" => Self::AtOrPast,
            _ => Self::Exact,
        }
    }

    /// Convert to string for TOML serialization
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::AtOrPast => "at-or-past",
        }
    }
}

/// Snapshot of a scrollable list's position, in rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollMetrics {
    /// Rows scrolled past the top
    pub offset: usize,
    /// Rows visible at once
    pub viewport: usize,
    /// Rows of content
    pub content: usize,
}

impl ScrollMetrics {
    pub fn new(offset: usize, viewport: usize, content: usize) -> Self {
        Self {
            offset,
            viewport,
            content,
        }
    }

    /// Total scrollable height: content, but never less than the viewport
    pub fn document_height(&self) -> usize {
        self.content.max(self.viewport)
    }

    /// Whether the viewport has reached the bottom of the document
    pub fn at_bottom(&self, trigger: ScrollTrigger) -> bool {
        let reached = self.offset + self.viewport;
        match trigger {
            ScrollTrigger::Exact => reached == self.document_height(),
            ScrollTrigger::AtOrPast => reached >= self.document_height(),
        }
    }
}
