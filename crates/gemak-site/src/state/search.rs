//! # Navbar Search Box
//!
//! State for the ⌘K search palette: the live query string and its current
//! results over the static site-wide index.
//!
//! Results recompute on every keystroke. Each recomputation is independent
//! and the latest call's result supersedes the previous one, so no
//! debounce or cancellation is needed; a stale result is harmless to
//! overwrite.

use gemak_core::search::search_entries;
use gemak_core::{catalog, SearchEntry};

/// The search palette's state. One instance lives in the navbar.
#[derive(Debug, Clone, Default)]
pub struct SearchBox {
    query: String,
}

impl SearchBox {
    pub fn new() -> Self {
        Self::default()
    }

    /// The live query string.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Updates the query and returns the fresh results.
    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<&'static SearchEntry> {
        self.query = query.into();
        self.results()
    }

    /// Results for the current query: empty below two characters, at most
    /// six entries otherwise.
    pub fn results(&self) -> Vec<&'static SearchEntry> {
        search_entries(catalog::search_index(), &self.query)
    }

    /// Clears the query (palette closed or a result selected).
    pub fn clear(&mut self) {
        self.query.clear();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
