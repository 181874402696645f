//! # Keyword Search
//!
//! Substring search over the static site-wide index, backing the navbar's
//! ⌘K palette.
//!
//! ## Contract
//! - Queries shorter than [`MIN_QUERY_LEN`] characters (after trimming)
//!   return an empty list by contract, not as an error: one keystroke is
//!   not yet a search.
//! - Matching is a case-insensitive substring test against each entry's
//!   title and keywords.
//! - At most [`MAX_RESULTS`] entries are returned, in index order.

use crate::types::SearchEntry;

/// Minimum query length before any matching happens.
pub const MIN_QUERY_LEN: usize = 2;

/// Result cap for the dropdown.
pub const MAX_RESULTS: usize = 6;

/// Searches the index for entries whose title or keywords contain the
/// case-folded query.
///
/// ## Example
/// ```rust
/// use gemak_core::{catalog, search};
///
/// let hits = search::search_entries(catalog::search_index(), "cctv");
/// assert!(!hits.is_empty());
/// assert!(search::search_entries(catalog::search_index(), "c").is_empty());
/// ```
pub fn search_entries<'a>(index: &'a [SearchEntry], query: &str) -> Vec<&'a SearchEntry> {
    let query = query.trim();
    if query.chars().count() < MIN_QUERY_LEN {
        return Vec::new();
    }

    let q = query.to_lowercase();
    index
        .iter()
        .filter(|e| e.title.to_lowercase().contains(&q) || e.keywords.to_lowercase().contains(&q))
        .take(MAX_RESULTS)
        .collect()
}
