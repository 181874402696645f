//! # Favorites State
//!
//! The session's view of the persisted wishlist.
//!
//! ## Write-Through
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Favorites Write Path                                │
//! │                                                                         │
//! │  Heart clicked ──► FavoritesState::toggle(id)                          │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                   store.favorites().toggle(id)                         │
//! │                         │                                               │
//! │                         ▼                                               │
//! │                   storage.json updated BEFORE toggle returns           │
//! │                                                                         │
//! │  A corrupt or missing document loads as an empty wishlist; the user    │
//! │  never sees an error for someone else's disk problem.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tracing::info;

use gemak_store::Store;

use crate::error::SiteResult;

/// Session handle over the persisted favorites list.
#[derive(Debug, Clone)]
pub struct FavoritesState {
    store: Arc<Store>,
}

impl FavoritesState {
    /// Creates the state over a shared store handle.
    pub fn new(store: Arc<Store>) -> Self {
        let state = FavoritesState { store };
        info!(count = state.ids().len(), "Favorites loaded");
        state
    }

    /// The favorite product ids, in insertion order.
    pub fn ids(&self) -> Vec<u32> {
        self.store.favorites().ids()
    }

    /// Whether the product's heart is filled.
    pub fn contains(&self, product_id: u32) -> bool {
        self.store.favorites().contains(product_id)
    }

    /// Toggles a favorite; returns whether it is a favorite afterwards.
    pub fn toggle(&self, product_id: u32) -> SiteResult<bool> {
        Ok(self.store.favorites().toggle(product_id)?)
    }

    /// Number of favorites (the navbar badge).
    pub fn count(&self) -> usize {
        self.ids().len()
    }

    /// Empties the wishlist.
    pub fn clear(&self) -> SiteResult<()> {
        Ok(self.store.favorites().clear()?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gemak_store::StoreConfig;

    fn temp_state() -> (tempfile::TempDir, FavoritesState) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(StoreConfig::new(dir.path().join("storage.json"))).unwrap();
        (dir, FavoritesState::new(Arc::new(store)))
    }

    #[test]
    fn test_toggle_round_trip() {
        let (_dir, favorites) = temp_state();

        assert!(favorites.toggle(2).unwrap());
        assert!(favorites.contains(2));
        assert_eq!(favorites.count(), 1);

        assert!(!favorites.toggle(2).unwrap());
        assert!(!favorites.contains(2));
        assert_eq!(favorites.count(), 0);
    }

    #[test]
    fn test_clear() {
        let (_dir, favorites) = temp_state();
        favorites.toggle(1).unwrap();
        favorites.toggle(2).unwrap();
        favorites.clear().unwrap();
        assert!(favorites.ids().is_empty());
    }
}
