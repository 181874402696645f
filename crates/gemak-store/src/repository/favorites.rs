//! # Favorites Repository
//!
//! The persisted wishlist: a JSON array of product ids under the
//! [`crate::FAVORITES_KEY`] document key.
//!
//! ## Toggle Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Favorites Toggle                                   │
//! │                                                                         │
//! │  toggle(id)                                                             │
//! │      │                                                                  │
//! │      ├── id present? ──► remove it          ──► returns false           │
//! │      │                                                                  │
//! │      └── id absent?  ──► append it          ──► returns true            │
//! │                                                                         │
//! │  Two toggles with the same id are a no-op (involutive).                │
//! │  The document write happens before toggle() returns.                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ids keep insertion order, matching the append-on-add behavior of the
//! wishlist UI.

use serde_json::Value;
use tracing::debug;

use crate::error::StoreResult;
use crate::store::Store;
use crate::FAVORITES_KEY;

/// Repository for the persisted favorites list.
#[derive(Debug)]
pub struct FavoritesRepository<'a> {
    store: &'a Store,
}

impl<'a> FavoritesRepository<'a> {
    /// Creates a new FavoritesRepository.
    pub fn new(store: &'a Store) -> Self {
        FavoritesRepository { store }
    }

    /// The favorite product ids, in insertion order.
    ///
    /// A missing or malformed value loads as an empty list (never an
    /// error), mirroring the store's corrupt-data contract.
    pub fn ids(&self) -> Vec<u32> {
        self.store
            .get(FAVORITES_KEY)
            .map(|v| serde_json::from_value(v).unwrap_or_default())
            .unwrap_or_default()
    }

    /// Whether the given product id is a favorite.
    pub fn contains(&self, product_id: u32) -> bool {
        self.ids().contains(&product_id)
    }

    /// Adds the id if absent, removes it if present.
    ///
    /// Returns whether the id is a favorite *after* the toggle. The
    /// document write is synchronous with the in-memory update.
    pub fn toggle(&self, product_id: u32) -> StoreResult<bool> {
        let mut ids = self.ids();
        let now_favorite = if let Some(pos) = ids.iter().position(|&id| id == product_id) {
            ids.remove(pos);
            false
        } else {
            ids.push(product_id);
            true
        };

        debug!(product_id, now_favorite, "Favorite toggled");
        self.save(&ids)?;
        Ok(now_favorite)
    }

    /// Empties the wishlist.
    pub fn clear(&self) -> StoreResult<()> {
        self.store.remove(FAVORITES_KEY)
    }

    fn save(&self, ids: &[u32]) -> StoreResult<()> {
        let value = Value::from(ids.iter().map(|&id| Value::from(id)).collect::<Vec<_>>());
        self.store.set(FAVORITES_KEY, value)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreConfig;

    fn temp_store() -> (tempfile::TempDir, Store) {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(StoreConfig::new(dir.path().join("storage.json"))).unwrap();
        (dir, store)
    }

    #[test]
    fn test_starts_empty() {
        let (_dir, store) = temp_store();
        assert!(store.favorites().ids().is_empty());
        assert!(!store.favorites().contains(1));
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let (_dir, store) = temp_store();
        let favorites = store.favorites();

        assert!(favorites.toggle(2).unwrap());
        assert!(favorites.contains(2));

        assert!(!favorites.toggle(2).unwrap());
        assert!(!favorites.contains(2));
    }

    #[test]
    fn test_toggle_is_involutive() {
        let (_dir, store) = temp_store();
        let favorites = store.favorites();

        favorites.toggle(1).unwrap();
        favorites.toggle(3).unwrap();
        let before = favorites.ids();

        favorites.toggle(9).unwrap();
        favorites.toggle(9).unwrap();
        assert_eq!(favorites.ids(), before);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let (_dir, store) = temp_store();
        let favorites = store.favorites();

        favorites.toggle(5).unwrap();
        favorites.toggle(1).unwrap();
        favorites.toggle(3).unwrap();
        assert_eq!(favorites.ids(), vec![5, 1, 3]);

        // Removing from the middle keeps the rest in order
        favorites.toggle(1).unwrap();
        assert_eq!(favorites.ids(), vec![5, 3]);
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = Store::open(StoreConfig::new(&path)).unwrap();
        store.favorites().toggle(2).unwrap();
        store.favorites().toggle(13).unwrap();
        drop(store);

        let store = Store::open(StoreConfig::new(&path)).unwrap();
        assert_eq!(store.favorites().ids(), vec![2, 13]);
    }

    #[test]
    fn test_malformed_value_degrades_to_empty() {
        let (_dir, store) = temp_store();
        store.set(FAVORITES_KEY, Value::String("garbage".to_string())).unwrap();
        assert!(store.favorites().ids().is_empty());
    }

    #[test]
    fn test_clear() {
        let (_dir, store) = temp_store();
        store.favorites().toggle(1).unwrap();
        store.favorites().clear().unwrap();
        assert!(store.favorites().ids().is_empty());
    }
}
