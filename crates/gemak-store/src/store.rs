//! # Store Document Management
//!
//! The durable key/value document backing favorites, cookie consent, and
//! the theme preference.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Store Document Lifecycle                          │
//! │                                                                         │
//! │  App Startup                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreConfig::new(path) ← or StoreConfig::default_path()               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::open(config) ← Loads the JSON document                         │
//! │       │                                                                 │
//! │       ├── File missing?    → empty document (first run)                │
//! │       ├── File unparsable? → warn! + empty document (never an error)   │
//! │       └── File OK          → in-memory BTreeMap of keys                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  set()/remove() ──► mutate map ──► persist (temp file + rename)        │
//! │                                                                         │
//! │  The write is synchronous with the mutation: when toggle() returns,    │
//! │  the document on disk already reflects the new state.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Why One Document?
//! The persisted surface is three small keys touched by a single logical
//! actor (the current user session). One flat JSON object mirrors the
//! browser `localStorage` layout this replaces, and keeps the corrupt-data
//! story trivial: any parse failure resets the whole surface to defaults.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use directories::ProjectDirs;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::repository::favorites::FavoritesRepository;
use crate::repository::prefs::{ConsentRepository, ThemeRepository};

// =============================================================================
// Configuration
// =============================================================================

/// Store configuration.
///
/// ## Example
/// ```rust,no_run
/// use gemak_store::{Store, StoreConfig};
///
/// let config = StoreConfig::default_path().unwrap();
/// let store = Store::open(config).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Path to the JSON document file.
    pub path: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration with an explicit document path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StoreConfig { path: path.into() }
    }

    /// Resolves the default document path under the platform data dir,
    /// e.g. `~/.local/share/gemak/storage.json` on Linux.
    pub fn default_path() -> StoreResult<Self> {
        let dirs =
            ProjectDirs::from("zw.co", "gemaksecurity", "gemak").ok_or(StoreError::NoDataDir)?;
        Ok(StoreConfig {
            path: dirs.data_dir().join("storage.json"),
        })
    }
}

// =============================================================================
// Store
// =============================================================================

/// Main store handle providing key/value access and typed repositories.
///
/// ## Thread Safety
/// The document map sits behind a `Mutex` because session state objects
/// share one handle. Operations hold the lock only for the in-memory
/// mutation plus the (small) synchronous write.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    doc: Mutex<BTreeMap<String, Value>>,
}

impl Store {
    /// Opens the store, loading the document at the configured path.
    ///
    /// ## Degradation Contract
    /// - Missing file → empty document (first run)
    /// - Unparsable file → `warn!` + empty document
    ///
    /// Only real I/O failures (unreadable parent directory) return an
    /// error.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(path = %config.path.display(), "Opening store document");

        let doc = match fs::read_to_string(&config.path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, Value>>(&raw) {
                Ok(doc) => {
                    debug!(keys = doc.len(), "Store document loaded");
                    doc
                }
                Err(err) => {
                    warn!(%err, "Store document unparsable, starting empty");
                    BTreeMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!("No store document yet, starting empty");
                BTreeMap::new()
            }
            Err(err) => return Err(StoreError::io(&config.path, err)),
        };

        Ok(Store {
            path: config.path,
            doc: Mutex::new(doc),
        })
    }

    /// Returns the value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.doc.lock().expect("store mutex poisoned").get(key).cloned()
    }

    /// Stores `value` under `key` and persists the document.
    pub fn set(&self, key: &str, value: Value) -> StoreResult<()> {
        let mut doc = self.doc.lock().expect("store mutex poisoned");
        doc.insert(key.to_string(), value);
        self.persist(&doc)
    }

    /// Removes `key` and persists the document.
    pub fn remove(&self, key: &str) -> StoreResult<()> {
        let mut doc = self.doc.lock().expect("store mutex poisoned");
        if doc.remove(key).is_some() {
            self.persist(&doc)?;
        }
        Ok(())
    }

    /// Removes every key and persists the empty document.
    pub fn clear(&self) -> StoreResult<()> {
        let mut doc = self.doc.lock().expect("store mutex poisoned");
        doc.clear();
        self.persist(&doc)
    }

    /// The document path (for diagnostics).
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the document atomically: serialize to a sibling temp file,
    /// then rename over the target.
    fn persist(&self, doc: &BTreeMap<String, Value>) -> StoreResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let bytes = serde_json::to_vec_pretty(doc)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes).map_err(|e| StoreError::io(&tmp, e))?;
        fs::rename(&tmp, &self.path).map_err(|e| StoreError::io(&self.path, e))?;

        debug!(path = %self.path.display(), keys = doc.len(), "Store document persisted");
        Ok(())
    }

    // =========================================================================
    // Repositories
    // =========================================================================

    /// Returns the favorites repository.
    ///
    /// ## Example
    /// ```rust,no_run
    /// # use gemak_store::{Store, StoreConfig};
    /// # let store = Store::open(StoreConfig::new("/tmp/s.json")).unwrap();
    /// let now_favorite = store.favorites().toggle(2).unwrap();
    /// ```
    pub fn favorites(&self) -> FavoritesRepository<'_> {
        FavoritesRepository::new(self)
    }

    /// Returns the cookie-consent repository.
    pub fn consent(&self) -> ConsentRepository<'_> {
        ConsentRepository::new(self)
    }

    /// Returns the theme-preference repository.
    pub fn theme(&self) -> ThemeRepository<'_> {
        ThemeRepository::new(self)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
