//! # gemak-store: Durable Client Storage for the Gemak Catalog Engine
//!
//! This crate owns every byte the site persists across sessions: the
//! favorites wishlist, the cookie-consent flag, and the theme preference,
//! all inside one localStorage-shaped JSON document.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Gemak Data Flow                                  │
//! │                                                                         │
//! │  Session state (gemak-site)                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     gemak-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────────────────────┐   │   │
//! │  │   │    Store      │    │          Repositories             │   │   │
//! │  │   │  (store.rs)   │    │  FavoritesRepository              │   │   │
//! │  │   │               │◄───│  ConsentRepository                │   │   │
//! │  │   │  JSON doc     │    │  ThemeRepository                  │   │   │
//! │  │   │  load/save    │    │                                   │   │   │
//! │  │   └───────────────┘    └───────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   storage.json (one flat object)                │   │
//! │  │   { "gemak-favorites": [2, 13], "gemak-theme": "dark", ... }    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Document load/save and key/value access
//! - [`error`] - Store error types
//! - [`repository`] - Typed repositories (favorites, prefs)
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gemak_store::{Store, StoreConfig};
//!
//! let store = Store::open(StoreConfig::default_path()?)?;
//!
//! // Toggle a favorite; the write is durable when this returns
//! let now_favorite = store.favorites().toggle(2)?;
//!
//! // Consent + theme
//! store.consent().accept()?;
//! let theme = store.theme().load();
//! # Ok::<(), gemak_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use store::{Store, StoreConfig};

// Repository re-exports for convenience
pub use repository::favorites::FavoritesRepository;
pub use repository::prefs::{ConsentRepository, Theme, ThemeRepository};

// =============================================================================
// Document Keys
// =============================================================================
// Nothing outside this process reads the document, so these are
// configurable constants rather than wire-compatible contracts.

/// Document key holding the JSON array of favorite product ids.
pub const FAVORITES_KEY: &str = "gemak-favorites";

/// Document key holding the cookie-consent flag (string `"true"`).
pub const COOKIES_ACCEPTED_KEY: &str = "gemak-cookies-accepted";

/// Document key holding the theme preference (`"dark"` / `"light"`).
pub const THEME_KEY: &str = "gemak-theme";
