//! # Preference Repositories
//!
//! Two single-key repositories:
//!
//! - cookie consent: the string `"true"` under [`crate::COOKIES_ACCEPTED_KEY`]
//!   once the banner has been accepted
//! - theme preference: `"dark"` / `"light"` under [`crate::THEME_KEY`],
//!   defaulting to dark
//!
//! Both degrade to their default on missing or malformed values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::StoreResult;
use crate::store::Store;
use crate::{COOKIES_ACCEPTED_KEY, THEME_KEY};

// =============================================================================
// Cookie Consent
// =============================================================================

/// Repository for the cookie-consent flag.
#[derive(Debug)]
pub struct ConsentRepository<'a> {
    store: &'a Store,
}

impl<'a> ConsentRepository<'a> {
    /// Creates a new ConsentRepository.
    pub fn new(store: &'a Store) -> Self {
        ConsentRepository { store }
    }

    /// Whether the user has accepted the cookie banner.
    ///
    /// Anything other than the exact string `"true"` counts as not
    /// accepted, so a corrupt value simply shows the banner again.
    pub fn is_accepted(&self) -> bool {
        matches!(self.store.get(COOKIES_ACCEPTED_KEY), Some(Value::String(s)) if s == "true")
    }

    /// Records acceptance. Idempotent.
    pub fn accept(&self) -> StoreResult<()> {
        debug!("Cookie consent accepted");
        self.store.set(COOKIES_ACCEPTED_KEY, Value::String("true".to_string()))
    }
}

// =============================================================================
// Theme
// =============================================================================

/// The site theme. The site ships dark-first; light is the opt-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The persisted string form.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// The other theme.
    pub const fn toggled(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

/// Repository for the persisted theme preference.
#[derive(Debug)]
pub struct ThemeRepository<'a> {
    store: &'a Store,
}

impl<'a> ThemeRepository<'a> {
    /// Creates a new ThemeRepository.
    pub fn new(store: &'a Store) -> Self {
        ThemeRepository { store }
    }

    /// The stored preference; defaults to dark on missing or malformed
    /// values.
    pub fn load(&self) -> Theme {
        match self.store.get(THEME_KEY) {
            Some(Value::String(s)) if s == "light" => Theme::Light,
            _ => Theme::Dark,
        }
    }

    /// Persists the preference.
    pub fn save(&self, theme: Theme) -> StoreResult<()> {
        debug!(theme = theme.as_str(), "Theme preference saved");
        self.store.set(THEME_KEY, Value::String(theme.as_str().to_string()))
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
    fn test_consent_defaults_to_not_accepted() {
        let (_dir, store) = temp_store();
        assert!(!store.consent().is_accepted());
    }

    #[test]
    fn test_consent_accept_persists() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");

        let store = Store::open(StoreConfig::new(&path)).unwrap();
        store.consent().accept().unwrap();
        assert!(store.consent().is_accepted());
        drop(store);

        let store = Store::open(StoreConfig::new(&path)).unwrap();
        assert!(store.consent().is_accepted());
    }

    #[test]
    fn test_consent_ignores_malformed_value() {
        let (_dir, store) = temp_store();
        store.set(COOKIES_ACCEPTED_KEY, Value::Bool(true)).unwrap();
        assert!(!store.consent().is_accepted());
    }

    #[test]
    fn test_theme_defaults_to_dark() {
        let (_dir, store) = temp_store();
        assert_eq!(store.theme().load(), Theme::Dark);
    }

    #[test]
    fn test_theme_round_trip() {
        let (_dir, store) = temp_store();
        store.theme().save(Theme::Light).unwrap();
        assert_eq!(store.theme().load(), Theme::Light);
        store.theme().save(Theme::Dark).unwrap();
        assert_eq!(store.theme().load(), Theme::Dark);
    }

    #[test]
    fn test_theme_toggled() {
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
    }
}
