//! # Theme State
//!
//! The theme preference as an explicit value object with a toggle
//! operation and a persisted default, instead of an ambient global.
//!
//! The site ships dark-first: a missing or corrupt preference always
//! resolves to [`Theme::Dark`].

use std::sync::{Arc, Mutex};

use tracing::info;

use gemak_store::{Store, Theme};

use crate::error::SiteResult;

/// Session handle over the persisted theme preference.
#[derive(Debug, Clone)]
pub struct ThemeState {
    store: Arc<Store>,
    current: Arc<Mutex<Theme>>,
}

impl ThemeState {
    /// Loads the persisted preference (dark by default).
    pub fn new(store: Arc<Store>) -> Self {
        let current = store.theme().load();
        info!(theme = current.as_str(), "Theme loaded");
        ThemeState {
            store,
            current: Arc::new(Mutex::new(current)),
        }
    }

    /// The active theme.
    pub fn current(&self) -> Theme {
        *self.current.lock().expect("theme mutex poisoned")
    }

    /// Switches to the other theme and persists the choice.
    pub fn toggle(&self) -> SiteResult<Theme> {
        let mut current = self.current.lock().expect("theme mutex poisoned");
        let next = current.toggled();
        self.store.theme().save(next)?;
        *current = next;
        Ok(next)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
