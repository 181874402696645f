//! # Policy Modals & Cookie Banner
//!
//! The footer's policy links (privacy, terms, cookies) can open the policy
//! modal from anywhere on the page. Rather than a global ambient event
//! bus, this is a narrow subscribe/notify hub with an explicit contract:
//! components that want notifications subscribe, nothing else is coupled.
//!
//! ## Hub Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Policy Hub Flow                                  │
//! │                                                                         │
//! │  Footer link ──► hub.open(PolicyKind::Privacy)                         │
//! │                        │                                                │
//! │                        ▼  broadcast                                     │
//! │  Modal host ◄── subscription.recv() ──► shows the privacy modal        │
//! │                                                                         │
//! │  No receiver mounted? The notification is dropped harmlessly;          │
//! │  there is no modal to open anyway.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::debug;

use gemak_store::Store;

use crate::error::SiteResult;

// =============================================================================
// Policy Hub
// =============================================================================

/// The policy documents the modal can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Privacy,
    Terms,
    Cookies,
}

/// Open-policy notifications, fanned out to every mounted modal host.
#[derive(Debug, Clone)]
pub struct PolicyHub {
    tx: broadcast::Sender<PolicyKind>,
}

impl PolicyHub {
    /// Creates a hub with a small notification buffer.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(16);
        PolicyHub { tx }
    }

    /// Subscribes a modal host to open-policy notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<PolicyKind> {
        self.tx.subscribe()
    }

    /// Asks the mounted modal host (if any) to open a policy document.
    pub fn open(&self, kind: PolicyKind) {
        debug!(?kind, "Policy modal requested");
        // A send error only means nobody is subscribed right now.
        let _ = self.tx.send(kind);
    }
}

impl Default for PolicyHub {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Cookie Banner
// =============================================================================

/// The cookie-consent banner: visible until accepted, then never again.
#[derive(Debug, Clone)]
pub struct CookieBanner {
    store: Arc<Store>,
}

impl CookieBanner {
    pub fn new(store: Arc<Store>) -> Self {
        CookieBanner { store }
    }

    /// Whether the banner should be shown.
    pub fn is_visible(&self) -> bool {
        !self.store.consent().is_accepted()
    }

    /// Records acceptance; the banner stays hidden from here on.
    pub fn accept(&self) -> SiteResult<()> {
        Ok(self.store.consent().accept()?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
