//! # Session Error Type
//!
//! Unified error type for session-layer operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Session Layer                      │
//! │                                                                         │
//! │  Form validation failures  ──►  NOT errors. They are data: a map of    │
//! │                                 field → message rendered inline.       │
//! │                                                                         │
//! │  Store write failures      ──►  SiteError::Store (disk full, perms)    │
//! │                                                                         │
//! │  Corrupt persisted data    ──►  no error at all: the store degrades    │
//! │                                 to defaults with a warning.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use gemak_store::StoreError;
use thiserror::Error;

/// Session-layer errors.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A durable write failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for session operations.
pub type SiteResult<T> = Result<T, SiteError>;
