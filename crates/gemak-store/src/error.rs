//! # Store Error Types
//!
//! Error types for durable-storage operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds context                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SiteError (gemak-site) ← Session layer                                │
//! │                                                                         │
//! │  NOTE: a corrupt or missing document is NOT an error. It degrades      │
//! │  to an empty document with a warning; only real I/O failures (disk     │
//! │  full, permissions) surface as StoreError.                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use thiserror::Error;

/// Durable-storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the document file failed.
    ///
    /// ## When This Occurs
    /// - Parent directory cannot be created
    /// - Disk full, file permissions
    /// - The atomic rename fails
    #[error("Store I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serializing the document failed.
    #[error("Store serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No platform data directory could be resolved for the default path.
    #[error("No data directory available for the store document")]
    NoDataDir,
}

impl StoreError {
    /// Creates an Io error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
