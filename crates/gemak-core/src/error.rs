//! # Error Types
//!
//! Domain-specific error types for gemak-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  gemak-core errors (this file)                                         │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Contact-form validation failures               │
//! │                                                                         │
//! │  gemak-store errors (separate crate)                                   │
//! │  └── StoreError       - Durable storage failures                       │
//! │                                                                         │
//! │  gemak-site errors (separate crate)                                    │
//! │  └── SiteError        - Session-layer failures                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → SiteError → Frontend              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (category name, field, etc.)
//! 3. Errors are enum variants, never String
//! 4. Validation errors double as the inline messages the form displays

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
///
/// These represent malformed references into the closed catalog vocabulary
/// (an unknown category name in a `?cat=` URL, an unknown inquiry label).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A category name that is not part of the catalog vocabulary.
    ///
    /// ## When This Occurs
    /// - A `?cat=` query parameter names a category that does not exist
    /// - Hand-authored data references a category after a rename
    #[error("Unknown product category: {0}")]
    UnknownCategory(String),

    /// An inquiry-type label outside the fixed list the contact form offers.
    #[error("Unknown inquiry type: {0}")]
    UnknownInquiry(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Contact-form validation errors.
///
/// Each variant's `Display` output is the human-readable message the form
/// surfaces inline next to the offending field. No variant is fatal: the
/// user corrects and resubmits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or whitespace-only.
    #[error("{field} is required")]
    Required { field: &'static str },

    /// Field value is too short after trimming.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    /// Invalid format (phone pattern, email shape).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat {
        field: &'static str,
        reason: &'static str,
    },
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
