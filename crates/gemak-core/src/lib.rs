//! # gemak-core: Pure Business Logic for the Gemak Catalog Engine
//!
//! This crate is the **heart** of the Gemak site. It contains the whole of
//! the non-presentational logic as pure functions with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Gemak Catalog Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                       Frontend (site pages)                     │   │
//! │  │    Shop grid ──► Search palette ──► Contact form ──► Deep link  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    gemak-site (session state)                   │   │
//! │  │    ShopView, SearchBox, ContactFormSession, FavoritesState      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ gemak-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   query   │  │  contact  │  │ validation│  │   │
//! │  │   │  Products │  │  Filters  │  │ Templates │  │   rules   │  │   │
//! │  │   │  Services │  │  Sorting  │  │ Deep links│  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK • PURE FUNCTIONS        │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Service, Branch, etc.)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The static content dataset
//! - [`query`] - Product filtering and sorting
//! - [`search`] - Keyword search over the site-wide index
//! - [`validation`] - Contact-form field validation
//! - [`contact`] - Message templates and WhatsApp/mailto/maps deep links
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every function is deterministic - same input = same output
//! 2. **No I/O**: Persistence, network, file system access is FORBIDDEN here
//! 3. **Integer Money**: Prices are cents (i64), ratings are tenths (u8)
//! 4. **Explicit Errors**: Validation outcomes are typed values, never panics
//!
//! ## Example Usage
//!
//! ```rust
//! use gemak_core::query::{ProductFilter, SortKey};
//! use gemak_core::{catalog, CategoryFilter, Money, ProductCategory};
//!
//! // The shop scenario: CCTV category, "dome" text, $0..$50
//! let filter = ProductFilter {
//!     category: CategoryFilter::Only(ProductCategory::CctvCameras),
//!     search: "dome".to_string(),
//!     price_min: Money::zero(),
//!     price_max: Money::from_dollars(50),
//!     sort: SortKey::Default,
//! };
//!
//! let results = filter.apply(catalog::products());
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Dahua Dome Camera 4MP");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod contact;
pub mod error;
pub mod money;
pub mod query;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use gemak_core::Money` instead of
// `use gemak_core::money::Money`

pub use error::{CoreError, ValidationError};
pub use money::Money;
pub use types::*;
