//! # gemak-site: Session State Layer
//!
//! The thin layer between the site frontend and the engine crates. It owns
//! the mutable per-session state and delegates every decision to
//! `gemak-core` (logic) and `gemak-store` (durability).
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          gemak-site                                     │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │  Session State                                                  │   │
//! │  │  ContactFormSession  ShopView  SearchBox  FavoritesState        │   │
//! │  │  ThemeState  PolicyHub  CookieBanner  Ticker                    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │       ┌────────────────────────┴────────────────────────┐              │
//! │       ▼                                                 ▼              │
//! │  ┌──────────────────────┐                ┌──────────────────────────┐  │
//! │  │   gemak-core         │                │   gemak-store            │  │
//! │  │   (Business Logic)   │                │   (Durable Storage)      │  │
//! │  └──────────────────────┘                └──────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Concurrency Model
//! Single logical actor (the current user session), event-driven. Every
//! operation is synchronous and completes within one turn; the only
//! async-shaped pieces are the cosmetic [`ticker::Ticker`] and the delayed
//! form reset, neither of which carries correctness requirements.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod routes;
pub mod state;
pub mod ticker;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{SiteError, SiteResult};
pub use routes::Route;
pub use state::favorites::FavoritesState;
pub use state::form::{ContactFormSession, FieldErrors, SendAction, SendChannel, RESET_DELAY};
pub use state::modal::{CookieBanner, PolicyHub, PolicyKind};
pub use state::search::SearchBox;
pub use state::shop::{order_link, result_summary, ShopView};
pub use state::theme::ThemeState;
pub use ticker::Ticker;
