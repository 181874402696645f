//! # Money Module
//!
//! Provides the `Money` type for handling catalog prices safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  A price filter with float bounds can silently exclude a product       │
//! │  priced exactly at the boundary.                                        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    $45 = 4500 cents. Comparisons are exact, sorts are total and        │
//! │    stable, and the inclusive bounds of the price filter behave         │
//! │    exactly as written.                                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gemak_core::money::Money;
//!
//! // Create from whole dollars (catalog prices) or cents
//! let price = Money::from_dollars(45);
//! assert_eq!(price.cents(), 4500);
//! assert_eq!(price.to_string(), "$45");
//!
//! let precise = Money::from_cents(1099);
//! assert_eq!(precise.to_string(), "$10.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: headroom for derived values (discounts)
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Total order**: price sorts never hit a NaN-style partial compare
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole dollars.
    ///
    /// Catalog prices are authored in whole dollars, so this is the
    /// constructor the static dataset uses.
    #[inline]
    pub const fn from_dollars(dollars: i64) -> Self {
        Money(dollars * 100)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Zero amount.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }
}

impl fmt::Display for Money {
    /// Formats as `$45` for whole-dollar amounts and `$10.99` otherwise.
    ///
    /// The shop UI prints catalog prices without trailing `.00`, and the
    /// WhatsApp order template embeds the same rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let whole = (self.0 / 100).abs();
        let frac = (self.0 % 100).abs();

        if frac == 0 {
            write!(f, "{sign}${whole}")
        } else {
            write!(f, "{sign}${whole}.{frac:02}")
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dollars() {
        assert_eq!(Money::from_dollars(45).cents(), 4500);
        assert_eq!(Money::from_dollars(0).cents(), 0);
    }

    #[test]
    fn test_display_whole_dollars() {
        assert_eq!(Money::from_dollars(45).to_string(), "$45");
        assert_eq!(Money::from_cents(18000).to_string(), "$180");
        assert_eq!(Money::zero().to_string(), "$0");
    }

    #[test]
    fn test_display_with_cents() {
        assert_eq!(Money::from_cents(1099).to_string(), "$10.99");
        assert_eq!(Money::from_cents(105).to_string(), "$1.05");
    }

    #[test]
    fn test_display_negative() {
        assert_eq!(Money::from_cents(-1234).to_string(), "-$12.34");
    }

    #[test]
    fn test_ordering_is_total() {
        let mut prices = vec![
            Money::from_dollars(120),
            Money::from_dollars(25),
            Money::from_dollars(38),
        ];
        prices.sort();
        assert_eq!(
            prices,
            vec![
                Money::from_dollars(25),
                Money::from_dollars(38),
                Money::from_dollars(120),
            ]
        );
    }
}
