//! # Query Engine
//!
//! Pure filtering and sorting over the product catalog.
//!
//! ## Filter Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Shop Filter Pipeline                               │
//! │                                                                         │
//! │  products() ──► category ──► text ──► price ──► sort ──► Vec<Product>  │
//! │                 filter       filter    filter                           │
//! │                                                                         │
//! │  The three predicates AND-compose; application order never changes     │
//! │  the result set. Sorting is stable: ties keep catalog order.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use gemak_core::query::{ProductFilter, SortKey};
//! use gemak_core::{catalog, CategoryFilter, ProductCategory};
//!
//! let filter = ProductFilter {
//!     category: CategoryFilter::Only(ProductCategory::CctvCameras),
//!     sort: SortKey::PriceLow,
//!     ..ProductFilter::default()
//! };
//! let results = filter.apply(catalog::products());
//! assert!(results.iter().all(|p| p.category == ProductCategory::CctvCameras));
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CategoryFilter, Product, ProductCategory};

// =============================================================================
// Sort Key
// =============================================================================

/// The shop toolbar's sort options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Preserve catalog order.
    #[default]
    Default,
    /// Price ascending.
    PriceLow,
    /// Price descending.
    PriceHigh,
    /// Rating descending.
    Rating,
    /// Name lexicographically ascending.
    Name,
}

// =============================================================================
// Product Filter
// =============================================================================

/// The shop page's filter configuration.
///
/// `Default` mirrors the page's initial state: all categories, no search
/// text, the $0–$500 price slider, catalog order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilter {
    pub category: CategoryFilter,
    /// Free-text filter over product name and category name.
    pub search: String,
    /// Inclusive lower price bound.
    pub price_min: Money,
    /// Inclusive upper price bound.
    pub price_max: Money,
    pub sort: SortKey,
}

impl Default for ProductFilter {
    fn default() -> Self {
        ProductFilter {
            category: CategoryFilter::All,
            search: String::new(),
            price_min: Money::zero(),
            price_max: Money::from_dollars(500),
            sort: SortKey::Default,
        }
    }
}

impl ProductFilter {
    /// Whether a single product passes all three predicates.
    fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.category) {
            return false;
        }

        if !self.search.is_empty() {
            let q = self.search.to_lowercase();
            let name_hit = product.name.to_lowercase().contains(&q);
            let category_hit = product.category.name().to_lowercase().contains(&q);
            if !name_hit && !category_hit {
                return false;
            }
        }

        self.price_min <= product.price && product.price <= self.price_max
    }

    /// Filters and sorts the given products.
    ///
    /// An inverted price range (`price_min > price_max`) yields an empty
    /// result; it is not an error.
    ///
    /// All sorts are stable (`slice::sort_by` guarantees it), so products
    /// with an equal sort key keep their relative catalog order — a
    /// property the grid relies on to avoid reshuffling on re-render.
    pub fn apply(&self, products: &[Product]) -> Vec<Product> {
        let mut results: Vec<Product> =
            products.iter().filter(|p| self.matches(p)).cloned().collect();

        match self.sort {
            SortKey::Default => {}
            SortKey::PriceLow => results.sort_by(|a, b| a.price.cmp(&b.price)),
            SortKey::PriceHigh => results.sort_by(|a, b| b.price.cmp(&a.price)),
            SortKey::Rating => results.sort_by(|a, b| b.rating.cmp(&a.rating)),
            SortKey::Name => results.sort_by(|a, b| a.name.cmp(&b.name)),
        }

        results
    }
}

// =============================================================================
// Category Counts
// =============================================================================

/// Product count per sidebar row, `All` first.
///
/// The `All` row counts the entire catalog; category rows count exact
/// matches only.
pub fn category_counts(products: &[Product]) -> Vec<(CategoryFilter, usize)> {
    let mut counts = Vec::with_capacity(1 + ProductCategory::ALL.len());
    counts.push((CategoryFilter::All, products.len()));
    for cat in ProductCategory::ALL {
        let count = products.iter().filter(|p| p.category == cat).count();
        counts.push((CategoryFilter::Only(cat), count));
    }
    counts
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::types::{ImageRef, Rating};

    fn test_product(id: u32, name: &str, category: ProductCategory, price: i64, rating: u8) -> Product {
        Product {
            id,
            name: name.to_string(),
            category,
            price: Money::from_dollars(price),
            old_price: None,
            image: ImageRef::new(format!("{id}.jpg")),
            badge: None,
            rating: Rating::from_tenths(rating),
        }
    }

    #[test]
    fn test_category_filter_exact_match() {
        let filter = ProductFilter {
            category: CategoryFilter::Only(ProductCategory::Footwear),
            ..ProductFilter::default()
        };
        let results = filter.apply(catalog::products());
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.category == ProductCategory::Footwear));
    }

    #[test]
    fn test_all_category_preserves_catalog_order() {
        let results = ProductFilter::default().apply(catalog::products());
        let ids: Vec<u32> = results.iter().map(|p| p.id).collect();
        let expected: Vec<u32> = catalog::products().iter().map(|p| p.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_price_bounds_inclusive() {
        let filter = ProductFilter {
            price_min: Money::from_dollars(25),
            price_max: Money::from_dollars(25),
            ..ProductFilter::default()
        };
        let results = filter.apply(catalog::products());
        assert!(!results.is_empty());
        assert!(results.iter().all(|p| p.price == Money::from_dollars(25)));
    }

    #[test]
    fn test_inverted_price_range_yields_empty() {
        let filter = ProductFilter {
            price_min: Money::from_dollars(100),
            price_max: Money::from_dollars(50),
            ..ProductFilter::default()
        };
        assert!(filter.apply(catalog::products()).is_empty());
    }

    #[test]
    fn test_text_filter_is_case_insensitive() {
        let filter = ProductFilter {
            search: "HIKVISION".to_string(),
            ..ProductFilter::default()
        };
        let results = filter.apply(catalog::products());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Hikvision Bullet Camera");
    }

    #[test]
    fn test_text_filter_matches_category_name() {
        // "footwear" appears in no product name, only in the category
        let filter = ProductFilter {
            search: "footwear".to_string(),
            ..ProductFilter::default()
        };
        let results = filter.apply(catalog::products());
        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|p| p.category == ProductCategory::Footwear));
    }

    #[test]
    fn test_sort_price_ascending() {
        let filter = ProductFilter {
            sort: SortKey::PriceLow,
            ..ProductFilter::default()
        };
        let results = filter.apply(catalog::products());
        assert!(results.windows(2).all(|w| w[0].price <= w[1].price));
    }

    #[test]
    fn test_sort_rating_descending() {
        let filter = ProductFilter {
            sort: SortKey::Rating,
            ..ProductFilter::default()
        };
        let results = filter.apply(catalog::products());
        assert!(results.windows(2).all(|w| w[0].rating >= w[1].rating));
    }

    #[test]
    fn test_sorts_are_stable_on_ties() {
        use ProductCategory::*;
        // Same price and rating; ids encode input order.
        let products = vec![
            test_product(1, "Bravo", SelfDefense, 25, 40),
            test_product(2, "Alpha", Footwear, 25, 40),
            test_product(3, "Charlie", CctvCameras, 25, 40),
        ];

        for sort in [SortKey::PriceLow, SortKey::PriceHigh, SortKey::Rating] {
            let filter = ProductFilter { sort, ..ProductFilter::default() };
            let ids: Vec<u32> = filter.apply(&products).iter().map(|p| p.id).collect();
            assert_eq!(ids, vec![1, 2, 3], "unstable under {sort:?}");
        }
    }

    #[test]
    fn test_sort_by_name() {
        let filter = ProductFilter {
            sort: SortKey::Name,
            ..ProductFilter::default()
        };
        let results = filter.apply(catalog::products());
        assert!(results.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_filters_and_compose_end_to_end() {
        // Shop scenario: CCTV category + "dome" text + $0..$50 must isolate
        // the Dahua dome camera.
        let filter = ProductFilter {
            category: CategoryFilter::Only(ProductCategory::CctvCameras),
            search: "dome".to_string(),
            price_min: Money::zero(),
            price_max: Money::from_dollars(50),
            sort: SortKey::Default,
        };
        let results = filter.apply(catalog::products());
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Dahua Dome Camera 4MP");
        assert_eq!(results[0].price, Money::from_dollars(38));
    }

    #[test]
    fn test_category_counts_sum_to_catalog() {
        let counts = category_counts(catalog::products());
        assert_eq!(counts[0].0, CategoryFilter::All);
        assert_eq!(counts[0].1, catalog::products().len());

        let per_category: usize = counts[1..].iter().map(|(_, n)| n).sum();
        assert_eq!(per_category, catalog::products().len());
    }
}
