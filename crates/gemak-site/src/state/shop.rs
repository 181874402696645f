//! # Shop View State
//!
//! The shop page's filter state: category sidebar, search box, price
//! range, sort dropdown, and the `?cat=` preselection from deep links.
//!
//! ## View Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shop View Flow                                   │
//! │                                                                         │
//! │  /shop?cat=CCTV+Cameras ──► ShopView::from_query ──► category preset   │
//! │                                                                         │
//! │  Sidebar click ──► set_category()  ┐                                   │
//! │  Search typing ──► set_search()    ├──► results() ──► filtered grid    │
//! │  Price inputs ───► set_price_range ┘      (delegates to gemak-core)    │
//! │  Sort dropdown ──► set_sort()                                          │
//! │                                                                         │
//! │  "Clear all filters" ──► clear_filters() ──► back to the default view  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each mutator recomputes nothing: `results()` is called per render, and
//! a newer call's result simply supersedes the previous one.

use percent_encoding::percent_decode_str;
use tracing::debug;

use gemak_core::contact::{order_message, whatsapp_url};
use gemak_core::query::{category_counts, ProductFilter, SortKey};
use gemak_core::{catalog, CategoryFilter, Money, Product};

// =============================================================================
// Shop View
// =============================================================================

/// The shop page's filter state. One instance per page visit.
#[derive(Debug, Clone, Default)]
pub struct ShopView {
    filter: ProductFilter,
}

impl ShopView {
    /// A fresh view with the default filter (all categories, $0–$500).
    pub fn new() -> Self {
        Self::default()
    }

    /// A view preselected from the URL query string, e.g.
    /// `cat=CCTV+Cameras`.
    ///
    /// An unknown or missing category falls back to `All`; a deep link is
    /// never an error surface.
    pub fn from_query(query: &str) -> Self {
        let mut view = ShopView::new();

        let cat = query
            .split('&')
            .filter_map(|pair| pair.split_once('='))
            .find(|(key, _)| *key == "cat")
            .map(|(_, value)| decode_query_value(value));

        if let Some(name) = cat {
            match name.parse() {
                Ok(category) => view.filter.category = CategoryFilter::Only(category),
                Err(_) => debug!(%name, "Unknown ?cat= value, showing all products"),
            }
        }

        view
    }

    /// The current filter configuration.
    pub fn filter(&self) -> &ProductFilter {
        &self.filter
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
    }

    pub fn set_search(&mut self, search: impl Into<String>) {
        self.filter.search = search.into();
    }

    pub fn set_sort(&mut self, sort: SortKey) {
        self.filter.sort = sort;
    }

    /// Sets the inclusive price bounds. An inverted range is allowed and
    /// simply yields an empty grid.
    pub fn set_price_range(&mut self, min: Money, max: Money) {
        self.filter.price_min = min;
        self.filter.price_max = max;
    }

    /// "Clear all filters": back to the default view.
    pub fn clear_filters(&mut self) {
        self.filter = ProductFilter::default();
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// The filtered, sorted grid contents.
    pub fn results(&self) -> Vec<Product> {
        self.filter.apply(catalog::products())
    }

    /// Sidebar rows with per-category counts, `All` first.
    pub fn category_counts(&self) -> Vec<(CategoryFilter, usize)> {
        category_counts(catalog::products())
    }
}

/// The "N products found" line above the grid.
pub fn result_summary(count: usize) -> String {
    if count == 1 {
        "1 product found".to_string()
    } else {
        format!("{count} products found")
    }
}

/// The quick-view modal's "Order via WhatsApp" deep link.
pub fn order_link(product: &Product) -> String {
    whatsapp_url(&order_message(product))
}

/// Decodes a query-string value: `+` means space, then percent-escapes.
/// Invalid escape sequences decode lossily rather than failing; a deep
/// link is never an error surface.
fn decode_query_value(raw: &str) -> String {
    let plus_decoded = raw.replace('+', " ");
    percent_decode_str(&plus_decoded).decode_utf8_lossy().into_owned()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use gemak_core::ProductCategory;

    #[test]
    fn test_from_query_preselects_category() {
        let view = ShopView::from_query("cat=CCTV+Cameras");
        assert_eq!(
            view.filter().category,
            CategoryFilter::Only(ProductCategory::CctvCameras)
        );

        let view = ShopView::from_query("cat=Self+Defense");
        assert_eq!(
            view.filter().category,
            CategoryFilter::Only(ProductCategory::SelfDefense)
        );
    }

    #[test]
    fn test_from_query_percent_escapes() {
        let view = ShopView::from_query("cat=CCTV%20Cameras");
        assert_eq!(
            view.filter().category,
            CategoryFilter::Only(ProductCategory::CctvCameras)
        );
    }

    #[test]
    fn test_from_query_unknown_category_falls_back_to_all() {
        let view = ShopView::from_query("cat=Drones");
        assert_eq!(view.filter().category, CategoryFilter::All);

        let view = ShopView::from_query("");
        assert_eq!(view.filter().category, CategoryFilter::All);
    }

    #[test]
    fn test_mutators_and_clear() {
        let mut view = ShopView::new();
        view.set_category(CategoryFilter::Only(ProductCategory::Footwear));
        view.set_search("boots");
        view.set_sort(SortKey::PriceLow);
        view.set_price_range(Money::from_dollars(10), Money::from_dollars(40));

        assert_eq!(view.results().len(), 2);

        view.clear_filters();
        assert_eq!(view.filter(), &ProductFilter::default());
        assert_eq!(view.results().len(), catalog::products().len());
    }

    #[test]
    fn test_results_shop_scenario() {
        let mut view = ShopView::from_query("cat=CCTV+Cameras");
        view.set_search("dome");
        view.set_price_range(Money::zero(), Money::from_dollars(50));

        let results = view.results();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Dahua Dome Camera 4MP");
    }

    #[test]
    fn test_result_summary_pluralization() {
        assert_eq!(result_summary(0), "0 products found");
        assert_eq!(result_summary(1), "1 product found");
        assert_eq!(result_summary(13), "13 products found");
    }

    #[test]
    fn test_order_link_embeds_product() {
        let dahua = catalog::products().iter().find(|p| p.id == 2).unwrap();
        let url = order_link(dahua);
        assert!(url.starts_with("https://wa.me/263773910305?text="));
        assert!(url.contains("Dahua%20Dome%20Camera%204MP"));
    }

    #[test]
    fn test_category_counts_match_sidebar() {
        let view = ShopView::new();
        let counts = view.category_counts();
        assert_eq!(counts[0], (CategoryFilter::All, 13));
        assert!(counts
            .iter()
            .any(|&(f, n)| f == CategoryFilter::Only(ProductCategory::CctvCameras) && n == 5));
    }
}
