//! # Domain Types
//!
//! Core domain types for the Gemak catalog engine.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Service      │   │     Branch      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (u32)       │   │  slug (anchor)  │   │  city           │       │
//! │  │  category       │   │  title/subtitle │   │  address        │       │
//! │  │  price (Money)  │   │  features       │   │  is_hq          │       │
//! │  │  rating         │   │  icon           │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Rating       │   │ ProductCategory │   │     Badge       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  tenths (u8)    │   │  CctvCameras    │   │  BestSeller     │       │
//! │  │  48 = 4.8 stars │   │  SelfDefense    │   │  Premium        │       │
//! │  └─────────────────┘   │  ...            │   │  ...            │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All catalog records are immutable: constructed once by the static
//! dataset in [`crate::catalog`], never mutated, never deleted.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Rating
// =============================================================================

/// A star rating in tenths of a star.
///
/// ## Why Tenths?
/// 1 tenth = 0.1 star, so 48 = 4.8 stars.
/// Integer tenths keep rating sorts exact and stable; a float rating would
/// drag partial ordering into every comparator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Rating(u8);

impl Rating {
    /// Maximum rating: 5.0 stars.
    pub const MAX_TENTHS: u8 = 50;

    /// Creates a rating from tenths of a star (48 = 4.8 stars).
    #[inline]
    pub const fn from_tenths(tenths: u8) -> Self {
        Rating(tenths)
    }

    /// Returns the rating in tenths.
    #[inline]
    pub const fn tenths(&self) -> u8 {
        self.0
    }

    /// Number of fully filled stars (floor), for the 5-star row in the UI.
    #[inline]
    pub const fn stars(&self) -> u8 {
        self.0 / 10
    }

    /// Whether the value is inside the valid `[0, 5.0]` range.
    #[inline]
    pub const fn is_valid(&self) -> bool {
        self.0 <= Self::MAX_TENTHS
    }
}

impl fmt::Display for Rating {
    /// Formats as `4.8`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.0 / 10, self.0 % 10)
    }
}

// =============================================================================
// Product Category
// =============================================================================

/// The closed set of shop categories.
///
/// The string form is the display name ("CCTV Cameras"), which is also what
/// the `?cat=` URL parameter and the search keywords use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    CctvCameras,
    Accessories,
    SelfDefense,
    Footwear,
    Communication,
    AlarmSystems,
    GateAutomation,
}

impl ProductCategory {
    /// All categories in sidebar order.
    pub const ALL: [ProductCategory; 7] = [
        ProductCategory::CctvCameras,
        ProductCategory::Accessories,
        ProductCategory::SelfDefense,
        ProductCategory::Footwear,
        ProductCategory::Communication,
        ProductCategory::AlarmSystems,
        ProductCategory::GateAutomation,
    ];

    /// The display name shown in the sidebar and stored in search keywords.
    pub const fn name(&self) -> &'static str {
        match self {
            ProductCategory::CctvCameras => "CCTV Cameras",
            ProductCategory::Accessories => "Accessories",
            ProductCategory::SelfDefense => "Self Defense",
            ProductCategory::Footwear => "Footwear",
            ProductCategory::Communication => "Communication",
            ProductCategory::AlarmSystems => "Alarm Systems",
            ProductCategory::GateAutomation => "Gate Automation",
        }
    }
}

impl fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductCategory {
    type Err = CoreError;

    /// Parses a display name back into a category (exact, case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ProductCategory::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

/// A category filter: either everything or one exact category.
///
/// `All` is a real UI state (the default sidebar row), not the absence of a
/// filter, so it is modelled explicitly instead of `Option<ProductCategory>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ProductCategory),
}

impl CategoryFilter {
    /// Whether a product with the given category passes this filter.
    #[inline]
    pub fn matches(&self, category: ProductCategory) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }

    /// The sidebar label: `"All"` or the category display name.
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(c) => c.name(),
        }
    }
}

// =============================================================================
// Badge
// =============================================================================

/// Promotional badge shown on a product card. Small fixed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Badge {
    BestSeller,
    New,
    Premium,
    Popular,
    Hot,
    Sale,
}

impl Badge {
    pub const fn label(&self) -> &'static str {
        match self {
            Badge::BestSeller => "Best Seller",
            Badge::New => "New",
            Badge::Premium => "Premium",
            Badge::Popular => "Popular",
            Badge::Hot => "Hot",
            Badge::Sale => "Sale",
        }
    }
}

// =============================================================================
// Image Reference
// =============================================================================

/// Reference to a product/service image: a local asset path or a remote URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImageRef(pub String);

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        ImageRef(src.into())
    }

    /// Remote images are fetched over HTTP; local ones resolve against the
    /// site's asset directory.
    pub fn is_remote(&self) -> bool {
        self.0.starts_with("http://") || self.0.starts_with("https://")
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the shop catalog.
///
/// ## Invariants (data-authoring, verified by catalog tests)
/// - `id` is unique across the catalog
/// - `old_price`, when present, is strictly greater than `price`
/// - `rating` is within `[0, 5.0]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique numeric identifier.
    pub id: u32,

    /// Display name shown on the product card.
    pub name: String,

    /// Shop category.
    pub category: ProductCategory,

    /// Current price.
    pub price: Money,

    /// Pre-discount price; present only when the product is discounted.
    pub old_price: Option<Money>,

    /// Card image.
    pub image: ImageRef,

    /// Optional promotional badge.
    pub badge: Option<Badge>,

    /// Star rating.
    pub rating: Rating,
}

impl Product {
    /// Discount percentage against `old_price`, rounded to the nearest
    /// whole percent (the "18% OFF" tag on the card).
    ///
    /// Returns `None` when the product is not discounted.
    pub fn discount_percent(&self) -> Option<u32> {
        let old = self.old_price?.cents();
        if old <= 0 {
            return None;
        }
        let saved = old - self.price.cents();
        Some(((saved * 100 + old / 2) / old) as u32)
    }

    /// Whether the product is currently discounted.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.old_price.is_some()
    }
}

// =============================================================================
// Service
// =============================================================================

/// A service the business offers (CCTV installation, alarms, ...).
///
/// `slug` doubles as the route fragment (`/services#cctv`), which is why it
/// must stay unique and URL-safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    /// Unique slug, used as anchor/route fragment.
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Ordered feature bullet points.
    pub features: Vec<String>,
    pub image: ImageRef,
    /// Icon tag the frontend maps to an icon component.
    pub icon: String,
}

// =============================================================================
// Branch
// =============================================================================

/// A physical branch location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub city: String,
    pub address: String,
    /// At most one branch in the dataset is the headquarters.
    pub is_hq: bool,
}

// =============================================================================
// Testimonial
// =============================================================================

/// A customer testimonial for the rotating home-page carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Testimonial {
    pub name: String,
    pub role: String,
    pub text: String,
    /// Whole stars, 1..=5.
    pub rating: u8,
}

// =============================================================================
// Gallery
// =============================================================================

/// A completed-installation photo in the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct GalleryItem {
    pub id: u32,
    pub title: String,
    /// Free-form gallery category tag (not the shop category enum).
    pub category: String,
    pub image: ImageRef,
}

// =============================================================================
// Search Index
// =============================================================================

/// Which area of the site a search entry points into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SiteSection {
    Services,
    Shop,
    Gallery,
    Contact,
    About,
    Branches,
}

/// An entry in the static keyword-search index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SearchEntry {
    pub title: String,
    pub section: SiteSection,
    /// Route target, e.g. `/services#cctv` or `/shop?cat=CCTV+Cameras`.
    pub path: String,
    /// Free-text keywords matched alongside the title.
    pub keywords: String,
}

// =============================================================================
// Site Info
// =============================================================================

/// Social profile links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    pub facebook: String,
    pub instagram: String,
    pub twitter: String,
    pub whatsapp: String,
    pub linkedin: String,
}

/// Business identity block used by the navbar, footer, and contact page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    /// Ordered phone numbers; the first is the main line.
    pub phone: Vec<String>,
    pub email: String,
    pub website: String,
    pub address: String,
    pub social: SocialLinks,
}

impl SiteInfo {
    /// The main phone line (first entry).
    pub fn main_phone(&self) -> &str {
        &self.phone[0]
    }
}

/// A headline statistic ("10K+ Installations").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Stat {
    pub value: String,
    pub label: String,
}

// =============================================================================
// Inquiry Type
// =============================================================================

/// The fixed list of inquiry kinds offered by the contact form's dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum InquiryType {
    GeneralInquiry,
    CctvInstallation,
    AlarmSystem,
    GateAutomation,
    ElectricFencing,
    SmartHomeSecurity,
    ProductPurchase,
    TechnicalSupport,
    Partnership,
}

impl InquiryType {
    /// All inquiry types in dropdown order.
    pub const ALL: [InquiryType; 9] = [
        InquiryType::GeneralInquiry,
        InquiryType::CctvInstallation,
        InquiryType::AlarmSystem,
        InquiryType::GateAutomation,
        InquiryType::ElectricFencing,
        InquiryType::SmartHomeSecurity,
        InquiryType::ProductPurchase,
        InquiryType::TechnicalSupport,
        InquiryType::Partnership,
    ];

    /// The label shown in the dropdown and embedded in composed messages.
    pub const fn label(&self) -> &'static str {
        match self {
            InquiryType::GeneralInquiry => "General Inquiry",
            InquiryType::CctvInstallation => "CCTV Installation",
            InquiryType::AlarmSystem => "Alarm System",
            InquiryType::GateAutomation => "Gate Automation",
            InquiryType::ElectricFencing => "Electric Fencing",
            InquiryType::SmartHomeSecurity => "Smart Home Security",
            InquiryType::ProductPurchase => "Product Purchase",
            InquiryType::TechnicalSupport => "Technical Support",
            InquiryType::Partnership => "Partnership / B2B",
        }
    }
}

impl fmt::Display for InquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InquiryType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InquiryType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| CoreError::UnknownInquiry(s.to_string()))
    }
}

// =============================================================================
// Contact Form
// =============================================================================

/// The contact form's field values.
///
/// ## Lifecycle
/// Created empty on page load, mutated field-by-field on user input,
/// validated on blur/submit, reset to empty after a successful send.
/// Never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub name: String,
    /// Optional; empty string means not provided.
    pub email: String,
    pub phone: String,
    pub inquiry_type: Option<InquiryType>,
    pub message: String,
}

impl ContactForm {
    /// Resets every field to its initial empty state.
    pub fn reset(&mut self) {
        *self = ContactForm::default();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_display_and_stars() {
        let rating = Rating::from_tenths(48);
        assert_eq!(rating.to_string(), "4.8");
        assert_eq!(rating.stars(), 4);
        assert!(rating.is_valid());

        assert_eq!(Rating::from_tenths(50).stars(), 5);
        assert!(!Rating::from_tenths(51).is_valid());
    }

    #[test]
    fn test_category_round_trip() {
        for cat in ProductCategory::ALL {
            assert_eq!(cat.name().parse::<ProductCategory>().unwrap(), cat);
        }
    }

    #[test]
    fn test_category_parse_is_case_sensitive() {
        assert!("cctv cameras".parse::<ProductCategory>().is_err());
        assert!("Drones".parse::<ProductCategory>().is_err());
    }

    #[test]
    fn test_category_filter_matches() {
        assert!(CategoryFilter::All.matches(ProductCategory::Footwear));
        assert!(CategoryFilter::Only(ProductCategory::Footwear).matches(ProductCategory::Footwear));
        assert!(
            !CategoryFilter::Only(ProductCategory::Footwear).matches(ProductCategory::Accessories)
        );
    }

    #[test]
    fn test_discount_percent_rounds_to_nearest() {
        let product = Product {
            id: 1,
            name: "Hikvision Bullet Camera".to_string(),
            category: ProductCategory::CctvCameras,
            price: Money::from_dollars(45),
            old_price: Some(Money::from_dollars(55)),
            image: ImageRef::new("1.jpg"),
            badge: Some(Badge::BestSeller),
            rating: Rating::from_tenths(48),
        };
        // 1 - 45/55 = 18.18% → 18
        assert_eq!(product.discount_percent(), Some(18));
    }

    #[test]
    fn test_discount_percent_none_without_old_price() {
        let product = Product {
            id: 6,
            name: "Spy Camera Clock".to_string(),
            category: ProductCategory::CctvCameras,
            price: Money::from_dollars(25),
            old_price: None,
            image: ImageRef::new("clock.jpg"),
            badge: None,
            rating: Rating::from_tenths(43),
        };
        assert_eq!(product.discount_percent(), None);
        assert!(!product.is_discounted());
    }

    #[test]
    fn test_product_json_shape() {
        // The frontend payload shape: camelCase keys, numbers for money
        // (cents) and rating (tenths).
        let product = Product {
            id: 1,
            name: "Hikvision Bullet Camera".to_string(),
            category: ProductCategory::CctvCameras,
            price: Money::from_dollars(45),
            old_price: Some(Money::from_dollars(55)),
            image: ImageRef::new("1.jpg"),
            badge: Some(Badge::BestSeller),
            rating: Rating::from_tenths(48),
        };
        let json = serde_json::to_value(&product).unwrap();
        assert_eq!(json["oldPrice"], serde_json::json!(5500));
        assert_eq!(json["category"], serde_json::json!("cctv_cameras"));
        assert_eq!(json["badge"], serde_json::json!("best_seller"));
        assert_eq!(json["rating"], serde_json::json!(48));
    }

    #[test]
    fn test_image_ref_remote_detection() {
        assert!(ImageRef::new("https://images.unsplash.com/photo.jpg").is_remote());
        assert!(!ImageRef::new("3.jpg").is_remote());
        assert!(!ImageRef::new("/5.jpg").is_remote());
    }

    #[test]
    fn test_inquiry_type_round_trip() {
        for t in InquiryType::ALL {
            assert_eq!(t.label().parse::<InquiryType>().unwrap(), t);
        }
        assert!("Unknown".parse::<InquiryType>().is_err());
    }

    #[test]
    fn test_contact_form_reset() {
        let mut form = ContactForm {
            name: "John".to_string(),
            email: String::new(),
            phone: "+263700000000".to_string(),
            inquiry_type: Some(InquiryType::ProductPurchase),
            message: "Need a quote".to_string(),
        };
        form.reset();
        assert_eq!(form, ContactForm::default());
    }
}
