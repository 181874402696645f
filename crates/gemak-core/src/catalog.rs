//! # Static Catalog
//!
//! The site's content dataset: products, services, branches, gallery,
//! testimonials, headline stats, the keyword-search index, and the business
//! identity block.
//!
//! ## Load Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Load Model                               │
//! │                                                                         │
//! │  First accessor call ──► LazyLock builds the Vec once ──► &'static [T] │
//! │                                                                         │
//! │  Records are immutable: created at load time, never mutated,           │
//! │  never deleted. Every query operates on borrowed slices.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::LazyLock;

use crate::money::Money;
use crate::types::{
    Badge, Branch, GalleryItem, ImageRef, Product, ProductCategory, Rating, SearchEntry, Service,
    SiteInfo, SiteSection, SocialLinks, Stat, Testimonial,
};

// =============================================================================
// Accessors
// =============================================================================

/// Business identity: name, tagline, phone lines, email, address, socials.
pub fn site_info() -> &'static SiteInfo {
    &SITE_INFO
}

/// The full product catalog, in authoring order.
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

/// All service offerings, in page order.
pub fn services() -> &'static [Service] {
    &SERVICES
}

/// Looks up a service by its slug (the `/services#<slug>` anchor).
pub fn service_by_slug(slug: &str) -> Option<&'static Service> {
    SERVICES.iter().find(|s| s.slug == slug)
}

/// All branch locations. Exactly one is the headquarters.
pub fn branches() -> &'static [Branch] {
    &BRANCHES
}

/// Gallery of completed installations.
pub fn gallery() -> &'static [GalleryItem] {
    &GALLERY
}

/// Customer testimonials for the rotating carousel.
pub fn testimonials() -> &'static [Testimonial] {
    &TESTIMONIALS
}

/// Headline statistics for the home page counters.
pub fn stats() -> &'static [Stat] {
    &STATS
}

/// The keyword-search index, in authoring order.
pub fn search_index() -> &'static [SearchEntry] {
    &SEARCH_INDEX
}

// =============================================================================
// Builders
// =============================================================================
// Small private constructors keep the dataset below readable; the records
// themselves are plain structs.

fn product(
    id: u32,
    name: &str,
    category: ProductCategory,
    price: i64,
    old_price: Option<i64>,
    image: &str,
    badge: Option<Badge>,
    rating_tenths: u8,
) -> Product {
    Product {
        id,
        name: name.to_string(),
        category,
        price: Money::from_dollars(price),
        old_price: old_price.map(Money::from_dollars),
        image: ImageRef::new(image),
        badge,
        rating: Rating::from_tenths(rating_tenths),
    }
}

fn service(
    slug: &str,
    title: &str,
    subtitle: &str,
    description: &str,
    features: [&str; 6],
    image: &str,
    icon: &str,
) -> Service {
    Service {
        slug: slug.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        description: description.to_string(),
        features: features.iter().map(|f| f.to_string()).collect(),
        image: ImageRef::new(image),
        icon: icon.to_string(),
    }
}

fn entry(title: &str, section: SiteSection, path: &str, keywords: &str) -> SearchEntry {
    SearchEntry {
        title: title.to_string(),
        section,
        path: path.to_string(),
        keywords: keywords.to_string(),
    }
}

// =============================================================================
// Site Info
// =============================================================================

static SITE_INFO: LazyLock<SiteInfo> = LazyLock::new(|| SiteInfo {
    name: "Gemak Security Shop".to_string(),
    tagline: "Harnessing Technology For Your Convenience".to_string(),
    phone: vec![
        "+263 773 910 305".to_string(),
        "+263 715 015 250".to_string(),
        "+263 864 429 6356".to_string(),
    ],
    email: "info@gemaksecurity.co.zw".to_string(),
    website: "www.gemaksecurity.co.zw".to_string(),
    address: "59 Central Avenue, Harare, Zimbabwe".to_string(),
    social: SocialLinks {
        facebook: "https://facebook.com/gemaksecurity".to_string(),
        instagram: "https://instagram.com/gemaksecurity".to_string(),
        twitter: "https://twitter.com/gemaksecurity".to_string(),
        whatsapp: "https://wa.me/263773910305".to_string(),
        linkedin: "https://linkedin.com/company/gemaksecurity".to_string(),
    },
});

// =============================================================================
// Products
// =============================================================================

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(|| {
    use Badge::*;
    use ProductCategory::*;

    vec![
        // CCTV Cameras
        product(
            1,
            "Hikvision Bullet Camera",
            CctvCameras,
            45,
            Some(55),
            "https://images.unsplash.com/photo-1557597774-9d273605dfa9?w=400&q=80",
            Some(BestSeller),
            48,
        ),
        product(2, "Dahua Dome Camera 4MP", CctvCameras, 38, Some(48), "3.jpg", Some(New), 46),
        product(
            3,
            "PTZ Camera 360°",
            CctvCameras,
            120,
            Some(150),
            "https://images.unsplash.com/photo-1589935447067-5531094415d1?w=400&q=80",
            Some(Premium),
            49,
        ),
        product(5, "8-Channel NVR Kit", CctvCameras, 180, Some(220), "/5.jpg", Some(Popular), 48),
        product(
            6,
            "Spy Camera Clock",
            CctvCameras,
            25,
            None,
            "https://images.unsplash.com/photo-1563396983906-b3795482a59a?w=400&q=80",
            None,
            43,
        ),
        // Accessories
        product(
            9,
            "1TB Hard Drive",
            Accessories,
            40,
            Some(50),
            "https://images.unsplash.com/photo-1531492746076-161ca9bcad58?w=400&q=80",
            Some(Sale),
            47,
        ),
        // Self Defense
        product(13, "TW 1502 Type Taser", SelfDefense, 10, None, "6.jpg", Some(Popular), 43),
        product(15, "Tactical Stun Flashlight", SelfDefense, 20, None, "1.jpg", Some(Hot), 45),
        product(16, "Shooting Taser", SelfDefense, 65, Some(80), "2.webp", Some(Premium), 48),
        // Footwear
        product(17, "TTP Security Boots", Footwear, 25, None, "12.webp", None, 45),
        product(18, "Pioneer Security Boots", Footwear, 35, None, "13.png", Some(BestSeller), 47),
        // Communication
        product(
            21,
            "Baofeng UV-5R Radio",
            Communication,
            25,
            Some(35),
            "14.webp",
            Some(BestSeller),
            48,
        ),
        // Gate Automation
        product(26, "Video Intercom System", GateAutomation, 85, None, "9.webp", None, 46),
    ]
});

// =============================================================================
// Services
// =============================================================================

static SERVICES: LazyLock<Vec<Service>> = LazyLock::new(|| {
    vec![
        service(
            "cctv",
            "CCTV & Surveillance",
            "Eyes That Never Sleep",
            "Complete CCTV installation and monitoring solutions for homes, businesses, and \
             commercial properties. From HD cameras to AI-powered analytics, we provide \
             end-to-end surveillance systems.",
            [
                "HD & 4K Camera Systems",
                "Remote Viewing & Mobile Apps",
                "Night Vision Technology",
                "AI Motion Detection",
                "Cloud & Local Storage",
                "24/7 Monitoring",
            ],
            "https://images.unsplash.com/photo-1557597774-9d273605dfa9?w=800&q=80",
            "Camera",
        ),
        service(
            "alarms",
            "Alarm Systems",
            "Instant Response, Total Protection",
            "State-of-the-art alarm systems for residential and commercial properties. Our \
             systems include door/window sensors, motion detectors, and instant alert \
             notifications.",
            [
                "Wireless Alarm Panels",
                "Door & Window Sensors",
                "Motion Detectors",
                "Smoke & Gas Detection",
                "Mobile Alerts",
                "Armed Response Integration",
            ],
            "10.webp",
            "ShieldAlert",
        ),
        service(
            "gate-automation",
            "Gate Automation & Intercoms",
            "Smart Access Control",
            "Automated gate systems and intercom solutions for seamless property access \
             control. Sliding gates, swing gates, and boom barriers with video intercom \
             integration.",
            [
                "Sliding Gate Motors",
                "Swing Gate Automation",
                "Video Intercoms",
                "Keypad Access",
                "Remote Control",
                "Boom Barriers",
            ],
            "9.webp",
            "DoorOpen",
        ),
        service(
            "electric-fence",
            "Electric Fencing",
            "Perimeter Defense Systems",
            "High-voltage electric fence installations for maximum perimeter security. \
             Energizers, monitoring systems, and professional installation for residential \
             and commercial properties.",
            [
                "High-Voltage Energizers",
                "Perimeter Monitoring",
                "Alarm Integration",
                "Lightning Protection",
                "Battery Backup",
                "Zone Management",
            ],
            "7.jpg",
            "Zap",
        ),
        service(
            "guard-services",
            "Guard Equipment & Services",
            "Professional Security Personnel",
            "Complete guard equipment supply including uniforms, boots, communication \
             devices, and tactical gear. We equip security teams with the best tools for \
             the job.",
            [
                "Security Uniforms",
                "Combat & Patrol Boots",
                "Two-Way Radios",
                "Tactical Flashlights",
                "Duty Belts & Accessories",
                "Reflective Gear",
            ],
            "11.jpg",
            "Shield",
        ),
        service(
            "smart-home",
            "Smart Home Security",
            "Connected & Intelligent Living",
            "Transform your home with integrated smart security. Control cameras, alarms, \
             locks, and lights from a single app. Seamless automation for modern living.",
            [
                "Smart Locks",
                "Automated Lighting",
                "App Control",
                "Voice Integration",
                "Scheduled Routines",
                "Energy Monitoring",
            ],
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=800&q=80",
            "Home",
        ),
    ]
});

// =============================================================================
// Branches
// =============================================================================

static BRANCHES: LazyLock<Vec<Branch>> = LazyLock::new(|| {
    let branch = |city: &str, address: &str, is_hq: bool| Branch {
        city: city.to_string(),
        address: address.to_string(),
        is_hq,
    };

    vec![
        branch("Harare", "59 Central Avenue", true),
        branch("Chitungwiza", "Chitungwiza Branch", false),
        branch("Bulawayo", "Bulawayo Branch", false),
        branch("Gweru", "Gweru Branch", false),
        branch("Mutare", "Mutare Branch", false),
        branch("Chinhoyi", "Chinhoyi Branch", false),
        branch("Bindura", "Bindura Branch", false),
        branch("Masvingo", "Masvingo Branch", false),
        branch("Kariba", "Kariba Branch", false),
    ]
});

// =============================================================================
// Gallery
// =============================================================================

static GALLERY: LazyLock<Vec<GalleryItem>> = LazyLock::new(|| {
    let item = |id: u32, title: &str, category: &str, image: &str| GalleryItem {
        id,
        title: title.to_string(),
        category: category.to_string(),
        image: ImageRef::new(image),
    };

    vec![
        item(
            1,
            "CCTV Installation — Commercial Complex",
            "CCTV",
            "https://images.unsplash.com/photo-1557597774-9d273605dfa9?w=600&q=80",
        ),
        item(
            2,
            "Electric Fence — Residential Estate",
            "Electric Fence",
            "https://images.unsplash.com/photo-1504893524553-b855bce32c67?w=600&q=80",
        ),
        item(
            3,
            "Gate Automation — Office Park",
            "Gate Automation",
            "https://images.unsplash.com/photo-1558618666-fcd25c85f82e?w=600&q=80",
        ),
        item(
            4,
            "Alarm System — Luxury Home",
            "Alarms",
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=600&q=80",
        ),
        item(
            5,
            "CCTV Network — Shopping Mall",
            "CCTV",
            "https://images.unsplash.com/photo-1585771724684-38269d6639fd?w=600&q=80",
        ),
        item(
            6,
            "Smart Home Integration",
            "Smart Home",
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=600&q=80",
        ),
        item(
            7,
            "Perimeter Security — Industrial",
            "Electric Fence",
            "https://images.unsplash.com/photo-1504893524553-b855bce32c67?w=600&q=80",
        ),
        item(
            8,
            "Guard Equipment Supply",
            "Guard Services",
            "https://images.unsplash.com/photo-1521791055366-0d553872125f?w=600&q=80",
        ),
        item(
            9,
            "Access Control — Corporate",
            "Gate Automation",
            "https://images.unsplash.com/photo-1558618666-fcd25c85f82e?w=600&q=80",
        ),
        item(
            10,
            "Surveillance Upgrade — Hotel",
            "CCTV",
            "https://images.unsplash.com/photo-1589935447067-5531094415d1?w=600&q=80",
        ),
        item(
            11,
            "Smart Lock Installation",
            "Smart Home",
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=600&q=80",
        ),
        item(
            12,
            "Guard Deployment — Event",
            "Guard Services",
            "https://images.unsplash.com/photo-1521791055366-0d553872125f?w=600&q=80",
        ),
    ]
});

// =============================================================================
// Testimonials
// =============================================================================

static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(|| {
    let quote = |name: &str, role: &str, text: &str, rating: u8| Testimonial {
        name: name.to_string(),
        role: role.to_string(),
        text: text.to_string(),
        rating,
    };

    vec![
        quote(
            "Tatenda M.",
            "Business Owner, Harare",
            "Gemak transformed our office security. The CCTV system is crystal clear and I \
             can monitor everything from my phone. Professional installation team!",
            5,
        ),
        quote(
            "Grace K.",
            "Homeowner, Borrowdale",
            "The gate automation and intercom system they installed is fantastic. My family \
             feels much safer now. Highly recommend their services.",
            5,
        ),
        quote(
            "David C.",
            "Hotel Manager, Bulawayo",
            "We equipped our entire security team through Gemak. From boots to radios, \
             everything is top quality. Their prices are unbeatable.",
            5,
        ),
        quote(
            "Rumbidzai N.",
            "Farm Owner, Chinhoyi",
            "The electric fencing and alarm system has been a game changer for our farm \
             security. The team was professional and thorough.",
            4,
        ),
        quote(
            "Kudakwashe T.",
            "Property Developer",
            "We use Gemak for all our developments. Consistent quality, competitive pricing, \
             and they always deliver on time.",
            5,
        ),
        quote(
            "Sarah M.",
            "School Administrator",
            "The complete surveillance system for our school campus was installed \
             efficiently. Parents feel safer knowing we have 24/7 monitoring.",
            5,
        ),
    ]
});

// =============================================================================
// Stats
// =============================================================================

static STATS: LazyLock<Vec<Stat>> = LazyLock::new(|| {
    let stat = |value: &str, label: &str| Stat {
        value: value.to_string(),
        label: label.to_string(),
    };

    vec![
        stat("10K+", "Installations"),
        stat("9", "Branches"),
        stat("15+", "Years Experience"),
        stat("98%", "Client Satisfaction"),
    ]
});

// =============================================================================
// Search Index
// =============================================================================

static SEARCH_INDEX: LazyLock<Vec<SearchEntry>> = LazyLock::new(|| {
    use SiteSection::*;

    vec![
        entry(
            "CCTV & Surveillance",
            Services,
            "/services#cctv",
            "cctv camera surveillance monitoring security cameras hikvision dahua",
        ),
        entry(
            "Alarm Systems",
            Services,
            "/services#alarms",
            "alarm systems security alarms door sensor motion detector",
        ),
        entry(
            "Gate Automation",
            Services,
            "/services#gate-automation",
            "gate automation intercom sliding gate swing gate motor",
        ),
        entry(
            "Electric Fencing",
            Services,
            "/services#electric-fence",
            "electric fence fencing perimeter energizer",
        ),
        entry(
            "Guard Equipment",
            Services,
            "/services#guard-services",
            "guard equipment uniform boots security personnel",
        ),
        entry(
            "Smart Home Security",
            Services,
            "/services#smart-home",
            "smart home security automation locks lighting",
        ),
        entry("Shop", Shop, "/shop", "shop buy products purchase equipment"),
        entry(
            "CCTV Cameras",
            Shop,
            "/shop?cat=CCTV+Cameras",
            "cameras cctv dvr nvr bullet dome ptz spy",
        ),
        entry(
            "Self Defense Products",
            Shop,
            "/shop?cat=Self+Defense",
            "taser self defense stun flashlight protection",
        ),
        entry(
            "Security Footwear",
            Shop,
            "/shop?cat=Footwear",
            "boots shoes combat security footwear canvas pioneer",
        ),
        entry(
            "Communication Devices",
            Shop,
            "/shop?cat=Communication",
            "radio walkie talkie baofeng two-way communication",
        ),
        entry("Gallery", Gallery, "/gallery", "gallery portfolio projects installations work"),
        entry(
            "Contact Us",
            Contact,
            "/contact",
            "contact phone email address location directions",
        ),
        entry(
            "About Gemak Security",
            About,
            "/about",
            "about us company history mission vision team",
        ),
        entry(
            "Harare Branch",
            Branches,
            "/contact#branches",
            "harare branch headquarters central avenue",
        ),
        entry("Bulawayo Branch", Branches, "/contact#branches", "bulawayo branch"),
        entry(
            "Accessories",
            Shop,
            "/shop?cat=Accessories",
            "accessories cables hard drive junction box power supply hdmi cat5 cat6",
        ),
    ]
});

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_product_ids_unique() {
        let mut seen = HashSet::new();
        for p in products() {
            assert!(seen.insert(p.id), "duplicate product id {}", p.id);
        }
    }

    #[test]
    fn test_at_most_one_hq_branch() {
        let hq_count = branches().iter().filter(|b| b.is_hq).count();
        assert_eq!(hq_count, 1);
        assert_eq!(branches().iter().find(|b| b.is_hq).unwrap().city, "Harare");
    }

    #[test]
    fn test_old_price_always_above_price() {
        for p in products() {
            if let Some(old) = p.old_price {
                assert!(old > p.price, "product {} has old_price <= price", p.id);
            }
        }
    }

    #[test]
    fn test_ratings_in_range() {
        for p in products() {
            assert!(p.rating.is_valid(), "product {} rating out of range", p.id);
        }
        for t in testimonials() {
            assert!((1..=5).contains(&t.rating));
        }
    }

    #[test]
    fn test_service_slugs_unique_and_resolvable() {
        let mut seen = HashSet::new();
        for s in services() {
            assert!(seen.insert(s.slug.as_str()), "duplicate slug {}", s.slug);
            assert!(service_by_slug(&s.slug).is_some());
        }
        assert!(service_by_slug("does-not-exist").is_none());
    }

    #[test]
    fn test_search_index_paths_reference_known_surfaces() {
        for e in search_index() {
            assert!(e.path.starts_with('/'), "path {} is not absolute", e.path);
        }
    }

    #[test]
    fn test_dataset_sizes() {
        assert_eq!(products().len(), 13);
        assert_eq!(services().len(), 6);
        assert_eq!(branches().len(), 9);
        assert_eq!(gallery().len(), 12);
        assert_eq!(testimonials().len(), 6);
        assert_eq!(stats().len(), 4);
        assert_eq!(search_index().len(), 17);
    }

    #[test]
    fn test_site_info_main_phone() {
        assert_eq!(site_info().main_phone(), "+263 773 910 305");
    }
}
