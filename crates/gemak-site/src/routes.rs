//! # Route Surface
//!
//! The site's page routes as a closed enum. This is informational surface,
//! not an API: plain static page routing, plus the one query parameter the
//! shop page accepts (`/shop?cat=...`, handled in
//! [`crate::state::shop`]).

use serde::{Deserialize, Serialize};

/// The site's pages, in navbar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Route {
    Home,
    About,
    Services,
    SecurityServices,
    Shop,
    Gallery,
    Contact,
}

impl Route {
    /// All routes in navbar order.
    pub const ALL: [Route; 7] = [
        Route::Home,
        Route::About,
        Route::Services,
        Route::SecurityServices,
        Route::Shop,
        Route::Gallery,
        Route::Contact,
    ];

    /// The URL path.
    pub const fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::SecurityServices => "/security-services",
            Route::Shop => "/shop",
            Route::Gallery => "/gallery",
            Route::Contact => "/contact",
        }
    }

    /// The navbar label.
    pub const fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Services => "Services",
            Route::SecurityServices => "Security",
            Route::Shop => "Shop",
            Route::Gallery => "Gallery",
            Route::Contact => "Contact",
        }
    }

    /// Resolves a path (query string and fragment ignored) to a route.
    pub fn from_path(path: &str) -> Option<Route> {
        let path = path.split(['?', '#']).next().unwrap_or(path);
        Route::ALL.into_iter().find(|r| r.path() == path)
    }
}
