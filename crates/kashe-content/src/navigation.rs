//! Header and footer navigation.

use kashe_core::{ContactKind, Route};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub href: String,
    pub description: Option<String>,
}

impl NavItem {
    pub fn new(title: &str, route: Route) -> Self {
        Self {
            title: title.to_string(),
            href: route.href(),
            description: None,
        }
    }

    /// Link outside the routed page surface.
    pub fn external(title: &str, href: &str) -> Self {
        Self {
            title: title.to_string(),
            href: href.to_string(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Whether this item should be highlighted for the current route.
    pub fn is_active(&self, current: &Route) -> bool {
        let current = current.href();
        let path = current.split('?').next().unwrap_or_default();
        let own = self.href.split('?').next().unwrap_or_default();
        if own == "/" {
            return path == "/";
        }
        path == own || path.starts_with(&format!("{}/", own))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FooterColumn {
    pub title: String,
    pub links: Vec<NavItem>,
}

impl FooterColumn {
    fn new(title: &str, links: Vec<NavItem>) -> Self {
        Self {
            title: title.to_string(),
            links,
        }
    }
}

/// Site navigation menus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    pub main: Vec<NavItem>,
    pub footer: Vec<FooterColumn>,
}

impl Default for Navigation {
    fn default() -> Self {
        let all_products = Route::Products {
            category: None,
            query: None,
            view: None,
        };
        Self {
            main: vec![
                NavItem::new("Products", all_products)
                    .with_description("Explore our complete range of premium lubricants"),
                NavItem::new("Applications", Route::Applications)
                    .with_description("Solutions for every industry and use case"),
                NavItem::new("About", Route::About)
                    .with_description("Learn about our heritage and commitment to excellence"),
                NavItem::new("Resources", Route::Resources { query: None })
                    .with_description("Technical data sheets, guides, and documentation"),
                NavItem::new("Contact", Route::Contact { kind: ContactKind::General })
                    .with_description("Get in touch with our team"),
            ],
            footer: vec![
                FooterColumn::new(
                    "Products",
                    vec![
                        NavItem::new("Engine Oils", Route::products_in("engine-oils")),
                        NavItem::new("Transmission Fluids", Route::products_in("transmission")),
                        NavItem::new("Industrial Lubricants", Route::products_in("industrial")),
                        NavItem::new("Specialty Products", Route::products_in("specialty")),
                    ],
                ),
                FooterColumn::new(
                    "Company",
                    vec![
                        NavItem::new("About Us", Route::About),
                        NavItem::new("Applications", Route::Applications),
                        NavItem::new("Resources", Route::Resources { query: None }),
                        NavItem::new("Contact", Route::Contact { kind: ContactKind::General }),
                    ],
                ),
                FooterColumn::new(
                    "Support",
                    vec![
                        NavItem::new("Technical Support", Route::Contact { kind: ContactKind::General }),
                        NavItem::new("Find a Distributor", Route::Contact { kind: ContactKind::Distributor }),
                        NavItem::new("Request a Quote", Route::Contact { kind: ContactKind::Quote }),
                        NavItem::new("Data Sheets", Route::Resources { query: None }),
                    ],
                ),
                FooterColumn::new(
                    "Legal",
                    vec![
                        NavItem::external("Privacy Policy", "/privacy"),
                        NavItem::external("Terms of Service", "/terms"),
                    ],
                ),
            ],
        }
    }
}
