//! The page surface reachable by path.

use serde::{Deserialize, Serialize};

use crate::query::{decode, encode_query, QueryParams};

/// Which contact form configuration a `/contact` visit asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContactKind {
    /// Plain "get in touch" form.
    #[default]
    General,
    /// Quote request; asks for products of interest.
    Quote,
    /// Distributor enquiry; asks for a region.
    Distributor,
}

impl ContactKind {
    /// Parse from the `type` query value. Unknown values fall back to `General`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("quote") => Self::Quote,
            Some("distributor") => Self::Distributor,
            _ => Self::General,
        }
    }

    /// Query value, `None` for the general form.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            Self::General => None,
            Self::Quote => Some("quote"),
            Self::Distributor => Some("distributor"),
        }
    }
}

/// A parsed page route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// `/`
    Home,
    /// `/about`
    About,
    /// `/products?category=..&q=..&view=..`
    Products {
        category: Option<String>,
        query: Option<String>,
        view: Option<String>,
    },
    /// `/products/{slug}`
    Product { slug: String },
    /// `/applications`
    Applications,
    /// `/contact?type=..`
    Contact { kind: ContactKind },
    /// `/resources?q=..`
    Resources { query: Option<String> },
    /// Anything else.
    NotFound { path: String },
}

impl Route {
    /// Parse a path with an optional query string.
    pub fn parse(path_and_query: &str) -> Self {
        let (path, raw_query) = match path_and_query.split_once('?') {
            Some((p, q)) => (p, q),
            None => (path_and_query, ""),
        };
        // Fragments never reach the router but strip them anyway.
        let path = path.split('#').next().unwrap_or_default();
        let query = QueryParams::parse(raw_query.split('#').next().unwrap_or_default());

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Home,
            ["about"] => Route::About,
            ["products"] => Route::Products {
                category: query.get_non_empty("category").map(String::from),
                query: query.get_non_empty("q").map(String::from),
                view: query.get_non_empty("view").map(String::from),
            },
            ["products", slug] => Route::Product {
                slug: decode(slug),
            },
            ["applications"] => Route::Applications,
            ["contact"] => Route::Contact {
                kind: ContactKind::from_query(query.get("type")),
            },
            ["resources"] => Route::Resources {
                query: query.get_non_empty("q").map(String::from),
            },
            _ => Route::NotFound {
                path: path.to_string(),
            },
        }
    }

    /// Link target for this route.
    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::About => "/about".to_string(),
            Route::Products {
                category,
                query,
                view,
            } => format!(
                "/products{}",
                encode_query(&[
                    ("category", category.as_deref()),
                    ("q", query.as_deref()),
                    ("view", view.as_deref()),
                ])
            ),
            Route::Product { slug } => format!("/products/{}", urlencoding::encode(slug)),
            Route::Applications => "/applications".to_string(),
            Route::Contact { kind } => {
                format!("/contact{}", encode_query(&[("type", kind.as_query())]))
            }
            Route::Resources { query } => {
                format!("/resources{}", encode_query(&[("q", query.as_deref())]))
            }
            Route::NotFound { path } => path.clone(),
        }
    }

    /// Short page name used for log correlation.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Products { .. } => "products",
            Route::Product { .. } => "product",
            Route::Applications => "applications",
            Route::Contact { .. } => "contact",
            Route::Resources { .. } => "resources",
            Route::NotFound { .. } => "not-found",
        }
    }

    /// Products listing filtered to one category.
    pub fn products_in(category: impl Into<String>) -> Self {
        Route::Products {
            category: Some(category.into()),
            query: None,
            view: None,
        }
    }

    /// Check if this route renders the 404 page.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_routes() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/about"), Route::About);
        assert_eq!(Route::parse("/about/"), Route::About);
        assert_eq!(Route::parse("/applications"), Route::Applications);
    }

    #[test]
    fn test_products_query() {
        let route = Route::parse("/products?category=transmission&q=atf&view=list");
        assert_eq!(
            route,
            Route::Products {
                category: Some("transmission".to_string()),
                query: Some("atf".to_string()),
                view: Some("list".to_string()),
            }
        );
        assert_eq!(
            Route::parse("/products?category="),
            Route::Products {
                category: None,
                query: None,
                view: None,
            }
        );
    }

    #[test]
    fn test_product_detail() {
        assert_eq!(
            Route::parse("/products/kashe-ultra-0w-20"),
            Route::Product {
                slug: "kashe-ultra-0w-20".to_string()
            }
        );
    }

    #[test]
    fn test_contact_kinds() {
        assert_eq!(
            Route::parse("/contact?type=quote"),
            Route::Contact {
                kind: ContactKind::Quote
            }
        );
        assert_eq!(
            Route::parse("/contact?type=distributor"),
            Route::Contact {
                kind: ContactKind::Distributor
            }
        );
        assert_eq!(
            Route::parse("/contact?type=bogus"),
            Route::Contact {
                kind: ContactKind::General
            }
        );
    }

    #[test]
    fn test_not_found() {
        assert!(Route::parse("/products/a/b").is_not_found());
        assert!(Route::parse("/privacy").is_not_found());
    }

    #[test]
    fn test_href_round_trip() {
        let routes = vec![
            Route::Home,
            Route::About,
            Route::products_in("engine-oils"),
            Route::Products {
                category: None,
                query: Some("racing oil".to_string()),
                view: Some("list".to_string()),
            },
            Route::Product {
                slug: "kashe-atf-pro".to_string(),
            },
            Route::Applications,
            Route::Contact {
                kind: ContactKind::General,
            },
            Route::Contact {
                kind: ContactKind::Quote,
            },
            Route::Resources { query: None },
        ];

        for route in routes {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }

    #[test]
    fn test_hrefs() {
        assert_eq!(Route::products_in("specialty").href(), "/products?category=specialty");
        assert_eq!(
            Route::Contact {
                kind: ContactKind::Distributor
            }
            .href(),
            "/contact?type=distributor"
        );
    }
}
