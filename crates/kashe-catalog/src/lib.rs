//! Product catalog for the Kashe Energy website.
//!
//! This crate provides the read-only lubricant catalog and the pure
//! functions pages derive their views from:
//!
//! - **Catalog**: Products, categories, lookups by slug and category
//! - **Search**: Category/text filters, page filter state, filtered views
//!
//! # Example
//!
//! ```rust
//! use kashe_catalog::prelude::*;
//!
//! let catalog = Catalog::builtin();
//! let ultra = catalog.product_by_slug("kashe-ultra-0w-20").unwrap();
//! assert!(ultra.featured);
//!
//! let mut filter = CatalogFilter::new();
//! filter.select_category("transmission");
//! let view = catalog.view(&filter);
//! assert_eq!(view.len(), 2);
//! ```

pub mod error;
pub mod ids;

pub mod catalog;
pub mod search;

pub use catalog::{
    featured_products, product_by_slug, products_by_category, Catalog, Category, Product,
    SpecSheet,
};
pub use error::CatalogError;
pub use ids::*;
pub use search::{filter_products, CatalogFilter, Facet, FacetValue, Filter, FilteredView, ViewMode};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::*;

    // Catalog
    pub use crate::catalog::{
        featured_products, product_by_slug, products_by_category, Catalog, Category, Product,
        SpecSheet,
    };

    // Search
    pub use crate::search::{
        filter_products, CatalogFilter, Facet, FacetValue, Filter, FilteredView, ViewMode,
    };
}
