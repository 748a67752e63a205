//! Search module.
//!
//! Contains the product filters, the products page filter state and the
//! derived views.

mod filter;
mod query;
mod results;

pub use filter::{apply_filters, filter_products, Filter};
pub use query::{CatalogFilter, ViewMode};
pub use results::{Facet, FacetValue, FilteredView};
