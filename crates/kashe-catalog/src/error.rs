//! Catalog error types.

use thiserror::Error;

/// Errors that can occur building or querying the catalog.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Category not found.
    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    /// Two products share a slug.
    #[error("Duplicate product slug: {0}")]
    DuplicateProduct(String),

    /// Two categories share a slug.
    #[error("Duplicate category slug: {0}")]
    DuplicateCategory(String),

    /// A product references a category that does not exist.
    #[error("Product {product} references unknown category {category}")]
    UnknownCategory { product: String, category: String },

    /// A slug contains characters that are not URL-safe.
    #[error("Slug is not URL-safe: {0:?}")]
    InvalidSlug(String),

    /// Unknown view mode name.
    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),
}
