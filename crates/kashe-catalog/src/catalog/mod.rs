//! Product catalog module.
//!
//! Contains the product and category types, the indexed [`Catalog`] and the
//! built-in product line. The free functions query [`Catalog::builtin`].

mod category;
mod product;
mod seed;
mod store;

pub use category::Category;
pub use product::{Product, SpecSheet};
pub use store::Catalog;

/// Look a built-in product up by slug.
pub fn product_by_slug(slug: &str) -> Option<&'static Product> {
    Catalog::builtin().product_by_slug(slug)
}

/// Built-in products in a category, in table order.
pub fn products_by_category(category_slug: &str) -> Vec<&'static Product> {
    Catalog::builtin().products_by_category(category_slug)
}

/// Built-in featured products, in table order.
pub fn featured_products() -> Vec<&'static Product> {
    Catalog::builtin().featured_products()
}
