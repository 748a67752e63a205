//! The in-memory catalog.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use crate::catalog::{seed, Category, Product};
use crate::error::CatalogError;
use crate::search::{CatalogFilter, Facet, FilteredView};

/// Read-only product and category tables.
///
/// Records keep their table order for scans; slug lookups go through an
/// index built at load time.
#[derive(Debug, Clone)]
pub struct Catalog {
    categories: Vec<Category>,
    products: Vec<Product>,
    product_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

static BUILTIN: OnceLock<Catalog> = OnceLock::new();

impl Catalog {
    /// Build a catalog, checking slug uniqueness and category references.
    pub fn new(categories: Vec<Category>, products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !category.slug.is_url_safe() {
                return Err(CatalogError::InvalidSlug(category.slug.to_string()));
            }
            if !seen.insert(category.slug.as_str()) {
                return Err(CatalogError::DuplicateCategory(category.slug.to_string()));
            }
        }

        let mut seen_products = HashSet::new();
        for product in &products {
            if !product.slug.is_url_safe() {
                return Err(CatalogError::InvalidSlug(product.slug.to_string()));
            }
            if !seen_products.insert(product.slug.as_str()) {
                return Err(CatalogError::DuplicateProduct(product.slug.to_string()));
            }
            if !seen.contains(product.category_slug.as_str()) {
                return Err(CatalogError::UnknownCategory {
                    product: product.slug.to_string(),
                    category: product.category_slug.to_string(),
                });
            }
        }

        Ok(Self::index(categories, products))
    }

    fn index(categories: Vec<Category>, products: Vec<Product>) -> Self {
        let product_index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.to_string(), i))
            .collect();
        let category_index = categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.slug.to_string(), i))
            .collect();

        Self {
            categories,
            products,
            product_index,
            category_index,
        }
    }

    /// The built-in Kashe Energy catalog, loaded on first use.
    pub fn builtin() -> &'static Catalog {
        BUILTIN.get_or_init(|| Self::index(seed::categories(), seed::products()))
    }

    /// All products in table order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories in table order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look a product up by slug.
    pub fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.product_index.get(slug).map(|&i| &self.products[i])
    }

    /// Like [`product_by_slug`](Self::product_by_slug), for `?` callers.
    pub fn require_product(&self, slug: &str) -> Result<&Product, CatalogError> {
        self.product_by_slug(slug)
            .ok_or_else(|| CatalogError::ProductNotFound(slug.to_string()))
    }

    pub fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.category_index.get(slug).map(|&i| &self.categories[i])
    }

    /// Products in a category, in table order. Unknown slugs yield nothing.
    pub fn products_by_category(&self, category_slug: &str) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_slug == category_slug)
            .collect()
    }

    /// Featured products, in table order.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Each category with its product count.
    pub fn category_counts(&self) -> Vec<(&Category, usize)> {
        self.categories
            .iter()
            .map(|c| {
                let count = self
                    .products
                    .iter()
                    .filter(|p| p.category_slug == c.slug)
                    .count();
                (c, count)
            })
            .collect()
    }

    /// Other products from the same category, at most `limit`.
    pub fn related_products(&self, product: &Product, limit: usize) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| p.category_slug == product.category_slug && p.slug != product.slug)
            .take(limit)
            .collect()
    }

    /// Products offering a downloadable datasheet.
    pub fn products_with_datasheets(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.has_datasheet()).collect()
    }

    /// Derive the visible products for a filter state.
    pub fn view(&self, filter: &CatalogFilter) -> FilteredView<'_> {
        filter.apply(self)
    }

    /// Category facet for the category cards; `selected` marks the active one.
    pub fn category_facet(&self, selected: Option<&str>) -> Facet {
        let mut facet = Facet::new("Category", "category");
        for (category, count) in self.category_counts() {
            facet.add_value(
                category.slug.as_str(),
                category.name.as_str(),
                count,
                selected == Some(category.slug.as_str()),
            );
        }
        facet
    }
}
