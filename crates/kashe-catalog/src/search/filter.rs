//! Search filter types.

use crate::catalog::Product;
use crate::ids::CategorySlug;
use serde::{Deserialize, Serialize};

/// A predicate over products. A filter list matches when every entry does.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum Filter {
    /// Filter by category slug.
    Category(CategorySlug),
    /// Case-insensitive substring on name or category label.
    Text(String),
    /// Only featured products.
    Featured,
    /// Only products with a datasheet.
    HasDatasheet,
}

impl Filter {
    /// Create a category filter.
    pub fn category(slug: impl Into<CategorySlug>) -> Self {
        Filter::Category(slug.into())
    }

    /// Create a text search filter. The query is matched as typed, whitespace included.
    pub fn text(query: impl AsRef<str>) -> Self {
        Filter::Text(query.as_ref().to_lowercase())
    }

    /// Whether the filter lets every product through.
    pub fn is_noop(&self) -> bool {
        matches!(self, Filter::Text(q) if q.is_empty())
    }

    /// Test a product against this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Filter::Category(slug) => product.category_slug == *slug,
            Filter::Text(q) => {
                let needle = q.to_lowercase();
                needle.is_empty() || product.matches_text(&needle)
            }
            Filter::Featured => product.featured,
            Filter::HasDatasheet => product.has_datasheet(),
        }
    }
}

/// Keep the products passing every filter, in their original order.
pub fn apply_filters<'a, I>(products: I, filters: &[Filter]) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let active: Vec<&Filter> = filters.iter().filter(|f| !f.is_noop()).collect();
    products
        .into_iter()
        .filter(|p| active.iter().all(|f| f.matches(p)))
        .collect()
}

/// Filter products by an optional category and a search query.
///
/// Both predicates compose with AND and relative order is preserved. Only
/// the empty query matches everything; a whitespace-only query is a real
/// needle. An unknown category matches nothing.
pub fn filter_products<'a, I>(
    products: I,
    active_category: Option<&str>,
    query: &str,
) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut filters = Vec::with_capacity(2);
    if let Some(category) = active_category {
        filters.push(Filter::category(category));
    }
    filters.push(Filter::text(query));
    apply_filters(products, &filters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new("ultra", "Kashe Ultra 0W-20", "engine-oils", "Engine Oils").featured(),
            Product::new("atf", "Kashe ATF Pro", "transmission", "Transmission Fluids")
                .with_datasheet("/datasheets/atf.pdf"),
            Product::new("dct", "Kashe DCT Fluid", "transmission", "Transmission Fluids"),
        ]
    }

    fn slugs(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.slug.to_string()).collect()
    }

    #[test]
    fn test_category_filter() {
        let products = products();
        let result = filter_products(&products, Some("transmission"), "");
        assert_eq!(slugs(&result), vec!["atf", "dct"]);
    }

    #[test]
    fn test_text_matches_category_label() {
        let products = products();
        let result = filter_products(&products, None, "FLUIDS");
        assert_eq!(slugs(&result), vec!["atf", "dct"]);
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let products = products();
        assert!(filter_products(&products, None, "   ").is_empty());
        assert!(filter_products(&products, None, "fluid ").is_empty());
        assert!(filter_products(&products, None, "  dct ").is_empty());

        let result = filter_products(&products, None, "dct fluid");
        assert_eq!(slugs(&result), vec!["dct"]);
        assert_eq!(filter_products(&products, None, "").len(), 3);
    }

    #[test]
    fn test_unknown_category_is_empty() {
        let products = products();
        assert!(filter_products(&products, Some("greases"), "").is_empty());
    }

    #[test]
    fn test_and_composition() {
        let products = products();
        assert!(filter_products(&products, Some("engine-oils"), "atf").is_empty());
    }

    #[test]
    fn test_flag_filters() {
        let products = products();
        let featured = apply_filters(&products, &[Filter::Featured]);
        assert_eq!(slugs(&featured), vec!["ultra"]);

        let sheets = apply_filters(&products, &[Filter::HasDatasheet, Filter::text("kashe")]);
        assert_eq!(slugs(&sheets), vec!["atf"]);
    }

    #[test]
    fn test_filter_over_borrowed_subset() {
        let products = products();
        let subset: Vec<&Product> = products.iter().skip(1).collect();
        let result = filter_products(subset, None, "pro");
        assert_eq!(slugs(&result), vec!["atf"]);
    }
}
