//! Products page filter state.

use std::fmt;
use std::str::FromStr;

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::ids::CategorySlug;
use crate::search::{apply_filters, Filter, FilteredView};
use serde::{Deserialize, Serialize};

/// Listing layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    /// Parse a `view` query value, falling back to grid.
    pub fn from_query(value: Option<&str>) -> Self {
        value.and_then(|v| v.parse().ok()).unwrap_or_default()
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

impl FromStr for ViewMode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "grid" => Ok(ViewMode::Grid),
            "list" => Ok(ViewMode::List),
            other => Err(CatalogError::UnknownViewMode(other.to_string())),
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter state owned by the products page.
///
/// Rendering is a pure function of this state: [`apply`](Self::apply)
/// derives the visible products without touching the catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFilter {
    category: Option<CategorySlug>,
    query: String,
    view_mode: ViewMode,
}

impl CatalogFilter {
    /// No category, empty query, grid view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore state from `category`, `q` and `view` query values.
    pub fn from_params(category: Option<&str>, query: Option<&str>, view: Option<&str>) -> Self {
        Self {
            category: category
                .filter(|c| !c.trim().is_empty())
                .map(CategorySlug::from),
            query: query.unwrap_or_default().to_string(),
            view_mode: ViewMode::from_query(view),
        }
    }

    pub fn with_category(mut self, slug: impl Into<CategorySlug>) -> Self {
        self.select_category(slug);
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.set_query(query);
        self
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_ref().map(CategorySlug::as_str)
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn select_category(&mut self, slug: impl Into<CategorySlug>) {
        self.category = Some(slug.into());
    }

    pub fn clear_category(&mut self) {
        self.category = None;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Clear category and query. The view mode is a layout preference and stays.
    pub fn reset(&mut self) {
        self.category = None;
        self.query.clear();
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_view_mode(&mut self) {
        self.view_mode = self.view_mode.toggled();
    }

    /// Whether any filter narrows the listing.
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.query.is_empty()
    }

    /// The filters this state stands for.
    pub fn filters(&self) -> Vec<Filter> {
        let mut filters = Vec::new();
        if let Some(category) = &self.category {
            filters.push(Filter::Category(category.clone()));
        }
        let text = Filter::text(&self.query);
        if !text.is_noop() {
            filters.push(text);
        }
        filters
    }

    /// Derive the visible products.
    pub fn apply<'a>(&self, catalog: &'a Catalog) -> FilteredView<'a> {
        let items = apply_filters(catalog.products(), &self.filters());
        let category = self.category().and_then(|slug| catalog.category_by_slug(slug));
        FilteredView::new(items, category, &self.query, self.view_mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_parse() {
        assert_eq!("list".parse::<ViewMode>().unwrap(), ViewMode::List);
        assert_eq!(" GRID ".parse::<ViewMode>().unwrap(), ViewMode::Grid);
        assert_eq!(
            "table".parse::<ViewMode>().unwrap_err(),
            CatalogError::UnknownViewMode("table".to_string())
        );
        assert_eq!(ViewMode::from_query(Some("table")), ViewMode::Grid);
        assert_eq!(ViewMode::from_query(None), ViewMode::Grid);
    }

    #[test]
    fn test_state_transitions() {
        let mut filter = CatalogFilter::new();
        assert!(!filter.is_active());

        filter.select_category("transmission");
        filter.set_query("atf");
        filter.toggle_view_mode();
        assert!(filter.is_active());
        assert_eq!(filter.category(), Some("transmission"));
        assert_eq!(filter.view_mode(), ViewMode::List);

        filter.clear_query();
        assert_eq!(filter.query(), "");
        assert!(filter.is_active());

        filter.set_query("dct");
        filter.reset();
        assert!(!filter.is_active());
        assert_eq!(filter.view_mode(), ViewMode::List);
    }

    #[test]
    fn test_from_params() {
        let filter = CatalogFilter::from_params(Some("specialty"), Some("racing"), Some("list"));
        assert_eq!(filter.category(), Some("specialty"));
        assert_eq!(filter.query(), "racing");
        assert_eq!(filter.view_mode(), ViewMode::List);

        let blank = CatalogFilter::from_params(Some(""), None, None);
        assert_eq!(blank, CatalogFilter::new());
    }

    #[test]
    fn test_filters_skip_only_empty_query() {
        let filter = CatalogFilter::new().with_category("industrial").with_query("");
        assert_eq!(filter.filters(), vec![Filter::category("industrial")]);

        let blank = CatalogFilter::new().with_query("  ");
        assert!(blank.is_active());
        assert_eq!(blank.filters(), vec![Filter::text("  ")]);
        assert!(blank.apply(Catalog::builtin()).is_empty());
    }

    #[test]
    fn test_apply_builtin() {
        let catalog = Catalog::builtin();
        let view = CatalogFilter::new().with_query("kashe pro").apply(catalog);
        let slugs: Vec<_> = view.items().iter().map(|p| p.slug.as_str()).collect();
        assert_eq!(slugs, vec!["kashe-pro-5w-30"]);
    }
}
