//! Filtered listings and facets.

use crate::catalog::{Category, Product};
use crate::search::ViewMode;
use serde::{Deserialize, Serialize};

/// The products visible for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredView<'a> {
    items: Vec<&'a Product>,
    category: Option<&'a Category>,
    query: String,
    view_mode: ViewMode,
}

impl<'a> FilteredView<'a> {
    pub fn new(
        items: Vec<&'a Product>,
        category: Option<&'a Category>,
        query: impl Into<String>,
        view_mode: ViewMode,
    ) -> Self {
        Self {
            items,
            category,
            query: query.into(),
            view_mode,
        }
    }

    /// Visible products in catalog order.
    pub fn items(&self) -> &[&'a Product] {
        &self.items
    }

    pub fn into_items(self) -> Vec<&'a Product> {
        self.items
    }

    /// The selected category, when it exists in the catalog.
    pub fn category(&self) -> Option<&'a Category> {
        self.category
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// An empty view renders the empty state with a reset action.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Results line, e.g. "Showing 2 products in Transmission Fluids".
    pub fn summary(&self) -> String {
        let count = self.items.len();
        let noun = if count == 1 { "product" } else { "products" };
        let mut line = format!("Showing {} {}", count, noun);
        if let Some(category) = self.category {
            line.push_str(" in ");
            line.push_str(&category.name);
        }
        if !self.query.is_empty() {
            line.push_str(&format!(" matching \"{}\"", self.query));
        }
        line
    }
}

impl<'a> IntoIterator for FilteredView<'a> {
    type Item = &'a Product;
    type IntoIter = std::vec::IntoIter<&'a Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Category").
    pub name: String,
    /// Query parameter this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    pub fn new(name: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field: field.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(
        &mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        count: usize,
        selected: bool,
    ) {
        self.values.push(FacetValue {
            value: value.into(),
            label: label.into(),
            count,
            selected,
        });
    }

    /// The currently selected value, if any.
    pub fn selected(&self) -> Option<&FacetValue> {
        self.values.iter().find(|v| v.selected)
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Number of matching items.
    pub count: usize,
    /// Whether this value is currently selected.
    pub selected: bool,
}
