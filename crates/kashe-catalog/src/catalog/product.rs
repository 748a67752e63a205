//! Product types.

use crate::ids::{CategorySlug, ProductSlug};
use serde::{Deserialize, Serialize};

/// Ordered technical specification table (name → display value).
///
/// Names are unique within a sheet; insertion order is the display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct SpecSheet(Vec<(String, String)>);

impl SpecSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a spec value. An existing name keeps its position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate `(name, value)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<N: Into<String>, V: Into<String>> FromIterator<(N, V)> for SpecSheet {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut sheet = SpecSheet::new();
        for (name, value) in iter {
            sheet.insert(name, value);
        }
        sheet
    }
}

/// A lubricant product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// URL-friendly slug (unique).
    pub slug: ProductSlug,
    /// Product name.
    pub name: String,
    /// Category display label.
    pub category: String,
    /// Category this product belongs to.
    pub category_slug: CategorySlug,
    /// One-line description for listings.
    pub short_description: String,
    /// Full description.
    pub description: String,
    /// Selling points, in display order.
    pub benefits: Vec<String>,
    /// Technical specifications.
    pub specs: SpecSheet,
    /// Typical uses, in display order.
    pub applications: Vec<String>,
    /// Product image URI.
    pub image: String,
    /// Shown in featured listings.
    #[serde(default)]
    pub featured: bool,
    /// Downloadable technical datasheet.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub datasheet: Option<String>,
}

impl Product {
    /// Create a product with empty descriptive fields.
    pub fn new(
        slug: impl Into<ProductSlug>,
        name: impl Into<String>,
        category_slug: impl Into<CategorySlug>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            category: category.into(),
            category_slug: category_slug.into(),
            short_description: String::new(),
            description: String::new(),
            benefits: Vec::new(),
            specs: SpecSheet::new(),
            applications: Vec::new(),
            image: String::new(),
            featured: false,
            datasheet: None,
        }
    }

    pub fn with_descriptions(
        mut self,
        short: impl Into<String>,
        full: impl Into<String>,
    ) -> Self {
        self.short_description = short.into();
        self.description = full.into();
        self
    }

    pub fn with_benefits<S: Into<String>>(mut self, benefits: impl IntoIterator<Item = S>) -> Self {
        self.benefits = benefits.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_specs(mut self, specs: SpecSheet) -> Self {
        self.specs = specs;
        self
    }

    pub fn with_applications<S: Into<String>>(
        mut self,
        applications: impl IntoIterator<Item = S>,
    ) -> Self {
        self.applications = applications.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    pub fn featured(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn with_datasheet(mut self, uri: impl Into<String>) -> Self {
        self.datasheet = Some(uri.into());
        self
    }

    /// Whether download affordances should be shown.
    pub fn has_datasheet(&self) -> bool {
        self.datasheet.is_some()
    }

    /// Detail page path.
    pub fn href(&self) -> String {
        format!("/products/{}", self.slug)
    }

    /// Case-insensitive substring match on name or category label.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_text(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle) || self.category.to_lowercase().contains(needle)
    }
}
