//! Category types for product organization.

use crate::ids::CategorySlug;
use serde::{Deserialize, Serialize};

/// A product category. Products reference it by slug; it never embeds them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// URL-friendly slug (unique).
    pub slug: CategorySlug,
    /// Category name.
    pub name: String,
    /// Category description.
    pub description: String,
    /// Category image URI.
    pub image: String,
}

impl Category {
    pub fn new(slug: impl Into<CategorySlug>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
            description: String::new(),
            image: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Products page path filtered to this category.
    pub fn href(&self) -> String {
        format!("/products?category={}", self.slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_href() {
        let category = Category::new("engine-oils", "Engine Oils");
        assert_eq!(category.href(), "/products?category=engine-oils");
    }
}
