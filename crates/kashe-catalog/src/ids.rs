//! Newtype slugs for type-safe identifiers.
//!
//! Using newtypes prevents accidentally mixing up product and category
//! slugs, e.g., looking a category slug up in the product index.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Macro to generate newtype slug structs.
macro_rules! define_slug {
    ($name:ident) => {
        /// A unique, URL-safe identifier.
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new slug from a string.
            pub fn new(slug: impl Into<String>) -> Self {
                Self(slug.into())
            }

            /// Get the slug as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume and return the inner string.
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Check that the slug is non-empty lowercase ASCII, digits and hyphens.
            pub fn is_url_safe(&self) -> bool {
                is_url_safe(&self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }
    };
}

define_slug!(ProductSlug);
define_slug!(CategorySlug);

fn is_url_safe(s: &str) -> bool {
    !s.is_empty()
        && !s.starts_with('-')
        && !s.ends_with('-')
        && s
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_creation() {
        let slug = ProductSlug::new("kashe-atf-pro");
        assert_eq!(slug.as_str(), "kashe-atf-pro");
        assert_eq!(format!("{}", slug), "kashe-atf-pro");
    }

    #[test]
    fn test_slug_from_str() {
        let slug: CategorySlug = "engine-oils".into();
        assert_eq!(slug, "engine-oils");
    }

    #[test]
    fn test_url_safe() {
        assert!(ProductSlug::new("kashe-ultra-0w-20").is_url_safe());
        assert!(!ProductSlug::new("").is_url_safe());
        assert!(!ProductSlug::new("Kashe Ultra").is_url_safe());
        assert!(!ProductSlug::new("-leading").is_url_safe());
        assert!(!CategorySlug::new("engine_oils").is_url_safe());
    }

    #[test]
    fn test_slug_equality() {
        let a = ProductSlug::new("same");
        let b = ProductSlug::new("same");
        let c = ProductSlug::new("different");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
