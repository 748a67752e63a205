//! Site configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level site configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Brand and contact details.
    #[serde(default)]
    pub site: SiteSection,

    /// Testimonial carousel settings.
    #[serde(default)]
    pub carousel: CarouselSection,

    /// Contact form settings.
    #[serde(default)]
    pub contact: ContactSection,

    /// Catalog presentation settings.
    #[serde(default)]
    pub catalog: CatalogSection,
}

impl SiteConfig {
    /// Load config from a file. `.json` files are parsed as JSON, anything else as TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config = if path.ends_with(".json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };

        config.with_context(|| format!("Invalid config file: {}", path))
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.carousel.interval_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "carousel.interval_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.contact.submit_timeout_ms == 0 {
            return Err(ConfigError::Invalid {
                field: "contact.submit_timeout_ms",
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.contact.submit_timeout_ms <= self.contact.submit_delay_ms {
            return Err(ConfigError::Invalid {
                field: "contact.submit_timeout_ms",
                reason: format!(
                    "must exceed contact.submit_delay_ms ({})",
                    self.contact.submit_delay_ms
                ),
            });
        }
        if self.site.name.trim().is_empty() {
            return Err(ConfigError::Invalid {
                field: "site.name",
                reason: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Brand and contact details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub email: String,
    pub phone: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            name: "Kashe Energy".to_string(),
            tagline: "Premium Automotive Lubricants & Energy Solutions".to_string(),
            description: "Kashe Energy delivers premium automotive lubricants and energy solutions engineered for peak performance. Trusted by professionals worldwide.".to_string(),
            url: "https://kasheenergy.com".to_string(),
            email: "info@kasheenergy.com".to_string(),
            phone: "+1 (800) 555-0123".to_string(),
        }
    }
}

/// Testimonial carousel settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselSection {
    /// Autoplay period.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    6_000
}

impl Default for CarouselSection {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

impl CarouselSection {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

/// Contact form settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactSection {
    /// Delay of the simulated submission.
    #[serde(default = "default_submit_delay_ms")]
    pub submit_delay_ms: u64,

    /// Upper bound on a single submission attempt.
    #[serde(default = "default_submit_timeout_ms")]
    pub submit_timeout_ms: u64,
}

fn default_submit_delay_ms() -> u64 {
    1_500
}

fn default_submit_timeout_ms() -> u64 {
    10_000
}

impl Default for ContactSection {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay_ms(),
            submit_timeout_ms: default_submit_timeout_ms(),
        }
    }
}

impl ContactSection {
    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn submit_timeout(&self) -> Duration {
        Duration::from_millis(self.submit_timeout_ms)
    }
}

/// Catalog presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogSection {
    /// How many related products the detail page shows.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_related_limit() -> usize {
    3
}

impl Default for CatalogSection {
    fn default() -> Self {
        Self {
            related_limit: default_related_limit(),
        }
    }
}
