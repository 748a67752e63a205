//! Brand, contact details and trust signals.

use kashe_core::SiteSection;
use serde::{Deserialize, Serialize};

/// Postal address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
}

impl Address {
    /// Single-line rendering, e.g. "123 Energy Boulevard, Houston, TX 77001, USA".
    pub fn one_line(&self) -> String {
        format!(
            "{}, {}, {} {}, {}",
            self.street, self.city, self.state, self.zip, self.country
        )
    }
}

/// Social profile URLs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: String,
    pub twitter: String,
    pub facebook: String,
    pub instagram: String,
}

impl SocialLinks {
    /// `(network, url)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("LinkedIn", self.linkedin.as_str()),
            ("Twitter", self.twitter.as_str()),
            ("Facebook", self.facebook.as_str()),
            ("Instagram", self.instagram.as_str()),
        ]
        .into_iter()
    }
}

/// A feature block on the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Feature {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A headline number, e.g. "50+" / "Countries Served".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// Site-wide brand content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteInfo {
    pub name: String,
    pub tagline: String,
    pub description: String,
    pub url: String,
    pub email: String,
    pub phone: String,
    pub address: Address,
    pub social: SocialLinks,
    pub features: Vec<Feature>,
    pub stats: Vec<Stat>,
    pub certifications: Vec<String>,
}

impl Default for SiteInfo {
    fn default() -> Self {
        Self::from_section(&SiteSection::default())
    }
}

impl SiteInfo {
    /// Build from the `[site]` config section; the rest is shipped copy.
    pub fn from_section(section: &SiteSection) -> Self {
        Self {
            name: section.name.clone(),
            tagline: section.tagline.clone(),
            description: section.description.clone(),
            url: section.url.clone(),
            email: section.email.clone(),
            phone: section.phone.clone(),
            address: Address {
                street: "123 Energy Boulevard".to_string(),
                city: "Houston".to_string(),
                state: "TX".to_string(),
                zip: "77001".to_string(),
                country: "USA".to_string(),
            },
            social: SocialLinks {
                linkedin: "https://linkedin.com/company/kashe-energy".to_string(),
                twitter: "https://twitter.com/kasheenergy".to_string(),
                facebook: "https://facebook.com/kasheenergy".to_string(),
                instagram: "https://instagram.com/kasheenergy".to_string(),
            },
            features: vec![
                Feature::new(
                    "flask",
                    "Advanced Formulation",
                    "Cutting-edge molecular technology for superior engine protection",
                ),
                Feature::new(
                    "gauge",
                    "Extreme Performance",
                    "Engineered to perform in the most demanding conditions",
                ),
                Feature::new(
                    "clock",
                    "Extended Intervals",
                    "Longer drain intervals for reduced maintenance costs",
                ),
                Feature::new(
                    "globe",
                    "Global Standards",
                    "Exceeds API, ACEA, and OEM specifications worldwide",
                ),
            ],
            stats: vec![
                Stat::new("50+", "Countries Served"),
                Stat::new("99.8%", "Wear Reduction"),
                Stat::new("25K+", "Fleet Partners"),
                Stat::new("40+", "Years Experience"),
            ],
            certifications: [
                "API SP",
                "ILSAC GF-6A",
                "ACEA C3",
                "BMW LL-04",
                "MB 229.51",
                "VW 504.00/507.00",
            ]
            .iter()
            .map(|c| c.to_string())
            .collect(),
        }
    }

    /// `mailto:` link for the contact email.
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    /// `tel:` link with formatting characters stripped.
    pub fn tel(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '+')
            .collect();
        format!("tel:{}", digits)
    }

    /// Page `<title>` text.
    pub fn page_title(&self, page: &str) -> String {
        format!("{} | {}", page, self.name)
    }
}
