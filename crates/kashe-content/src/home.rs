//! Home page content blocks.

use kashe_core::{ContactKind, Route};
use serde::{Deserialize, Serialize};

/// Hero banner content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Headline lines, rendered one per row.
    pub headline: Vec<String>,
    pub subheadline: String,
    pub cta_text: String,
    pub cta_url: String,
    /// Label above the certification badges.
    pub badge_title: String,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            headline: vec![
                "Engineered".to_string(),
                "for Peak".to_string(),
                "Performance".to_string(),
            ],
            subheadline: "Advanced molecular technology meets four decades of expertise. Lubricants that protect, perform, and endure.".to_string(),
            cta_text: "Explore Products".to_string(),
            cta_url: Route::Products {
                category: None,
                query: None,
                view: None,
            }
            .href(),
            badge_title: "Exceeds Industry Standards".to_string(),
        }
    }
}

/// A customer testimonial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
    pub company: String,
    /// Star rating, 1 to 5.
    pub rating: u8,
}

impl Testimonial {
    pub fn new(quote: &str, author: &str, role: &str, company: &str) -> Self {
        Self {
            quote: quote.to_string(),
            author: author.to_string(),
            role: role.to_string(),
            company: company.to_string(),
            rating: 5,
        }
    }

    /// Set the rating, clamped to 1..=5.
    pub fn with_rating(mut self, rating: u8) -> Self {
        self.rating = rating.clamp(1, 5);
        self
    }

    /// Author initials for the avatar placeholder.
    pub fn initials(&self) -> String {
        self.author
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect()
    }

    /// "Role, Company" attribution line.
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.role, self.company)
    }
}

/// Testimonials section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub eyebrow: String,
    pub section_title: String,
    pub testimonials: Vec<Testimonial>,
}

impl Default for TestimonialsContent {
    fn default() -> Self {
        Self {
            eyebrow: "Testimonials".to_string(),
            section_title: "Trusted by Industry Leaders".to_string(),
            testimonials: vec![
                Testimonial::new(
                    "Kashe Energy has been our exclusive lubricant partner for over 15 years. Their products consistently exceed our expectations, and their technical support is unmatched in the industry.",
                    "Michael Torres",
                    "Fleet Manager",
                    "Continental Logistics",
                ),
                Testimonial::new(
                    "After switching to Kashe Ultra, we've seen a 40% reduction in engine wear across our entire fleet. The extended drain intervals have significantly cut our maintenance costs.",
                    "Sarah Chen",
                    "Operations Director",
                    "Pacific Transport Co.",
                ),
                Testimonial::new(
                    "The performance difference is remarkable. Our racing team has relied on Kashe Racing oils for three championship seasons. Nothing else comes close.",
                    "James Morrison",
                    "Team Principal",
                    "Morrison Racing",
                ),
                Testimonial::new(
                    "Superior product quality combined with responsive customer service. Kashe Energy understands what industrial operations need and delivers consistently.",
                    "Robert Williams",
                    "Plant Manager",
                    "Midwest Manufacturing",
                ),
            ],
        }
    }
}

/// Call-to-action section content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CtaContent {
    pub headline: String,
    pub subheadline: String,
    pub primary_cta_text: String,
    pub primary_cta_url: String,
    pub secondary_cta_text: Option<String>,
    pub secondary_cta_url: Option<String>,
    /// Short reassurance bullets under the buttons.
    pub perks: Vec<String>,
}

impl Default for CtaContent {
    fn default() -> Self {
        Self {
            headline: "Experience the Kashe Difference".to_string(),
            subheadline: "Join thousands of satisfied customers who trust Kashe Energy for their lubrication needs. Premium quality, exceptional service.".to_string(),
            primary_cta_text: "Request a Quote".to_string(),
            primary_cta_url: Route::Contact {
                kind: ContactKind::Quote,
            }
            .href(),
            secondary_cta_text: Some("Become a Distributor".to_string()),
            secondary_cta_url: Some(
                Route::Contact {
                    kind: ContactKind::Distributor,
                }
                .href(),
            ),
            perks: [
                "Free Consultation",
                "Technical Support",
                "Global Shipping",
                "Satisfaction Guaranteed",
            ]
            .iter()
            .map(|p| p.to_string())
            .collect(),
        }
    }
}
