//! About page: story, timeline and values.

use serde::{Deserialize, Serialize};

/// A dated event on the company timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Milestone {
    pub year: u16,
    pub title: String,
    pub description: String,
}

impl Milestone {
    pub fn new(year: u16, title: &str, description: &str) -> Self {
        Self {
            year,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// A company value card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Value {
    pub icon: String,
    pub title: String,
    pub description: String,
}

impl Value {
    pub fn new(icon: &str, title: &str, description: &str) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyContent {
    pub story_title: String,
    pub story: Vec<String>,
    /// Oldest first.
    pub milestones: Vec<Milestone>,
    pub values: Vec<Value>,
}

impl Default for CompanyContent {
    fn default() -> Self {
        Self {
            story_title: "A Legacy of Performance".to_string(),
            story: vec![
                "Founded in 1984 in Houston, Texas, Kashe Energy began with a simple mission: to create the world's most advanced automotive lubricants. What started as a small research team has grown into a global leader serving over 50 countries.".to_string(),
                "Our journey has been defined by relentless innovation. From pioneering synthetic oil formulations in the 1990s to developing breakthrough molecular technology today, we've consistently pushed the boundaries of what's possible.".to_string(),
                "Today, Kashe Energy is trusted by professional racing teams, major fleet operators, and millions of individual vehicle owners worldwide. Our products don't just meet industry standards; they define them.".to_string(),
            ],
            milestones: vec![
                Milestone::new(1984, "Founded", "Kashe Energy established in Houston, Texas"),
                Milestone::new(1992, "Global Expansion", "Expanded operations to Europe and Asia"),
                Milestone::new(2005, "R&D Center", "Opened state-of-the-art research facility"),
                Milestone::new(2015, "50+ Countries", "Reached global distribution milestone"),
                Milestone::new(2020, "Green Initiative", "Launched eco-friendly product line"),
                Milestone::new(2024, "Innovation Award", "Industry recognition for molecular technology"),
            ],
            values: vec![
                Value::new("target", "Excellence", "We pursue the highest standards in everything we do"),
                Value::new("flask", "Innovation", "Continuous research drives our product development"),
                Value::new("heart", "Integrity", "Honest partnerships built on trust and transparency"),
                Value::new("globe", "Sustainability", "Committed to environmental responsibility"),
            ],
        }
    }
}

impl CompanyContent {
    /// Year the company was founded.
    pub fn founded(&self) -> Option<u16> {
        self.milestones.iter().map(|m| m.year).min()
    }

    /// Whole years in business as of `current_year`.
    pub fn years_in_business(&self, current_year: u16) -> Option<u16> {
        self.founded().map(|y| current_year.saturating_sub(y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_is_chronological() {
        let content = CompanyContent::default();
        assert!(content
            .milestones
            .windows(2)
            .all(|w| w[0].year < w[1].year));
        assert_eq!(content.founded(), Some(1984));
        assert_eq!(content.years_in_business(2024), Some(40));
    }

    #[test]
    fn test_values() {
        let titles: Vec<_> = CompanyContent::default()
            .values
            .into_iter()
            .map(|v| v.title)
            .collect();
        assert_eq!(
            titles,
            vec!["Excellence", "Innovation", "Integrity", "Sustainability"]
        );
    }
}
