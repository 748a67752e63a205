//! Frequently asked questions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

impl Faq {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// FAQ section of the resources page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqContent {
    pub section_title: String,
    pub section_subtitle: String,
    pub faqs: Vec<Faq>,
}

impl Default for FaqContent {
    fn default() -> Self {
        Self {
            section_title: "Frequently Asked Questions".to_string(),
            section_subtitle: "Find answers to common questions about our products and lubricant technology.".to_string(),
            faqs: vec![
                Faq::new(
                    "How do I choose the right oil for my vehicle?",
                    "Refer to your vehicle's owner manual for the manufacturer's recommended oil specification. Look for the API rating (e.g., SP, SN) and viscosity grade (e.g., 0W-20, 5W-30). Our technical team can also help you find the perfect match for your specific vehicle and driving conditions.",
                ),
                Faq::new(
                    "What's the difference between synthetic and conventional oil?",
                    "Synthetic oils are engineered from chemically modified petroleum components or synthesized from other raw materials. They offer superior performance in extreme temperatures, better oxidation stability, and longer drain intervals compared to conventional oils. While more expensive, synthetic oils provide better protection and can reduce long-term maintenance costs.",
                ),
                Faq::new(
                    "How often should I change my oil?",
                    "Oil change intervals depend on your vehicle, driving conditions, and the oil type used. With Kashe premium synthetic oils, many vehicles can go 10,000-15,000 miles between changes. However, always follow your vehicle manufacturer's recommendations and check your oil level regularly.",
                ),
                Faq::new(
                    "What do the oil viscosity numbers mean?",
                    "Oil viscosity is expressed as two numbers (e.g., 5W-30). The first number with 'W' indicates cold weather performance: lower numbers flow better in cold temperatures. The second number indicates viscosity at operating temperature: higher numbers provide thicker oil film protection. A 5W-30 oil flows like a 5-weight oil when cold but provides 30-weight protection when hot.",
                ),
                Faq::new(
                    "Can I mix different oil brands?",
                    "While mixing oils of the same specification won't cause immediate harm, we recommend using a single brand and formulation for optimal performance. Different additive packages may not work together as effectively. If you need to top off between changes, try to use the same product.",
                ),
                Faq::new(
                    "What certifications should I look for?",
                    "Look for API (American Petroleum Institute) certification for general quality assurance. For European vehicles, check for ACEA ratings. Many manufacturers also have specific approvals (e.g., BMW LL-04, MB 229.51). Always ensure the oil meets or exceeds your vehicle manufacturer's requirements.",
                ),
            ],
        }
    }
}

impl FaqContent {
    pub fn len(&self) -> usize {
        self.faqs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faqs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Faq> {
        self.faqs.get(index)
    }
}
