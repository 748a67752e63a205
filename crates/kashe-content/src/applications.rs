//! Industry and use-case index.

use kashe_core::Route;
use serde::{Deserialize, Serialize};

/// One industry the product line serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub icon: String,
    pub title: String,
    pub description: String,
    /// Suggested product names. Not every name is in the online catalog.
    pub products: Vec<String>,
    /// Category the "view products" link filters to.
    pub category_slug: String,
}

impl Application {
    pub fn new(
        icon: &str,
        title: &str,
        description: &str,
        products: [&str; 3],
        category_slug: &str,
    ) -> Self {
        Self {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            products: products.iter().map(|p| p.to_string()).collect(),
            category_slug: category_slug.to_string(),
        }
    }

    /// Products page link for this application's category.
    pub fn href(&self) -> String {
        Route::products_in(self.category_slug.as_str()).href()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationsContent {
    pub title: String,
    pub description: String,
    pub applications: Vec<Application>,
}

impl Default for ApplicationsContent {
    fn default() -> Self {
        Self {
            title: "Applications".to_string(),
            description: "Specialized lubricant solutions for every industry and use case.".to_string(),
            applications: vec![
                Application::new(
                    "car",
                    "Passenger Vehicles",
                    "Premium engine oils and fluids for cars, SUVs, and light trucks. Designed for everyday driving and extended protection.",
                    ["Kashe Ultra 0W-20", "Kashe Pro 5W-30", "Kashe ATF Pro"],
                    "engine-oils",
                ),
                Application::new(
                    "truck",
                    "Commercial Fleet",
                    "Heavy-duty lubricants for trucks, buses, and commercial vehicles. Engineered for long hauls and demanding schedules.",
                    ["Kashe HD 15W-40", "Kashe Fleet Plus", "Kashe Hydraulic 46"],
                    "industrial",
                ),
                Application::new(
                    "gauge",
                    "Motorsport & Racing",
                    "Competition-grade lubricants for racing engines. Maximum protection under extreme heat and stress.",
                    ["Kashe Racing 10W-60", "Kashe Max 5W-40", "Kashe DCT Fluid"],
                    "specialty",
                ),
                Application::new(
                    "factory",
                    "Industrial Manufacturing",
                    "Specialized lubricants for industrial machinery, hydraulic systems, and manufacturing equipment.",
                    ["Kashe Hydraulic 46", "Kashe Industrial Gear", "Kashe Compressor Oil"],
                    "industrial",
                ),
                Application::new(
                    "tractor",
                    "Agriculture & Farming",
                    "Rugged lubricants for tractors, harvesters, and farm equipment. Built to handle tough conditions.",
                    ["Kashe Agri Universal", "Kashe Tractor Fluid", "Kashe Hydraulic 68"],
                    "industrial",
                ),
                Application::new(
                    "bike",
                    "Motorcycles & Powersports",
                    "High-performance oils for motorcycles, ATVs, and powersports vehicles. Wet clutch compatible formulations.",
                    ["Kashe Moto 10W-40", "Kashe Moto Racing", "Kashe 2T Synthetic"],
                    "specialty",
                ),
                Application::new(
                    "ship",
                    "Marine",
                    "Corrosion-resistant lubricants for boats, yachts, and marine engines. Formulated for saltwater environments.",
                    ["Kashe Marine 4-Stroke", "Kashe Marine Gear", "Kashe Marine 2T"],
                    "specialty",
                ),
                Application::new(
                    "plane",
                    "Aviation & Aerospace",
                    "Specialized lubricants meeting strict aviation standards. For piston engines and ground support equipment.",
                    ["Kashe Aero 100", "Kashe Aero Piston", "Kashe GSE Hydraulic"],
                    "specialty",
                ),
            ],
        }
    }
}
