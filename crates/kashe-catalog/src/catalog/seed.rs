//! Built-in Kashe Energy product line.

use crate::catalog::{Category, Product, SpecSheet};

struct CategoryRow {
    slug: &'static str,
    name: &'static str,
    description: &'static str,
    image: &'static str,
}

struct ProductRow {
    slug: &'static str,
    name: &'static str,
    category_slug: &'static str,
    category: &'static str,
    short_description: &'static str,
    description: &'static str,
    benefits: &'static [&'static str],
    specs: &'static [(&'static str, &'static str)],
    applications: &'static [&'static str],
    image: &'static str,
    featured: bool,
    datasheet: Option<&'static str>,
}

const CATEGORIES: &[CategoryRow] = &[
    CategoryRow {
        slug: "engine-oils",
        name: "Engine Oils",
        description: "Premium synthetic and conventional engine oils for maximum protection",
        image: "/images/products/category-engine-oils.jpg",
    },
    CategoryRow {
        slug: "transmission",
        name: "Transmission Fluids",
        description: "Advanced transmission fluids for smooth, reliable gear changes",
        image: "/images/products/category-transmission.jpg",
    },
    CategoryRow {
        slug: "industrial",
        name: "Industrial Lubricants",
        description: "Heavy-duty lubricants for industrial machinery and equipment",
        image: "/images/products/category-industrial.jpg",
    },
    CategoryRow {
        slug: "specialty",
        name: "Specialty Products",
        description: "Specialized lubricants for unique applications and requirements",
        image: "/images/products/category-specialty.jpg",
    },
];

const PRODUCTS: &[ProductRow] = &[
    // Engine Oils
    ProductRow {
        slug: "kashe-ultra-0w-20",
        name: "Kashe Ultra 0W-20",
        category_slug: "engine-oils",
        category: "Engine Oils",
        short_description: "Full synthetic engine oil for modern fuel-efficient engines",
        description: "Kashe Ultra 0W-20 is a premium full synthetic motor oil engineered with advanced molecular technology. Designed for the latest generation of fuel-efficient engines, it provides exceptional cold-start protection and maintains optimal viscosity across extreme temperature ranges.",
        benefits: &[
            "Superior cold-start protection down to -40°C",
            "Enhanced fuel economy up to 4% improvement",
            "Extended drain intervals up to 15,000 miles",
            "Excellent wear protection for turbo engines",
            "Low SAPS formulation for catalyst compatibility",
        ],
        specs: &[
            ("SAE Grade", "0W-20"),
            ("API Rating", "SP/SN Plus"),
            ("ILSAC", "GF-6A"),
            ("Pour Point", "-48°C"),
            ("Flash Point", "230°C"),
            ("Viscosity @ 100°C", "8.7 cSt"),
        ],
        applications: &[
            "Modern gasoline engines",
            "Hybrid vehicles",
            "Turbocharged engines",
            "Direct injection engines",
        ],
        image: "https://images.unsplash.com/photo-1486262715619-67b85e0b08d3?w=600&h=600&fit=crop",
        featured: true,
        datasheet: Some("/datasheets/kashe-ultra-0w20.pdf"),
    },
    ProductRow {
        slug: "kashe-pro-5w-30",
        name: "Kashe Pro 5W-30",
        category_slug: "engine-oils",
        category: "Engine Oils",
        short_description: "High-performance synthetic oil for demanding driving conditions",
        description: "Kashe Pro 5W-30 delivers outstanding protection for high-performance and European vehicles. Its advanced additive package provides superior cleanliness and wear protection under the most demanding driving conditions.",
        benefits: &[
            "Meets stringent European OEM specifications",
            "Outstanding thermal stability",
            "Superior deposit control",
            "Extended engine life protection",
            "Compatible with exhaust after-treatment systems",
        ],
        specs: &[
            ("SAE Grade", "5W-30"),
            ("API Rating", "SP"),
            ("ACEA", "C3"),
            ("BMW Approval", "LL-04"),
            ("MB Approval", "229.51"),
            ("VW Approval", "504.00/507.00"),
        ],
        applications: &[
            "European vehicles",
            "Diesel particulate filter equipped engines",
            "High-performance gasoline engines",
            "Fleet vehicles",
        ],
        image: "https://images.unsplash.com/photo-1607603750909-408e193868c7?w=600&h=600&fit=crop",
        featured: true,
        datasheet: Some("/datasheets/kashe-pro-5w30.pdf"),
    },
    ProductRow {
        slug: "kashe-max-5w-40",
        name: "Kashe Max 5W-40",
        category_slug: "engine-oils",
        category: "Engine Oils",
        short_description: "Ultimate protection for high-stress performance engines",
        description: "Kashe Max 5W-40 is engineered for ultimate protection in high-stress performance applications. Its robust formulation withstands extreme temperatures and provides exceptional shear stability for racing and performance vehicles.",
        benefits: &[
            "Extreme high-temperature stability",
            "Superior shear resistance",
            "Outstanding wear protection",
            "Excellent oil pressure maintenance",
            "Reduced oil consumption",
        ],
        specs: &[
            ("SAE Grade", "5W-40"),
            ("API Rating", "SN/CF"),
            ("ACEA", "A3/B4"),
            ("Porsche Approval", "A40"),
            ("Ferrari Approval", "Yes"),
            ("Viscosity @ 100°C", "14.2 cSt"),
        ],
        applications: &[
            "Sports cars",
            "Performance tuned engines",
            "Track day vehicles",
            "High-performance European vehicles",
        ],
        image: "https://images.unsplash.com/photo-1492144534655-ae79c964c9d7?w=600&h=600&fit=crop",
        featured: true,
        datasheet: Some("/datasheets/kashe-max-5w40.pdf"),
    },
    // Transmission Fluids
    ProductRow {
        slug: "kashe-atf-pro",
        name: "Kashe ATF Pro",
        category_slug: "transmission",
        category: "Transmission Fluids",
        short_description: "Multi-vehicle automatic transmission fluid",
        description: "Kashe ATF Pro is a premium multi-vehicle automatic transmission fluid designed for smooth, reliable shifting. Its advanced friction modifier technology ensures optimal clutch performance and extended transmission life.",
        benefits: &[
            "Smooth, consistent shifting",
            "Extended transmission life",
            "Wide temperature range performance",
            "Compatible with most modern ATFs",
            "Excellent oxidation resistance",
        ],
        specs: &[
            ("Type", "Full Synthetic ATF"),
            ("Color", "Red"),
            ("Pour Point", "-51°C"),
            ("Flash Point", "210°C"),
            ("Viscosity @ 100°C", "7.3 cSt"),
        ],
        applications: &[
            "Automatic transmissions",
            "CVT transmissions (check manual)",
            "Power steering systems",
            "Hydraulic systems",
        ],
        image: "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=600&h=600&fit=crop",
        featured: false,
        datasheet: Some("/datasheets/kashe-atf-pro.pdf"),
    },
    ProductRow {
        slug: "kashe-dct-fluid",
        name: "Kashe DCT Fluid",
        category_slug: "transmission",
        category: "Transmission Fluids",
        short_description: "Specialized fluid for dual-clutch transmissions",
        description: "Kashe DCT Fluid is specifically engineered for modern dual-clutch transmission systems. Its unique formulation provides the perfect balance of friction characteristics for lightning-fast, smooth shifts.",
        benefits: &[
            "Optimized for DCT clutch engagement",
            "Fast, precise shifts",
            "Superior thermal stability",
            "Extended clutch life",
            "Reduced shudder and noise",
        ],
        specs: &[
            ("Type", "Full Synthetic DCT"),
            ("Color", "Green"),
            ("Pour Point", "-45°C"),
            ("Flash Point", "220°C"),
            ("Kinematic Viscosity", "7.8 cSt @ 100°C"),
        ],
        applications: &[
            "VW/Audi DSG transmissions",
            "BMW DCT",
            "Ford PowerShift",
            "Other dual-clutch systems",
        ],
        image: "https://images.unsplash.com/photo-1619642751034-765dfdf7c58e?w=600&h=600&fit=crop",
        featured: false,
        datasheet: Some("/datasheets/kashe-dct-fluid.pdf"),
    },
    // Industrial Lubricants
    ProductRow {
        slug: "kashe-hydraulic-46",
        name: "Kashe Hydraulic 46",
        category_slug: "industrial",
        category: "Industrial Lubricants",
        short_description: "Premium anti-wear hydraulic oil for industrial systems",
        description: "Kashe Hydraulic 46 is a premium anti-wear hydraulic fluid designed for high-pressure industrial hydraulic systems. Its zinc-based additive package provides exceptional pump protection and system efficiency.",
        benefits: &[
            "Excellent anti-wear protection",
            "Superior oxidation stability",
            "Outstanding water separation",
            "Extended equipment life",
            "Reduced maintenance costs",
        ],
        specs: &[
            ("ISO Grade", "46"),
            ("Type", "Anti-Wear Hydraulic"),
            ("Viscosity @ 40°C", "46 cSt"),
            ("Pour Point", "-27°C"),
            ("Zinc Content", "0.09%"),
        ],
        applications: &[
            "Industrial hydraulic systems",
            "Mobile equipment",
            "Manufacturing machinery",
            "Injection molding machines",
        ],
        image: "https://images.unsplash.com/photo-1581092918056-0c4c3acd3789?w=600&h=600&fit=crop",
        featured: false,
        datasheet: Some("/datasheets/kashe-hydraulic-46.pdf"),
    },
    // Specialty Products
    ProductRow {
        slug: "kashe-racing-10w-60",
        name: "Kashe Racing 10W-60",
        category_slug: "specialty",
        category: "Specialty Products",
        short_description: "Competition-grade racing oil for extreme performance",
        description: "Kashe Racing 10W-60 is our competition-grade racing oil, engineered for the most demanding motorsport applications. Its ultra-robust formulation provides uncompromising protection under extreme stress and temperatures.",
        benefits: &[
            "Maximum high-temperature protection",
            "Exceptional film strength",
            "Superior shear stability",
            "Optimized for high-RPM operation",
            "Track-proven performance",
        ],
        specs: &[
            ("SAE Grade", "10W-60"),
            ("Type", "Full Synthetic Racing"),
            ("HTHS Viscosity", ">5.0 mPa.s"),
            ("Flash Point", "248°C"),
            ("Viscosity @ 100°C", "21.8 cSt"),
        ],
        applications: &[
            "Racing engines",
            "Track day vehicles",
            "High-boost turbo applications",
            "Air-cooled engines",
        ],
        image: "https://images.unsplash.com/photo-1568605117036-5fe5e7bab0b7?w=600&h=600&fit=crop",
        featured: true,
        datasheet: Some("/datasheets/kashe-racing-10w60.pdf"),
    },
];

pub(crate) fn categories() -> Vec<Category> {
    CATEGORIES
        .iter()
        .map(|row| {
            Category::new(row.slug, row.name)
                .with_description(row.description)
                .with_image(row.image)
        })
        .collect()
}

pub(crate) fn products() -> Vec<Product> {
    PRODUCTS.iter().map(ProductRow::to_product).collect()
}

impl ProductRow {
    fn to_product(&self) -> Product {
        let mut product = Product::new(self.slug, self.name, self.category_slug, self.category)
            .with_descriptions(self.short_description, self.description)
            .with_benefits(self.benefits.iter().copied())
            .with_specs(self.specs.iter().copied().collect::<SpecSheet>())
            .with_applications(self.applications.iter().copied())
            .with_image(self.image);
        product.featured = self.featured;
        product.datasheet = self.datasheet.map(str::to_string);
        product
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_product_is_fully_described() {
        for product in products() {
            assert_eq!(product.benefits.len(), 5, "{}", product.slug);
            assert_eq!(product.applications.len(), 4, "{}", product.slug);
            assert!(product.specs.len() >= 5, "{}", product.slug);
            assert!(product.has_datasheet(), "{}", product.slug);
            assert!(!product.short_description.is_empty());
        }
    }

    #[test]
    fn test_category_labels_match_category_names() {
        let categories = categories();
        for product in products() {
            let category = categories
                .iter()
                .find(|c| c.slug == product.category_slug)
                .unwrap();
            assert_eq!(category.name, product.category);
        }
    }
}
