//! Behavioural checks over the built-in catalog.

use kashe_catalog::prelude::*;

fn slugs<'a>(products: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
    products.into_iter().map(|p| p.slug.as_str()).collect()
}

#[test]
fn every_product_is_found_by_its_slug() {
    let catalog = Catalog::builtin();
    for product in catalog.products() {
        let found = catalog.product_by_slug(product.slug.as_str()).unwrap();
        assert_eq!(found, product);
    }
    assert!(product_by_slug("kashe-unknown").is_none());
    assert!(product_by_slug("").is_none());
    assert!(matches!(
        catalog.require_product("kashe-unknown"),
        Err(CatalogError::ProductNotFound(_))
    ));
}

#[test]
fn categories_partition_the_catalog() {
    let catalog = Catalog::builtin();
    let mut covered = 0;
    for category in catalog.categories() {
        let members = products_by_category(category.slug.as_str());
        assert!(members.iter().all(|p| p.category_slug == category.slug));
        covered += members.len();
    }
    assert_eq!(covered, catalog.len());
    assert!(products_by_category("greases").is_empty());
}

#[test]
fn featured_is_exactly_the_flagged_subset() {
    let catalog = Catalog::builtin();
    let expected: Vec<&Product> = catalog.products().iter().filter(|p| p.featured).collect();
    assert_eq!(featured_products(), expected);
    assert_eq!(
        slugs(featured_products()),
        vec![
            "kashe-ultra-0w-20",
            "kashe-pro-5w-30",
            "kashe-max-5w-40",
            "kashe-racing-10w-60"
        ]
    );
}

#[test]
fn query_narrows_the_category_result() {
    let catalog = Catalog::builtin();
    let categories = [None, Some("engine-oils"), Some("transmission"), Some("specialty")];
    let queries = ["", "kashe", "5w", "fluid", "PRO", "racing", "zzz"];

    for category in categories {
        let base = filter_products(catalog.products(), category, "");
        for query in queries {
            let narrowed = filter_products(catalog.products(), category, query);
            // Subsequence of the category-only result.
            let mut rest = base.iter();
            for product in &narrowed {
                assert!(rest.any(|b| b.slug == product.slug), "{category:?} {query:?}");
            }
        }
    }
}

#[test]
fn ultra_lookup_scenario() {
    let ultra = product_by_slug("kashe-ultra-0w-20").unwrap();
    assert_eq!(ultra.name, "Kashe Ultra 0W-20");
    assert_eq!(ultra.category_slug, "engine-oils");
    assert!(ultra.featured);
    assert_eq!(ultra.specs.get("SAE Grade"), Some("0W-20"));
    assert_eq!(ultra.specs.iter().next(), Some(("SAE Grade", "0W-20")));
    assert_eq!(ultra.datasheet.as_deref(), Some("/datasheets/kashe-ultra-0w20.pdf"));
    assert!(featured_products().contains(&ultra));
    assert!(products_by_category("engine-oils").contains(&ultra));
}

#[test]
fn transmission_without_query() {
    let catalog = Catalog::builtin();
    let result = filter_products(catalog.products(), Some("transmission"), "");
    assert_eq!(slugs(result), vec!["kashe-atf-pro", "kashe-dct-fluid"]);

    let view = catalog.view(&CatalogFilter::new().with_category("transmission"));
    assert_eq!(view.len(), 2);
    assert_eq!(view.summary(), "Showing 2 products in Transmission Fluids");
}

#[test]
fn transmission_racing_is_empty() {
    let catalog = Catalog::builtin();
    assert!(filter_products(catalog.products(), Some("transmission"), "racing").is_empty());

    let mut filter = CatalogFilter::new().with_category("transmission").with_query("racing");
    let view = catalog.view(&filter);
    assert!(view.is_empty());

    filter.reset();
    assert_eq!(catalog.view(&filter).len(), catalog.len());
}

#[test]
fn related_products_for_detail_page() {
    let catalog = Catalog::builtin();
    let pro = catalog.product_by_slug("kashe-pro-5w-30").unwrap();
    assert_eq!(
        slugs(catalog.related_products(pro, 3)),
        vec!["kashe-ultra-0w-20", "kashe-max-5w-40"]
    );

    let hydraulic = catalog.product_by_slug("kashe-hydraulic-46").unwrap();
    assert!(catalog.related_products(hydraulic, 3).is_empty());
}

#[test]
fn resources_search_over_datasheets() {
    let catalog = Catalog::builtin();
    let sheets = catalog.products_with_datasheets();
    assert_eq!(sheets.len(), 7);

    let hits = filter_products(sheets, None, "hydraulic");
    assert_eq!(slugs(hits), vec!["kashe-hydraulic-46"]);
}

#[test]
fn category_counts_match_dataset() {
    let counts: Vec<(&str, usize)> = Catalog::builtin()
        .category_counts()
        .into_iter()
        .map(|(c, n)| (c.slug.as_str(), n))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("engine-oils", 3),
            ("transmission", 2),
            ("industrial", 1),
            ("specialty", 1)
        ]
    );
}

#[test]
fn datasheet_is_omitted_when_absent() {
    let product = Product::new("plain", "Plain", "specialty", "Specialty Products");
    let json = serde_json::to_value(&product).unwrap();
    assert!(json.get("datasheet").is_none());
    assert_eq!(json["featured"], false);
}

#[test]
fn search_query_is_matched_as_typed() {
    let catalog = Catalog::builtin();
    assert!(filter_products(catalog.products(), None, "   ").is_empty());
    assert!(filter_products(catalog.products(), None, "fluid ").is_empty());
    assert_eq!(
        slugs(filter_products(catalog.products(), None, "fluid")),
        vec!["kashe-atf-pro", "kashe-dct-fluid"]
    );
    assert_eq!(filter_products(catalog.products(), None, "").len(), 7);
}
