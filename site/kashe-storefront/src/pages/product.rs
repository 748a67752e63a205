use kashe_catalog::{Catalog, Product};
use kashe_core::{ContactKind, Route, SiteConfig};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::{mount_page, NotFound};
use crate::app::use_site;
use crate::components::ProductGrid;

/// Single product page. Unknown slugs render the 404 page.
#[component]
pub fn ProductPage() -> impl IntoView {
    let params = use_params_map();
    let slug = move || params.with(|p| p.get("slug").unwrap_or_default());

    move || {
        let slug = slug();
        let logger = mount_page(Route::Product { slug: slug.clone() });
        match Catalog::builtin().require_product(&slug) {
            Ok(product) => view! { <ProductDetail product=product/> }.into_any(),
            Err(e) => {
                logger.warn_builder("product lookup failed")
                    .field("error", e.to_string())
                    .emit();
                view! { <NotFound/> }.into_any()
            }
        }
    }
}

#[component]
fn ProductDetail(product: &'static Product) -> impl IntoView {
    let site = use_site();
    let catalog = Catalog::builtin();
    let limit = use_context::<SiteConfig>()
        .unwrap_or_default()
        .catalog
        .related_limit;
    let related = catalog.related_products(product, limit);
    let category_href = Route::products_in(product.category_slug.as_str()).href();
    let quote_href = Route::Contact {
        kind: ContactKind::Quote,
    }
    .href();

    view! {
        <Title text=site.page_title(&product.name)/>
        <nav class="breadcrumb">
            <a href="/">"Home"</a>
            " / "
            <a href=Route::Products { category: None, query: None, view: None }.href()>"Products"</a>
            " / "
            <a href=category_href>{product.category.clone()}</a>
            " / "
            <span>{product.name.clone()}</span>
        </nav>

        <section class="product-detail">
            <img src=product.image.clone() alt=product.name.clone()/>
            <div>
                <span class="eyebrow">{product.category.clone()}</span>
                <h1>{product.name.clone()}</h1>
                <p>{product.description.clone()}</p>

                <h2>"Key Benefits"</h2>
                <ul class="benefits">
                    {product.benefits.iter().map(|b| view! { <li>{b.clone()}</li> }).collect::<Vec<_>>()}
                </ul>

                <div class="product-actions">
                    <a href=quote_href class="btn">"Request a Quote"</a>
                    {product.datasheet.clone().map(|uri| view! {
                        <a href=uri class="btn btn--ghost" download="">"Download Datasheet"</a>
                    })}
                </div>
            </div>
        </section>

        <section class="specs">
            <h2>"Technical Specifications"</h2>
            <table>
                <tbody>
                    {product.specs.iter().map(|(name, value)| view! {
                        <tr>
                            <th>{name.to_string()}</th>
                            <td>{value.to_string()}</td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>
        </section>

        <section class="product-applications">
            <h2>"Applications"</h2>
            <ul>
                {product.applications.iter().map(|a| view! { <li>{a.clone()}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>

        {(!related.is_empty()).then(|| view! {
            <section class="related">
                <h2>"Related Products"</h2>
                <ProductGrid products=related/>
            </section>
        })}
    }
}
