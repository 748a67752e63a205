use kashe_catalog::{Catalog, CatalogFilter, ViewMode};
use kashe_core::Route;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;
use leptos_router::params::ParamsMap;

use super::mount_page;
use crate::app::use_site;
use crate::components::ProductGrid;

/// Filterable catalog listing.
///
/// The filter starts from the `category`, `q` and `view` query values and is
/// re-seeded whenever the URL changes; controls on the page update it locally.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let query = use_query_map();
    let seed = |q: &ParamsMap| {
        CatalogFilter::from_params(q.get_str("category"), q.get_str("q"), q.get_str("view"))
    };
    let initial = query.with_untracked(seed);
    let logger = StoredValue::new(mount_page(Route::Products {
        category: initial.category().map(str::to_string),
        query: Some(initial.query().to_string()).filter(|q| !q.is_empty()),
        view: None,
    }));

    let filter = RwSignal::new(initial);
    Effect::new(move |first: Option<()>| {
        let next = query.with(seed);
        if first.is_some() {
            filter.set(next);
        }
    });

    let catalog = Catalog::builtin();
    let site = use_site();

    let summary = move || filter.with(|f| f.apply(catalog).summary());
    let results = move || {
        filter.with(|f| {
            let view = f.apply(catalog);
            logger.with_value(|l| {
                l.debug_builder("catalog filtered")
                    .field_opt("category", f.category())
                    .field("query", f.query())
                    .field_u64("results", view.len() as u64)
                    .emit()
            });
            (view.view_mode(), view.into_items())
        })
    };

    view! {
        <Title text=site.page_title("Products")/>
        <section class="page-hero">
            <h1>"Our Products"</h1>
            <p>"Premium lubricants engineered for every application."</p>
        </section>

        <section class="category-cards">
            {catalog.category_counts().into_iter().map(|(category, count)| {
                let slug = category.slug.to_string();
                let selected_slug = slug.clone();
                view! {
                    <button
                        class="category-card"
                        class:active=move || filter.with(|f| f.category() == Some(selected_slug.as_str()))
                        on:click=move |_| filter.update(|f| f.select_category(slug.as_str()))
                    >
                        <h3>{category.name.clone()}</h3>
                        <p>{category.description.clone()}</p>
                        <span>{format!("{} products", count)}</span>
                    </button>
                }
            }).collect::<Vec<_>>()}
        </section>

        <section class="catalog-toolbar">
            <input
                type="search"
                placeholder="Search products..."
                prop:value=move || filter.with(|f| f.query().to_string())
                on:input=move |ev| filter.update(|f| f.set_query(event_target_value(&ev)))
            />
            <div class="facet">
                <button
                    class:active=move || filter.with(|f| f.category().is_none())
                    on:click=move |_| filter.update(|f| f.clear_category())
                >
                    "All"
                </button>
                {move || {
                    let selected = filter.with(|f| f.category().map(str::to_string));
                    catalog
                        .category_facet(selected.as_deref())
                        .values
                        .into_iter()
                        .map(|value| {
                            let slug = value.value.clone();
                            view! {
                                <button
                                    class:active=value.selected
                                    on:click=move |_| filter.update(|f| f.select_category(slug.as_str()))
                                >
                                    {format!("{} ({})", value.label, value.count)}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button
                class="view-toggle"
                aria-label="Toggle grid or list view"
                on:click=move |_| filter.update(|f| f.toggle_view_mode())
            >
                {move || match filter.with(|f| f.view_mode()) {
                    ViewMode::Grid => "List view",
                    ViewMode::List => "Grid view",
                }}
            </button>
        </section>

        <p class="results-summary">{summary}</p>

        {move || {
            let (mode, items) = results();
            if items.is_empty() {
                view! {
                    <div class="empty-state">
                        <h3>"No products found"</h3>
                        <p>"Try adjusting your search or filter to find what you're looking for."</p>
                        <button class="btn" on:click=move |_| filter.update(|f| f.reset())>
                            "Clear Filters"
                        </button>
                    </div>
                }
                .into_any()
            } else {
                view! { <ProductGrid products=items mode=mode/> }.into_any()
            }
        }}
    }
}
