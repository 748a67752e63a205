use kashe_catalog::{filter_products, Catalog};
use kashe_content::FaqContent;
use kashe_core::Route;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_query_map;

use super::mount_page;
use crate::app::use_site;
use crate::components::{CtaSection, FaqAccordion};

/// Datasheet downloads and FAQ.
#[component]
pub fn ResourcesPage() -> impl IntoView {
    let initial = use_query_map().with_untracked(|q| q.get("q").unwrap_or_default());
    let _logger = mount_page(Route::Resources {
        query: Some(initial.clone()).filter(|q| !q.is_empty()),
    });
    let site = use_site();
    let faq = FaqContent::default();
    let (search, set_search) = signal(initial);

    let datasheets = move || {
        search.with(|q| filter_products(Catalog::builtin().products_with_datasheets(), None, q))
    };

    view! {
        <Title text=site.page_title("Resources")/>
        <section class="page-hero">
            <h1>"Resources"</h1>
            <p>"Technical data sheets, product guides, and answers to common questions."</p>
        </section>

        <section class="datasheets">
            <h2>"Technical Data Sheets"</h2>
            <input
                type="search"
                placeholder="Search datasheets..."
                prop:value=move || search.get()
                on:input=move |ev| set_search.set(event_target_value(&ev))
            />
            {move || {
                let sheets = datasheets();
                if sheets.is_empty() {
                    view! {
                        <div class="empty-state">
                            <p>"No datasheets match your search."</p>
                            <button class="btn btn--ghost" on:click=move |_| set_search.set(String::new())>
                                "Clear Search"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! {
                        <ul class="datasheet-list">
                            {sheets.into_iter().map(|p| view! {
                                <li>
                                    <div>
                                        <h3>{p.name.clone()}</h3>
                                        <span class="eyebrow">{p.category.clone()}</span>
                                    </div>
                                    <a href=p.href()>"View Product"</a>
                                    <a href=p.datasheet.clone().unwrap_or_default() class="btn" download="">
                                        "Download PDF"
                                    </a>
                                </li>
                            }).collect::<Vec<_>>()}
                        </ul>
                    }
                    .into_any()
                }
            }}
        </section>

        <section class="faq">
            <h2>{faq.section_title}</h2>
            <p>{faq.section_subtitle}</p>
            <FaqAccordion faqs=faq.faqs/>
        </section>

        <CtaSection/>
    }
}
