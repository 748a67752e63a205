use kashe_content::CompanyContent;
use kashe_core::Route;
use leptos::prelude::*;
use leptos_meta::Title;

use super::mount_page;
use crate::app::use_site;
use crate::components::CtaSection;

#[component]
pub fn AboutPage() -> impl IntoView {
    let _logger = mount_page(Route::About);
    let site = use_site();
    let company = CompanyContent::default();
    let since = company
        .founded()
        .map(|year| format!("Since {}", year))
        .unwrap_or_default();

    view! {
        <Title text=site.page_title("About")/>
        <section class="page-hero">
            <span class="eyebrow">{since}</span>
            <h1>{company.story_title}</h1>
            {company.story.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
        </section>

        <section class="timeline">
            <h2>"Our Journey"</h2>
            <ol>
                {company.milestones.into_iter().map(|m| view! {
                    <li>
                        <span class="year">{m.year}</span>
                        <h3>{m.title}</h3>
                        <p>{m.description}</p>
                    </li>
                }).collect::<Vec<_>>()}
            </ol>
        </section>

        <section class="values">
            <h2>"Our Values"</h2>
            {company.values.into_iter().map(|v| view! {
                <div class="value" data-icon=v.icon>
                    <h3>{v.title}</h3>
                    <p>{v.description}</p>
                </div>
            }).collect::<Vec<_>>()}
        </section>

        <CtaSection/>
    }
}
