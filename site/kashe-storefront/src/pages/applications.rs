use kashe_content::ApplicationsContent;
use kashe_core::Route;
use leptos::prelude::*;
use leptos_meta::Title;

use super::mount_page;
use crate::app::use_site;
use crate::components::CtaSection;

#[component]
pub fn ApplicationsPage() -> impl IntoView {
    let _logger = mount_page(Route::Applications);
    let site = use_site();
    let content = ApplicationsContent::default();

    view! {
        <Title text=site.page_title("Applications")/>
        <section class="page-hero">
            <h1>{content.title}</h1>
            <p>{content.description}</p>
        </section>

        <section class="applications">
            {content.applications.into_iter().map(|app| {
                let href = app.href();
                view! {
                    <div class="application" data-icon=app.icon>
                        <h3>{app.title}</h3>
                        <p>{app.description}</p>
                        <h4>"Recommended Products"</h4>
                        <ul>
                            {app.products.into_iter().map(|p| view! { <li>{p}</li> }).collect::<Vec<_>>()}
                        </ul>
                        <a href=href>"View Products"</a>
                    </div>
                }
            }).collect::<Vec<_>>()}
        </section>

        <CtaSection/>
    }
}
