use kashe_core::Route;
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_location;

use super::mount_page;
use crate::app::use_site;

/// 404 page
#[component]
pub fn NotFound() -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    let logger = mount_page(Route::NotFound { path: path.clone() });
    logger.warn_builder("page not found").field("path", path).emit();
    let site = use_site();

    view! {
        <Title text=site.page_title("Page Not Found")/>
        <div class="not-found">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <a href="/" class="btn">"Back to Home"</a>
            <a href=Route::Products { category: None, query: None, view: None }.href() class="btn btn--ghost">
                "Browse Products"
            </a>
        </div>
    }
}
