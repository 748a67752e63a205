//! Application shell: routing, header and footer.

use kashe_content::{Navigation, SiteInfo};
use kashe_core::Route as SiteRoute;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_location;
use leptos_router::path;

use crate::pages::{
    AboutPage, ApplicationsPage, ContactPage, HomePage, NotFound, ProductPage, ProductsPage,
    ResourcesPage,
};
use crate::platform::site_config;

// ============================================================================
// App Component
// ============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = site_config();
    let site = SiteInfo::from_section(&config.site);
    let description = site.description.clone();
    let title = site.name.clone();
    provide_context(config);
    provide_context(site);
    provide_context(Navigation::default());

    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Stylesheet id="leptos" href="/pkg/kashe_storefront.css"/>
        <Meta name="description" content=description/>
        <Title text=title/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/about") view=AboutPage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/products/:slug") view=ProductPage/>
                    <Route path=path!("/applications") view=ApplicationsPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/resources") view=ResourcesPage/>
                    <Route path=path!("/*any") view=NotFound/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

/// Site info provided by [`App`].
pub(crate) fn use_site() -> SiteInfo {
    use_context::<SiteInfo>().unwrap_or_default()
}

// ============================================================================
// Layout Components
// ============================================================================

#[component]
fn Header() -> impl IntoView {
    let site = use_site();
    let nav = use_context::<Navigation>().unwrap_or_default();
    let location = use_location();
    let current = Memo::new(move |_| SiteRoute::parse(&location.pathname.get()));
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="site-header">
            <a href="/" class="logo">{site.name}</a>
            <button
                class="menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
                "Menu"
            </button>
            <nav class:open=move || menu_open.get()>
                {nav.main.into_iter().map(|item| {
                    let active_item = item.clone();
                    view! {
                        <a
                            href=item.href
                            title=item.description.unwrap_or_default()
                            class:active=move || current.with(|route| active_item.is_active(route))
                            on:click=move |_| set_menu_open.set(false)
                        >
                            {item.title}
                        </a>
                    }
                }).collect::<Vec<_>>()}
            </nav>
            <a href=SiteRoute::Contact { kind: kashe_core::ContactKind::Quote }.href() class="btn">
                "Get a Quote"
            </a>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    let site = use_site();
    let nav = use_context::<Navigation>().unwrap_or_default();
    let mailto = site.mailto();
    let tel = site.tel();
    let address = site.address.one_line();
    let social = site
        .social
        .iter()
        .map(|(network, url)| view! { <a href=url.to_string() rel="noopener" target="_blank">{network}</a> })
        .collect::<Vec<_>>();

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <strong>{site.name.clone()}</strong>
                <p>{site.tagline.clone()}</p>
                <p>{address}</p>
                <p>
                    <a href=mailto>{site.email.clone()}</a>
                    " · "
                    <a href=tel>{site.phone.clone()}</a>
                </p>
                <div class="social">{social}</div>
            </div>
            {nav.footer.into_iter().map(|column| view! {
                <div class="footer-column">
                    <h4>{column.title}</h4>
                    <ul>
                        {column.links.into_iter().map(|link| view! {
                            <li><a href=link.href>{link.title}</a></li>
                        }).collect::<Vec<_>>()}
                    </ul>
                </div>
            }).collect::<Vec<_>>()}
        </footer>
    }
}
