use kashe_catalog::Catalog;
use kashe_content::{HeroContent, TestimonialsContent};
use kashe_core::Route;
use leptos::prelude::*;
use leptos_meta::Title;

use super::mount_page;
use crate::app::use_site;
use crate::components::{CtaSection, ProductGrid, TestimonialCarousel};

/// Home page: hero, features, featured products and testimonials.
#[component]
pub fn HomePage() -> impl IntoView {
    let logger = mount_page(Route::Home);
    let site = use_site();
    let hero = HeroContent::default();
    let testimonials = TestimonialsContent::default();
    let featured = Catalog::builtin().featured_products();
    logger.info_builder("home rendered")
        .field_u64("featured", featured.len() as u64)
        .emit();

    view! {
        <Title text=site.page_title("Home")/>
        <section class="hero">
            <h1>
                {hero.headline.into_iter().map(|line| view! { <span>{line}</span> }).collect::<Vec<_>>()}
            </h1>
            <p>{hero.subheadline}</p>
            <a href=hero.cta_url class="btn">{hero.cta_text}</a>
            <div class="badges">
                <span class="eyebrow">{hero.badge_title}</span>
                {site.certifications.iter().map(|c| view! { <span class="badge">{c.clone()}</span> }).collect::<Vec<_>>()}
            </div>
        </section>

        <section class="stats">
            {site.stats.iter().map(|stat| view! {
                <div class="stat">
                    <strong>{stat.value.clone()}</strong>
                    <span>{stat.label.clone()}</span>
                </div>
            }).collect::<Vec<_>>()}
        </section>

        <section class="features">
            {site.features.iter().map(|feature| view! {
                <div class="feature" data-icon=feature.icon.clone()>
                    <h3>{feature.title.clone()}</h3>
                    <p>{feature.description.clone()}</p>
                </div>
            }).collect::<Vec<_>>()}
        </section>

        <section>
            <h2>"Featured Products"</h2>
            <ProductGrid products=featured/>
        </section>

        <section class="testimonials">
            <span class="eyebrow">{testimonials.eyebrow}</span>
            <h2>{testimonials.section_title}</h2>
            <TestimonialCarousel testimonials=testimonials.testimonials/>
        </section>

        <CtaSection/>
    }
}
