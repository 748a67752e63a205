//! Shared interactive and presentational components.

use kashe_catalog::{Product, ViewMode};
use kashe_content::{CtaContent, Faq, Testimonial};
use kashe_core::SiteConfig;
use kashe_engage::{Accordion, Carousel};
use leptos::prelude::*;

use crate::platform::every;

// ============================================================================
// Product Components
// ============================================================================

#[component]
pub fn ProductCard(
    product: &'static Product,
    #[prop(optional)] mode: ViewMode,
) -> impl IntoView {
    let href = product.href();
    let class = match mode {
        ViewMode::Grid => "product-card",
        ViewMode::List => "product-card product-card--list",
    };

    view! {
        <div class=class>
            <img src=product.image.clone() alt=product.name.clone() loading="lazy"/>
            <div class="product-info">
                <span class="eyebrow">{product.category.clone()}</span>
                <h3>{product.name.clone()}</h3>
                <p>{product.short_description.clone()}</p>
                <a href=href class="btn btn--ghost">"View Details"</a>
            </div>
        </div>
    }
}

#[component]
pub fn ProductGrid(products: Vec<&'static Product>, #[prop(optional)] mode: ViewMode) -> impl IntoView {
    let class = format!("products products--{}", mode.as_str());
    view! {
        <div class=class>
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product mode=mode/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

// ============================================================================
// Testimonial Carousel
// ============================================================================

/// Rotating testimonials. Autoplay advances every configured interval until
/// the visitor navigates manually; the timer is released on unmount.
#[component]
pub fn TestimonialCarousel(testimonials: Vec<Testimonial>) -> impl IntoView {
    let Ok(initial) = Carousel::for_items(&testimonials) else {
        return view! { <></> }.into_any();
    };
    let period = use_context::<SiteConfig>()
        .unwrap_or_default()
        .carousel
        .interval();

    let carousel = RwSignal::new(initial);
    let timer = StoredValue::new_local(Some(every(period, move || {
        carousel.update(|c| {
            c.tick();
        });
    })));
    on_cleanup(move || {
        timer.update_value(|timer| {
            if let Some(mut timer) = timer.take() {
                timer.cancel();
            }
        });
    });

    let count = testimonials.len();
    let testimonials = StoredValue::new(testimonials);
    let current = move || {
        let index = carousel.with(|c| c.index());
        testimonials.with_value(|items| items.get(index).cloned())
    };

    view! {
        <div class="carousel">
            {move || current().map(|t| {
                let stars = "★".repeat(usize::from(t.rating));
                let initials = t.initials();
                let attribution = t.attribution();
                view! {
                    <blockquote class="testimonial">
                        <div class="rating" aria-label=format!("{} out of 5", t.rating)>{stars}</div>
                        <p>{t.quote}</p>
                        <footer>
                            <span class="avatar">{initials}</span>
                            <strong>{t.author}</strong>
                            <span>{attribution}</span>
                        </footer>
                    </blockquote>
                }
            })}
            <div class="carousel-controls">
                <button aria-label="Previous testimonial" on:click=move |_| carousel.update(|c| {
                    c.previous();
                })>
                    "‹"
                </button>
                {(0..count).map(|i| view! {
                    <button
                        class="dot"
                        class:active=move || carousel.with(|c| c.index() == i)
                        aria-label=format!("Go to testimonial {}", i + 1)
                        on:click=move |_| carousel.update(|c| {
                            let _ = c.jump_to(i);
                        })
                    ></button>
                }).collect::<Vec<_>>()}
                <button aria-label="Next testimonial" on:click=move |_| carousel.update(|c| {
                    c.next();
                })>
                    "›"
                </button>
            </div>
        </div>
    }
    .into_any()
}

// ============================================================================
// FAQ Accordion
// ============================================================================

#[component]
pub fn FaqAccordion(faqs: Vec<Faq>) -> impl IntoView {
    let accordion = RwSignal::new(Accordion::new(faqs.len()));

    view! {
        <div class="accordion">
            {faqs.into_iter().enumerate().map(|(i, Faq { question, answer })| view! {
                <div class="accordion-item" class:open=move || accordion.with(|a| a.is_open(i))>
                    <button
                        class="accordion-trigger"
                        aria-expanded=move || accordion.with(|a| a.is_open(i)).to_string()
                        on:click=move |_| accordion.update(|a| a.toggle(i))
                    >
                        {question}
                    </button>
                    <Show when=move || accordion.with(|a| a.is_open(i))>
                        <p class="accordion-content">{answer.clone()}</p>
                    </Show>
                </div>
            }).collect::<Vec<_>>()}
        </div>
    }
}

// ============================================================================
// Call to Action
// ============================================================================

#[component]
pub fn CtaSection(#[prop(optional)] content: Option<CtaContent>) -> impl IntoView {
    let cta = content.unwrap_or_default();
    let secondary = cta
        .secondary_cta_text
        .zip(cta.secondary_cta_url)
        .map(|(text, url)| view! { <a href=url class="btn btn--ghost">{text}</a> });

    view! {
        <section class="cta">
            <h2>{cta.headline}</h2>
            <p>{cta.subheadline}</p>
            <div class="cta-actions">
                <a href=cta.primary_cta_url class="btn">{cta.primary_cta_text}</a>
                {secondary}
            </div>
            <ul class="perks">
                {cta.perks.into_iter().map(|perk| view! { <li>{perk}</li> }).collect::<Vec<_>>()}
            </ul>
        </section>
    }
}
