//! Kashe Energy website
//!
//! Leptos front end over the site crates:
//! - Catalog browsing with category and text filters
//! - Testimonial carousel with autoplay
//! - Variant-aware contact form with simulated submission
//! - Datasheet search and FAQ accordion

pub mod app;
mod components;
mod pages;
mod platform;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use app::App;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
