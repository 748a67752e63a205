//! Routed pages. Each page owns its own state and logger.

mod about;
mod applications;
mod contact;
mod home;
mod not_found;
mod product;
mod products;
mod resources;

pub use about::AboutPage;
pub use applications::ApplicationsPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use not_found::NotFound;
pub use product::ProductPage;
pub use products::ProductsPage;
pub use resources::ResourcesPage;

use kashe_core::{Route, ViewContext};
use kashe_observability::StructuredLogger;

use crate::platform::page_logger;

/// Create the context and logger for a page that just mounted.
fn mount_page(route: Route) -> StructuredLogger {
    let ctx = ViewContext::new(route);
    let logger = page_logger(&ctx);
    logger.debug("page mounted");
    logger
}
