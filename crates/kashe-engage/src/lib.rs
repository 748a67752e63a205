//! Interactive page state for the Kashe Energy website.
//!
//! Each type here is a small state machine owned by one page instance:
//!
//! - [`Carousel`] - Testimonial rotation with autoplay and manual navigation
//! - [`ScopedInterval`] - Repeating timer released exactly once
//! - [`ContactForm`] - Variant-aware validation and simulated submission
//! - [`Accordion`] - Single-open FAQ list
//!
//! The state machines are synchronous; the timer and gateway seams are
//! traits so the browser and native hosts plug in their own clocks.

mod accordion;
mod autoplay;
mod carousel;
pub mod contact;
mod error;

pub use accordion::Accordion;
pub use autoplay::{ScopedInterval, TimerHandle};
#[cfg(feature = "tokio")]
pub use autoplay::{spawn_autoplay, AutoplayTask, SharedCarousel};
pub use carousel::{Carousel, CarouselState, DEFAULT_INTERVAL};
pub use contact::{
    submit_contact, ContactFields, ContactForm, Field, FormCell, FormVariant, SimulatedGateway,
    Sleeper, Submission, SubmissionGateway, SubmissionId, SubmissionReceipt, SubmissionStatus,
};
#[cfg(feature = "tokio")]
pub use contact::TokioSleeper;
pub use error::{CarouselError, ContactError, SubmitError};
