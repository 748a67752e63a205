//! Marketing content for the Kashe Energy website.
//!
//! Every content block is a plain serde struct whose `Default` is the
//! shipped copy, so pages render with no external CMS.

pub mod applications;
pub mod company;
pub mod home;
pub mod navigation;
pub mod resources;
pub mod site;

pub use applications::{Application, ApplicationsContent};
pub use company::{CompanyContent, Milestone, Value};
pub use home::{CtaContent, HeroContent, Testimonial, TestimonialsContent};
pub use navigation::{FooterColumn, NavItem, Navigation};
pub use resources::{Faq, FaqContent};
pub use site::{Address, Feature, SiteInfo, SocialLinks, Stat};
