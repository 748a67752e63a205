//! Core abstractions for the Kashe Energy website.
//!
//! This crate provides the fundamental types shared by every page:
//! - `Route` - The page surface reachable by path, with its query parameters
//! - `QueryParams` - Decoded query string parameters
//! - `ViewId` - Identifier for one mounted page instance
//! - `SiteConfig` - Site configuration loaded from TOML or JSON

mod config;
mod context;
mod error;
mod query;
mod route;

pub use config::*;
pub use context::*;
pub use error::*;
pub use query::*;
pub use route::*;
