//! Per-view context.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::route::Route;

/// Identifier for one mounted page instance.
///
/// Every page creates its own id when it mounts, so log lines from two
/// visits to the same route can be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ViewId(pub String);

impl ViewId {
    /// Generate a new view ID.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
        Self(format!("view-{:x}-{:04x}", seq, mix(seq)))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Cheap bit mixing so consecutive ids don't look alike in logs.
fn mix(seq: u64) -> u16 {
    let x = seq.wrapping_mul(0x9E37_79B9_7F4A_7C15);
    (x >> 48) as u16
}

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Context handed to a page when it mounts.
#[derive(Debug, Clone)]
pub struct ViewContext {
    /// Unique view identifier.
    pub view_id: ViewId,
    /// The route being rendered.
    pub route: Route,
}

impl ViewContext {
    /// Create a context for a freshly mounted view.
    pub fn new(route: Route) -> Self {
        Self {
            view_id: ViewId::generate(),
            route,
        }
    }

    /// Create a context by parsing a path with optional query string.
    pub fn from_location(path_and_query: &str) -> Self {
        Self::new(Route::parse(path_and_query))
    }

    /// Page name for log correlation.
    pub fn page(&self) -> &'static str {
        self.route.name()
    }
}
