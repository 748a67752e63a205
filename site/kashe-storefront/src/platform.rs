//! Browser bindings: timers, the submission clock, console logging and the
//! embedded site configuration.

use std::time::Duration;

use async_trait::async_trait;
use gloo_timers::callback::Interval;
use kashe_core::{SiteConfig, ViewContext};
use kashe_engage::{ScopedInterval, Sleeper, TimerHandle};
use kashe_observability::{LogFormat, LogLevel, LogSink, StructuredLogger};

const SITE_CONFIG: &str = include_str!("../kashe.toml");

/// Parse the configuration bundled with the site, falling back to defaults.
pub fn site_config() -> SiteConfig {
    match SiteConfig::from_toml_str(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            leptos::logging::error!("Invalid kashe.toml, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}

/// Logger for one mounted page, writing to the browser console.
pub fn page_logger(ctx: &ViewContext) -> StructuredLogger {
    let min_level = if cfg!(debug_assertions) {
        LogLevel::Debug
    } else {
        LogLevel::Info
    };
    StructuredLogger::for_view(ctx)
        .with_format(LogFormat::Human)
        .with_min_level(min_level)
        .with_sink(LogSink::writer(|level, line| match level {
            LogLevel::Error => leptos::logging::error!("{}", line),
            LogLevel::Warn => leptos::logging::warn!("{}", line),
            _ => leptos::logging::log!("{}", line),
        }))
}

/// A `setInterval` registration.
pub struct BrowserInterval(Interval);

impl TimerHandle for BrowserInterval {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}

/// Call `tick` every `period` until the returned guard is released.
pub fn every(period: Duration, tick: impl FnMut() + 'static) -> ScopedInterval<BrowserInterval> {
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    ScopedInterval::new(BrowserInterval(Interval::new(millis, tick)))
}

/// `setTimeout`-backed clock for submissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

// The storefront only builds for wasm32 (see .cargo/config.toml), where
// `Sleeper` is declared `?Send`. The timer future holds JS handles and is
// never `Send`, so there is no native counterpart.
#[async_trait(?Send)]
impl Sleeper for GlooSleeper {
    async fn sleep(&self, duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}
