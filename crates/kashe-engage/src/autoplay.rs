//! Repeating timers scoped to a view's lifetime.

/// A platform timer that can be stopped.
pub trait TimerHandle {
    /// Stop the timer. Called at most once.
    fn cancel(self);
}

/// Owns a timer handle and releases it exactly once, on [`cancel`](Self::cancel)
/// or on drop, whichever comes first.
#[derive(Debug)]
pub struct ScopedInterval<H: TimerHandle> {
    handle: Option<H>,
}

impl<H: TimerHandle> ScopedInterval<H> {
    pub fn new(handle: H) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    /// Release the timer. Returns false if it was already released.
    pub fn cancel(&mut self) -> bool {
        match self.handle.take() {
            Some(handle) => {
                handle.cancel();
                true
            }
            None => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.handle.is_some()
    }
}

impl<H: TimerHandle> Drop for ScopedInterval<H> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(feature = "tokio")]
pub use self::native::{spawn_autoplay, AutoplayTask, SharedCarousel};

#[cfg(feature = "tokio")]
mod native {
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tokio::task::JoinHandle;
    use tokio::time::{interval_at, Instant};

    use super::{ScopedInterval, TimerHandle};
    use crate::carousel::Carousel;

    /// Carousel shared between a view and its autoplay task.
    pub type SharedCarousel = Arc<Mutex<Carousel>>;

    /// A running tokio autoplay loop.
    #[derive(Debug)]
    pub struct AutoplayTask {
        carousel: SharedCarousel,
        stopped: Arc<AtomicBool>,
        join: JoinHandle<()>,
    }

    impl TimerHandle for AutoplayTask {
        fn cancel(self) {
            // Flag is set under the carousel lock: no tick is mid-flight once
            // this returns.
            let guard = self.carousel.lock();
            self.stopped.store(true, Ordering::SeqCst);
            drop(guard);
            self.join.abort();
            tracing::debug!("carousel autoplay cancelled");
        }
    }

    /// Tick `carousel` every `period` until it is paused or the returned
    /// guard is released.
    ///
    /// The first tick fires one full period after the call.
    pub fn spawn_autoplay(
        carousel: SharedCarousel,
        period: Duration,
    ) -> ScopedInterval<AutoplayTask> {
        let stopped = Arc::new(AtomicBool::new(false));
        let task_carousel = Arc::clone(&carousel);
        let task_stopped = Arc::clone(&stopped);

        let join = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            tracing::debug!(period_ms = period.as_millis() as u64, "carousel autoplay started");
            loop {
                ticker.tick().await;
                let Ok(mut carousel) = task_carousel.lock() else {
                    break;
                };
                if task_stopped.load(Ordering::SeqCst) {
                    break;
                }
                if !carousel.tick() {
                    tracing::debug!(index = carousel.index(), "carousel paused, autoplay stopped");
                    break;
                }
                tracing::trace!(index = carousel.index(), "carousel advanced");
            }
        });

        ScopedInterval::new(AutoplayTask {
            carousel,
            stopped,
            join,
        })
    }
}
