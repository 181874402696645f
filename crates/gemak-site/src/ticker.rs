//! # Cosmetic Ticker
//!
//! A cancellable periodic task for UI effects that advance on a timer:
//! the hero carousel and the testimonial rotation.
//!
//! ## Scope
//! These are cosmetic timers, not business logic. The only contract is
//! that a cancelled ticker stops firing; nothing downstream depends on
//! tick timing.
//!
//! ## Usage
//! ```rust,no_run
//! use std::time::Duration;
//! use gemak_site::ticker::Ticker;
//!
//! # async fn demo() {
//! let ticker = Ticker::every(Duration::from_secs(5), || {
//!     // advance the testimonial carousel
//! });
//! // later, when the component unmounts:
//! ticker.cancel();
//! # }
//! ```

use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};
use tracing::debug;

/// A periodic background task that fires a callback every `period`.
///
/// Cancelled explicitly via [`Ticker::cancel`] or implicitly on drop, so a
/// ticker can never outlive the component that created it.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
}

impl Ticker {
    /// Spawns a ticker firing `tick` every `period`, starting one period
    /// from now.
    pub fn every<F>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut timer = interval(period);
            // A UI carousel that falls behind should skip, not burst.
            timer.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first interval tick completes immediately; consume it so
            // the first visible advance happens after one full period.
            timer.tick().await;
            loop {
                timer.tick().await;
                tick();
            }
        });

        debug!(?period, "Ticker started");
        Ticker { handle }
    }

    /// Stops the ticker. Idempotent.
    pub fn cancel(&self) {
        self.handle.abort();
    }

    /// Whether the ticker has stopped.
    pub fn is_cancelled(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn test_ticker_fires_each_period() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let _ticker = Ticker::every(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(count.load(Ordering::SeqCst), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_firing() {
        let count = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&count);
        let ticker = Ticker::every(Duration::from_secs(1), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        tokio::time::sleep(Duration::from_millis(1500)).await;
        ticker.cancel();
        let after_cancel = count.load(Ordering::SeqCst);

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_cancel);
        assert!(ticker.is_cancelled());
    }
}
