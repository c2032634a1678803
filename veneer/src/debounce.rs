//! Debounced execution.
//!
//! A [`Debouncer`] delays work until a quiet period has elapsed since the
//! last trigger. Every trigger bumps a generation counter and spawns a
//! timer task; when the timer fires, the task runs its closure only if no
//! newer trigger arrived in the meantime, so intermediate triggers discard
//! themselves.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Quiet period applied to search inputs.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Generation-counted debouncer.
///
/// Requires a tokio runtime; `trigger` spawns the timer task.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    generation: Arc<AtomicU64>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule `f` to run after the quiet period, superseding any pending
    /// trigger.
    pub fn trigger<F>(&self, f: F) -> JoinHandle<()>
    where
        F: FnOnce() + Send + 'static,
    {
        let current = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let generation = Arc::clone(&self.generation);
        let delay = self.delay;

        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if generation.load(Ordering::SeqCst) == current {
                f();
            }
        })
    }

    /// Drop any pending trigger without running it.
    pub fn cancel(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }
}

impl Clone for Debouncer {
    fn clone(&self) -> Self {
        Self {
            delay: self.delay,
            generation: Arc::clone(&self.generation),
        }
    }
}
