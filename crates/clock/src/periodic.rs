//! Repeating background tasks with cancelable handles
//!
//! Both the one-second display tick and the hourly resync are instances
//! of the same shape: wait an initial delay, then run a task every fixed
//! period. [`schedule`] spawns that loop and hands back ownership of it.

use log::debug;
use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at};

/// Ownership handle for a scheduled periodic task
///
/// Present-and-active means the task is running. Dropping the handle
/// cancels the task, so whoever holds it decides its lifetime.
pub struct CancelHandle {
    handle: JoinHandle<()>,
}

impl CancelHandle {
    /// Whether the underlying task is still running
    pub fn is_active(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stop the task
    pub fn cancel(&self) {
        self.handle.abort();
    }
}

impl Drop for CancelHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Run `task` every `period`, first firing after `initial_delay`
///
/// An `initial_delay` of zero fires immediately. The returned handle is
/// the only way to stop the loop.
pub fn schedule<F, Fut>(initial_delay: Duration, period: Duration, mut task: F) -> CancelHandle
where
    F: FnMut() -> Fut + Send + 'static,
    Fut: Future<Output = ()> + Send,
{
    debug!(
        "scheduling periodic task: initial delay {:?}, period {:?}",
        initial_delay, period
    );
    let handle = tokio::spawn(async move {
        let mut ticks = interval_at(Instant::now() + initial_delay, period);
        loop {
            ticks.tick().await;
            task().await;
        }
    });
    CancelHandle { handle }
}
