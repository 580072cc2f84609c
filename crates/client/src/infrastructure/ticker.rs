//! One-second wall-clock ticker.

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tokio::time::{interval, Duration, MissedTickBehavior};

/// Fires a callback every second from a background task.
///
/// The task is aborted on drop, so the ticker cannot outlive its owner.
pub struct WallClockTicker {
    handle: JoinHandle<()>,
}

impl WallClockTicker {
    pub fn spawn<F>(mut on_tick: F) -> Self
    where
        F: FnMut(DateTime<Utc>) + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticks = interval(Duration::from_secs(1));
            ticks.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticks.tick().await;
                on_tick(Utc::now());
            }
        });
        Self { handle }
    }
}

impl Drop for WallClockTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
