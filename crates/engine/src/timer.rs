//! Cancellable periodic drop timer.

use std::future;
use std::time::Duration;

use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// At most one periodic timer; replaced on restart, dropped on cancel.
///
/// Must be armed from within a tokio runtime.
#[derive(Debug, Default)]
pub struct DropTimer {
    interval: Option<Interval>,
}

impl DropTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any running timer. The first tick fires one full `period` from now.
    pub fn restart(&mut self, period: Duration) {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
    }

    pub fn cancel(&mut self) {
        self.interval = None;
    }

    pub fn is_armed(&self) -> bool {
        self.interval.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(Interval::period)
    }

    /// Resolves on the next tick; never resolves while disarmed.
    pub async fn wait(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => future::pending().await,
        }
    }
}
