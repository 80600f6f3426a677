//! Periodic clock tick.
//!
//! [`Ticker`] owns a background task that emits one tick per period. The
//! owner pulls ticks with [`Ticker::tick`] and stops the task with
//! [`Ticker::cancel`] or by dropping it. Ticks delayed past a whole period
//! are skipped rather than delivered in a burst.
//!
//! ## Usage
//!
//! ```ignore
//! let mut ticker = Ticker::start(Duration::from_secs(1));
//! while let Some(_) = ticker.tick().await {
//!     dashboard.tick();
//! }
//! ```

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

pub struct Ticker {
    ticks: mpsc::Receiver<u64>,
    task: JoinHandle<()>,
}

impl Ticker {
    /// Spawn the tick task. Must be called inside a Tokio runtime.
    pub fn start(period: Duration) -> Self {
        let (tx, ticks) = mpsc::channel(1);
        let task = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut seq: u64 = 0;
            loop {
                interval.tick().await;
                seq += 1;
                if tx.send(seq).await.is_err() {
                    break;
                }
            }
        });
        debug!(period_ms = period.as_millis() as u64, "ticker started");
        Self { ticks, task }
    }

    /// Wait for the next tick. Returns its sequence number, or `None` once
    /// the ticker is cancelled.
    pub async fn tick(&mut self) -> Option<u64> {
        self.ticks.recv().await
    }

    pub fn cancel(&self) {
        if !self.task.is_finished() {
            debug!("ticker cancelled");
        }
        self.task.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn emits_sequential_ticks() {
        let mut ticker = Ticker::start(Duration::from_millis(5));
        assert_eq!(ticker.tick().await, Some(1));
        assert_eq!(ticker.tick().await, Some(2));
        assert_eq!(ticker.tick().await, Some(3));
    }

    #[tokio::test]
    async fn cancel_ends_the_stream() {
        let mut ticker = Ticker::start(Duration::from_millis(5));
        assert!(ticker.tick().await.is_some());
        ticker.cancel();
        // At most one tick may already be buffered.
        let mut drained = 0;
        while ticker.tick().await.is_some() {
            drained += 1;
        }
        assert!(drained <= 1);
        assert!(ticker.is_cancelled());
    }
}
