//! Recurring one-second tick source with a cancel handle.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// A spawned task that sends its generation number every `period`.
///
/// Dropping the ticker aborts the task, so a ticker can never outlive the
/// owner that armed it.
#[derive(Debug)]
pub struct Ticker {
    handle: JoinHandle<()>,
    generation: u64,
}

impl Ticker {
    /// Spawn onto the current tokio runtime. The first tick fires one
    /// `period` from now.
    pub fn spawn(period: Duration, generation: u64, tx: mpsc::UnboundedSender<u64>) -> Self {
        let first = Instant::now() + period;
        let handle = tokio::spawn(async move {
            let mut interval = interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(generation).is_err() {
                    break;
                }
            }
        });
        Self { handle, generation }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_secs(1), 7, tx);
        let started = Instant::now();

        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(started.elapsed(), Duration::from_secs(2));
        ticker.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_ticks() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let ticker = Ticker::spawn(Duration::from_secs(1), 1, tx);
        ticker.cancel();

        // The aborted task drops its sender, closing the channel.
        assert_eq!(rx.recv().await, None);
    }
}
