use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval_at};

/// Drives ticks at a fixed period while running. Every (re)start rebases the
/// time base, so a stopped scheduler never catches up on missed ticks.
pub struct TickScheduler {
    interval: Option<Interval>,
    period: Duration,
}

impl Default for TickScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl TickScheduler {
    pub fn new() -> Self {
        Self {
            interval: None,
            period: Duration::ZERO,
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub fn period(&self) -> Option<Duration> {
        self.interval.as_ref().map(|_| self.period)
    }

    pub fn start(&mut self, period: Duration) {
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.interval = Some(interval);
        self.period = period;
    }

    pub fn stop(&mut self) {
        self.interval = None;
    }

    /// Starts, stops or re-times the scheduler to match what the game needs.
    pub fn sync(&mut self, active: bool, period: Duration) {
        if !active {
            self.stop();
        } else if self.period() != Some(period) {
            self.start(period);
        }
    }

    /// Never resolves while stopped.
    pub async fn tick(&mut self) {
        match self.interval.as_mut() {
            Some(interval) => {
                interval.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }
}
