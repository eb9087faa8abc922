use async_trait::async_trait;
use std::time::Duration;

/// Wall-clock pacing applied between ticks. Simulated time advances independently
/// of the pacer; it only decides how long a tick takes in real time.
#[async_trait]
pub trait Pacer: Send {
    async fn pace(&mut self);
}

/// Sleeps one tick period after every tick. Best effort: time spent inside the tick
/// is not compensated, so the run drifts behind the wall clock under load.
#[derive(Debug, Clone, Copy)]
pub struct RealTimePacer {
    period: Duration,
}

impl RealTimePacer {
    pub fn new(tick_rate: u32) -> Self {
        Self { period: Duration::from_secs_f64(1.0 / f64::from(tick_rate.max(1))) }
    }

    pub fn period(&self) -> Duration { self.period }
}

#[async_trait]
impl Pacer for RealTimePacer {
    async fn pace(&mut self) { tokio::time::sleep(self.period).await; }
}

/// Runs ticks back to back, only yielding to the runtime in between so signal
/// handlers still get polled.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unpaced;

#[async_trait]
impl Pacer for Unpaced {
    async fn pace(&mut self) { tokio::task::yield_now().await; }
}
