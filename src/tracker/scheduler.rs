//! Fixed-rate periodic scheduler producing cancellable job handles

use std::sync::Arc;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::common::errors::Result;

/// Unit of work invoked on every tick of a recurring job.
pub type Tick = Arc<dyn Fn() -> BoxFuture<'static, ()> + Send + Sync>;

/// Opaque cancellable handle to a running recurring job.
///
/// Owned exclusively by its registry entry once created. Cancelling stops
/// future ticks; a tick already in flight finishes on its own and the
/// handle's unit of work is never invoked again.
#[derive(Debug)]
pub struct JobHandle {
    driver: JoinHandle<()>,
}

impl JobHandle {
    pub(crate) fn new(driver: JoinHandle<()>) -> Self {
        Self { driver }
    }

    /// Stop future ticks. Non-blocking: does not wait for or interrupt an
    /// invocation currently running.
    pub fn cancel(&self) {
        self.driver.abort();
    }

    /// Whether the driving task has terminated.
    pub fn is_finished(&self) -> bool {
        self.driver.is_finished()
    }
}

/// Capability for creating recurring jobs, injected into the registry.
///
/// Failure isolation inside a tick is the unit of work's own responsibility;
/// the scheduler neither retries nor inspects tick outcomes.
#[cfg_attr(test, mockall::automock)]
pub trait Scheduler: Send + Sync {
    /// Start invoking `tick` every `period`, beginning one full period from
    /// now rather than immediately. Returns the handle that cancels future
    /// invocations.
    fn schedule(&self, period: Duration, tick: Tick) -> Result<JobHandle>;
}

/// Tokio-backed fixed-rate scheduler.
///
/// Ticks are armed at absolute offsets (t0+period, t0+2·period, ...). Every
/// invocation is spawned as its own task, so a slow tick does not delay the
/// next one and in-flight invocations may overlap.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedRateScheduler;

impl FixedRateScheduler {
    /// Create a new fixed-rate scheduler.
    pub fn new() -> Self {
        Self
    }
}

impl Scheduler for FixedRateScheduler {
    fn schedule(&self, period: Duration, tick: Tick) -> Result<JobHandle> {
        let driver = tokio::spawn(async move {
            let mut timer = interval_at(Instant::now() + period, period);
            timer.set_missed_tick_behavior(MissedTickBehavior::Burst);
            loop {
                timer.tick().await;
                tokio::spawn(tick());
            }
        });

        Ok(JobHandle::new(driver))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use tokio::time::advance;

    fn counting_tick() -> (Arc<AtomicU32>, Tick) {
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();
        let tick: Tick = Arc::new(move || {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
            })
        });
        (calls, tick)
    }

    /// Let spawned tasks make progress after an `advance`.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_full_period() {
        let scheduler = FixedRateScheduler::new();
        let (calls, tick) = counting_tick();

        let handle = scheduler.schedule(Duration::from_secs(10), tick).unwrap();
        settle().await;

        advance(Duration::from_secs(9)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        advance(Duration::from_secs(1)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        handle.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_repeat_at_fixed_rate() {
        let scheduler = FixedRateScheduler::new();
        let (calls, tick) = counting_tick();

        let handle = scheduler.schedule(Duration::from_secs(10), tick).unwrap();
        settle().await;

        for expected in 1..=3 {
            advance(Duration::from_secs(10)).await;
            settle().await;
            assert_eq!(calls.load(Ordering::SeqCst), expected);
        }

        handle.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_before_first_tick_prevents_any_invocation() {
        let scheduler = FixedRateScheduler::new();
        let (calls, tick) = counting_tick();

        let handle = scheduler.schedule(Duration::from_secs(10), tick).unwrap();
        settle().await;
        handle.cancel();

        advance(Duration::from_secs(60)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_future_ticks_only() {
        let scheduler = FixedRateScheduler::new();
        let (calls, tick) = counting_tick();

        let handle = scheduler.schedule(Duration::from_secs(10), tick).unwrap();
        settle().await;

        advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        handle.cancel();
        advance(Duration::from_secs(60)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_invocation_does_not_delay_next_tick() {
        let scheduler = FixedRateScheduler::new();
        let calls = Arc::new(AtomicU32::new(0));
        let counter = calls.clone();

        // Each invocation takes 15s, longer than the 10s period.
        let tick: Tick = Arc::new(move || {
            let counter = counter.clone();
            Box::pin(async move {
                counter.fetch_add(1, Ordering::SeqCst);
                tokio::time::sleep(Duration::from_secs(15)).await;
            })
        });

        let handle = scheduler.schedule(Duration::from_secs(10), tick).unwrap();
        settle().await;

        advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        // Second tick fires at t=20 even though the first is still running.
        advance(Duration::from_secs(10)).await;
        settle().await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        handle.cancel();
    }
}
