//! Tracking registry: maps live event ids to their recurring score jobs

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tracing::info;

use crate::common::errors::Result;
use crate::common::types::EventId;
use crate::tracker::cycle::PollPublishCycle;
use crate::tracker::scheduler::{JobHandle, Scheduler};

/// Single source of truth for "is this event being tracked".
///
/// Holds at most one recurring job per event id. Start and stop are
/// idempotent; all job lifecycle goes through this type. The internal lock
/// covers only map mutation plus job creation, never the fetch/publish
/// network calls, which run inside the independently scheduled cycle.
pub struct TrackingRegistry {
    scheduler: Arc<dyn Scheduler>,
    cycle: Arc<PollPublishCycle>,
    poll_interval: Duration,
    jobs: Mutex<HashMap<EventId, JobHandle>>,
}

impl TrackingRegistry {
    /// Create a registry that schedules `cycle` every `poll_interval` for
    /// each tracked event.
    pub fn new(
        scheduler: Arc<dyn Scheduler>,
        cycle: Arc<PollPublishCycle>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            scheduler,
            cycle,
            poll_interval,
            jobs: Mutex::new(HashMap::new()),
        }
    }

    /// Toggle tracking for one event. Idempotent in both directions: a
    /// duplicate start and a redundant stop are silent no-ops.
    pub fn set_tracking(&self, event_id: EventId, status: bool) -> Result<()> {
        if status {
            self.start(event_id)
        } else {
            self.stop(event_id);
            Ok(())
        }
    }

    fn start(&self, event_id: EventId) -> Result<()> {
        let mut jobs = self.jobs.lock().expect("tracking registry lock poisoned");
        if jobs.contains_key(&event_id) {
            return Ok(());
        }

        info!("Scheduling live score tracker for event {}", event_id);
        let tick = self.cycle.tick_for(event_id);
        let handle = self.scheduler.schedule(self.poll_interval, tick)?;
        jobs.insert(event_id, handle);
        Ok(())
    }

    fn stop(&self, event_id: EventId) {
        let removed = self
            .jobs
            .lock()
            .expect("tracking registry lock poisoned")
            .remove(&event_id);

        if let Some(handle) = removed {
            info!("Unscheduling live score tracker for event {}", event_id);
            handle.cancel();
        }
    }

    /// Whether a job is currently registered for `event_id`. Intended for
    /// observability and tests, not for control decisions.
    pub fn lookup(&self, event_id: EventId) -> bool {
        self.jobs
            .lock()
            .expect("tracking registry lock poisoned")
            .contains_key(&event_id)
    }

    /// Number of currently tracked events.
    pub fn tracked_count(&self) -> usize {
        self.jobs
            .lock()
            .expect("tracking registry lock poisoned")
            .len()
    }

    /// Cancel and forget every job. Called on process shutdown.
    pub fn shutdown(&self) {
        let mut jobs = self.jobs.lock().expect("tracking registry lock poisoned");
        for (event_id, handle) in jobs.drain() {
            info!("Unscheduling live score tracker for event {}", event_id);
            handle.cancel();
        }
    }
}
