//! Poll-publish cycle: the unit of work bound to one tracked event

use std::sync::Arc;

use tracing::{debug, error};

use crate::common::traits::{ScorePublisher, ScoreSource};
use crate::common::types::{EventId, ScoreUpdate};
use crate::tracker::retry::{with_retry, RetryPolicy};
use crate::tracker::scheduler::Tick;

/// Fetches the current score for an event and forwards it downstream.
///
/// Each invocation is best effort: fetch and publish each get their own
/// independent retry budget, exhausted retries are logged and the cycle
/// ends, leaving the recurring job scheduled for the next tick. Nothing
/// here ever unschedules the job or escapes to the scheduler.
pub struct PollPublishCycle {
    source: Arc<dyn ScoreSource>,
    publisher: Arc<dyn ScorePublisher>,
    fetch_retry: RetryPolicy,
    publish_retry: RetryPolicy,
}

impl PollPublishCycle {
    /// Create a cycle using the same retry policy for fetch and publish.
    pub fn new(
        source: Arc<dyn ScoreSource>,
        publisher: Arc<dyn ScorePublisher>,
        retry: RetryPolicy,
    ) -> Self {
        Self {
            source,
            publisher,
            fetch_retry: retry,
            publish_retry: retry,
        }
    }

    /// Run one tick for `event_id`.
    pub async fn run(&self, event_id: EventId) {
        let snapshot = match with_retry(self.fetch_retry, "score fetch", || {
            self.source.fetch_score(event_id)
        })
        .await
        {
            Ok(snapshot) => snapshot,
            Err(err) => {
                error!(
                    "could not fetch score for event {} this cycle: {}",
                    event_id, err
                );
                return;
            }
        };

        let update = ScoreUpdate::from(snapshot);
        match with_retry(self.publish_retry, "score publish", || {
            self.publisher.publish(&update)
        })
        .await
        {
            Ok(()) => debug!("published score update for event {}", event_id),
            Err(err) => {
                error!(
                    "could not publish score for event {} this cycle: {}",
                    event_id, err
                );
            }
        }
    }

    /// Bind this cycle to an event id as a schedulable unit of work.
    pub fn tick_for(self: &Arc<Self>, event_id: EventId) -> Tick {
        let cycle = Arc::clone(self);
        Arc::new(move || {
            let cycle = Arc::clone(&cycle);
            Box::pin(async move { cycle.run(event_id).await })
        })
    }
}
