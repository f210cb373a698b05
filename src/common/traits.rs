//! Trait definitions for the tracking pipeline's collaborators
//!
//! The poll-publish cycle only ever talks to the external score source and
//! the downstream transport through these traits, so both can be swapped or
//! mocked without touching the pipeline itself.

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::errors::Result;
use super::types::{EventId, ScoreSnapshot, ScoreUpdate};

/// External score source queried on every poll cycle.
///
/// Any transport-level error (timeout, non-success status, connection
/// failure) is surfaced as an error and treated as a fetch failure for
/// retry purposes.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScoreSource: Send + Sync {
    /// Fetch the current score snapshot for one event.
    async fn fetch_score(&self, event_id: EventId) -> Result<ScoreSnapshot>;
}

/// Downstream transport for score update messages.
///
/// Delivery guarantees beyond "the cycle retries a failed publish" are the
/// transport's own concern.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScorePublisher: Send + Sync {
    /// Send one score update message downstream.
    async fn publish(&self, update: &ScoreUpdate) -> Result<()>;
}
