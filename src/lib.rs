//! LiveScoreTracker Library
//!
//! A Rust service that tracks a set of live events and, for each tracked
//! event, runs a recurring job that fetches the event's current score from
//! an external API and forwards it to a Kafka topic.

pub mod api;
pub mod common;
pub mod config;
pub mod http;
pub mod publish;
pub mod tracker;

// Re-export commonly used types
pub use api::client::LiveScoreApiClient;
pub use common::errors::{Result, TrackerError};
pub use common::traits::{ScorePublisher, ScoreSource};
pub use common::types::{EventId, ScoreSnapshot, ScoreUpdate, TrackingRequest};
pub use config::types::AppConfig;
pub use publish::kafka::KafkaScorePublisher;

// Tracking pipeline types
pub use tracker::cycle::PollPublishCycle;
pub use tracker::registry::TrackingRegistry;
pub use tracker::retry::{with_retry, RetryPolicy};
pub use tracker::scheduler::{FixedRateScheduler, JobHandle, Scheduler, Tick};
