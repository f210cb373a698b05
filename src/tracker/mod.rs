//! Tracking module - the event-tracking job registry and its poll-publish pipeline
//!
//! # Architecture
//!
//! ```text
//! set_tracking(id, true)
//!        │
//!        ▼
//! ┌──────────────────┐   schedule    ┌────────────────────┐
//! │ TrackingRegistry │──────────────►│ FixedRateScheduler │
//! │  id → JobHandle  │◄──JobHandle───│  (one driver task  │
//! └──────────────────┘               │   per tracked id)  │
//!                                    └─────────┬──────────┘
//!                                        every tick
//!                                              ▼
//!                                  ┌───────────────────────┐
//!                                  │   PollPublishCycle    │
//!                                  │ fetch ──► publish     │
//!                                  │ (each with_retry'd)   │
//!                                  └───────────────────────┘
//! ```
//!
//! - [`TrackingRegistry`]: maps event ids to live jobs; exactly one job per
//!   tracked event, idempotent start/stop.
//! - [`FixedRateScheduler`]: arms ticks at absolute time offsets; cancelling
//!   a [`JobHandle`] stops future ticks without interrupting one in flight.
//! - [`PollPublishCycle`]: one best-effort fetch-then-publish per tick;
//!   failures are contained so the job stays scheduled.
//! - [`with_retry`]: bounded-retry wrapper shared by the fetch and publish
//!   steps, with independent attempt budgets.

pub mod cycle;
pub mod registry;
pub mod retry;
pub mod scheduler;

pub use cycle::PollPublishCycle;
pub use registry::TrackingRegistry;
pub use retry::{with_retry, RetryPolicy};
pub use scheduler::{FixedRateScheduler, JobHandle, Scheduler, Tick};
