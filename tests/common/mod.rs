//! Common test utilities and scripted collaborator fakes

use std::collections::VecDeque;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use live_score_tracker::common::errors::{Result, TrackerError};
use live_score_tracker::{EventId, ScorePublisher, ScoreSnapshot, ScoreSource, ScoreUpdate};

/// Score source whose per-call outcomes are scripted up front.
///
/// Each fetch pops the next outcome: `Some(score)` succeeds with that score,
/// `None` fails. Once the script runs out every further call fails.
pub struct ScriptedScoreSource {
    script: Mutex<VecDeque<Option<String>>>,
    calls: AtomicU32,
}

impl ScriptedScoreSource {
    pub fn new(script: Vec<Option<&str>>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().map(|s| s.map(String::from)).collect()),
            calls: AtomicU32::new(0),
        }
    }

    /// Source that fails every call.
    pub fn always_failing() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ScoreSource for ScriptedScoreSource {
    async fn fetch_score(&self, event_id: EventId) -> Result<ScoreSnapshot> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(Some(current_score)) => Ok(ScoreSnapshot {
                event_id,
                current_score,
            }),
            _ => Err(TrackerError::InvalidResponse(
                "scripted fetch failure".to_string(),
            )),
        }
    }
}

/// Publisher that records every delivered message and can be told to fail
/// its first N calls.
pub struct RecordingPublisher {
    fail_first: u32,
    calls: AtomicU32,
    published: Mutex<Vec<ScoreUpdate>>,
}

impl RecordingPublisher {
    pub fn new() -> Self {
        Self::failing_first(0)
    }

    pub fn failing_first(fail_first: u32) -> Self {
        Self {
            fail_first,
            calls: AtomicU32::new(0),
            published: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn published(&self) -> Vec<ScoreUpdate> {
        self.published.lock().unwrap().clone()
    }
}

#[async_trait]
impl ScorePublisher for RecordingPublisher {
    async fn publish(&self, update: &ScoreUpdate) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if call <= self.fail_first {
            return Err(TrackerError::Publish(
                "scripted publish failure".to_string(),
            ));
        }
        self.published.lock().unwrap().push(update.clone());
        Ok(())
    }
}
