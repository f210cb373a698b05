//! Mock score endpoint for local demo runs
//!
//! Stands in for the external score source so the whole pipeline can be
//! exercised without a real provider: every request returns a fresh random
//! score string for the requested event.

use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use rand::distributions::Alphanumeric;
use rand::Rng;

use crate::common::types::{EventId, ScoreSnapshot};

/// Router serving `GET /mock/status/{event_id}`.
pub fn router() -> Router {
    Router::new().route("/mock/status/:event_id", get(live_status))
}

// GET /mock/status/{event_id}
async fn live_status(Path(event_id): Path<EventId>) -> Json<ScoreSnapshot> {
    let current_score: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(12)
        .map(char::from)
        .collect();

    Json(ScoreSnapshot {
        event_id,
        current_score,
    })
}
