//! Axum route handlers for the tracking control surface

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use tracing::warn;

use crate::common::types::{EventId, TrackingRequest};
use crate::tracker::registry::TrackingRegistry;

/// Lowest event id accepted from clients.
pub const MIN_EVENT_ID: EventId = 1000;
/// Highest event id accepted from clients.
pub const MAX_EVENT_ID: EventId = 9999;

/// Shared state for the control surface handlers.
pub struct AppState {
    pub registry: Arc<TrackingRegistry>,
}

/// Build the control-surface router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/events/status", post(set_tracking))
        .with_state(state)
}

// POST /api/events/status
async fn set_tracking(
    State(state): State<Arc<AppState>>,
    Json(request): Json<TrackingRequest>,
) -> StatusCode {
    if !(MIN_EVENT_ID..=MAX_EVENT_ID).contains(&request.event_id) {
        warn!(
            "Rejecting tracking request for out-of-range event id {}",
            request.event_id
        );
        return StatusCode::BAD_REQUEST;
    }

    match state.registry.set_tracking(request.event_id, request.status) {
        Ok(()) => StatusCode::OK,
        Err(err) => {
            warn!(
                "Could not toggle tracking for event {}: {}",
                request.event_id, err
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
