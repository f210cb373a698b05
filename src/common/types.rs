//! Core types shared across the tracking pipeline

use serde::{Deserialize, Serialize};

/// Identifier of a live event.
///
/// The core treats it as an opaque equality-comparable key; the bounded
/// range accepted from clients is enforced at the HTTP boundary only.
pub type EventId = u64;

/// Score snapshot produced by the score source for one poll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSnapshot {
    /// Event the score belongs to
    pub event_id: EventId,
    /// Current score as reported by the source
    pub current_score: String,
}

/// Wire message sent to the downstream transport.
///
/// Structurally identical to [`ScoreSnapshot`]; kept separate because this
/// is the transport-facing representation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreUpdate {
    /// Event the score belongs to
    pub event_id: EventId,
    /// Current score being forwarded
    pub current_score: String,
}

impl From<ScoreSnapshot> for ScoreUpdate {
    fn from(snapshot: ScoreSnapshot) -> Self {
        Self {
            event_id: snapshot.event_id,
            current_score: snapshot.current_score,
        }
    }
}

/// Toggle request received by the control surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingRequest {
    /// Event to toggle tracking for
    pub event_id: EventId,
    /// `true` starts tracking, `false` stops it
    pub status: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_update_wire_format() {
        let update = ScoreUpdate {
            event_id: 4242,
            current_score: "2-1".to_string(),
        };

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["eventId"], 4242);
        assert_eq!(json["currentScore"], "2-1");
    }

    #[test]
    fn test_snapshot_deserializes_camel_case() {
        let json = r#"{"eventId": 1234, "currentScore": "0-0"}"#;

        let snapshot: ScoreSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.event_id, 1234);
        assert_eq!(snapshot.current_score, "0-0");
    }

    #[test]
    fn test_update_built_from_snapshot() {
        let snapshot = ScoreSnapshot {
            event_id: 7777,
            current_score: "3-2".to_string(),
        };

        let update = ScoreUpdate::from(snapshot.clone());
        assert_eq!(update.event_id, snapshot.event_id);
        assert_eq!(update.current_score, snapshot.current_score);
    }

    #[test]
    fn test_tracking_request_deserializes() {
        let json = r#"{"eventId": 4242, "status": true}"#;

        let request: TrackingRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.event_id, 4242);
        assert!(request.status);
    }
}
