//! REST client for the external live score API

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::common::errors::{Result, TrackerError};
use crate::common::traits::ScoreSource;
use crate::common::types::{EventId, ScoreSnapshot};

/// HTTP client for the external score source
#[derive(Debug, Clone)]
pub struct LiveScoreApiClient {
    /// HTTP client
    client: Client,
    /// Base URL for the score API
    base_url: String,
}

impl LiveScoreApiClient {
    /// Create a new client with the default request timeout
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    /// Create a new client with a custom request timeout
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| TrackerError::Internal(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ScoreSource for LiveScoreApiClient {
    /// Query the current score for an event
    #[instrument(skip(self))]
    async fn fetch_score(&self, event_id: EventId) -> Result<ScoreSnapshot> {
        let url = format!("{}/status/{}", self.base_url, event_id);
        debug!("Querying live score from: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(TrackerError::InvalidResponse(format!(
                "Score API returned status {}: {}",
                status, body
            )));
        }

        let snapshot: ScoreSnapshot = response.json().await?;
        debug!(
            "Live score retrieved for event {}: {}",
            snapshot.event_id, snapshot.current_score
        );

        Ok(snapshot)
    }
}
