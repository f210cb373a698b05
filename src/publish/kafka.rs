//! Kafka publisher for score update messages

use std::time::Duration;

use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use tracing::{debug, instrument};

use crate::common::errors::{Result, TrackerError};
use crate::common::traits::ScorePublisher;
use crate::common::types::ScoreUpdate;

/// Publishes score updates to a Kafka topic as camelCase JSON, keyed by
/// event id.
pub struct KafkaScorePublisher {
    producer: FutureProducer,
    topic: String,
    delivery_timeout: Duration,
}

impl KafkaScorePublisher {
    /// Create a publisher with the default delivery timeout
    pub fn new(brokers: &str, topic: &str) -> Result<Self> {
        Self::with_delivery_timeout(brokers, topic, Duration::from_secs(5))
    }

    /// Create a publisher with a custom per-message delivery timeout
    pub fn with_delivery_timeout(
        brokers: &str,
        topic: &str,
        delivery_timeout: Duration,
    ) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", delivery_timeout.as_millis().to_string())
            .create()
            .map_err(|e| TrackerError::Publish(e.to_string()))?;

        Ok(Self {
            producer,
            topic: topic.to_string(),
            delivery_timeout,
        })
    }

    /// Topic this publisher sends to
    pub fn topic(&self) -> &str {
        &self.topic
    }
}

#[async_trait]
impl ScorePublisher for KafkaScorePublisher {
    #[instrument(skip(self, update), fields(event_id = update.event_id))]
    async fn publish(&self, update: &ScoreUpdate) -> Result<()> {
        let payload = serde_json::to_string(update)?;
        let key = update.event_id.to_string();

        debug!("Sending kafka message for live score {:?}", update);

        let record = FutureRecord::to(&self.topic).key(&key).payload(&payload);
        self.producer
            .send(record, self.delivery_timeout)
            .await
            .map_err(|(err, _)| TrackerError::Publish(err.to_string()))?;

        debug!("Kafka message published for live score {:?}", update);
        Ok(())
    }
}
