//! Configuration types

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// External score API configuration
    #[serde(default)]
    pub score_api: ScoreApiConfig,
    /// Kafka transport configuration
    #[serde(default)]
    pub kafka: KafkaConfig,
    /// Tracking pipeline tunables
    #[serde(default)]
    pub tracker: TrackerConfig,
    /// HTTP control surface configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// External score API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreApiConfig {
    /// Base URL of the score source
    #[serde(default = "default_score_api_base_url")]
    pub base_url: String,
    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl Default for ScoreApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_score_api_base_url(),
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

impl ScoreApiConfig {
    /// Request timeout as a [`Duration`]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

fn default_score_api_base_url() -> String {
    "http://localhost:8080/mock".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

/// Kafka transport configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KafkaConfig {
    /// Comma-separated broker list
    #[serde(default = "default_kafka_brokers")]
    pub brokers: String,
    /// Topic score updates are published to
    #[serde(default = "default_kafka_topic")]
    pub topic: String,
    /// Per-message delivery timeout in seconds
    #[serde(default = "default_delivery_timeout")]
    pub delivery_timeout_seconds: u64,
}

impl Default for KafkaConfig {
    fn default() -> Self {
        Self {
            brokers: default_kafka_brokers(),
            topic: default_kafka_topic(),
            delivery_timeout_seconds: default_delivery_timeout(),
        }
    }
}

impl KafkaConfig {
    /// Delivery timeout as a [`Duration`]
    pub fn delivery_timeout(&self) -> Duration {
        Duration::from_secs(self.delivery_timeout_seconds)
    }
}

fn default_kafka_brokers() -> String {
    "localhost:9092".to_string()
}

fn default_kafka_topic() -> String {
    "live_score".to_string()
}

fn default_delivery_timeout() -> u64 {
    5
}

/// Tracking pipeline tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Poll interval per tracked event in seconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    /// Total attempt budget for each fetch and each publish
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Fixed delay between retry attempts in milliseconds
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            poll_interval_seconds: default_poll_interval(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }
}

impl TrackerConfig {
    /// Poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    /// Retry delay as a [`Duration`]
    pub fn retry_delay(&self) -> Duration {
        Duration::from_millis(self.retry_delay_ms)
    }
}

fn default_poll_interval() -> u64 {
    10
}

fn default_retry_max_attempts() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

/// HTTP control surface configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address
    #[serde(default = "default_server_host")]
    pub host: String,
    /// Bind port
    #[serde(default = "default_server_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8080
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_values() {
        let config = AppConfig::default();

        assert_eq!(config.tracker.poll_interval(), Duration::from_secs(10));
        assert_eq!(config.tracker.retry_max_attempts, 3);
        assert_eq!(config.tracker.retry_delay(), Duration::from_secs(1));
        assert_eq!(config.kafka.topic, "live_score");
    }

    #[test]
    fn test_empty_json_deserializes_to_defaults() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();

        assert_eq!(config.score_api.base_url, "http://localhost:8080/mock");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.settings.log_level, "info");
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let json = r#"{"tracker": {"poll_interval_seconds": 2}}"#;

        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.tracker.poll_interval_seconds, 2);
        assert_eq!(config.tracker.retry_max_attempts, 3);
    }
}
