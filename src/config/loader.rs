//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;

use super::types::AppConfig;
use crate::common::errors::{Result, TrackerError};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP_)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    // Add default config file if it exists
    if let Some(path) = config_path {
        if Path::new(path).exists() {
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    // Add environment variables with APP_ prefix
    builder = builder.add_source(
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| TrackerError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| TrackerError::Configuration(e.to_string()))
}

/// Load configuration from environment variables only
pub fn load_from_env() -> Result<AppConfig> {
    // Try to load from .env file
    dotenvy::dotenv().ok();

    let mut config = AppConfig::default();

    if let Ok(base_url) = std::env::var("SCORE_API_BASE_URL") {
        config.score_api.base_url = base_url;
    }
    if let Ok(brokers) = std::env::var("KAFKA_BROKERS") {
        config.kafka.brokers = brokers;
    }
    if let Ok(topic) = std::env::var("KAFKA_TOPIC") {
        config.kafka.topic = topic;
    }
    if let Ok(interval) = std::env::var("TRACKER_POLL_INTERVAL_SECONDS") {
        config.tracker.poll_interval_seconds = interval
            .parse()
            .map_err(|e| TrackerError::Configuration(format!("Invalid poll interval: {}", e)))?;
    }
    if let Ok(port) = std::env::var("SERVER_PORT") {
        config.server.port = port
            .parse()
            .map_err(|e| TrackerError::Configuration(format!("Invalid server port: {}", e)))?;
    }

    Ok(config)
}
