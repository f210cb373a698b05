//! Error types for the application

use thiserror::Error;

/// Result type alias using our TrackerError
pub type Result<T> = std::result::Result<T, TrackerError>;

/// Main error type for tracker operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// HTTP request errors
    #[error("HTTP request error: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Invalid score API response
    #[error("Invalid API response: {0}")]
    InvalidResponse(String),

    /// Transport-level publish errors
    #[error("Publish error: {0}")]
    Publish(String),

    /// Inability to create a recurring job
    #[error("Scheduling error: {0}")]
    Scheduling(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Generic internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
