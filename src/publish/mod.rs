//! Publish module - Kafka transport for score update messages

pub mod kafka;

pub use kafka::KafkaScorePublisher;
