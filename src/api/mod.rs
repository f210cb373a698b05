//! API module - REST client for the external live score source

pub mod client;

pub use client::LiveScoreApiClient;
