//! Configuration module - config types and loading

pub mod loader;
pub mod types;
