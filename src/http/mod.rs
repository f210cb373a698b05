//! HTTP module - inbound control surface and demo mock endpoint

pub mod mock;
pub mod routes;

pub use routes::{router, AppState, MAX_EVENT_ID, MIN_EVENT_ID};
