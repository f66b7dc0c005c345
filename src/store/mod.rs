//! Realtime Document Database Access
//!
//! The backing store is a managed realtime database exposing JSON documents
//! at slash-separated paths over REST. This module keeps all remote access
//! in one place:
//! - `paths` - path construction with percent-encoded segments
//! - `client` - thin async `get`/`set`/`update` client
//! - `thresholds` - ideal-condition lookup with a TTL cache
//! - `users` - user profile reads and the permitted partial updates

pub mod client;
pub mod paths;
pub mod thresholds;
pub mod users;

// Re-export public API
pub use client::{RealtimeDb, StoreError};
pub use thresholds::ThresholdStore;
pub use users::{ProfileImageError, ProfileUpdateError, UserStore};
