//! Plant Monitoring Service Core
//!
//! Tracks plants with sensor-derived metrics (pH, humidity, NPK) and compares
//! them against per-species ideal conditions held in a managed realtime
//! document database.
//!
//! Module layout:
//! - `records`: typed wire models with percentage normalization
//! - `health`: the health evaluator (pure, deterministic)
//! - `store`: realtime database client + threshold/user wrappers
//! - `session`: explicit current-user state with file persistence
//! - `view`: metric tab selection for display layers
//! - `seed`: fixed user list + bulk import loop
//! - `api_server`: axum router exposing the evaluator and stores

pub mod api_server;
pub mod health;
pub mod records;
pub mod seed;
pub mod session;
pub mod store;
pub mod view;

// Re-export commonly used types
pub use api_server::{create_router, AppState};
pub use health::{evaluate, is_healthy, HealthReport, HealthStatus};
pub use records::{Metrics, Nutrients, PlantRecord, ThresholdRecord, UserRecord};
pub use store::client::RealtimeDb;
