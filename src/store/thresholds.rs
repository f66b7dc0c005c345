//! Ideal-Condition Lookup
//!
//! Fetches the threshold record for a plant type from `plantTypes/{type}`
//! and keeps it in a TTL cache so repeated evaluations of the same species
//! hit the database once per plant-type change in steady state.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;

use super::client::{RealtimeDb, StoreError};
use super::paths;
use crate::records::ThresholdRecord;

const CACHE_CAPACITY: u64 = 10_000;
const CACHE_TTL: Duration = Duration::from_secs(300);

pub struct ThresholdStore {
    db: Arc<RealtimeDb>,
    cache: Cache<String, ThresholdRecord>,
}

impl ThresholdStore {
    pub fn new(db: Arc<RealtimeDb>) -> Self {
        let cache = Cache::builder()
            .max_capacity(CACHE_CAPACITY)
            .time_to_live(CACHE_TTL)
            .build();

        Self { db, cache }
    }

    /// Look up the ideal conditions for a plant type.
    ///
    /// Returns `Ok(None)` when no threshold record exists for the type;
    /// absence is a defined state for the evaluator, not an error.
    pub async fn ideal_conditions(
        &self,
        plant_type: &str,
    ) -> Result<Option<ThresholdRecord>, StoreError> {
        if let Some(hit) = self.cache.get(plant_type).await {
            tracing::debug!(plant_type, "threshold cache hit");
            return Ok(Some(hit));
        }

        let fetched = self
            .db
            .get::<ThresholdRecord>(&paths::plant_type(plant_type))
            .await?;

        match fetched {
            Some(record) => {
                tracing::debug!(plant_type, "fetched ideal conditions");
                self.cache
                    .insert(plant_type.to_string(), record.clone())
                    .await;
                Ok(Some(record))
            }
            None => {
                tracing::debug!(plant_type, "no threshold data for plant type");
                Ok(None)
            }
        }
    }
}
