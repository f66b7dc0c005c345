//! Plant Health Evaluator
//!
//! Compares a plant's current metrics against the ideal conditions stored
//! for its species and produces a healthy/unhealthy verdict. The verdict is
//! the logical AND of five independent checks; a per-check breakdown is kept
//! so display layers can show which metric failed.
//!
//! The evaluator is a pure predicate over two immutable snapshots: no I/O,
//! no mutation, deterministic given its inputs. An absent plant or absent
//! threshold record yields `Unhealthy` (unknown is treated as unhealthy),
//! never an error.

use serde::Serialize;

use crate::records::{Metrics, PlantRecord, ThresholdRecord};

/// Maximum absolute pH deviation from ideal
pub const PH_TOLERANCE: f64 = 0.5;

/// Maximum absolute humidity deviation from ideal, in percentage points
pub const HUMIDITY_TOLERANCE: f64 = 10.0;

/// Minimum fraction of the ideal nutrient level (deficiency-only check)
pub const NUTRIENT_FLOOR: f64 = 0.7;

/// Overall health verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Unhealthy,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        *self == HealthStatus::Healthy
    }

    pub fn display_text(&self) -> &'static str {
        match self {
            HealthStatus::Healthy => "Healthy",
            HealthStatus::Unhealthy => "Unhealthy",
        }
    }
}

impl From<bool> for HealthStatus {
    fn from(healthy: bool) -> Self {
        if healthy {
            HealthStatus::Healthy
        } else {
            HealthStatus::Unhealthy
        }
    }
}

/// Per-metric verdicts for one evaluation
#[derive(Debug, Clone, Copy, Serialize)]
pub struct HealthChecks {
    /// `|current - ideal| <= PH_TOLERANCE`
    pub ph: bool,

    /// `|current - ideal| <= HUMIDITY_TOLERANCE`
    pub humidity: bool,

    /// `current >= ideal * NUTRIENT_FLOOR`; no upper bound
    pub nitrogen: bool,
    pub phosphorus: bool,
    pub potassium: bool,
}

impl HealthChecks {
    /// Run all five checks against normalized metrics
    pub fn evaluate(current: &Metrics, ideal: &Metrics) -> Self {
        Self {
            ph: (current.ph_level - ideal.ph_level).abs() <= PH_TOLERANCE,
            humidity: (current.humidity - ideal.humidity).abs() <= HUMIDITY_TOLERANCE,
            nitrogen: current.nutrients.nitrogen >= ideal.nutrients.nitrogen * NUTRIENT_FLOOR,
            phosphorus: current.nutrients.phosphorus >= ideal.nutrients.phosphorus * NUTRIENT_FLOOR,
            potassium: current.nutrients.potassium >= ideal.nutrients.potassium * NUTRIENT_FLOOR,
        }
    }

    /// Overall verdict: pure AND of the five checks
    pub fn all_pass(&self) -> bool {
        self.ph && self.humidity && self.nitrogen && self.phosphorus && self.potassium
    }
}

/// Result of one health evaluation
#[derive(Debug, Clone, Serialize)]
pub struct HealthReport {
    pub healthy: bool,
    pub status: HealthStatus,

    /// Absent when either input was missing (not-yet-loaded state)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Evaluate a plant against its species thresholds.
///
/// Either side may be absent while data is still loading; the report is then
/// `Unhealthy` with no check breakdown.
pub fn evaluate(plant: Option<&PlantRecord>, ideal: Option<&ThresholdRecord>) -> HealthReport {
    let (Some(plant), Some(ideal)) = (plant, ideal) else {
        return HealthReport {
            healthy: false,
            status: HealthStatus::Unhealthy,
            checks: None,
        };
    };

    let checks = HealthChecks::evaluate(&plant.metrics, &ideal.metrics);
    let healthy = checks.all_pass();

    HealthReport {
        healthy,
        status: HealthStatus::from(healthy),
        checks: Some(checks),
    }
}

/// Boolean form of `evaluate`
pub fn is_healthy(plant: Option<&PlantRecord>, ideal: Option<&ThresholdRecord>) -> bool {
    evaluate(plant, ideal).healthy
}
