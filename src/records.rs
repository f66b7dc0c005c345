//! Record Types and Percentage Normalization
//!
//! Typed models for the documents stored in the realtime database. Plant
//! documents carry percentage metrics as strings with a trailing `%`
//! (`"45%"`), while threshold documents carry plain numbers; both shapes
//! deserialize into the same `Metrics` struct so downstream code only ever
//! sees `f64` values. Serialization always emits plain numbers.
//!
//! Malformed percentage strings are rejected here, at the boundary, with a
//! `RecordError` naming the offending text.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while normalizing record fields
#[derive(Debug, Error)]
pub enum RecordError {
    /// Value could not be read as a number with an optional trailing `%`
    #[error("malformed percentage value {0:?}")]
    MalformedPercent(String),
}

/// Parse a percentage field: a number with at most one trailing `%`.
///
/// Accepts `"45%"`, `"45"`, `"  45 % "` (whitespace tolerated). Rejects
/// empty input, trailing garbage, double suffixes, and non-finite values.
pub fn parse_percent(raw: &str) -> Result<f64, RecordError> {
    let trimmed = raw.trim();
    let digits = trimmed.strip_suffix('%').unwrap_or(trimmed).trim_end();

    let value: f64 = digits
        .parse()
        .map_err(|_| RecordError::MalformedPercent(raw.to_string()))?;

    if !value.is_finite() {
        return Err(RecordError::MalformedPercent(raw.to_string()));
    }

    Ok(value)
}

/// Serde adapter for percentage fields (number or `"NN%"` string on input)
mod percent {
    use serde::{Deserialize, Deserializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr {
        Number(f64),
        Text(String),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Repr::deserialize(deserializer)? {
            Repr::Number(n) => Ok(n),
            Repr::Text(s) => super::parse_percent(&s).map_err(serde::de::Error::custom),
        }
    }
}

// ============================================================================
// Plant Records
// ============================================================================

/// Snapshot of one plant's identity and current sensor-derived metrics.
///
/// Never mutated by the evaluator; health checks borrow it immutably.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantRecord {
    /// Display name (e.g., "Kitchen Basil")
    pub name: String,

    /// Species key used for threshold lookup
    #[serde(rename = "type")]
    pub plant_type: String,

    /// Optional image reference
    #[serde(rename = "imageUrl", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Current sensor metrics
    pub metrics: Metrics,
}

/// Sensor metrics shared by plant and threshold documents.
///
/// All percentage fields are normalized to plain `f64` percentage points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metrics {
    /// Soil pH, directly comparable between plant and threshold
    #[serde(rename = "pHLevel")]
    pub ph_level: f64,

    /// Relative humidity in percentage points
    #[serde(deserialize_with = "percent::deserialize")]
    pub humidity: f64,

    /// Macronutrient levels
    pub nutrients: Nutrients,
}

/// NPK macronutrient levels, in percentage points
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Nutrients {
    #[serde(deserialize_with = "percent::deserialize")]
    pub nitrogen: f64,

    #[serde(deserialize_with = "percent::deserialize")]
    pub phosphorus: f64,

    #[serde(deserialize_with = "percent::deserialize")]
    pub potassium: f64,
}

/// Ideal-condition thresholds for one plant type.
///
/// Keyed in the database by plant-type name (percent-encoded for lookup).
/// Read-only from this crate's perspective.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdRecord {
    /// Target metric values considered healthy for the species
    pub metrics: Metrics,
}

// ============================================================================
// User Records
// ============================================================================

/// A user profile document stored at `users/{id}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,

    /// `data:image/...;base64,` URL, validated before any write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_picture: Option<String>,

    /// Dark-theme preference
    #[serde(default)]
    pub is_dark: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn parse_percent_accepts_suffix_and_plain() {
        assert_relative_eq!(parse_percent("45%").unwrap(), 45.0);
        assert_relative_eq!(parse_percent("45").unwrap(), 45.0);
        assert_relative_eq!(parse_percent("6.25%").unwrap(), 6.25);
        assert_relative_eq!(parse_percent("  45 % ").unwrap(), 45.0);
    }

    #[test]
    fn parse_percent_rejects_malformed() {
        for bad in ["", "%", "45%%", "abc%", "4a5", "NaN", "inf%"] {
            let err = parse_percent(bad).unwrap_err();
            assert!(
                err.to_string().contains(bad.trim()) || bad.is_empty(),
                "error should name the input: {err}"
            );
        }
    }

    #[test]
    fn plant_record_normalizes_string_percentages() {
        let json = r#"{
            "name": "Kitchen Basil",
            "type": "Basil",
            "imageUrl": "https://example.com/basil.jpg",
            "metrics": {
                "pHLevel": 6.2,
                "humidity": "45%",
                "nutrients": {
                    "nitrogen": "70%",
                    "phosphorus": "52%",
                    "potassium": "61%"
                }
            }
        }"#;

        let plant: PlantRecord = serde_json::from_str(json).unwrap();
        assert_eq!(plant.plant_type, "Basil");
        assert_relative_eq!(plant.metrics.humidity, 45.0);
        assert_relative_eq!(plant.metrics.nutrients.nitrogen, 70.0);
        assert_relative_eq!(plant.metrics.nutrients.potassium, 61.0);
    }

    #[test]
    fn threshold_record_accepts_plain_numbers() {
        let json = r#"{
            "metrics": {
                "pHLevel": 6.5,
                "humidity": 50,
                "nutrients": { "nitrogen": 100, "phosphorus": 60, "potassium": 80 }
            }
        }"#;

        let ideal: ThresholdRecord = serde_json::from_str(json).unwrap();
        assert_relative_eq!(ideal.metrics.humidity, 50.0);
        assert_relative_eq!(ideal.metrics.nutrients.nitrogen, 100.0);
    }

    #[test]
    fn malformed_percentage_is_a_deserialization_error() {
        let json = r#"{
            "metrics": {
                "pHLevel": 6.5,
                "humidity": "damp",
                "nutrients": { "nitrogen": 100, "phosphorus": 60, "potassium": 80 }
            }
        }"#;

        let err = serde_json::from_str::<ThresholdRecord>(json).unwrap_err();
        assert!(err.to_string().contains("damp"));
    }

    #[test]
    fn metrics_serialize_as_plain_numbers() {
        let json = r#"{
            "pHLevel": 6.0,
            "humidity": "45%",
            "nutrients": { "nitrogen": "70%", "phosphorus": "50%", "potassium": "60%" }
        }"#;

        let metrics: Metrics = serde_json::from_str(json).unwrap();
        let out = serde_json::to_value(&metrics).unwrap();
        assert_eq!(out["humidity"], serde_json::json!(45.0));
        assert_eq!(out["nutrients"]["nitrogen"], serde_json::json!(70.0));
    }

    #[test]
    fn user_record_round_trips_camel_case() {
        let json = r#"{
            "id": 3,
            "firstName": "Mei",
            "lastName": "Tan",
            "email": "mei.tan@example.com",
            "isDark": true
        }"#;

        let user: UserRecord = serde_json::from_str(json).unwrap();
        assert_eq!(user.first_name, "Mei");
        assert!(user.is_dark);
        assert!(user.profile_picture.is_none());

        let out = serde_json::to_value(&user).unwrap();
        assert_eq!(out["firstName"], "Mei");
        assert!(out.get("profilePicture").is_none());
    }
}
