//! Metric View Tabs
//!
//! Single-selection display state over the metric detail panels. Exactly one
//! tab is selected at a time; selecting a tab replaces the previous
//! selection. Display concern only; the health evaluator does not consult
//! the active tab.

/// The metric panel currently shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MetricTab {
    /// Combined overview of every metric
    #[default]
    All,
    /// Soil pH detail
    Ph,
    /// Humidity detail
    Humidity,
    /// Nitrogen/phosphorus/potassium detail
    Npk,
}

impl MetricTab {
    /// Stable key used in query strings and element ids
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricTab::All => "all",
            MetricTab::Ph => "ph",
            MetricTab::Humidity => "humidity",
            MetricTab::Npk => "npk",
        }
    }

    /// Human-facing tab label
    pub fn label(&self) -> &'static str {
        match self {
            MetricTab::All => "All",
            MetricTab::Ph => "PH Level",
            MetricTab::Humidity => "Humidity",
            MetricTab::Npk => "NPK",
        }
    }

    /// Parse a tab key; unknown keys select nothing
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "all" => Some(MetricTab::All),
            "ph" => Some(MetricTab::Ph),
            "humidity" => Some(MetricTab::Humidity),
            "npk" => Some(MetricTab::Npk),
            _ => None,
        }
    }
}
