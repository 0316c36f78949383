//! Chart data as served by `data/statistics.json`.
//!
//! The dashboard never transforms these values: labels, series values and any
//! display metadata on a dataset (colours, border widths, fill...) are
//! re-serialized as-is into the chart configuration.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One series.
///
/// `data` is kept as raw JSON: plain numbers, `null` gaps, `{x, y}` points and
/// numeric strings all reach the chart exactly as written.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<Value>>,
    /// Display metadata, passed straight through to the charting library
    #[serde(flatten)]
    pub display: Map<String, Value>,
}

/// A set of series sharing one ordered list of category labels.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

impl Dataset {
    /// Number of entries in `data`, absent counting as empty.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Legend label, or a positional stand-in for unlabelled datasets.
    pub fn name(&self, index: usize) -> String {
        self.label
            .clone()
            .unwrap_or_else(|| format!("#{}", index + 1))
    }
}

/// A dataset whose series length differs from the label count.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LengthMismatch {
    pub dataset: String,
    pub labels: usize,
    pub values: usize,
}

impl ChartData {
    /// Datasets whose value count doesn't line up with `labels`.
    ///
    /// Informational only; the charting library copes with ragged series.
    pub fn length_mismatches(&self) -> Vec<LengthMismatch> {
        self.datasets
            .iter()
            .enumerate()
            .filter(|(_, d)| d.len() != self.labels.len())
            .map(|(i, d)| LengthMismatch {
                dataset: d.name(i),
                labels: self.labels.len(),
                values: d.len(),
            })
            .collect()
    }
}

/// Top-level shape of `data/statistics.json`.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    /// Pressure ulcer incidence by age group (line chart)
    pub age_pressure_ulcer_data: ChartData,
    /// Incidence under different interventions (bar chart)
    pub intervention_comparison_data: ChartData,
}

impl Statistics {
    /// Decode a `statistics.json` document.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let stats: Statistics = serde_json::from_str(json)?;
        log::info!(
            "Decoded statistics: {} age groups, {} interventions",
            stats.age_pressure_ulcer_data.labels.len(),
            stats.intervention_comparison_data.labels.len()
        );
        Ok(stats)
    }
}
