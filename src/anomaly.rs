//! Fast anomaly membership lookup, scoped per biomarker series.

use std::collections::{HashMap, HashSet};

use crate::models::AnomalyFlag;

/// Membership index over the provider's flat anomaly list.
///
/// Flags are grouped by series name; within a series the test is on reading
/// id only, so an id flagged for one series never taints another.
#[derive(Debug, Clone, Default)]
pub struct AnomalyIndex {
    by_series: HashMap<String, HashSet<String>>,
}

impl AnomalyIndex {
    /// Build the index in one pass over the flag list.
    pub fn build(flags: &[AnomalyFlag]) -> Self {
        let mut by_series: HashMap<String, HashSet<String>> = HashMap::new();
        for flag in flags {
            by_series
                .entry(flag.name.clone())
                .or_default()
                .insert(flag.reading_id.clone());
        }
        Self { by_series }
    }

    /// Whether the reading is flagged anomalous within the given series.
    pub fn is_anomalous(&self, series: &str, reading_id: &str) -> bool {
        self.by_series
            .get(series)
            .is_some_and(|ids| ids.contains(reading_id))
    }

    /// Total number of flagged readings across all series.
    pub fn len(&self) -> usize {
        self.by_series.values().map(HashSet::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_series.is_empty()
    }
}

/// One-line banner text for the anomaly alert, e.g. "Glucose (z=2.71) · HbA1c (z=3.02)".
pub fn describe_anomalies(flags: &[AnomalyFlag]) -> String {
    flags
        .iter()
        .map(|a| format!("{} (z={})", a.name, a.z_score))
        .collect::<Vec<_>>()
        .join(" · ")
}
