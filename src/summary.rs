//! Latest-value reduction and summary table shaping.
//!
//! Reduces the flat reading list to one row per biomarker name for the
//! "latest values" table: value, unit, reference display, status badge, and
//! the trend against the previous reading of the same series.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::classify::classify_range;
use crate::models::{RangeStatus, Reading};
use crate::trend::{compute_trend, Trend};

/// Reduce readings to the most recent one per series name.
///
/// Ties on `recorded_at` resolve to the last-encountered element in input
/// order — deterministic, though arbitrary with respect to clinical meaning.
pub fn latest_by_name(readings: &[Reading]) -> HashMap<String, Reading> {
    let mut latest: HashMap<String, Reading> = HashMap::new();
    for reading in readings {
        match latest.get(&reading.name) {
            Some(current) if current.recorded_at > reading.recorded_at => {}
            _ => {
                latest.insert(reading.name.clone(), reading.clone());
            }
        }
    }
    latest
}

/// One row of the "All Biomarkers — Latest Values" table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub name: String,
    pub value: f64,
    pub unit: Option<String>,
    /// "70 – 100" when both bounds are known, "–" otherwise.
    pub reference: String,
    /// `None` when both bounds are absent: no badge is rendered at all,
    /// rather than a misleading "Normal".
    pub status: Option<RangeStatus>,
    pub trend: Option<Trend>,
}

/// Build summary rows in the given name order, skipping names with no
/// readings. Readings may arrive unsorted; each series is ordered by
/// timestamp before taking the latest value and the trend.
pub fn build_summary_rows(names: &[String], readings: &[Reading]) -> Vec<SummaryRow> {
    names
        .iter()
        .filter_map(|name| {
            let mut series: Vec<&Reading> =
                readings.iter().filter(|r| &r.name == name).collect();
            // Stable sort: equal timestamps keep input order, so the
            // last-encountered reading wins the tie.
            series.sort_by_key(|r| r.recorded_at);

            let latest = series.last()?;
            let values: Vec<f64> = series.iter().map(|r| r.value).collect();

            Some(SummaryRow {
                name: name.clone(),
                value: latest.value,
                unit: latest.unit.clone(),
                reference: format_reference(latest.ref_min, latest.ref_max),
                status: latest
                    .has_reference()
                    .then(|| classify_range(latest.value, latest.ref_min, latest.ref_max)),
                trend: compute_trend(&values),
            })
        })
        .collect()
}

fn format_reference(ref_min: Option<f64>, ref_max: Option<f64>) -> String {
    match (ref_min, ref_max) {
        (Some(min), Some(max)) => format!("{min} – {max}"),
        _ => "–".to_string(),
    }
}
