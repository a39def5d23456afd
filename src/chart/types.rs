use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One point of the merged chart series.
///
/// Exactly one of `actual`/`forecast` is set, except the single bridge point
/// which carries both so the forecast line connects to the actual line with
/// no visual gap. Ordering is by `recorded_at`; `label` is presentation only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MergedPoint {
    pub label: String,
    pub recorded_at: NaiveDateTime,
    pub actual: Option<f64>,
    pub forecast: Option<f64>,
    pub is_anomaly: bool,
}

impl MergedPoint {
    /// Whether this is the synthetic point joining the two line halves.
    pub fn is_bridge(&self) -> bool {
        self.actual.is_some() && self.forecast.is_some()
    }
}

/// Padded numeric display domain for the chart's y axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub y_min: f64,
    pub y_max: f64,
}
