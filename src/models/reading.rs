use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single timestamped biomarker or vital measurement.
///
/// Identity is `id`; readings are immutable once received. Reference bounds
/// are `Option<f64>` — `Some(0.0)` is a real clinical zero, never treated
/// as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reading {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub unit: Option<String>,
    pub ref_min: Option<f64>,
    pub ref_max: Option<f64>,
    pub recorded_at: NaiveDateTime,
    pub report_id: Option<String>,
}

impl Reading {
    /// Whether at least one reference bound is known.
    pub fn has_reference(&self) -> bool {
        self.ref_min.is_some() || self.ref_max.is_some()
    }
}
