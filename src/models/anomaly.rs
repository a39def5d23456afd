use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::AnomalySeverity;

/// A reading flagged as anomalous by the external scoring model.
///
/// Many-to-one with [`super::Reading`] via `reading_id`; existence of a flag
/// implies the reading is anomalous within that series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyFlag {
    #[serde(alias = "biomarker_id")]
    pub reading_id: String,
    pub name: String,
    pub value: f64,
    pub z_score: f64,
    pub recorded_at: NaiveDateTime,
    pub severity: AnomalySeverity,
}
