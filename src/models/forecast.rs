use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::Reading;

/// A model-produced future point. No identity; produced fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub recorded_at: NaiveDateTime,
    pub value: f64,
}

/// Forecast response for one biomarker series.
///
/// `historical` carries the readings the model was fit on so the chart can
/// draw both halves from a single payload. `warning` is the provider's
/// threshold-crossing message, passed through verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastPayload {
    pub historical: Vec<Reading>,
    pub forecast: Vec<ForecastPoint>,
    pub slope: Option<f64>,
    pub warning: Option<String>,
}
