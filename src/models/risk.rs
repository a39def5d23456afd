use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One contributing input to a risk score, with the points it added.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskFactor {
    pub name: String,
    pub value: f64,
    pub points: f64,
}

/// Model-produced 0–100 aggregate for one condition category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskScore {
    pub score: f64,
    pub factors: Vec<RiskFactor>,
}

/// Risk scores keyed by category name (e.g. "diabetes", "cardiovascular").
pub type RiskScores = HashMap<String, RiskScore>;
