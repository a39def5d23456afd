//! Trend delta between the two most recent values of a series.

use serde::{Deserialize, Serialize};

use crate::models::TrendDirection;

/// Direction and signed percent change between the last two readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub direction: TrendDirection,
    /// `(last - prev) / prev × 100`, rounded to one decimal.
    /// `None` when the previous value is zero (division undefined).
    pub percent_change: Option<f64>,
}

/// Compute the trend over an ordered value sequence.
///
/// Returns `None` with fewer than two values. A zero previous value yields a
/// direction but no percentage — NaN/Infinity never reach the renderer.
pub fn compute_trend(values: &[f64]) -> Option<Trend> {
    if values.len() < 2 {
        return None;
    }

    let last = values[values.len() - 1];
    let prev = values[values.len() - 2];

    let direction = if last > prev {
        TrendDirection::Up
    } else if last < prev {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    let percent_change = if prev == 0.0 {
        None
    } else {
        Some(round_one_decimal((last - prev) / prev * 100.0))
    };

    Some(Trend {
        direction,
        percent_change,
    })
}

fn round_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
