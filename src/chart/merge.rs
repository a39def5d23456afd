use chrono::NaiveDateTime;

use crate::anomaly::AnomalyIndex;
use crate::models::{ForecastPoint, Reading};

use super::types::MergedPoint;

/// Short date label for the x axis, e.g. "Mar 4 25".
pub(super) fn format_label(recorded_at: NaiveDateTime) -> String {
    recorded_at.format("%b %-d %y").to_string()
}

/// Merge a historical sequence and a forecast sequence into one ordered,
/// render-ready series.
///
/// Historical points carry `actual` and their anomaly status, looked up under
/// the reading's own series name. Forecast points carry `forecast` and are
/// never anomalous. When the historical half is non-empty, a single bridge
/// point is inserted between the halves: a copy of the last historical point
/// with `forecast` set to that same value. The bridge is emitted even when
/// the forecast half is empty.
///
/// The result has |historical| + |forecast| + 1 points (no +1 when the
/// historical half is empty). Both inputs are expected ordered by time.
pub fn merge_series(
    historical: &[Reading],
    forecast: &[ForecastPoint],
    anomalies: &AnomalyIndex,
) -> Vec<MergedPoint> {
    let mut merged: Vec<MergedPoint> = historical
        .iter()
        .map(|r| MergedPoint {
            label: format_label(r.recorded_at),
            recorded_at: r.recorded_at,
            actual: Some(r.value),
            forecast: None,
            is_anomaly: anomalies.is_anomalous(&r.name, &r.id),
        })
        .collect();

    if let Some(last) = merged.last().cloned() {
        merged.push(MergedPoint {
            forecast: last.actual,
            ..last
        });
    }

    merged.extend(forecast.iter().map(|p| MergedPoint {
        label: format_label(p.recorded_at),
        recorded_at: p.recorded_at,
        actual: None,
        forecast: Some(p.value),
        is_anomaly: false,
    }));

    merged
}
