//! Typed boundary for the external data provider's JSON payloads.
//!
//! Deserialization failures and non-finite numbers fail fast with a
//! [`ProviderError`]; nothing is silently coerced. Past this boundary every
//! transform in the crate is total over well-typed input.

use thiserror::Error;

use crate::models::{AnomalyFlag, ForecastPayload, Reading, RiskScores};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Malformed input for {field}: {detail}")]
    MalformedInput { field: String, detail: String },

    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

fn ensure_finite(field: &str, context: &str, value: f64) -> Result<(), ProviderError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProviderError::MalformedInput {
            field: field.into(),
            detail: format!("non-finite number ({value}) for {context}"),
        })
    }
}

fn ensure_finite_opt(field: &str, context: &str, value: Option<f64>) -> Result<(), ProviderError> {
    match value {
        Some(v) => ensure_finite(field, context, v),
        None => Ok(()),
    }
}

/// Validate a batch of readings: every numeric field must be finite.
pub fn validate_readings(readings: &[Reading]) -> Result<(), ProviderError> {
    for r in readings {
        ensure_finite("value", &r.id, r.value)?;
        ensure_finite_opt("ref_min", &r.id, r.ref_min)?;
        ensure_finite_opt("ref_max", &r.id, r.ref_max)?;
    }
    Ok(())
}

/// Validate a forecast payload: historical readings, forecast values, slope.
pub fn validate_forecast(payload: &ForecastPayload) -> Result<(), ProviderError> {
    validate_readings(&payload.historical)?;
    for (i, p) in payload.forecast.iter().enumerate() {
        ensure_finite("value", &format!("forecast point {i}"), p.value)?;
    }
    ensure_finite_opt("slope", "forecast payload", payload.slope)
}

/// Validate the risk-score map: scores and factor numbers must be finite.
pub fn validate_risk_scores(scores: &RiskScores) -> Result<(), ProviderError> {
    for (category, rs) in scores {
        ensure_finite("score", category, rs.score)?;
        for f in &rs.factors {
            ensure_finite("value", &f.name, f.value)?;
            ensure_finite("points", &f.name, f.points)?;
        }
    }
    Ok(())
}

/// Validate the anomaly list.
pub fn validate_anomalies(flags: &[AnomalyFlag]) -> Result<(), ProviderError> {
    for a in flags {
        ensure_finite("value", &a.reading_id, a.value)?;
        ensure_finite("z_score", &a.reading_id, a.z_score)?;
    }
    Ok(())
}

/// Parse the series-name list.
pub fn parse_names(json: &str) -> Result<Vec<String>, ProviderError> {
    let names: Vec<String> = serde_json::from_str(json)?;
    tracing::debug!(count = names.len(), "parsed series names");
    Ok(names)
}

/// Parse a reading list, rejecting non-finite numbers.
pub fn parse_readings(json: &str) -> Result<Vec<Reading>, ProviderError> {
    let readings: Vec<Reading> = serde_json::from_str(json)?;
    validate_readings(&readings)?;
    tracing::debug!(count = readings.len(), "parsed readings");
    Ok(readings)
}

/// Parse a forecast payload.
pub fn parse_forecast(json: &str) -> Result<ForecastPayload, ProviderError> {
    let payload: ForecastPayload = serde_json::from_str(json)?;
    validate_forecast(&payload)?;
    tracing::debug!(
        historical = payload.historical.len(),
        forecast = payload.forecast.len(),
        has_warning = payload.warning.is_some(),
        "parsed forecast payload"
    );
    Ok(payload)
}

/// Parse the risk-score map keyed by category name.
pub fn parse_risk_scores(json: &str) -> Result<RiskScores, ProviderError> {
    let scores: RiskScores = serde_json::from_str(json)?;
    validate_risk_scores(&scores)?;
    Ok(scores)
}

/// Parse the anomaly list.
pub fn parse_anomalies(json: &str) -> Result<Vec<AnomalyFlag>, ProviderError> {
    let flags: Vec<AnomalyFlag> = serde_json::from_str(json)?;
    validate_anomalies(&flags)?;
    tracing::debug!(count = flags.len(), "parsed anomaly flags");
    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AnomalySeverity;
    use chrono::NaiveDate;

    #[test]
    fn parses_reading_list() {
        let json = r#"[{
            "id": "42",
            "name": "Glucose",
            "value": 96.0,
            "unit": "mg/dL",
            "ref_min": 70.0,
            "ref_max": 100.0,
            "recorded_at": "2026-03-01T09:00:00",
            "report_id": "7"
        }]"#;
        let readings = parse_readings(json).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].name, "Glucose");
        assert_eq!(readings[0].ref_min, Some(70.0));
    }

    #[test]
    fn absent_bounds_deserialize_as_none_not_zero() {
        let json = r#"[{
            "id": "42",
            "name": "Mood Score",
            "value": 0.0,
            "unit": null,
            "ref_min": null,
            "ref_max": null,
            "recorded_at": "2026-03-01T09:00:00",
            "report_id": null
        }]"#;
        let readings = parse_readings(json).unwrap();
        assert_eq!(readings[0].ref_min, None);
        assert_eq!(readings[0].value, 0.0);
    }

    #[test]
    fn parses_forecast_payload_with_warning() {
        let json = r#"{
            "historical": [],
            "forecast": [
                {"recorded_at": "2026-04-01T09:00:00", "value": 104.2},
                {"recorded_at": "2026-05-01T09:00:00", "value": 108.9}
            ],
            "slope": 0.000013,
            "warning": "Forecast suggests value may exceed upper reference limit (100)"
        }"#;
        let payload = parse_forecast(json).unwrap();
        assert_eq!(payload.forecast.len(), 2);
        assert!(payload.warning.is_some());
    }

    #[test]
    fn parses_risk_score_map() {
        let json = r#"{
            "diabetes": {
                "score": 60.0,
                "factors": [{"name": "HbA1c", "value": 6.1, "points": 30.0}]
            },
            "cardiovascular": {"score": 10.0, "factors": []}
        }"#;
        let scores = parse_risk_scores(json).unwrap();
        assert_eq!(scores["diabetes"].score, 60.0);
        assert_eq!(scores["diabetes"].factors[0].name, "HbA1c");
    }

    #[test]
    fn parses_anomaly_list_with_wire_field_name() {
        let json = r#"[{
            "biomarker_id": "42",
            "name": "Glucose",
            "value": 210.0,
            "z_score": 2.91,
            "recorded_at": "2026-03-01T09:00:00",
            "severity": "high"
        }]"#;
        let flags = parse_anomalies(json).unwrap();
        assert_eq!(flags[0].reading_id, "42");
        assert_eq!(flags[0].severity, AnomalySeverity::High);
    }

    #[test]
    fn non_numeric_value_fails_fast() {
        let json = r#"[{
            "id": "42",
            "name": "Glucose",
            "value": "ninety-six",
            "unit": null,
            "ref_min": null,
            "ref_max": null,
            "recorded_at": "2026-03-01T09:00:00",
            "report_id": null
        }]"#;
        assert!(matches!(
            parse_readings(json),
            Err(ProviderError::Json(_))
        ));
    }

    #[test]
    fn non_finite_value_is_malformed_input() {
        let reading = Reading {
            id: "42".into(),
            name: "Glucose".into(),
            value: f64::NAN,
            unit: None,
            ref_min: None,
            ref_max: None,
            recorded_at: NaiveDate::from_ymd_opt(2026, 3, 1)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            report_id: None,
        };
        assert!(matches!(
            validate_readings(&[reading]),
            Err(ProviderError::MalformedInput { .. })
        ));
    }

    #[test]
    fn infinite_ref_bound_is_malformed_input() {
        let json = r#"[{
            "id": "42",
            "name": "Glucose",
            "value": 96.0,
            "unit": null,
            "ref_min": null,
            "ref_max": null,
            "recorded_at": "2026-03-01T09:00:00",
            "report_id": null
        }]"#;
        let mut readings = parse_readings(json).unwrap();
        readings[0].ref_max = Some(f64::INFINITY);
        assert!(matches!(
            validate_readings(&readings),
            Err(ProviderError::MalformedInput { .. })
        ));
    }
}
