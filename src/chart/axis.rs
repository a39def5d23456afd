use super::types::{AxisRange, MergedPoint};

/// Padding factors for the display domain. Proportional padding is used
/// instead of a fixed offset because biomarker scales span orders of
/// magnitude (creatinine ~1 vs. glucose ~100).
const PAD_LOW: f64 = 0.85;
const PAD_HIGH: f64 = 1.15;

/// Fallback domain when there is nothing to plot.
const DEFAULT_DOMAIN: AxisRange = AxisRange {
    y_min: 0.0,
    y_max: 1.0,
};

/// Derive the padded y-axis domain from the merged series and reference band.
///
/// Every present value participates: actuals, forecasts, and each reference
/// bound when known. A literal 0.0 is a value like any other; only true
/// absence is excluded. With no values at all the default [0, 1] domain is
/// returned rather than NaN/Infinity bounds.
pub fn compute_axis_range(
    points: &[MergedPoint],
    ref_min: Option<f64>,
    ref_max: Option<f64>,
) -> AxisRange {
    let values = points
        .iter()
        .flat_map(|p| [p.actual, p.forecast])
        .chain([ref_min, ref_max])
        .flatten();

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut seen = false;
    for v in values {
        min = min.min(v);
        max = max.max(v);
        seen = true;
    }

    if !seen {
        tracing::warn!("axis domain requested with no plottable values, using default");
        return DEFAULT_DOMAIN;
    }

    AxisRange {
        y_min: min * PAD_LOW,
        y_max: max * PAD_HIGH,
    }
}
