//! Reference-range classification of a single reading.
//!
//! Out-of-range is strict; a borderline band catches values within 10% of
//! the ceiling or floor before they cross it.

use crate::models::RangeStatus;

/// Fraction of `ref_max` above which a value is borderline.
const WARN_HIGH_FRACTION: f64 = 0.9;
/// Multiple of `ref_min` below which a value is borderline.
const WARN_LOW_FRACTION: f64 = 1.1;

/// Classify a value against optional reference bounds.
///
/// With no bounds at all the answer is [`RangeStatus::Normal`] — missing
/// reference data is never reported as abnormal. A bound of `Some(0.0)` is
/// present and participates normally.
pub fn classify_range(value: f64, ref_min: Option<f64>, ref_max: Option<f64>) -> RangeStatus {
    if ref_min.is_none() && ref_max.is_none() {
        return RangeStatus::Normal;
    }

    let above_max = ref_max.is_some_and(|max| value > max);
    let below_min = ref_min.is_some_and(|min| value < min);
    if above_max || below_min {
        return RangeStatus::Critical;
    }

    // Soft-warning margins, inclusive at the exact 90%/110% boundary.
    let warn_high = ref_max.is_some_and(|max| value >= max * WARN_HIGH_FRACTION);
    let warn_low = ref_min.is_some_and(|min| value <= min * WARN_LOW_FRACTION);
    if warn_high || warn_low {
        return RangeStatus::Borderline;
    }

    RangeStatus::Normal
}
