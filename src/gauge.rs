//! Semicircular risk gauge — tier thresholds and SVG geometry.
//!
//! The 35/65 cut-points live in [`risk_tier`] alone; color, css class and
//! label are all derived from the tier it returns, so no consumer can drift.

use serde::Serialize;
use std::f64::consts::PI;

use crate::models::RiskTier;

/// Score below which risk is Low.
const TIER_LOW_BELOW: f64 = 35.0;
/// Score below which risk is Moderate (High at or above).
const TIER_MODERATE_BELOW: f64 = 65.0;

/// Needle length as a fraction of the gauge radius.
const NEEDLE_FRACTION: f64 = 0.7;
/// Margin between the arc and the svg viewport edge, in pixels.
const ARC_MARGIN: f64 = 8.0;

/// Single source of truth for the gauge tier cut-points.
///
/// Expects an already-clamped score; [`map_score`] clamps for you.
pub fn risk_tier(score: f64) -> RiskTier {
    if score < TIER_LOW_BELOW {
        RiskTier::Low
    } else if score < TIER_MODERATE_BELOW {
        RiskTier::Moderate
    } else {
        RiskTier::High
    }
}

/// A risk score mapped onto the gauge. Output-only: the presentation layer
/// consumes it, nothing deserializes it back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeReading {
    /// Score clamped to [0, 100].
    pub clamped: f64,
    /// Needle angle: −90° (empty) to +90° (full) across the 180° sweep.
    pub angle_degrees: f64,
    /// Fraction of the semicircular arc to stroke in the tier color.
    pub arc_fraction: f64,
    pub tier: RiskTier,
    pub color_hex: &'static str,
    pub css_class: &'static str,
    pub label: &'static str,
}

/// Map a raw 0–100 score (clamping out-of-range input) onto the gauge.
pub fn map_score(score: f64) -> GaugeReading {
    let clamped = score.clamp(0.0, 100.0);
    let tier = risk_tier(clamped);

    GaugeReading {
        clamped,
        angle_degrees: clamped / 100.0 * 180.0 - 90.0,
        arc_fraction: clamped / 100.0,
        tier,
        color_hex: tier.color_hex(),
        css_class: tier.css_class(),
        label: tier.label(),
    }
}

/// Pixel geometry for rendering the gauge as an SVG semicircle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeGeometry {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    /// Left end of the arc.
    pub arc_start_x: f64,
    pub arc_start_y: f64,
    /// Right end of the arc.
    pub arc_end_x: f64,
    pub arc_end_y: f64,
    pub needle_x: f64,
    pub needle_y: f64,
    /// Full semicircular arc length (stroke-dasharray gap).
    pub arc_length: f64,
    /// Colored portion of the arc (stroke-dasharray dash).
    pub arc_dash: f64,
}

impl GaugeGeometry {
    /// Geometry for a gauge of `size` pixels wide, centered at (size/2, size/2).
    pub fn new(reading: &GaugeReading, size: f64) -> Self {
        let radius = size / 2.0 - ARC_MARGIN;
        let cx = size / 2.0;
        let cy = size / 2.0;

        let angle_rad = reading.angle_degrees * PI / 180.0;
        let needle_x = cx + radius * NEEDLE_FRACTION * angle_rad.cos();
        let needle_y = cy + radius * NEEDLE_FRACTION * angle_rad.sin();

        let arc_length = PI * radius;

        Self {
            cx,
            cy,
            radius,
            arc_start_x: cx - radius,
            arc_start_y: cy,
            arc_end_x: cx + radius,
            arc_end_y: cy,
            needle_x,
            needle_y,
            arc_length,
            arc_dash: arc_length * reading.arc_fraction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn empty_and_full_scores_hit_the_sweep_ends() {
        assert_eq!(map_score(0.0).angle_degrees, -90.0);
        assert_eq!(map_score(100.0).angle_degrees, 90.0);
        assert_eq!(map_score(50.0).angle_degrees, 0.0);
    }

    #[test]
    fn midpoint_score_is_moderate() {
        assert_eq!(map_score(50.0).tier, RiskTier::Moderate);
    }

    #[test]
    fn clamping_is_total_and_idempotent() {
        assert_eq!(map_score(-10.0).clamped, 0.0);
        assert_eq!(map_score(150.0).clamped, 100.0);
        assert_eq!(map_score(map_score(150.0).clamped).clamped, 100.0);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(risk_tier(34.9), RiskTier::Low);
        assert_eq!(risk_tier(35.0), RiskTier::Moderate);
        assert_eq!(risk_tier(64.9), RiskTier::Moderate);
        assert_eq!(risk_tier(65.0), RiskTier::High);
    }

    #[test]
    fn color_label_and_class_all_follow_the_tier() {
        for score in [10.0, 50.0, 90.0] {
            let reading = map_score(score);
            assert_eq!(reading.color_hex, reading.tier.color_hex());
            assert_eq!(reading.css_class, reading.tier.css_class());
            assert_eq!(reading.label, reading.tier.label());
        }
    }

    #[test]
    fn arc_fraction_tracks_the_clamped_score() {
        assert_eq!(map_score(25.0).arc_fraction, 0.25);
        assert_eq!(map_score(150.0).arc_fraction, 1.0);
    }

    #[test]
    fn geometry_needle_points_straight_up_at_zero() {
        let geo = GaugeGeometry::new(&map_score(0.0), 120.0);
        // angle −90°: cos ≈ 0, sin = −1
        assert!(close(geo.needle_x, 60.0));
        assert!(close(geo.needle_y, 60.0 - 52.0 * 0.7));
    }

    #[test]
    fn geometry_arc_spans_the_diameter() {
        let geo = GaugeGeometry::new(&map_score(40.0), 120.0);
        assert_eq!(geo.radius, 52.0);
        assert_eq!(geo.arc_start_x, 8.0);
        assert_eq!(geo.arc_end_x, 112.0);
        assert_eq!(geo.arc_start_y, geo.arc_end_y);
    }

    #[test]
    fn geometry_dash_is_fraction_of_full_arc() {
        let geo = GaugeGeometry::new(&map_score(50.0), 120.0);
        assert!(close(geo.arc_dash, geo.arc_length / 2.0));
        assert!(close(geo.arc_length, PI * 52.0));
    }
}
