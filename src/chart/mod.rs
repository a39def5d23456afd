//! Chart series shaping — merges historical readings and model forecasts
//! into one continuous, render-ready sequence, and derives the padded
//! y-axis domain for it.
//!
//! The presentation layer draws the `actual` and `forecast` fields as two
//! lines over a shared x axis; the single bridge point keeps them visually
//! connected. Rebuilt on every render from immutable inputs.

mod axis;
mod merge;
mod types;

pub use axis::*;
pub use merge::*;
pub use types::*;

// ── Tests ──────────────────────────────────────────────────────────────────
