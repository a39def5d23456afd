//! Biolens — time-series shaping and health-status classification for a
//! patient biomarker dashboard.
//!
//! The crate consumes already-fetched payloads from an external data provider
//! (readings, forecasts, anomaly flags, risk scores) and derives the
//! render-ready structures a presentation layer needs: merged chart series
//! with a forecast bridge point, padded axis domains, reference-range
//! classifications, trend deltas, and semicircular gauge geometry. Every
//! transform is pure and synchronous; callers re-invoke on input change.

pub mod anomaly;
pub mod chart;
pub mod classify;
pub mod config;
pub mod gauge;
pub mod models;
pub mod provider;
pub mod summary;
pub mod trend;

use tracing_subscriber::EnvFilter;

/// Initialize tracing for embedding applications.
///
/// Respects `RUST_LOG` when set, otherwise falls back to the crate default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} core v{}", config::APP_NAME, config::APP_VERSION);
}
