//! Prometheus metrics for core components.
//!
//! This module provides metrics for:
//! - Similarity index builds (count, duration, catalog size)
//! - Recommendation lookups

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, Opts};

// =============================================================================
// Index Metrics
// =============================================================================

/// Similarity index builds total.
pub static INDEX_BUILDS: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new("marquee_index_builds_total", "Total similarity index builds").unwrap()
});

/// Similarity index build duration in seconds.
pub static INDEX_BUILD_DURATION: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "marquee_index_build_duration_seconds",
            "Duration of similarity index builds",
        )
        .buckets(vec![0.0001, 0.001, 0.01, 0.05, 0.1, 0.5, 1.0, 5.0]),
    )
    .unwrap()
});

/// Movies in the indexed catalog.
pub static CATALOG_SIZE: Lazy<IntGauge> = Lazy::new(|| {
    IntGauge::new("marquee_catalog_size", "Number of movies in the indexed catalog").unwrap()
});

// =============================================================================
// Query Metrics
// =============================================================================

/// Recommendation lookups by result.
pub static RECOMMENDATIONS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "marquee_recommendations_total",
            "Total recommendation lookups",
        ),
        &["result"], // "ok", "not_found"
    )
    .unwrap()
});

// =============================================================================
// Helper functions
// =============================================================================

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(INDEX_BUILDS.clone()),
        Box::new(INDEX_BUILD_DURATION.clone()),
        Box::new(CATALOG_SIZE.clone()),
        Box::new(RECOMMENDATIONS.clone()),
    ]
}
