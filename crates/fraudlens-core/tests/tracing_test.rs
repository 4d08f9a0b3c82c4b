//! Tracing setup is idempotent and driven by the observability config.

use fraudlens_core::config::FraudlensConfig;
use fraudlens_core::tracing::{init_tracing, init_tracing_with, metrics};

#[test]
fn repeated_init_does_not_panic() {
    let config = FraudlensConfig::from_toml("[observability]\nlog_level = \"debug\"\n").unwrap();
    assert_eq!(config.observability.default_directive(), "fraudlens=debug");

    init_tracing_with(&config.observability.default_directive());
    init_tracing();
    init_tracing_with("fraudlens=trace");
    tracing::info!(batch_size = 3, "tracing initialised");
}

#[test]
fn default_directive_is_info() {
    let config = FraudlensConfig::default();
    assert_eq!(config.observability.default_directive(), "fraudlens=info");
}

#[test]
fn metric_field_names_are_snake_case() {
    for name in [
        metrics::BATCH_SIZE,
        metrics::FEATURE_COUNT,
        metrics::NUM_TREES,
        metrics::SUBSAMPLE_SIZE,
        metrics::CONTAMINATION,
        metrics::OUTLIER_COUNT,
    ] {
        assert!(name.chars().all(|c| c.is_ascii_lowercase() || c == '_'), "{name}");
    }
}
