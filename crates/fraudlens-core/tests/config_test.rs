//! Tests for the fraudlens configuration system.

use std::sync::Mutex;

use fraudlens_core::config::FraudlensConfig;
use fraudlens_core::errors::ConfigError;

/// Serializes tests that touch environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

fn clear_fraudlens_env_vars() {
    for key in [
        "FRAUDLENS_FEATURES_ENTITY_FIELD",
        "FRAUDLENS_FEATURES_VALUE_FIELD",
        "FRAUDLENS_FOREST_NUM_TREES",
        "FRAUDLENS_FOREST_SUBSAMPLE_SIZE",
        "FRAUDLENS_FOREST_SEED",
        "FRAUDLENS_FOREST_PARALLEL",
        "FRAUDLENS_THRESHOLD_CONTAMINATION",
        "FRAUDLENS_OBSERVABILITY_LOG_LEVEL",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_defaults() {
    let config = FraudlensConfig::from_toml("").unwrap();
    assert_eq!(config.features.effective_entity_field(), "entity");
    assert_eq!(config.features.effective_value_field(), "amount");
    assert_eq!(config.forest.effective_num_trees(), 100);
    assert_eq!(config.forest.effective_subsample_size(), 256);
    assert_eq!(config.forest.effective_seed(), 42);
    assert!(config.forest.effective_parallel());
    assert_eq!(config.threshold.effective_contamination(), 0.01);
    assert_eq!(config.observability.effective_log_level(), "info");
}

#[test]
fn partial_toml_keeps_other_defaults() {
    let config = FraudlensConfig::from_toml(
        r#"
[features]
entity_field = "user_id"

[forest]
num_trees = 25
"#,
    )
    .unwrap();
    assert_eq!(config.features.effective_entity_field(), "user_id");
    assert_eq!(config.features.effective_value_field(), "amount");
    assert_eq!(config.forest.effective_num_trees(), 25);
    assert_eq!(config.forest.effective_subsample_size(), 256);
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = FraudlensConfig::from_toml("[forest\nnum_trees = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn project_file_then_env_override() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fraudlens_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("fraudlens.toml"),
        r#"
[forest]
num_trees = 50
seed = 7

[threshold]
contamination = 0.05
"#,
    )
    .unwrap();

    std::env::set_var("FRAUDLENS_FOREST_NUM_TREES", "10");
    let config = FraudlensConfig::load(dir.path()).unwrap();
    clear_fraudlens_env_vars();

    assert_eq!(config.forest.effective_num_trees(), 10);
    assert_eq!(config.forest.effective_seed(), 7);
    assert_eq!(config.threshold.effective_contamination(), 0.05);
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fraudlens_env_vars();

    let dir = tempdir();
    std::env::set_var("FRAUDLENS_FOREST_SUBSAMPLE_SIZE", "lots");
    let config = FraudlensConfig::load(dir.path()).unwrap();
    clear_fraudlens_env_vars();

    assert_eq!(config.forest.effective_subsample_size(), 256);
}

#[test]
fn missing_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fraudlens_env_vars();

    let dir = tempdir();
    let config = FraudlensConfig::load(dir.path()).unwrap();
    assert_eq!(config, FraudlensConfig::default());
}

#[test]
fn validation_rejects_out_of_range_values() {
    for (toml, field) in [
        ("[forest]\nnum_trees = 0", "forest.num_trees"),
        ("[forest]\nsubsample_size = 0", "forest.subsample_size"),
        ("[threshold]\ncontamination = 0.0", "threshold.contamination"),
        ("[threshold]\ncontamination = 1.0", "threshold.contamination"),
        ("[features]\nvalue_field = \"  \"", "features.value_field"),
    ] {
        let config = FraudlensConfig::from_toml(toml).unwrap();
        match FraudlensConfig::validate(&config) {
            Err(ConfigError::ValidationFailed { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected validation failure for {field}, got {other:?}"),
        }
    }
}

#[test]
fn invalid_project_file_fails_load() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_fraudlens_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("fraudlens.toml"), "[threshold]\ncontamination = 2.0").unwrap();
    let err = FraudlensConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}

#[test]
fn toml_roundtrip() {
    let config = FraudlensConfig::from_toml("[forest]\nnum_trees = 12\nseed = 3").unwrap();
    let text = config.to_toml().unwrap();
    let back = FraudlensConfig::from_toml(&text).unwrap();
    assert_eq!(config, back);
}
