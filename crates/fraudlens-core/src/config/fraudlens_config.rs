//! Top-level fraudlens configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{FeatureConfig, ForestConfig, ObservabilityConfig, ThresholdConfig};
use crate::constants::CONFIG_FILE_NAME;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FRAUDLENS_*`)
/// 2. Project config (`fraudlens.toml` in the project root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FraudlensConfig {
    pub features: FeatureConfig,
    pub forest: ForestConfig,
    pub threshold: ThresholdConfig,
    pub observability: ObservabilityConfig,
}

impl FraudlensConfig {
    /// Load configuration for the project rooted at `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FraudlensConfig) -> Result<(), ConfigError> {
        if config.forest.num_trees == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "forest.num_trees".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.forest.subsample_size == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "forest.subsample_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if let Some(c) = config.threshold.contamination {
            if !(c > 0.0 && c < 1.0) {
                return Err(ConfigError::ValidationFailed {
                    field: "threshold.contamination".to_string(),
                    message: "must be strictly between 0.0 and 1.0".to_string(),
                });
            }
        }
        for (field, value) in [
            ("features.entity_field", &config.features.entity_field),
            ("features.value_field", &config.features.value_field),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut FraudlensConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: FraudlensConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a `Some` value.
    fn merge(base: &mut FraudlensConfig, other: &FraudlensConfig) {
        // Features
        if other.features.entity_field.is_some() {
            base.features.entity_field = other.features.entity_field.clone();
        }
        if other.features.value_field.is_some() {
            base.features.value_field = other.features.value_field.clone();
        }

        // Forest
        if other.forest.num_trees.is_some() {
            base.forest.num_trees = other.forest.num_trees;
        }
        if other.forest.subsample_size.is_some() {
            base.forest.subsample_size = other.forest.subsample_size;
        }
        if other.forest.seed.is_some() {
            base.forest.seed = other.forest.seed;
        }
        if other.forest.parallel.is_some() {
            base.forest.parallel = other.forest.parallel;
        }

        // Threshold
        if other.threshold.contamination.is_some() {
            base.threshold.contamination = other.threshold.contamination;
        }

        // Observability
        if other.observability.log_level.is_some() {
            base.observability.log_level = other.observability.log_level.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `FRAUDLENS_FOREST_NUM_TREES`, `FRAUDLENS_THRESHOLD_CONTAMINATION`, etc.
    /// Unparseable values are ignored with a warning.
    fn apply_env_overrides(config: &mut FraudlensConfig) {
        if let Ok(val) = std::env::var("FRAUDLENS_FEATURES_ENTITY_FIELD") {
            config.features.entity_field = Some(val);
        }
        if let Ok(val) = std::env::var("FRAUDLENS_FEATURES_VALUE_FIELD") {
            config.features.value_field = Some(val);
        }
        if let Some(v) = parse_env::<usize>("FRAUDLENS_FOREST_NUM_TREES") {
            config.forest.num_trees = Some(v);
        }
        if let Some(v) = parse_env::<usize>("FRAUDLENS_FOREST_SUBSAMPLE_SIZE") {
            config.forest.subsample_size = Some(v);
        }
        if let Some(v) = parse_env::<u64>("FRAUDLENS_FOREST_SEED") {
            config.forest.seed = Some(v);
        }
        if let Some(v) = parse_env::<bool>("FRAUDLENS_FOREST_PARALLEL") {
            config.forest.parallel = Some(v);
        }
        if let Some(v) = parse_env::<f64>("FRAUDLENS_THRESHOLD_CONTAMINATION") {
            config.threshold.contamination = Some(v);
        }
        if let Ok(val) = std::env::var("FRAUDLENS_OBSERVABILITY_LOG_LEVEL") {
            config.observability.log_level = Some(val);
        }
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Option<T> {
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring unparseable environment override");
            None
        }
    }
}
