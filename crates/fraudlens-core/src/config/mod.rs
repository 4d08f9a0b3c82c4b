//! Configuration system for fraudlens.
//! TOML-based, 3-layer resolution: env > project file > defaults.

pub mod defaults;
pub mod feature_config;
pub mod forest_config;
pub mod fraudlens_config;
pub mod observability_config;
pub mod threshold_config;

pub use feature_config::FeatureConfig;
pub use forest_config::ForestConfig;
pub use fraudlens_config::FraudlensConfig;
pub use observability_config::ObservabilityConfig;
pub use threshold_config::ThresholdConfig;
