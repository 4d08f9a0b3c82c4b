//! # fraudlens-analysis
//!
//! Unsupervised anomaly scoring over batches of entity-linked records.
//!
//! - `features`: per-entity count, mean, std, and z-score per record
//! - `standardize`: column-wise standardization
//! - `forest`: isolation forest fitting, scoring, and persistence
//! - `threshold`: contamination-based outlier labels
//! - `pipeline`: all four stages over one batch

pub mod api;
pub mod features;
pub mod forest;
pub mod pipeline;
pub mod standardize;
pub mod threshold;

pub use api::{classify, derive_features, fit_forest, score};
pub use features::{FeatureDeriver, FeatureLayout};
pub use forest::{ForestParams, IsolationForestModel, IsolationTree};
pub use pipeline::{Pipeline, PipelineConfig, PipelineOutput};
pub use standardize::Standardizer;
pub use threshold::ThresholdClassifier;
