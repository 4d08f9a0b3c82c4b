//! # fraudlens-core
//!
//! Foundation crate for the fraudlens anomaly scorer.
//! Defines the data model, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::FraudlensConfig;
pub use errors::{ConfigError, ErrorCode, ModelError, PipelineError, SchemaError};
pub use traits::{Cancellable, CancellationToken};
pub use types::{
    Dataset, EntityId, FeatureVector, FieldType, FieldValue, Record, RecordId, RecordScore,
    Schema, ScoreResult,
};
