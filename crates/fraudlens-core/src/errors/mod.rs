//! Error handling for fraudlens.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod model_error;
pub mod pipeline_error;
pub mod schema_error;

pub use config_error::ConfigError;
pub use error_code::ErrorCode;
pub use model_error::ModelError;
pub use pipeline_error::PipelineError;
pub use schema_error::SchemaError;
