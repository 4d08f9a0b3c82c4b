//! Model errors: parameter validation and batch shape checks.

use super::error_code::{self, ErrorCode};

/// Errors that can occur while fitting or applying a model stage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("Invalid parameter {name}: {message}")]
    InvalidParameter { name: String, message: String },

    #[error("Dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Empty batch presented to {stage}")]
    EmptyBatch { stage: String },

    #[error("Invalid model encoding: {message}")]
    InvalidEncoding { message: String },
}

impl ModelError {
    pub fn invalid(name: &str, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.to_string(),
            message: message.into(),
        }
    }

    pub fn empty(stage: &str) -> Self {
        Self::EmptyBatch {
            stage: stage.to_string(),
        }
    }
}

impl ErrorCode for ModelError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidParameter { .. } => error_code::INVALID_PARAMETER,
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::EmptyBatch { .. } => error_code::EMPTY_BATCH,
            Self::InvalidEncoding { .. } => error_code::INVALID_MODEL,
        }
    }
}
