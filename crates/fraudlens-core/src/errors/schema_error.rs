//! Schema errors.

use super::error_code::{self, ErrorCode};
use crate::types::FieldType;

/// Errors raised when a dataset does not expose the fields a stage needs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchemaError {
    #[error("Field '{field}' is not part of the dataset schema")]
    MissingField { field: String },

    #[error("Field '{field}' has type {actual:?}, expected {expected:?}")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        actual: FieldType,
    },

    #[error("Record '{record_id}' does not match the schema at field '{field}'")]
    InconsistentRecord { record_id: String, field: String },

    #[error("Record id '{record_id}' appears more than once in the dataset")]
    DuplicateRecordId { record_id: String },
}

impl ErrorCode for SchemaError {
    fn error_code(&self) -> &'static str {
        error_code::SCHEMA_ERROR
    }
}
