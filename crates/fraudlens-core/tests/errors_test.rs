//! Error code mapping and conversions.

use fraudlens_core::errors::{ConfigError, ErrorCode, ModelError, PipelineError, SchemaError};

#[test]
fn model_error_codes_are_distinct() {
    assert_eq!(
        ModelError::invalid("num_trees", "must be at least 1").error_code(),
        "INVALID_PARAMETER"
    );
    assert_eq!(
        ModelError::DimensionMismatch {
            expected: 5,
            actual: 4
        }
        .error_code(),
        "DIMENSION_MISMATCH"
    );
    assert_eq!(ModelError::empty("fit").error_code(), "EMPTY_BATCH");
}

#[test]
fn pipeline_error_delegates_codes() {
    let schema: PipelineError = SchemaError::MissingField {
        field: "amount".into(),
    }
    .into();
    assert_eq!(schema.error_code(), "SCHEMA_ERROR");

    let config: PipelineError = ConfigError::FileNotFound { path: "x".into() }.into();
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    assert_eq!(PipelineError::Cancelled.error_code(), "CANCELLED");
}

#[test]
fn coded_string_prefixes_message() {
    let err = ModelError::DimensionMismatch {
        expected: 5,
        actual: 3,
    };
    assert_eq!(
        err.coded_string(),
        "[DIMENSION_MISMATCH] Dimension mismatch: expected 5 features, got 3"
    );
}

#[test]
fn duplicate_record_id_is_a_schema_error() {
    let err = SchemaError::DuplicateRecordId {
        record_id: "t0".into(),
    };
    assert_eq!(err.error_code(), "SCHEMA_ERROR");
    assert_eq!(
        err.coded_string(),
        "[SCHEMA_ERROR] Record id 't0' appears more than once in the dataset"
    );
}
