//! ErrorCode trait for stable, machine-readable error identifiers.

/// Every error enum implements this to provide a structured error code
/// string that callers can match on without parsing messages.
pub trait ErrorCode {
    /// Returns the error code string (e.g., "SCHEMA_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const SCHEMA_ERROR: &str = "SCHEMA_ERROR";
pub const INVALID_PARAMETER: &str = "INVALID_PARAMETER";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const EMPTY_BATCH: &str = "EMPTY_BATCH";
pub const INVALID_MODEL: &str = "INVALID_MODEL";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CANCELLED: &str = "CANCELLED";
