//! Structured span field names.
//!
//! Fields of the `pipeline_run` span. The span declares them empty and
//! records each one through these names.

/// Number of records in the batch.
pub const BATCH_SIZE: &str = "batch_size";

/// Width of the feature vectors.
pub const FEATURE_COUNT: &str = "feature_count";

/// Number of trees in the forest.
pub const NUM_TREES: &str = "num_trees";

/// Effective subsample size used to build each tree.
pub const SUBSAMPLE_SIZE: &str = "subsample_size";

/// Contamination fraction used for classification.
pub const CONTAMINATION: &str = "contamination";

/// Number of records flagged as outliers.
pub const OUTLIER_COUNT: &str = "outlier_count";
