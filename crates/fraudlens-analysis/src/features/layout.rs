//! Column order of derived feature vectors.

use serde::{Deserialize, Serialize};

/// Raw value of the designated value field.
pub const VALUE: usize = 0;
/// Number of records of the entity in the batch.
pub const ENTITY_COUNT: usize = 1;
/// Mean value over the entity's records.
pub const ENTITY_MEAN: usize = 2;
/// Sample standard deviation over the entity's records.
pub const ENTITY_STD: usize = 3;
/// Deviation of this record from its entity mean, in entity std units.
pub const VALUE_ZSCORE: usize = 4;

pub const FEATURE_COUNT: usize = 5;

/// Names the columns of the vectors a [`FeatureDeriver`](super::FeatureDeriver)
/// produces, prefixed by the value field they were derived from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureLayout {
    columns: Vec<String>,
}

impl FeatureLayout {
    pub fn for_value_field(value_field: &str) -> Self {
        let columns = vec![
            value_field.to_string(),
            format!("{value_field}_entity_count"),
            format!("{value_field}_entity_mean"),
            format!("{value_field}_entity_std"),
            format!("{value_field}_zscore"),
        ];
        Self { columns }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn index_of(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }
}
