//! Feature vectors: fixed-order numeric rows, one per record.

use serde::{Deserialize, Serialize};

use super::record::RecordId;

/// Fixed-order sequence of reals derived from one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub record_id: RecordId,
    pub values: Vec<f64>,
}

impl FeatureVector {
    pub fn new(record_id: impl Into<RecordId>, values: Vec<f64>) -> Self {
        Self {
            record_id: record_id.into(),
            values,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }
}
