//! Threshold classification configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ThresholdConfig {
    /// Assumed fraction of anomalous records, in (0, 1). Default: 0.01.
    pub contamination: Option<f64>,
}

impl ThresholdConfig {
    pub fn effective_contamination(&self) -> f64 {
        self.contamination.unwrap_or(defaults::DEFAULT_CONTAMINATION)
    }
}
