//! Feature derivation configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Which fields drive per-entity feature derivation.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct FeatureConfig {
    /// Grouping field. Default: `entity` (the record's own entity id).
    pub entity_field: Option<String>,
    /// Numeric field whose per-entity deviation is measured. Default: `amount`.
    pub value_field: Option<String>,
}

impl FeatureConfig {
    pub fn effective_entity_field(&self) -> &str {
        self.entity_field
            .as_deref()
            .unwrap_or(defaults::DEFAULT_ENTITY_FIELD)
    }

    pub fn effective_value_field(&self) -> &str {
        self.value_field
            .as_deref()
            .unwrap_or(defaults::DEFAULT_VALUE_FIELD)
    }
}
