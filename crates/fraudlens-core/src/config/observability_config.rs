//! Observability configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level used when `FRAUDLENS_LOG` is unset. Default: `info`.
    pub log_level: Option<String>,
}

impl ObservabilityConfig {
    pub fn effective_log_level(&self) -> &str {
        self.log_level
            .as_deref()
            .unwrap_or(defaults::DEFAULT_LOG_LEVEL)
    }

    /// Filter directive for [`crate::tracing::setup::init_tracing_with`].
    pub fn default_directive(&self) -> String {
        format!("fraudlens={}", self.effective_log_level())
    }
}
