//! Isolation forest configuration.

use serde::{Deserialize, Serialize};

use super::defaults;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ForestConfig {
    /// Number of trees (T). Default: 100.
    pub num_trees: Option<usize>,
    /// Points drawn per tree (ψ). Default: 256.
    pub subsample_size: Option<usize>,
    /// Master seed for subsampling and split choices. Default: 42.
    pub seed: Option<u64>,
    /// Build and score on the rayon pool. Default: true.
    pub parallel: Option<bool>,
}

impl ForestConfig {
    pub fn effective_num_trees(&self) -> usize {
        self.num_trees.unwrap_or(defaults::DEFAULT_NUM_TREES)
    }

    pub fn effective_subsample_size(&self) -> usize {
        self.subsample_size.unwrap_or(defaults::DEFAULT_SUBSAMPLE_SIZE)
    }

    pub fn effective_seed(&self) -> u64 {
        self.seed.unwrap_or(defaults::DEFAULT_SEED)
    }

    pub fn effective_parallel(&self) -> bool {
        self.parallel.unwrap_or(defaults::DEFAULT_PARALLEL)
    }
}
