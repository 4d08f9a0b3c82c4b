//! Compiled defaults. Contamination and subsample size are library
//! defaults, not domain-derived; deployments are expected to override them.

use crate::constants::ENTITY_FIELD;

pub const DEFAULT_ENTITY_FIELD: &str = ENTITY_FIELD;
pub const DEFAULT_VALUE_FIELD: &str = "amount";

pub const DEFAULT_NUM_TREES: usize = 100;
pub const DEFAULT_SUBSAMPLE_SIZE: usize = 256;
pub const DEFAULT_SEED: u64 = 42;
pub const DEFAULT_PARALLEL: bool = true;

pub const DEFAULT_CONTAMINATION: f64 = 0.01;

pub const DEFAULT_LOG_LEVEL: &str = "info";
