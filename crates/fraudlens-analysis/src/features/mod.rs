//! Per-entity feature derivation.
//!
//! Pass 1 accumulates running moments per entity; pass 2 emits one
//! feature vector per record by lookup.

pub mod deriver;
pub mod entity_stats;
pub mod layout;

pub use deriver::FeatureDeriver;
pub use entity_stats::{EntityAccumulator, EntityStats};
pub use layout::FeatureLayout;
