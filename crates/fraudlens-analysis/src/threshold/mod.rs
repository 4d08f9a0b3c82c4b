//! Score → label conversion from a target contamination rate.

pub mod classifier;

pub use classifier::ThresholdClassifier;
