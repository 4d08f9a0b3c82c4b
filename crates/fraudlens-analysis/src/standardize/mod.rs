//! Column-wise standardization of feature vectors.

pub mod standardizer;

pub use standardizer::Standardizer;
