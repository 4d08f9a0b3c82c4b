//! Free-function entry points over the individual stages.
//!
//! Each call is a thin wrapper; use [`Pipeline`](crate::Pipeline) to run
//! every stage over a batch in one go.

use fraudlens_core::errors::{ModelError, SchemaError};
use fraudlens_core::types::{Dataset, FeatureVector, RecordId, ScoreResult};
use rustc_hash::FxHashMap;

use crate::features::FeatureDeriver;
use crate::forest::{ForestParams, IsolationForestModel};
use crate::threshold::ThresholdClassifier;

/// One raw (unstandardized) feature vector per record, in dataset order.
pub fn derive_features(
    dataset: &Dataset,
    entity_field: &str,
    value_field: &str,
) -> Result<Vec<FeatureVector>, SchemaError> {
    FeatureDeriver::new(entity_field, value_field).derive(dataset)
}

pub fn fit_forest(
    vectors: &[FeatureVector],
    num_trees: usize,
    subsample_size: usize,
    seed: u64,
) -> Result<IsolationForestModel, ModelError> {
    IsolationForestModel::fit(vectors, &ForestParams::new(num_trees, subsample_size, seed))
}

/// Unlabelled scores; pass them to [`classify`] for labels.
pub fn score(
    model: &IsolationForestModel,
    vectors: &[FeatureVector],
) -> Result<ScoreResult, ModelError> {
    model.score(vectors)
}

pub fn classify(
    scores: &ScoreResult,
    contamination: f64,
) -> Result<FxHashMap<RecordId, bool>, ModelError> {
    Ok(ThresholdClassifier::new(contamination)?.classify(scores))
}
