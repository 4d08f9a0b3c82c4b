//! IsolationForestModel: fitting, scoring, and persistence.

use fraudlens_core::config::ForestConfig;
use fraudlens_core::errors::ModelError;
use fraudlens_core::types::{FeatureVector, ScoreResult};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::builder::TreeBuilder;
use super::path_length::{average_path_length, max_depth_for};
use super::tree::IsolationTree;

/// Parameters for [`IsolationForestModel::fit`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForestParams {
    pub num_trees: usize,
    pub subsample_size: usize,
    pub seed: u64,
    /// Build trees and score records on the rayon pool. Results are
    /// identical either way.
    pub parallel: bool,
}

impl ForestParams {
    pub fn new(num_trees: usize, subsample_size: usize, seed: u64) -> Self {
        Self {
            num_trees,
            subsample_size,
            seed,
            parallel: true,
        }
    }

    pub fn from_config(config: &ForestConfig) -> Self {
        Self {
            num_trees: config.effective_num_trees(),
            subsample_size: config.effective_subsample_size(),
            seed: config.effective_seed(),
            parallel: config.effective_parallel(),
        }
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.num_trees < 1 {
            return Err(ModelError::invalid("num_trees", "must be at least 1"));
        }
        if self.subsample_size < 1 {
            return Err(ModelError::invalid("subsample_size", "must be at least 1"));
        }
        Ok(())
    }
}

/// An ensemble of isolation trees. Immutable after fitting; owns all trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IsolationForestModel {
    /// Effective ψ: the configured subsample size, capped at the batch size.
    subsample_size: usize,
    num_features: usize,
    max_depth: usize,
    trees: Vec<IsolationTree>,
}

impl IsolationForestModel {
    /// Fit `params.num_trees` trees, each over its own subsample of `vectors`.
    pub fn fit(vectors: &[FeatureVector], params: &ForestParams) -> Result<Self, ModelError> {
        params.validate()?;
        let first = vectors.first().ok_or_else(|| ModelError::empty("isolation forest fit"))?;
        let num_features = first.len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != num_features) {
            return Err(ModelError::DimensionMismatch {
                expected: num_features,
                actual: bad.len(),
            });
        }

        let n = vectors.len();
        let subsample_size = params.subsample_size.min(n);
        let max_depth = max_depth_for(subsample_size);
        let rows: Vec<&[f64]> = vectors.iter().map(|v| v.values.as_slice()).collect();

        // One seed per tree, drawn up front so the forest does not depend
        // on the order in which workers pick up trees.
        let mut master = ChaCha8Rng::seed_from_u64(params.seed);
        let tree_seeds: Vec<u64> = (0..params.num_trees).map(|_| master.gen()).collect();

        let build = |&tree_seed: &u64| {
            let mut rng = ChaCha8Rng::seed_from_u64(tree_seed);
            let mut sample = index::sample(&mut rng, n, subsample_size).into_vec();
            TreeBuilder::new(&rows, num_features, max_depth, rng).build(&mut sample)
        };
        let trees: Vec<IsolationTree> = if params.parallel {
            tree_seeds.par_iter().map(build).collect()
        } else {
            tree_seeds.iter().map(build).collect()
        };

        info!(
            num_trees = trees.len(),
            subsample_size,
            feature_count = num_features,
            max_depth,
            "isolation forest fitted"
        );

        Ok(Self {
            subsample_size,
            num_features,
            max_depth,
            trees,
        })
    }

    /// Score every vector on the rayon pool.
    pub fn score(&self, vectors: &[FeatureVector]) -> Result<ScoreResult, ModelError> {
        self.score_with(vectors, true)
    }

    /// Score every vector on the calling thread.
    pub fn score_sequential(&self, vectors: &[FeatureVector]) -> Result<ScoreResult, ModelError> {
        self.score_with(vectors, false)
    }

    pub fn score_with(
        &self,
        vectors: &[FeatureVector],
        parallel: bool,
    ) -> Result<ScoreResult, ModelError> {
        if vectors.is_empty() {
            return Err(ModelError::empty("isolation forest score"));
        }
        if let Some(bad) = vectors.iter().find(|v| v.len() != self.num_features) {
            return Err(ModelError::DimensionMismatch {
                expected: self.num_features,
                actual: bad.len(),
            });
        }

        let score_one = |v: &FeatureVector| (v.record_id.clone(), self.score_values(&v.values));
        let scores: Vec<(String, f64)> = if parallel {
            vectors.par_iter().map(score_one).collect()
        } else {
            vectors.iter().map(score_one).collect()
        };

        debug!(batch_size = scores.len(), "scored batch");
        Ok(ScoreResult::from_scores(scores))
    }

    /// Anomaly score of a single vector.
    pub fn anomaly_score(&self, values: &[f64]) -> Result<f64, ModelError> {
        if values.len() != self.num_features {
            return Err(ModelError::DimensionMismatch {
                expected: self.num_features,
                actual: values.len(),
            });
        }
        Ok(self.score_values(values))
    }

    /// `E[h(x)]` across all trees.
    pub fn mean_path_length(&self, values: &[f64]) -> Result<f64, ModelError> {
        if values.len() != self.num_features {
            return Err(ModelError::DimensionMismatch {
                expected: self.num_features,
                actual: values.len(),
            });
        }
        Ok(self.mean_path(values))
    }

    fn mean_path(&self, values: &[f64]) -> f64 {
        let total: f64 = self.trees.iter().map(|t| t.path_length(values)).sum();
        total / self.trees.len() as f64
    }

    /// `s(x) = 2^(−E[h(x)] / c(ψ))`. With ψ = 1 no point can be isolated
    /// faster than another, and every point scores a neutral 0.5.
    fn score_values(&self, values: &[f64]) -> f64 {
        let normalizer = average_path_length(self.subsample_size);
        if normalizer <= 0.0 {
            return 0.5;
        }
        2f64.powf(-self.mean_path(values) / normalizer)
    }

    pub fn trees(&self) -> &[IsolationTree] {
        &self.trees
    }

    pub fn num_trees(&self) -> usize {
        self.trees.len()
    }

    pub fn subsample_size(&self) -> usize {
        self.subsample_size
    }

    pub fn num_features(&self) -> usize {
        self.num_features
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// How many internal nodes split on each feature, across the forest.
    pub fn split_counts(&self) -> Vec<usize> {
        let mut counts = vec![0; self.num_features];
        for tree in &self.trees {
            tree.count_splits(&mut counts);
        }
        counts
    }

    pub fn to_json(&self) -> Result<String, ModelError> {
        serde_json::to_string(self).map_err(|e| ModelError::InvalidEncoding {
            message: e.to_string(),
        })
    }

    /// Decode a model and check that it is usable for scoring.
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        let model: Self = serde_json::from_str(json).map_err(|e| ModelError::InvalidEncoding {
            message: e.to_string(),
        })?;
        model.check_integrity()?;
        Ok(model)
    }

    fn check_integrity(&self) -> Result<(), ModelError> {
        let invalid = |message: String| Err(ModelError::InvalidEncoding { message });
        if self.trees.is_empty() {
            return invalid("model has no trees".to_string());
        }
        if self.subsample_size < 1 {
            return invalid("subsample_size must be at least 1".to_string());
        }
        for (i, tree) in self.trees.iter().enumerate() {
            if let Some(f) = tree.max_feature_index() {
                if f >= self.num_features {
                    return invalid(format!(
                        "tree {i} splits on feature {f} but the model has {} features",
                        self.num_features
                    ));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Vec<FeatureVector> {
        (0..n)
            .map(|i| FeatureVector::new(format!("r{i}"), vec![(i % 10) as f64, (i / 10) as f64]))
            .collect()
    }

    #[test]
    fn invalid_parameters_rejected() {
        let data = grid(10);
        let err = IsolationForestModel::fit(&data, &ForestParams::new(0, 8, 1)).unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { ref name, .. } if name == "num_trees"));
        let err = IsolationForestModel::fit(&data, &ForestParams::new(5, 0, 1)).unwrap_err();
        assert!(
            matches!(err, ModelError::InvalidParameter { ref name, .. } if name == "subsample_size")
        );
    }

    #[test]
    fn empty_batch_rejected() {
        let err = IsolationForestModel::fit(&[], &ForestParams::new(5, 8, 1)).unwrap_err();
        assert!(matches!(err, ModelError::EmptyBatch { .. }));

        let model = IsolationForestModel::fit(&grid(10), &ForestParams::new(5, 8, 1)).unwrap();
        assert!(matches!(model.score(&[]), Err(ModelError::EmptyBatch { .. })));
    }

    #[test]
    fn subsample_capped_at_batch_size() {
        let model = IsolationForestModel::fit(&grid(20), &ForestParams::new(10, 256, 1)).unwrap();
        assert_eq!(model.subsample_size(), 20);
        assert_eq!(model.max_depth(), 5);
        assert!(model.trees().iter().all(|t| t.sample_count() == 20));
    }

    #[test]
    fn dimension_mismatch_on_score() {
        let model = IsolationForestModel::fit(&grid(20), &ForestParams::new(10, 16, 1)).unwrap();
        let err = model
            .score(&[FeatureVector::new("x", vec![1.0, 2.0, 3.0])])
            .unwrap_err();
        assert_eq!(
            err,
            ModelError::DimensionMismatch {
                expected: 2,
                actual: 3
            }
        );
        assert!(model.anomaly_score(&[1.0]).is_err());
    }

    #[test]
    fn parallel_and_sequential_agree() {
        let data = grid(100);
        let par = IsolationForestModel::fit(&data, &ForestParams::new(30, 32, 5)).unwrap();
        let seq =
            IsolationForestModel::fit(&data, &ForestParams::new(30, 32, 5).with_parallel(false))
                .unwrap();
        assert_eq!(par, seq);
        assert_eq!(par.score(&data).unwrap(), seq.score_sequential(&data).unwrap());
    }

    #[test]
    fn single_point_batch_scores_neutral() {
        let data = vec![FeatureVector::new("only", vec![3.0])];
        let model = IsolationForestModel::fit(&data, &ForestParams::new(4, 256, 0)).unwrap();
        assert_eq!(model.subsample_size(), 1);
        assert_eq!(model.score(&data).unwrap().get("only").unwrap().score, 0.5);
    }

    #[test]
    fn json_roundtrip_preserves_scores() {
        let data = grid(50);
        let model = IsolationForestModel::fit(&data, &ForestParams::new(10, 16, 11)).unwrap();
        let restored = IsolationForestModel::from_json(&model.to_json().unwrap()).unwrap();
        assert_eq!(restored, model);
        assert_eq!(restored.score(&data).unwrap(), model.score(&data).unwrap());
    }

    #[test]
    fn json_with_out_of_range_feature_rejected() {
        let json = r#"{"subsample_size":2,"num_features":1,"max_depth":1,
            "trees":[{"feature_index":3,"threshold":0.0,"left":{"leaf_size":1},"right":{"leaf_size":1}}]}"#;
        let err = IsolationForestModel::from_json(json).unwrap_err();
        assert!(matches!(err, ModelError::InvalidEncoding { .. }));
    }

    #[test]
    fn malformed_json_rejected() {
        assert!(matches!(
            IsolationForestModel::from_json("{not json"),
            Err(ModelError::InvalidEncoding { .. })
        ));
    }
}
