//! Contamination-based thresholding.
//!
//! The threshold is an order statistic of the batch's own scores: the k-th
//! highest score, with `k = max(1, round(c·n))`. Scores at or above it are
//! outliers, so ties at the threshold are all flagged.

use fraudlens_core::config::ThresholdConfig;
use fraudlens_core::errors::ModelError;
use fraudlens_core::types::{RecordId, ScoreResult};
use rustc_hash::FxHashMap;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdClassifier {
    contamination: f64,
}

impl ThresholdClassifier {
    /// `contamination` must be finite and strictly inside (0, 1).
    pub fn new(contamination: f64) -> Result<Self, ModelError> {
        if !contamination.is_finite() || contamination <= 0.0 || contamination >= 1.0 {
            return Err(ModelError::invalid(
                "contamination",
                format!("must be strictly between 0 and 1, got {contamination}"),
            ));
        }
        Ok(Self { contamination })
    }

    pub fn from_config(config: &ThresholdConfig) -> Result<Self, ModelError> {
        Self::new(config.effective_contamination())
    }

    pub fn contamination(&self) -> f64 {
        self.contamination
    }

    /// Number of records to flag in a batch of `n`. Zero only for an empty batch.
    pub fn flag_count(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        let k = (self.contamination * n as f64).round() as usize;
        k.clamp(1, n)
    }

    /// The k-th highest of `scores`, or `None` for an empty slice.
    pub fn threshold_for(&self, scores: &[f64]) -> Option<f64> {
        let k = self.flag_count(scores.len());
        if k == 0 {
            return None;
        }
        let mut sorted = scores.to_vec();
        sorted.sort_by(|a, b| b.total_cmp(a));
        Some(sorted[k - 1])
    }

    /// Label every record of `scores`. An empty result yields an empty map.
    pub fn classify(&self, scores: &ScoreResult) -> FxHashMap<RecordId, bool> {
        let Some(threshold) = self.threshold_for(&scores.scores()) else {
            return FxHashMap::default();
        };
        let labels: FxHashMap<RecordId, bool> = scores
            .iter()
            .map(|e| (e.record_id.clone(), e.score >= threshold))
            .collect();

        debug!(
            batch_size = scores.len(),
            contamination = self.contamination,
            threshold,
            outlier_count = labels.values().filter(|&&flag| flag).count(),
            "classified scores"
        );
        labels
    }

    /// Consume an unlabelled result and return it with labels applied.
    pub fn label(&self, scores: ScoreResult) -> ScoreResult {
        let labels = self.classify(&scores);
        scores.with_labels(&labels)
    }
}
