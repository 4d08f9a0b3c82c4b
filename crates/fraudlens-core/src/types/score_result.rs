//! Per-batch scoring output.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::record::RecordId;

/// Score and label for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordScore {
    pub record_id: RecordId,
    /// Anomaly score in (0, 1]. Higher means more easily isolated.
    pub score: f64,
    pub is_outlier: bool,
}

/// Scores for one batch, in batch order, addressable by record id.
///
/// Never mutated after creation: [`ScoreResult::with_labels`] consumes the
/// result and builds a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<RecordScore>", into = "Vec<RecordScore>")]
pub struct ScoreResult {
    entries: Vec<RecordScore>,
    index: FxHashMap<RecordId, usize>,
}

impl ScoreResult {
    /// Build an unlabelled result (every record an inlier) from
    /// `(record_id, score)` pairs.
    pub fn from_scores(scores: impl IntoIterator<Item = (RecordId, f64)>) -> Self {
        scores
            .into_iter()
            .map(|(record_id, score)| RecordScore {
                record_id,
                score,
                is_outlier: false,
            })
            .collect::<Vec<_>>()
            .into()
    }

    /// Apply outlier labels, returning a new result. Records absent from
    /// `labels` keep their current label.
    pub fn with_labels(self, labels: &FxHashMap<RecordId, bool>) -> Self {
        let entries: Vec<RecordScore> = self
            .entries
            .into_iter()
            .map(|mut e| {
                if let Some(&flag) = labels.get(&e.record_id) {
                    e.is_outlier = flag;
                }
                e
            })
            .collect();
        entries.into()
    }

    pub fn get(&self, record_id: &str) -> Option<&RecordScore> {
        self.index.get(record_id).map(|&i| &self.entries[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RecordScore> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Scores in batch order.
    pub fn scores(&self) -> Vec<f64> {
        self.entries.iter().map(|e| e.score).collect()
    }

    pub fn outliers(&self) -> impl Iterator<Item = &RecordScore> {
        self.entries.iter().filter(|e| e.is_outlier)
    }

    pub fn outlier_count(&self) -> usize {
        self.outliers().count()
    }

    pub fn labels(&self) -> FxHashMap<RecordId, bool> {
        self.entries
            .iter()
            .map(|e| (e.record_id.clone(), e.is_outlier))
            .collect()
    }
}

impl From<Vec<RecordScore>> for ScoreResult {
    fn from(entries: Vec<RecordScore>) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.record_id.clone(), i))
            .collect();
        Self { entries, index }
    }
}

impl From<ScoreResult> for Vec<RecordScore> {
    fn from(result: ScoreResult) -> Self {
        result.entries
    }
}

impl<'a> IntoIterator for &'a ScoreResult {
    type Item = &'a RecordScore;
    type IntoIter = std::slice::Iter<'a, RecordScore>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
