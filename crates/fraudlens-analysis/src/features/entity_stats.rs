//! Running per-entity moments.

use serde::{Deserialize, Serialize};

/// Welford accumulator: count, running mean, and sum of squared
/// deviations. Identical inputs leave `m2` at exactly zero.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EntityAccumulator {
    count: u64,
    mean: f64,
    m2: f64,
}

impl EntityAccumulator {
    pub fn push(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (value - self.mean);
    }

    pub fn finish(&self) -> EntityStats {
        let std = if self.count > 1 {
            (self.m2.max(0.0) / (self.count - 1) as f64).sqrt()
        } else {
            0.0
        };
        EntityStats {
            count: self.count,
            mean: self.mean,
            std,
        }
    }
}

/// Aggregate statistics for one entity over one batch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EntityStats {
    pub count: u64,
    pub mean: f64,
    /// Sample standard deviation; `0` for a single record.
    pub std: f64,
}

impl EntityStats {
    /// Standardized deviation of `value`. Zero when the entity shows no
    /// variability, never NaN or infinite.
    pub fn zscore(&self, value: f64) -> f64 {
        if self.std > 0.0 && self.std.is_finite() {
            (value - self.mean) / self.std
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats_of(values: &[f64]) -> EntityStats {
        let mut acc = EntityAccumulator::default();
        for &v in values {
            acc.push(v);
        }
        acc.finish()
    }

    #[test]
    fn sample_std_matches_hand_computation() {
        let s = stats_of(&[10.0, 12.0, 1000.0]);
        assert_eq!(s.count, 3);
        assert!((s.mean - 340.666_666).abs() < 1e-3);
        assert!((s.std - 571.0).abs() < 0.1, "std = {}", s.std);
    }

    #[test]
    fn single_record_has_zero_std_and_zscore() {
        let s = stats_of(&[42.0]);
        assert_eq!(s.std, 0.0);
        assert_eq!(s.zscore(42.0), 0.0);
        assert_eq!(s.zscore(1e9), 0.0);
    }

    #[test]
    fn identical_values_have_exactly_zero_std() {
        let s = stats_of(&[0.1, 0.1, 0.1, 0.1, 0.1, 0.1, 0.1]);
        assert_eq!(s.std, 0.0);
        assert_eq!(s.zscore(0.1), 0.0);
    }
}
