//! Standardizer: per-column `(x − mean) / std`, fitted once per batch.
//!
//! Uses the population standard deviation. Constant columns map to 0.

use fraudlens_core::errors::ModelError;
use fraudlens_core::types::FeatureVector;
use serde::{Deserialize, Serialize};
use statrs::statistics::Statistics;

/// Fitted scaling state. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standardizer {
    means: Vec<f64>,
    std_devs: Vec<f64>,
}

impl Standardizer {
    /// Compute per-column mean and standard deviation over `vectors`.
    pub fn fit(vectors: &[FeatureVector]) -> Result<Self, ModelError> {
        let first = vectors.first().ok_or_else(|| ModelError::empty("standardizer"))?;
        let width = first.len();
        if let Some(bad) = vectors.iter().find(|v| v.len() != width) {
            return Err(ModelError::DimensionMismatch {
                expected: width,
                actual: bad.len(),
            });
        }

        let mut means = Vec::with_capacity(width);
        let mut std_devs = Vec::with_capacity(width);
        for col in 0..width {
            let column: Vec<f64> = vectors.iter().map(|v| v.values[col]).collect();
            let mean = column.iter().mean();
            let constant = column.iter().all(|&x| x == column[0]);
            let std = if constant {
                0.0
            } else {
                column.iter().population_std_dev()
            };
            means.push(if constant { column[0] } else { mean });
            std_devs.push(std);
        }

        Ok(Self { means, std_devs })
    }

    /// Fit on `vectors` and transform the same vectors.
    pub fn fit_transform(
        vectors: &[FeatureVector],
    ) -> Result<(Self, Vec<FeatureVector>), ModelError> {
        let fitted = Self::fit(vectors)?;
        let transformed = fitted.transform(vectors)?;
        Ok((fitted, transformed))
    }

    /// Apply the fitted scaling. Input vectors are not modified.
    pub fn transform(&self, vectors: &[FeatureVector]) -> Result<Vec<FeatureVector>, ModelError> {
        vectors
            .iter()
            .map(|v| {
                Ok(FeatureVector::new(
                    v.record_id.clone(),
                    self.transform_values(&v.values)?,
                ))
            })
            .collect()
    }

    pub fn transform_values(&self, values: &[f64]) -> Result<Vec<f64>, ModelError> {
        if values.len() != self.width() {
            return Err(ModelError::DimensionMismatch {
                expected: self.width(),
                actual: values.len(),
            });
        }
        Ok(values
            .iter()
            .zip(self.means.iter().zip(&self.std_devs))
            .map(|(&x, (&mean, &std))| {
                if std > 0.0 && std.is_finite() {
                    (x - mean) / std
                } else {
                    0.0
                }
            })
            .collect())
    }

    pub fn width(&self) -> usize {
        self.means.len()
    }

    pub fn means(&self) -> &[f64] {
        &self.means
    }

    pub fn std_devs(&self) -> &[f64] {
        &self.std_devs
    }
}
