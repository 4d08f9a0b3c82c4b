//! Batch pipeline orchestrator.
//!
//! FeatureDeriver → Standardizer → IsolationForest → ThresholdClassifier.
//! Stages run in strict sequence; a run either returns a complete
//! [`PipelineOutput`] or a single [`PipelineError`].

use std::time::Instant;

use fraudlens_core::config::FraudlensConfig;
use fraudlens_core::errors::{ModelError, PipelineError};
use fraudlens_core::tracing::metrics;
use fraudlens_core::traits::{Cancellable, CancellationToken};
use fraudlens_core::types::{Dataset, ScoreResult};
use tracing::{field, info, info_span};

use crate::features::{FeatureDeriver, FeatureLayout};
use crate::forest::{ForestParams, IsolationForestModel};
use crate::standardize::Standardizer;
use crate::threshold::ThresholdClassifier;

/// Everything a single run needs, resolved from [`FraudlensConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub entity_field: String,
    pub value_field: String,
    pub forest: ForestParams,
    pub contamination: f64,
}

impl PipelineConfig {
    pub fn from_config(config: &FraudlensConfig) -> Self {
        Self {
            entity_field: config.features.effective_entity_field().to_string(),
            value_field: config.features.effective_value_field().to_string(),
            forest: ForestParams::from_config(&config.forest),
            contamination: config.threshold.effective_contamination(),
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_config(&FraudlensConfig::default())
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutput {
    /// Scores and labels in dataset order.
    pub scores: ScoreResult,
    /// The forest fitted on this batch. Only valid for vectors produced by
    /// the same layout and standardizer.
    pub model: IsolationForestModel,
    pub standardizer: Standardizer,
    pub layout: FeatureLayout,
}

/// A configured pipeline. Holds no per-batch state; every run re-fits.
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    deriver: FeatureDeriver,
    classifier: ThresholdClassifier,
}

impl Pipeline {
    /// Validate parameters up front so a run never fails half-way on them.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.forest.validate()?;
        let classifier = ThresholdClassifier::new(config.contamination)?;
        let deriver = FeatureDeriver::new(&config.entity_field, &config.value_field);
        Ok(Self {
            config,
            deriver,
            classifier,
        })
    }

    pub fn from_config(config: &FraudlensConfig) -> Result<Self, PipelineError> {
        FraudlensConfig::validate(config)?;
        Self::new(PipelineConfig::from_config(config))
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn run(&self, dataset: &Dataset) -> Result<PipelineOutput, PipelineError> {
        self.run_with_cancellation(dataset, &CancellationToken::new())
    }

    /// Run all stages, checking `cancel` before each one.
    pub fn run_with_cancellation(
        &self,
        dataset: &Dataset,
        cancel: &dyn Cancellable,
    ) -> Result<PipelineOutput, PipelineError> {
        let span = info_span!(
            "pipeline_run",
            batch_size = field::Empty,
            num_trees = field::Empty,
            contamination = field::Empty,
            feature_count = field::Empty,
            subsample_size = field::Empty,
            outlier_count = field::Empty,
        );
        span.record(metrics::BATCH_SIZE, dataset.len());
        span.record(metrics::NUM_TREES, self.config.forest.num_trees);
        span.record(metrics::CONTAMINATION, self.config.contamination);
        let _guard = span.enter();

        if dataset.is_empty() {
            return Err(ModelError::empty("pipeline").into());
        }
        self.deriver.check_schema(dataset)?;

        // Stage 1: entity features.
        check_cancelled(cancel)?;
        let started = Instant::now();
        let raw = self.deriver.derive(dataset)?;
        let layout = self.deriver.layout();
        span.record(metrics::FEATURE_COUNT, layout.len());
        info!(
            feature_count = layout.len(),
            stage_duration_ms = elapsed_ms(started),
            "stage 1: derived features"
        );

        // Stage 2: standardization.
        check_cancelled(cancel)?;
        let started = Instant::now();
        let (standardizer, vectors) = Standardizer::fit_transform(&raw)?;
        info!(
            stage_duration_ms = elapsed_ms(started),
            "stage 2: standardized features"
        );

        // Stage 3: fit and score.
        check_cancelled(cancel)?;
        let started = Instant::now();
        let model = IsolationForestModel::fit(&vectors, &self.config.forest)?;
        let scores = model.score_with(&vectors, self.config.forest.parallel)?;
        span.record(metrics::SUBSAMPLE_SIZE, model.subsample_size());
        info!(
            subsample_size = model.subsample_size(),
            stage_duration_ms = elapsed_ms(started),
            "stage 3: isolation forest scored batch"
        );

        // Stage 4: labels.
        check_cancelled(cancel)?;
        let started = Instant::now();
        let scores = self.classifier.label(scores);
        let outliers = scores.outlier_count();
        span.record(metrics::OUTLIER_COUNT, outliers);
        info!(
            outlier_count = outliers,
            stage_duration_ms = elapsed_ms(started),
            "stage 4: classified records"
        );

        Ok(PipelineOutput {
            scores,
            model,
            standardizer,
            layout,
        })
    }
}

fn check_cancelled(cancel: &dyn Cancellable) -> Result<(), PipelineError> {
    if cancel.is_cancelled() {
        info!("pipeline cancelled");
        return Err(PipelineError::Cancelled);
    }
    Ok(())
}

fn elapsed_ms(started: Instant) -> u64 {
    started.elapsed().as_millis() as u64
}
