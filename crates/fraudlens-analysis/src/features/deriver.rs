//! FeatureDeriver: raw records → per-entity feature vectors.

use fraudlens_core::config::FeatureConfig;
use fraudlens_core::errors::SchemaError;
use fraudlens_core::types::{Dataset, EntityId, FeatureVector, FieldType, Record};
use rustc_hash::FxHashMap;
use tracing::debug;

use super::entity_stats::{EntityAccumulator, EntityStats};
use super::layout::{FeatureLayout, FEATURE_COUNT};

/// Derives `[value, entity_count, entity_mean, entity_std, value_zscore]`
/// for every record of a batch. Entity statistics live only for the
/// duration of one [`derive`](Self::derive) call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureDeriver {
    entity_field: String,
    value_field: String,
}

impl FeatureDeriver {
    pub fn new(entity_field: impl Into<String>, value_field: impl Into<String>) -> Self {
        Self {
            entity_field: entity_field.into(),
            value_field: value_field.into(),
        }
    }

    pub fn from_config(config: &FeatureConfig) -> Self {
        Self::new(
            config.effective_entity_field(),
            config.effective_value_field(),
        )
    }

    pub fn entity_field(&self) -> &str {
        &self.entity_field
    }

    pub fn value_field(&self) -> &str {
        &self.value_field
    }

    pub fn layout(&self) -> FeatureLayout {
        FeatureLayout::for_value_field(&self.value_field)
    }

    /// Fail with `SchemaError` unless the dataset declares the entity field
    /// and a numeric value field.
    pub fn check_schema(&self, dataset: &Dataset) -> Result<(), SchemaError> {
        dataset.schema().require(&self.entity_field)?;
        dataset
            .schema()
            .require_typed(&self.value_field, FieldType::Numeric)
    }

    /// Pass 1: per-entity count, mean, and sample std over the batch.
    pub fn entity_stats(
        &self,
        dataset: &Dataset,
    ) -> Result<FxHashMap<EntityId, EntityStats>, SchemaError> {
        self.check_schema(dataset)?;

        let mut accumulators: FxHashMap<EntityId, EntityAccumulator> = FxHashMap::default();
        for record in dataset {
            let (entity, value) = self.extract(record)?;
            accumulators.entry(entity).or_default().push(value);
        }

        Ok(accumulators
            .into_iter()
            .map(|(entity, acc)| (entity, acc.finish()))
            .collect())
    }

    /// Derive one feature vector per record, in dataset order.
    pub fn derive(&self, dataset: &Dataset) -> Result<Vec<FeatureVector>, SchemaError> {
        let stats = self.entity_stats(dataset)?;

        // Pass 2: per-record lookup.
        let mut vectors = Vec::with_capacity(dataset.len());
        for record in dataset {
            let (entity, value) = self.extract(record)?;
            let Some(s) = stats.get(&entity) else {
                return Err(SchemaError::InconsistentRecord {
                    record_id: record.id().to_string(),
                    field: self.entity_field.clone(),
                });
            };

            let mut values = vec![0.0; FEATURE_COUNT];
            values[super::layout::VALUE] = value;
            values[super::layout::ENTITY_COUNT] = s.count as f64;
            values[super::layout::ENTITY_MEAN] = s.mean;
            values[super::layout::ENTITY_STD] = s.std;
            values[super::layout::VALUE_ZSCORE] = s.zscore(value);
            vectors.push(FeatureVector::new(record.id(), values));
        }

        debug!(
            batch_size = dataset.len(),
            entity_count = stats.len(),
            "derived entity features"
        );
        Ok(vectors)
    }

    fn extract(&self, record: &Record) -> Result<(EntityId, f64), SchemaError> {
        let inconsistent = |field: &str| SchemaError::InconsistentRecord {
            record_id: record.id().to_string(),
            field: field.to_string(),
        };
        let entity = record
            .key_of(&self.entity_field)
            .ok_or_else(|| inconsistent(&self.entity_field))?
            .into_owned();
        let value = record
            .field(&self.value_field)
            .and_then(|v| v.as_f64())
            .ok_or_else(|| inconsistent(&self.value_field))?;
        Ok((entity, value))
    }
}
