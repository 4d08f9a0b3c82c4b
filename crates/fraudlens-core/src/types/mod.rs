//! Data model shared by every pipeline stage.

pub mod dataset;
pub mod feature_vector;
pub mod record;
pub mod score_result;

pub use dataset::{Dataset, Schema};
pub use feature_vector::FeatureVector;
pub use record::{EntityId, FieldType, FieldValue, Record, RecordId};
pub use score_result::{RecordScore, ScoreResult};
