//! Records: one ingested event, immutable once built.

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::ENTITY_FIELD;

/// Opaque record identifier.
pub type RecordId = String;

/// Stable entity identifier (e.g. a user id).
pub type EntityId = String;

/// Declared type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Numeric,
    Categorical,
}

/// A single field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Numeric(f64),
    Categorical(String),
}

impl FieldValue {
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Numeric(_) => FieldType::Numeric,
            Self::Categorical(_) => FieldType::Categorical,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Numeric(v) => Some(*v),
            Self::Categorical(_) => None,
        }
    }

    /// Textual form, used when a value acts as a grouping key.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            Self::Numeric(v) => Cow::Owned(v.to_string()),
            Self::Categorical(s) => Cow::Borrowed(s.as_str()),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Numeric(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::Categorical(v.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::Categorical(v)
    }
}

/// One event: an id, the entity it belongs to, and its named fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    id: RecordId,
    entity: EntityId,
    #[serde(default)]
    fields: FxHashMap<String, FieldValue>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, entity: impl Into<EntityId>) -> Self {
        Self {
            id: id.into(),
            entity: entity.into(),
            fields: FxHashMap::default(),
        }
    }

    /// Builder-style field insertion. Records are immutable once handed
    /// to a [`Dataset`](super::Dataset).
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Grouping key for `field`. The reserved name `entity` resolves to the
    /// record's own entity id; anything else resolves to the field value.
    pub fn key_of(&self, field: &str) -> Option<Cow<'_, str>> {
        if field == ENTITY_FIELD {
            return Some(Cow::Borrowed(self.entity.as_str()));
        }
        self.fields.get(field).map(FieldValue::as_key)
    }
}
