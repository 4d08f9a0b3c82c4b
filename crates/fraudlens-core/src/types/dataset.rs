//! Datasets: an ordered batch of records validated against one schema.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::record::{FieldType, Record};
use crate::constants::ENTITY_FIELD;
use crate::errors::SchemaError;

/// Ordered set of declared fields.
///
/// The reserved `entity` field is always present as a categorical field
/// and does not need to be declared.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    fields: Vec<(String, FieldType)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field. Redeclaring a name replaces its type.
    pub fn with_field(mut self, name: impl Into<String>, field_type: FieldType) -> Self {
        let name = name.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = field_type,
            None => self.fields.push((name, field_type)),
        }
        self
    }

    /// Infer a schema from a record's fields, sorted by name.
    pub fn infer(record: &Record) -> Self {
        let mut fields: Vec<(String, FieldType)> = record
            .fields()
            .map(|(name, value)| (name.to_string(), value.field_type()))
            .collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        Self { fields }
    }

    pub fn field_type(&self, name: &str) -> Option<FieldType> {
        if name == ENTITY_FIELD {
            return Some(FieldType::Categorical);
        }
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, t)| *t)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.field_type(name).is_some()
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, FieldType)> {
        self.fields.iter().map(|(n, t)| (n.as_str(), *t))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field, failing with `MissingField` if undeclared.
    pub fn require(&self, name: &str) -> Result<FieldType, SchemaError> {
        self.field_type(name).ok_or_else(|| SchemaError::MissingField {
            field: name.to_string(),
        })
    }

    /// Look up a field and check its declared type.
    pub fn require_typed(&self, name: &str, expected: FieldType) -> Result<(), SchemaError> {
        let actual = self.require(name)?;
        if actual != expected {
            return Err(SchemaError::TypeMismatch {
                field: name.to_string(),
                expected,
                actual,
            });
        }
        Ok(())
    }

    /// Check that `record` carries every declared field with the declared type.
    pub fn check(&self, record: &Record) -> Result<(), SchemaError> {
        for (name, expected) in &self.fields {
            match record.field(name) {
                None => {
                    return Err(SchemaError::InconsistentRecord {
                        record_id: record.id().to_string(),
                        field: name.clone(),
                    })
                }
                Some(value) if value.field_type() != *expected => {
                    return Err(SchemaError::TypeMismatch {
                        field: name.clone(),
                        expected: *expected,
                        actual: value.field_type(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// An ordered batch of records sharing a schema.
///
/// Deserialization goes through [`Dataset::new`], so a decoded dataset
/// satisfies the same checks as a constructed one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DatasetParts")]
pub struct Dataset {
    schema: Schema,
    records: Vec<Record>,
}

#[derive(Deserialize)]
struct DatasetParts {
    schema: Schema,
    records: Vec<Record>,
}

impl TryFrom<DatasetParts> for Dataset {
    type Error = SchemaError;

    fn try_from(parts: DatasetParts) -> Result<Self, Self::Error> {
        Self::new(parts.schema, parts.records)
    }
}

impl Dataset {
    /// Build a dataset, validating every record against `schema`.
    /// Record ids must be unique within the batch.
    pub fn new(schema: Schema, records: Vec<Record>) -> Result<Self, SchemaError> {
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for record in &records {
            schema.check(record)?;
            if !seen.insert(record.id()) {
                return Err(SchemaError::DuplicateRecordId {
                    record_id: record.id().to_string(),
                });
            }
        }
        Ok(Self { schema, records })
    }

    /// Build a dataset whose schema is inferred from the first record.
    /// An empty record list yields an empty dataset with an empty schema.
    pub fn infer(records: Vec<Record>) -> Result<Self, SchemaError> {
        let schema = records.first().map(Schema::infer).unwrap_or_default();
        Self::new(schema, records)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
