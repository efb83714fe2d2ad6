//! Runtime schemas
//!
//! Not every record type is known at compile time. An [`ObjectSchema`] holds
//! the same declaration table as a [`Record`] impl, but as data (typically
//! loaded from JSON), and a [`DynamicRecord`] holds field values by name.
//!
//! ```json
//! {
//!   "name": "Contact",
//!   "fields": [
//!     { "name": "Id", "descriptor": { "kind": "identifier", "linked_type": "Contact" } },
//!     { "name": "Email", "descriptor": { "kind": "field", "rank": 2, "external_name": "Email__c" } },
//!     { "name": "Scratch" }
//!   ]
//! }
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sf_kernel::RecordTypeRef;

use crate::descriptor::FieldDescriptor;
use crate::error::MappingError;
use crate::mapper::{schema_ops, FieldMap, IdentifierMap};
use crate::record::{FieldSlot, Record};
use crate::value::FieldValue;

/// A declared field of a runtime schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<FieldDescriptor>,
}

impl FieldSlot for SchemaField {
    fn declared_name(&self) -> &str {
        &self.name
    }

    fn descriptor(&self) -> Option<&FieldDescriptor> {
        self.descriptor.as_ref()
    }
}

/// Declaration table of a record type, held as data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSchema {
    pub name: RecordTypeRef,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

impl ObjectSchema {
    pub fn new(name: impl Into<RecordTypeRef>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Snapshots the declaration table of a typed record
    pub fn of<R: Record>() -> Self {
        Self {
            name: R::record_type(),
            fields: R::fields()
                .iter()
                .map(|field| SchemaField {
                    name: field.name().to_string(),
                    descriptor: field.descriptor().cloned(),
                })
                .collect(),
        }
    }

    /// Parses a schema document
    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Appends a described field
    pub fn with_field(mut self, name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            descriptor: Some(descriptor),
        });
        self
    }

    /// Appends a field without a descriptor
    pub fn with_undescribed_field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(SchemaField {
            name: name.into(),
            descriptor: None,
        });
        self
    }

    pub fn field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn eligible_field_names(&self, rank: u32) -> Vec<String> {
        schema_ops::eligible_field_names(self, rank)
    }

    /// Reads `record` through this schema; fails on a record of another type
    pub fn field_values(&self, record: &DynamicRecord, rank: u32) -> Result<FieldMap, MappingError> {
        schema_ops::field_values(self, record, rank)
    }

    pub fn identifier_fields_of_type(
        &self,
        record: &DynamicRecord,
        filter: Option<&RecordTypeRef>,
    ) -> Result<IdentifierMap, MappingError> {
        schema_ops::identifier_fields_of_type(self, record, filter)
    }

    pub(crate) fn check_record(&self, record: &DynamicRecord) -> Result<(), MappingError> {
        if record.record_type != self.name {
            return Err(MappingError::mismatch(&self.name, &record.record_type));
        }
        Ok(())
    }
}

/// A record instance whose fields are held by name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicRecord {
    pub record_type: RecordTypeRef,
    #[serde(default)]
    pub values: IndexMap<String, FieldValue>,
}

impl DynamicRecord {
    pub fn new(record_type: impl Into<RecordTypeRef>) -> Self {
        Self {
            record_type: record_type.into(),
            values: IndexMap::new(),
        }
    }

    /// Parses a record document
    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    /// String form of a field; missing and null fields are empty
    pub(crate) fn value_string(&self, name: &str) -> String {
        self.get(name).map(ToString::to_string).unwrap_or_default()
    }
}
