//! Mapping errors
//!
//! Most mapping operations cannot fail: no eligible fields simply gives an
//! empty result. Errors are reserved for caller misuse (a record read through
//! the wrong schema), the strict duplicate-name policy, and malformed schema
//! documents.

use sf_kernel::{CoreError, RecordTypeRef};
use thiserror::Error;

/// Errors that can occur while mapping records
#[derive(Debug, Error)]
pub enum MappingError {
    /// A record was read through the schema of a different record type
    #[error("Record type mismatch: expected {expected}, got {actual}")]
    RecordTypeMismatch {
        expected: RecordTypeRef,
        actual: RecordTypeRef,
    },

    /// Two eligible fields resolved to the same external name
    #[error("Duplicate external field name {name} on {record_type}")]
    DuplicateExternalName {
        record_type: RecordTypeRef,
        name: String,
    },

    /// A schema or record document could not be parsed
    #[error("Invalid schema document: {0}")]
    Schema(#[from] serde_json::Error),

    /// Settings could not be loaded
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl MappingError {
    /// Creates a RecordTypeMismatch error
    pub fn mismatch(expected: &RecordTypeRef, actual: &RecordTypeRef) -> Self {
        MappingError::RecordTypeMismatch {
            expected: expected.clone(),
            actual: actual.clone(),
        }
    }

    /// Creates a DuplicateExternalName error
    pub fn duplicate_name(record_type: &RecordTypeRef, name: impl Into<String>) -> Self {
        MappingError::DuplicateExternalName {
            record_type: record_type.clone(),
            name: name.into(),
        }
    }
}
