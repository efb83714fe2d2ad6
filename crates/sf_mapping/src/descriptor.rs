//! Field metadata descriptors
//!
//! A descriptor sits beside a declared field and decides whether, and under
//! which external name, the field takes part in a mapping. There are two
//! variants:
//!
//! - **Field**: a plain data field
//! - **Identifier**: a field holding the id of another record, tagged with
//!   that record's type
//!
//! # Rank
//!
//! Rank `0` means the field is always eligible. A rank `k > 0` makes the field
//! eligible only when the requested threshold `r` is `0` or at least `k`:
//!
//! ```rust
//! use sf_mapping::FieldDescriptor;
//!
//! let email = FieldDescriptor::field().with_rank(2).with_external_name("Email__c");
//! assert!(!email.is_eligible(1));
//! assert!(email.is_eligible(2));
//! assert!(email.is_eligible(0));
//! assert_eq!(email.resolved_name("Email"), "Email__c");
//! ```

use serde::{Deserialize, Serialize};
use sf_kernel::RecordTypeRef;

/// Attributes shared by both descriptor variants
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldAttributes {
    /// Excluded from every mapping
    pub ignore: bool,

    /// Excluded from update payloads. Carried for the transport layer; the
    /// mapper itself never reads it.
    pub ignore_on_update: bool,

    /// Remote field name, if it differs from the declared name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_name: Option<String>,

    /// Precedence tier; 0 means always eligible
    pub rank: u32,
}

impl FieldAttributes {
    /// Returns the external name if set and not blank, else `declared`
    pub fn resolved_name<'a>(&'a self, declared: &'a str) -> &'a str {
        match self.external_name.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => declared,
        }
    }

    /// Returns true if the field takes part in a mapping at `rank`
    ///
    /// A field of rank `0` is eligible at every threshold.
    pub fn is_eligible(&self, rank: u32) -> bool {
        !self.ignore && (rank == 0 || self.rank <= rank)
    }
}

/// Per-field mapping metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldDescriptor {
    /// A plain data field
    Field(FieldAttributes),

    /// A reference to another record of `linked_type`
    Identifier {
        #[serde(flatten)]
        attributes: FieldAttributes,
        linked_type: RecordTypeRef,
    },
}

impl FieldDescriptor {
    /// Creates a plain field descriptor with default attributes
    pub fn field() -> Self {
        FieldDescriptor::Field(FieldAttributes::default())
    }

    /// Creates an identifier descriptor pointing at `linked_type`
    pub fn identifier(linked_type: impl Into<RecordTypeRef>) -> Self {
        FieldDescriptor::Identifier {
            attributes: FieldAttributes::default(),
            linked_type: linked_type.into(),
        }
    }

    /// Marks the field as excluded from every mapping
    pub fn ignored(mut self) -> Self {
        self.attributes_mut().ignore = true;
        self
    }

    /// Marks the field as excluded from update payloads
    pub fn ignored_on_update(mut self) -> Self {
        self.attributes_mut().ignore_on_update = true;
        self
    }

    /// Sets the remote field name
    pub fn with_external_name(mut self, name: impl Into<String>) -> Self {
        self.attributes_mut().external_name = Some(name.into());
        self
    }

    /// Sets the precedence tier
    pub fn with_rank(mut self, rank: u32) -> Self {
        self.attributes_mut().rank = rank;
        self
    }

    pub fn attributes(&self) -> &FieldAttributes {
        match self {
            FieldDescriptor::Field(attributes) => attributes,
            FieldDescriptor::Identifier { attributes, .. } => attributes,
        }
    }

    fn attributes_mut(&mut self) -> &mut FieldAttributes {
        match self {
            FieldDescriptor::Field(attributes) => attributes,
            FieldDescriptor::Identifier { attributes, .. } => attributes,
        }
    }

    /// Returns the linked record type, for identifier descriptors only
    pub fn linked_type(&self) -> Option<&RecordTypeRef> {
        match self {
            FieldDescriptor::Field(_) => None,
            FieldDescriptor::Identifier { linked_type, .. } => Some(linked_type),
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self, FieldDescriptor::Identifier { .. })
    }

    pub fn is_ignored(&self) -> bool {
        self.attributes().ignore
    }

    pub fn is_ignored_on_update(&self) -> bool {
        self.attributes().ignore_on_update
    }

    pub fn rank(&self) -> u32 {
        self.attributes().rank
    }

    pub fn external_name(&self) -> Option<&str> {
        self.attributes().external_name.as_deref()
    }

    /// See [`FieldAttributes::resolved_name`]
    pub fn resolved_name<'a>(&'a self, declared: &'a str) -> &'a str {
        self.attributes().resolved_name(declared)
    }

    /// See [`FieldAttributes::is_eligible`]
    pub fn is_eligible(&self, rank: u32) -> bool {
        self.attributes().is_eligible(rank)
    }
}

impl Default for FieldDescriptor {
    fn default() -> Self {
        Self::field()
    }
}
