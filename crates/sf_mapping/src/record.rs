//! Record declarations
//!
//! A record type declares its fields once, in declaration order, as a table
//! of [`FieldDef`]s. Each entry names the field, optionally attaches a
//! [`FieldDescriptor`], and supplies an accessor that reads the value off an
//! instance.
//!
//! ```rust
//! use sf_kernel::RecordTypeRef;
//! use sf_mapping::{FieldDef, FieldDescriptor, Record};
//!
//! struct Lead {
//!     id: Option<String>,
//!     company: String,
//!     scratch: String,
//! }
//!
//! impl Record for Lead {
//!     fn record_type() -> RecordTypeRef {
//!         RecordTypeRef::new("Lead")
//!     }
//!
//!     fn fields() -> Vec<FieldDef<Self>> {
//!         vec![
//!             FieldDef::new("Id", |l: &Lead| l.id.clone().into())
//!                 .described(FieldDescriptor::identifier("Lead")),
//!             FieldDef::new("Company", |l: &Lead| l.company.clone().into())
//!                 .described(FieldDescriptor::field()),
//!             // No descriptor: never mapped
//!             FieldDef::new("Scratch", |l: &Lead| l.scratch.clone().into()),
//!         ]
//!     }
//! }
//!
//! let names = sf_mapping::eligible_field_names::<Lead>(0);
//! assert_eq!(names, vec!["Id", "Company"]);
//! ```

use std::fmt;

use sf_kernel::RecordTypeRef;

use crate::descriptor::FieldDescriptor;
use crate::value::FieldValue;

/// A declared field as seen by the mapper
pub trait FieldSlot {
    /// The name the field is declared under
    fn declared_name(&self) -> &str;

    /// The field's descriptor; fields without one are never mapped
    fn descriptor(&self) -> Option<&FieldDescriptor>;
}

/// A statically declared record type
pub trait Record: Sized {
    /// The remote record type this Rust type mirrors
    fn record_type() -> RecordTypeRef;

    /// The declared fields, in declaration order
    ///
    /// Called on every mapping operation; nothing is cached between calls.
    fn fields() -> Vec<FieldDef<Self>>;
}

/// A single entry of a record's declaration table
pub struct FieldDef<R> {
    name: &'static str,
    descriptor: Option<FieldDescriptor>,
    accessor: fn(&R) -> FieldValue,
}

impl<R> FieldDef<R> {
    /// Declares a field without a descriptor
    pub fn new(name: &'static str, accessor: fn(&R) -> FieldValue) -> Self {
        Self {
            name,
            descriptor: None,
            accessor,
        }
    }

    /// Attaches the field's descriptor, replacing any previous one
    pub fn described(mut self, descriptor: FieldDescriptor) -> Self {
        self.descriptor = Some(descriptor);
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Reads this field's value off `record`
    pub fn read(&self, record: &R) -> FieldValue {
        (self.accessor)(record)
    }
}

impl<R> FieldSlot for FieldDef<R> {
    fn declared_name(&self) -> &str {
        self.name
    }

    fn descriptor(&self) -> Option<&FieldDescriptor> {
        self.descriptor.as_ref()
    }
}

impl<R> fmt::Debug for FieldDef<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDef")
            .field("name", &self.name)
            .field("descriptor", &self.descriptor)
            .finish_non_exhaustive()
    }
}
