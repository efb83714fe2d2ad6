//! Remote Field Mapping
//!
//! This crate decides, per record type, which fields take part in a remote
//! operation and under which external name, and renders their values as the
//! flat string map the remote service expects.
//!
//! # Model
//!
//! - **Record**: a Rust type that declares its fields once, in order, through
//!   [`Record::fields`]
//! - **Field descriptor**: per-field metadata (ignore, ignore-on-update,
//!   external name, rank, and for identifiers the linked record type)
//! - **Rank**: `0` selects every non-ignored field; a threshold `r > 0`
//!   selects rank-0 fields plus fields ranked `1..=r`
//!
//! # Examples
//!
//! ```rust
//! use sf_kernel::RecordTypeRef;
//! use sf_mapping::{field_values, FieldDef, FieldDescriptor, Record};
//!
//! struct Contact {
//!     id: Option<String>,
//!     name: String,
//!     email: Option<String>,
//! }
//!
//! impl Record for Contact {
//!     fn record_type() -> RecordTypeRef {
//!         RecordTypeRef::new("Contact")
//!     }
//!
//!     fn fields() -> Vec<FieldDef<Self>> {
//!         vec![
//!             FieldDef::new("Id", |c: &Contact| c.id.clone().into())
//!                 .described(FieldDescriptor::identifier("Contact")),
//!             FieldDef::new("Name", |c: &Contact| c.name.clone().into())
//!                 .described(FieldDescriptor::field()),
//!             FieldDef::new("Email", |c: &Contact| c.email.clone().into())
//!                 .described(FieldDescriptor::field().with_rank(2).with_external_name("Email__c")),
//!         ]
//!     }
//! }
//!
//! let contact = Contact { id: None, name: "Ada".to_string(), email: None };
//! let values = field_values(&contact, 2);
//!
//! assert_eq!(values.get("Id").map(String::as_str), Some(""));
//! assert_eq!(values.get("Name").map(String::as_str), Some("Ada"));
//! assert_eq!(values.get("Email__c").map(String::as_str), Some(""));
//! ```

pub mod descriptor;
pub mod value;
pub mod record;
pub mod schema;
pub mod mapper;
pub mod error;

pub use descriptor::{FieldAttributes, FieldDescriptor};
pub use value::FieldValue;
pub use record::{FieldDef, FieldSlot, Record};
pub use schema::{DynamicRecord, ObjectSchema, SchemaField};
pub use mapper::{
    eligible_field_names, field_values, identifier_fields_of_type, to_json_payload,
    FieldMap, FieldMapper, IdentifierMap,
};
pub use error::MappingError;
