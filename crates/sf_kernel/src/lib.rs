//! Remote Mapping Kernel - Foundational types for remote field mapping
//!
//! This crate provides the building blocks shared by the mapping layer:
//! - Record type references naming remote objects
//! - The remote datetime codec (canonical `YYYY-MM-DDTHH:mm:ssZ` strings)
//! - Mapping settings loaded from the environment

pub mod record_type;
pub mod remote_date;
pub mod settings;
pub mod error;

pub use record_type::RecordTypeRef;
pub use remote_date::{
    format_remote, from_remote_string, to_remote_string, DateOrder, RemoteDateParser, WallClock,
    REMOTE_DATETIME_FORMAT,
};
pub use settings::{DuplicateNamePolicy, MappingSettings};
pub use error::CoreError;
