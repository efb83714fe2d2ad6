//! Record type references
//!
//! A record type is identified on the remote service by its object API name
//! (e.g. `Contact`, `Account`, `Invoice__c`). Identifier fields carry one of
//! these references to name the record type they point at.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Reference to a remote record type, compared by exact API name
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordTypeRef(Cow<'static, str>);

impl RecordTypeRef {
    /// Creates a reference from a static API name
    pub const fn new(api_name: &'static str) -> Self {
        Self(Cow::Borrowed(api_name))
    }

    /// Creates a reference from a runtime API name
    pub fn owned(api_name: impl Into<String>) -> Self {
        Self(Cow::Owned(api_name.into()))
    }

    /// Returns the API name
    pub fn api_name(&self) -> &str {
        &self.0
    }

    /// Returns true if this is a custom object (`__c` suffix)
    pub fn is_custom(&self) -> bool {
        self.0.ends_with("__c")
    }
}

impl fmt::Display for RecordTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RecordTypeRef {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CoreError::validation("record type name must not be empty"));
        }
        Ok(Self::owned(trimmed))
    }
}

impl From<&'static str> for RecordTypeRef {
    fn from(api_name: &'static str) -> Self {
        Self::new(api_name)
    }
}

impl PartialEq<str> for RecordTypeRef {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for RecordTypeRef {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
