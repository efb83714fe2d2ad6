//! Test Data Builders
//!
//! Builder patterns for fixture records. Unset text fields are filled with
//! fake data so that tests only spell out what they assert on.

use fake::faker::company::en::CompanyName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;

use crate::fixtures::{Account, Contact};

/// Builder for constructing test contacts
pub struct ContactBuilder {
    id: Option<String>,
    name: String,
    email: Option<String>,
    internal_notes: Option<String>,
    sync_token: u32,
}

impl Default for ContactBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactBuilder {
    /// Creates a new builder for an unsaved contact with a fake name and email
    pub fn new() -> Self {
        Self {
            id: None,
            name: Name().fake(),
            email: Some(SafeEmail().fake()),
            internal_notes: None,
            sync_token: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn with_internal_notes(mut self, notes: impl Into<String>) -> Self {
        self.internal_notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Contact {
        Contact {
            id: self.id,
            name: self.name,
            email: self.email,
            internal_notes: self.internal_notes,
            sync_token: self.sync_token,
        }
    }
}

/// Builder for constructing test accounts
pub struct AccountBuilder {
    id: Option<String>,
    parent_id: Option<String>,
    name: String,
    annual_revenue: Option<Decimal>,
    website: Option<String>,
}

impl Default for AccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountBuilder {
    /// Creates a new builder for an unsaved account with a fake company name
    pub fn new() -> Self {
        Self {
            id: None,
            parent_id: None,
            name: CompanyName().fake(),
            annual_revenue: None,
            website: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn with_annual_revenue(mut self, revenue: Decimal) -> Self {
        self.annual_revenue = Some(revenue);
        self
    }

    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = Some(website.into());
        self
    }

    pub fn build(self) -> Account {
        Account {
            id: self.id,
            parent_id: self.parent_id,
            name: self.name,
            annual_revenue: self.annual_revenue,
            website: self.website,
        }
    }
}
