//! Pre-built Test Fixtures
//!
//! Record types mirroring a few standard remote objects, plus ready-to-use
//! instances. `Contact` is deliberately small so that rank expectations stay
//! easy to read; `Opportunity` exercises every value kind and descriptor flag.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use sf_kernel::{to_remote_string, RecordTypeRef};
use sf_mapping::{FieldDef, FieldDescriptor, Record};

pub const CONTACT: RecordTypeRef = RecordTypeRef::new("Contact");
pub const ACCOUNT: RecordTypeRef = RecordTypeRef::new("Account");
pub const OPPORTUNITY: RecordTypeRef = RecordTypeRef::new("Opportunity");

/// Contact: `Id`, `Name`, `Email` (rank 2, `Email__c`), `InternalNotes` (ignored)
#[derive(Debug, Clone, PartialEq)]
pub struct Contact {
    pub id: Option<String>,
    pub name: String,
    pub email: Option<String>,
    pub internal_notes: Option<String>,
    /// Local-only state, declared without a descriptor
    pub sync_token: u32,
}

impl Record for Contact {
    fn record_type() -> RecordTypeRef {
        CONTACT
    }

    fn fields() -> Vec<FieldDef<Self>> {
        vec![
            FieldDef::new("Id", |c: &Contact| c.id.clone().into())
                .described(FieldDescriptor::identifier(CONTACT)),
            FieldDef::new("Name", |c: &Contact| c.name.clone().into())
                .described(FieldDescriptor::field()),
            FieldDef::new("Email", |c: &Contact| c.email.clone().into())
                .described(FieldDescriptor::field().with_rank(2).with_external_name("Email__c")),
            FieldDef::new("InternalNotes", |c: &Contact| c.internal_notes.clone().into())
                .described(FieldDescriptor::field().ignored()),
            FieldDef::new("SyncToken", |c: &Contact| c.sync_token.into()),
        ]
    }
}

/// Account with a self-referencing parent identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id: Option<String>,
    pub parent_id: Option<String>,
    pub name: String,
    pub annual_revenue: Option<Decimal>,
    pub website: Option<String>,
}

impl Record for Account {
    fn record_type() -> RecordTypeRef {
        ACCOUNT
    }

    fn fields() -> Vec<FieldDef<Self>> {
        vec![
            FieldDef::new("Id", |a: &Account| a.id.clone().into())
                .described(FieldDescriptor::identifier(ACCOUNT)),
            FieldDef::new("ParentId", |a: &Account| a.parent_id.clone().into())
                .described(FieldDescriptor::identifier(ACCOUNT).with_rank(2)),
            FieldDef::new("Name", |a: &Account| a.name.clone().into())
                .described(FieldDescriptor::field()),
            FieldDef::new("AnnualRevenue", |a: &Account| a.annual_revenue.into())
                .described(FieldDescriptor::field().with_rank(1)),
            FieldDef::new("Website", |a: &Account| a.website.clone().into())
                .described(FieldDescriptor::field().with_rank(2)),
        ]
    }
}

/// Opportunity linking an account and a primary contact
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub id: Option<String>,
    pub account_id: Option<String>,
    pub primary_contact_id: Option<String>,
    pub legacy_owner_id: Option<String>,
    pub name: String,
    pub stage: String,
    pub amount: Option<Decimal>,
    pub close_date: Option<NaiveDate>,
    pub probability: Option<f64>,
    pub is_private: bool,
    pub last_activity: Option<NaiveDateTime>,
    pub created: Option<NaiveDateTime>,
}

impl Record for Opportunity {
    fn record_type() -> RecordTypeRef {
        OPPORTUNITY
    }

    fn fields() -> Vec<FieldDef<Self>> {
        vec![
            FieldDef::new("Id", |o: &Opportunity| o.id.clone().into())
                .described(FieldDescriptor::identifier(OPPORTUNITY)),
            FieldDef::new("AccountId", |o: &Opportunity| o.account_id.clone().into())
                .described(FieldDescriptor::identifier(ACCOUNT).with_rank(1)),
            FieldDef::new("PrimaryContactId", |o: &Opportunity| o.primary_contact_id.clone().into())
                .described(
                    FieldDescriptor::identifier(CONTACT)
                        .with_rank(1)
                        .with_external_name("Primary_Contact__c"),
                ),
            FieldDef::new("LegacyOwnerId", |o: &Opportunity| o.legacy_owner_id.clone().into())
                .described(FieldDescriptor::identifier(CONTACT).ignored()),
            FieldDef::new("Name", |o: &Opportunity| o.name.clone().into())
                .described(FieldDescriptor::field()),
            FieldDef::new("StageName", |o: &Opportunity| o.stage.clone().into())
                .described(FieldDescriptor::field()),
            FieldDef::new("Amount", |o: &Opportunity| o.amount.into())
                .described(FieldDescriptor::field().with_rank(1)),
            FieldDef::new("CloseDate", |o: &Opportunity| o.close_date.into())
                .described(FieldDescriptor::field().with_rank(1)),
            FieldDef::new("Probability", |o: &Opportunity| o.probability.into())
                .described(FieldDescriptor::field().ignored()),
            FieldDef::new("IsPrivate", |o: &Opportunity| o.is_private.into())
                .described(FieldDescriptor::field().with_rank(2)),
            FieldDef::new("LastActivity", |o: &Opportunity| {
                to_remote_string(o.last_activity).into()
            })
            .described(
                FieldDescriptor::field()
                    .with_rank(2)
                    .with_external_name("Last_Activity__c"),
            ),
            FieldDef::new("CreatedDate", |o: &Opportunity| to_remote_string(o.created).into())
                .described(FieldDescriptor::field().with_rank(3).ignored_on_update()),
        ]
    }
}

/// Fixture for record instances
pub struct RecordFixtures;

impl RecordFixtures {
    /// A persisted contact with every field populated
    pub fn contact() -> Contact {
        Contact {
            id: Some("003000000000001AAA".to_string()),
            name: "Ada Lovelace".to_string(),
            email: Some("ada@example.com".to_string()),
            internal_notes: Some("met at conference".to_string()),
            sync_token: 7,
        }
    }

    /// A contact that has not been created remotely yet
    pub fn new_contact() -> Contact {
        Contact {
            id: None,
            email: None,
            ..Self::contact()
        }
    }

    pub fn account() -> Account {
        Account {
            id: Some("001000000000001AAA".to_string()),
            parent_id: None,
            name: "Analytical Engines Ltd".to_string(),
            annual_revenue: Some(dec!(1250000.00)),
            website: Some("https://engines.example.com".to_string()),
        }
    }

    pub fn opportunity() -> Opportunity {
        Opportunity {
            id: Some("006000000000001AAA".to_string()),
            account_id: Some("001000000000001AAA".to_string()),
            primary_contact_id: Some("003000000000001AAA".to_string()),
            legacy_owner_id: Some("003000000000009AAA".to_string()),
            name: "Difference Engine Upgrade".to_string(),
            stage: "Prospecting".to_string(),
            amount: Some(dec!(48000.50)),
            close_date: NaiveDate::from_ymd_opt(2024, 6, 30),
            probability: Some(0.4),
            is_private: false,
            last_activity: NaiveDate::from_ymd_opt(2024, 3, 5)
                .and_then(|d| d.and_hms_opt(14, 30, 0)),
            created: NaiveDate::from_ymd_opt(2024, 1, 2).and_then(|d| d.and_hms_opt(9, 0, 0)),
        }
    }
}
