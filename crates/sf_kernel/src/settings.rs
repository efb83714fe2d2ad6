//! Mapping settings
//!
//! Settings are loaded from `SF_MAPPING_*` environment variables (after
//! reading an optional `.env` file):
//!
//! | Variable                        | Default        |
//! |---------------------------------|----------------|
//! | `SF_MAPPING_DUPLICATE_NAMES`    | `overwrite`    |
//! | `SF_MAPPING_DATE_ORDER`         | `month_first`  |
//! | `SF_MAPPING_ASSUME_TIMEZONE`    | `UTC`          |

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::debug;

use crate::error::CoreError;
use crate::remote_date::{DateOrder, RemoteDateParser};

/// What to do when two eligible fields resolve to the same external name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateNamePolicy {
    /// The later declared field replaces the earlier value in place
    #[default]
    Overwrite,
    /// Mapping fails with a duplicate-name error
    Reject,
}

/// Settings shared by the field mapper and the datetime parser
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MappingSettings {
    pub duplicate_names: DuplicateNamePolicy,
    pub date_order: DateOrder,
    /// IANA timezone used for datetime text without zone information
    pub assume_timezone: String,
}

impl Default for MappingSettings {
    fn default() -> Self {
        Self {
            duplicate_names: DuplicateNamePolicy::Overwrite,
            date_order: DateOrder::MonthFirst,
            assume_timezone: "UTC".to_string(),
        }
    }
}

impl MappingSettings {
    /// Strict settings: duplicate external names are rejected
    pub fn strict() -> Self {
        Self {
            duplicate_names: DuplicateNamePolicy::Reject,
            ..Default::default()
        }
    }

    /// Loads settings from the environment
    pub fn from_env() -> Result<Self, CoreError> {
        // A missing .env file is fine
        dotenvy::dotenv().ok();

        let settings: Self = config::Config::builder()
            .add_source(config::Environment::with_prefix("SF_MAPPING"))
            .build()?
            .try_deserialize()?;
        settings.validate()?;

        debug!(
            duplicate_names = ?settings.duplicate_names,
            date_order = ?settings.date_order,
            assume_timezone = %settings.assume_timezone,
            "Loaded mapping settings"
        );
        Ok(settings)
    }

    /// Checks that the configured timezone is known
    pub fn validate(&self) -> Result<(), CoreError> {
        self.timezone().map(|_| ())
    }

    /// Returns the parsed assumed timezone
    pub fn timezone(&self) -> Result<Tz, CoreError> {
        Tz::from_str(self.assume_timezone.trim())
            .map_err(|_| CoreError::invalid_timezone(self.assume_timezone.clone()))
    }

    /// Builds the datetime parser described by these settings
    pub fn date_parser(&self) -> Result<RemoteDateParser, CoreError> {
        Ok(RemoteDateParser::new(self.timezone()?, self.date_order))
    }
}
