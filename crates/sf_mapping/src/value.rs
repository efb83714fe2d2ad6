//! Field values read off records
//!
//! Every value is sent to the remote service as a string. `Null` renders as
//! the empty string so that a null field still produces an entry.
//!
//! Timestamps are not a variant here: callers encode them with
//! [`sf_kernel::remote_date`] and pass the resulting text.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single field value
///
/// Deserialized from JSON, a value is always `Null`, `Boolean`, `Integer`,
/// `Double` or `Text`: a JSON number is read as `f64`, so `48000.50` renders
/// as `"48000.5"`. Exact amounts in record documents must be sent as JSON
/// strings (`"48000.50"`), which render unchanged. `Decimal` and `Date` are
/// built through `From` and serialize as strings, so they survive a round trip
/// with the same rendering.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    #[default]
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    Decimal(Decimal),
    Date(NaiveDate),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => Ok(()),
            FieldValue::Boolean(value) => write!(f, "{}", value),
            FieldValue::Integer(value) => write!(f, "{}", value),
            FieldValue::Double(value) => write!(f, "{}", value),
            FieldValue::Text(value) => f.write_str(value),
            FieldValue::Decimal(value) => write!(f, "{}", value),
            FieldValue::Date(value) => write!(f, "{}", value.format("%Y-%m-%d")),
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        FieldValue::Text(value.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Double(value)
    }
}

impl From<Decimal> for FieldValue {
    fn from(value: Decimal) -> Self {
        FieldValue::Decimal(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::Date(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_null_renders_empty() {
        assert_eq!(FieldValue::Null.to_string(), "");
        assert_eq!(FieldValue::from(None::<String>).to_string(), "");
    }

    #[test]
    fn test_scalar_rendering() {
        assert_eq!(FieldValue::from(true).to_string(), "true");
        assert_eq!(FieldValue::from(42).to_string(), "42");
        assert_eq!(FieldValue::from(2.5).to_string(), "2.5");
        assert_eq!(FieldValue::from(dec!(1250.50)).to_string(), "1250.50");
        assert_eq!(
            FieldValue::from(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()).to_string(),
            "2024-03-05"
        );
    }

    #[test]
    fn test_optional_values() {
        assert_eq!(FieldValue::from(Some("Ada")), FieldValue::Text("Ada".to_string()));
        assert!(FieldValue::from(None::<i64>).is_null());
    }

    #[test]
    fn test_json_values_deserialize_to_scalars() {
        let values: Vec<FieldValue> =
            serde_json::from_str(r#"[null, true, 7, 1.5, "007"]"#).unwrap();
        assert_eq!(
            values,
            vec![
                FieldValue::Null,
                FieldValue::Boolean(true),
                FieldValue::Integer(7),
                FieldValue::Double(1.5),
                FieldValue::Text("007".to_string()),
            ]
        );
    }
}
