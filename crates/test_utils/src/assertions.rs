//! Custom Test Assertions
//!
//! Assertion helpers for mapping outputs that print the whole mapping on
//! failure instead of a single mismatched entry.

use sf_mapping::{FieldMap, IdentifierMap};

/// Asserts that a field mapping holds exactly `expected`, in order
///
/// # Panics
///
/// Panics if keys, values or their order differ
pub fn assert_field_map_eq(actual: &FieldMap, expected: &[(&str, &str)]) {
    let actual_entries: Vec<(&str, &str)> = actual
        .iter()
        .map(|(name, value)| (name.as_str(), value.as_str()))
        .collect();
    assert_eq!(
        actual_entries, expected,
        "Field mapping mismatch: actual={:?}, expected={:?}",
        actual, expected
    );
}

/// Asserts that a field mapping's keys are exactly `expected`, in order
pub fn assert_field_names(actual: &FieldMap, expected: &[&str]) {
    let names: Vec<&str> = actual.keys().map(String::as_str).collect();
    assert_eq!(names, expected, "Field names mismatch: actual={:?}", actual);
}

/// Asserts that a field mapping has `name` mapped to `value`
pub fn assert_field_value(actual: &FieldMap, name: &str, value: &str) {
    match actual.get(name) {
        Some(found) => assert_eq!(
            found, value,
            "Field {} has value {:?}, expected {:?}",
            name, found, value
        ),
        None => panic!("Field {} missing from mapping {:?}", name, actual),
    }
}

/// Asserts that `name` does not appear in a field mapping
pub fn assert_field_absent(actual: &FieldMap, name: &str) {
    assert!(
        !actual.contains_key(name),
        "Field {} should be absent from mapping {:?}",
        name,
        actual
    );
}

/// Asserts that an identifier mapping holds exactly `expected`, in order
pub fn assert_identifiers_eq(actual: &IdentifierMap, expected: &[(&str, &str)]) {
    let actual_entries: Vec<(&str, &str)> = actual
        .iter()
        .map(|(name, linked)| (name.as_str(), linked.api_name()))
        .collect();
    assert_eq!(
        actual_entries, expected,
        "Identifier mapping mismatch: actual={:?}",
        actual
    );
}
