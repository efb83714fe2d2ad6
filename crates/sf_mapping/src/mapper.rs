//! Field mapper
//!
//! Walks a record type's declared fields and their descriptors to produce
//! the views a transport layer needs:
//!
//! - the eligible external field names for a rank threshold
//! - the external name → string value mapping for a record instance
//! - the identifier fields and the record types they point at
//!
//! Output order is always declaration order; rank never reorders fields.
//!
//! # Duplicate external names
//!
//! The free functions (and [`FieldMapper`] under
//! [`DuplicateNamePolicy::Overwrite`]) let a later field overwrite the value
//! of an earlier field with the same external name, keeping the earlier
//! field's position. Under [`DuplicateNamePolicy::Reject`] the mapper fails
//! with [`MappingError::DuplicateExternalName`] instead.

use indexmap::{IndexMap, IndexSet};
use serde_json::{Map, Value};
use sf_kernel::{DuplicateNamePolicy, MappingSettings, RecordTypeRef};
use tracing::{debug, instrument, warn};

use crate::error::MappingError;
use crate::record::{FieldSlot, Record};
use crate::schema::{DynamicRecord, ObjectSchema};

/// External field name → stringified value, in declaration order
pub type FieldMap = IndexMap<String, String>;

/// External identifier field name → linked record type, in declaration order
pub type IdentifierMap = IndexMap<String, RecordTypeRef>;

/// Yields `(resolved name, slot)` for every slot eligible at `rank`
pub(crate) fn eligible_slots<'a, S: FieldSlot>(
    slots: &'a [S],
    rank: u32,
) -> impl Iterator<Item = (&'a str, &'a S)> + 'a {
    slots.iter().filter_map(move |slot| {
        let descriptor = slot.descriptor()?;
        descriptor
            .is_eligible(rank)
            .then(|| (descriptor.resolved_name(slot.declared_name()), slot))
    })
}

/// Yields `(resolved name, linked type)` for every non-ignored identifier slot
/// whose linked type matches `filter` (or all of them when unset)
pub(crate) fn identifier_slots<'a, S: FieldSlot>(
    slots: &'a [S],
    filter: Option<&'a RecordTypeRef>,
) -> impl Iterator<Item = (&'a str, &'a RecordTypeRef)> + 'a {
    slots.iter().filter_map(move |slot| {
        let descriptor = slot.descriptor()?;
        let linked_type = descriptor.linked_type()?;
        if descriptor.is_ignored() || filter.is_some_and(|wanted| wanted != linked_type) {
            return None;
        }
        Some((descriptor.resolved_name(slot.declared_name()), linked_type))
    })
}

fn collect_overwriting<'a, V>(
    record_type: &RecordTypeRef,
    entries: impl Iterator<Item = (&'a str, V)>,
) -> IndexMap<String, V> {
    let mut map = IndexMap::new();
    for (name, value) in entries {
        if map.insert(name.to_owned(), value).is_some() {
            warn!(%record_type, field = name, "Duplicate external field name, keeping later value");
        }
    }
    map
}

fn collect_rejecting<'a, V>(
    record_type: &RecordTypeRef,
    entries: impl Iterator<Item = (&'a str, V)>,
) -> Result<IndexMap<String, V>, MappingError> {
    let mut map = IndexMap::new();
    for (name, value) in entries {
        if map.contains_key(name) {
            return Err(MappingError::duplicate_name(record_type, name));
        }
        map.insert(name.to_owned(), value);
    }
    Ok(map)
}

fn collect_names<'a>(
    record_type: &RecordTypeRef,
    names: impl Iterator<Item = &'a str>,
    policy: DuplicateNamePolicy,
) -> Result<Vec<String>, MappingError> {
    match policy {
        DuplicateNamePolicy::Overwrite => Ok(names.map(str::to_owned).collect()),
        DuplicateNamePolicy::Reject => {
            let mut seen = IndexSet::new();
            for name in names {
                if !seen.insert(name) {
                    return Err(MappingError::duplicate_name(record_type, name));
                }
            }
            Ok(seen.into_iter().map(str::to_owned).collect())
        }
    }
}

fn collect_entries<'a, V>(
    record_type: &RecordTypeRef,
    entries: impl Iterator<Item = (&'a str, V)>,
    policy: DuplicateNamePolicy,
) -> Result<IndexMap<String, V>, MappingError> {
    match policy {
        DuplicateNamePolicy::Overwrite => Ok(collect_overwriting(record_type, entries)),
        DuplicateNamePolicy::Reject => collect_rejecting(record_type, entries),
    }
}

/// Returns the external names of the fields of `R` eligible at `rank`
///
/// Rank `0` selects every non-ignored described field.
pub fn eligible_field_names<R: Record>(rank: u32) -> Vec<String> {
    let fields = R::fields();
    let names: Vec<String> = eligible_slots(&fields, rank)
        .map(|(name, _)| name.to_owned())
        .collect();

    debug!(record_type = %R::record_type(), rank, count = names.len(), "Resolved eligible field names");
    names
}

/// Returns the external name → value mapping of `record` at `rank`
///
/// Null values map to the empty string; the entry is always present.
pub fn field_values<R: Record>(record: &R, rank: u32) -> FieldMap {
    let record_type = R::record_type();
    let fields = R::fields();
    let values = collect_overwriting(
        &record_type,
        eligible_slots(&fields, rank).map(|(name, field)| (name, field.read(record).to_string())),
    );

    debug!(%record_type, rank, count = values.len(), "Mapped field values");
    values
}

/// Returns the identifier fields of `record`, optionally only those linking to `filter`
///
/// Rank is not consulted; plain (non-identifier) fields are never included.
/// The result depends only on the declarations of `R`, never on the values
/// held by `record`.
pub fn identifier_fields_of_type<R: Record>(
    _record: &R,
    filter: Option<&RecordTypeRef>,
) -> IdentifierMap {
    let record_type = R::record_type();
    let fields = R::fields();
    let ids = collect_overwriting(
        &record_type,
        identifier_slots(&fields, filter).map(|(name, linked)| (name, linked.clone())),
    );

    debug!(%record_type, filter = ?filter, count = ids.len(), "Resolved identifier fields");
    ids
}

/// Renders a field mapping as the flat JSON object sent to the remote service
pub fn to_json_payload(values: &FieldMap) -> Value {
    let body: Map<String, Value> = values
        .iter()
        .map(|(name, value)| (name.clone(), Value::String(value.clone())))
        .collect();
    Value::Object(body)
}

/// Field mapper bound to a set of [`MappingSettings`]
///
/// Offers the same operations as the free functions, for both typed records
/// and runtime schemas, applying the configured duplicate-name policy.
#[derive(Debug, Clone, Default)]
pub struct FieldMapper {
    settings: MappingSettings,
}

impl FieldMapper {
    pub fn new(settings: MappingSettings) -> Self {
        Self { settings }
    }

    /// A mapper that rejects duplicate external names
    pub fn strict() -> Self {
        Self::new(MappingSettings::strict())
    }

    /// Builds a mapper from `SF_MAPPING_*` environment settings
    pub fn from_env() -> Result<Self, MappingError> {
        Ok(Self::new(MappingSettings::from_env()?))
    }

    pub fn settings(&self) -> &MappingSettings {
        &self.settings
    }

    fn policy(&self) -> DuplicateNamePolicy {
        self.settings.duplicate_names
    }

    /// See [`eligible_field_names`]
    #[instrument(skip(self), fields(record_type = %R::record_type()))]
    pub fn eligible_field_names<R: Record>(&self, rank: u32) -> Result<Vec<String>, MappingError> {
        let fields = R::fields();
        collect_names(
            &R::record_type(),
            eligible_slots(&fields, rank).map(|(name, _)| name),
            self.policy(),
        )
    }

    /// See [`field_values`]
    #[instrument(skip(self, record), fields(record_type = %R::record_type()))]
    pub fn field_values<R: Record>(&self, record: &R, rank: u32) -> Result<FieldMap, MappingError> {
        let fields = R::fields();
        let values = collect_entries(
            &R::record_type(),
            eligible_slots(&fields, rank).map(|(name, field)| (name, field.read(record).to_string())),
            self.policy(),
        )?;
        debug!(count = values.len(), "Mapped field values");
        Ok(values)
    }

    /// See [`identifier_fields_of_type`]
    #[instrument(skip(self, _record), fields(record_type = %R::record_type()))]
    pub fn identifier_fields_of_type<R: Record>(
        &self,
        _record: &R,
        filter: Option<&RecordTypeRef>,
    ) -> Result<IdentifierMap, MappingError> {
        let fields = R::fields();
        collect_entries(
            &R::record_type(),
            identifier_slots(&fields, filter).map(|(name, linked)| (name, linked.clone())),
            self.policy(),
        )
    }

    /// Eligible external names of a runtime schema
    #[instrument(skip(self, schema), fields(record_type = %schema.name))]
    pub fn schema_field_names(
        &self,
        schema: &ObjectSchema,
        rank: u32,
    ) -> Result<Vec<String>, MappingError> {
        collect_names(
            &schema.name,
            eligible_slots(&schema.fields, rank).map(|(name, _)| name),
            self.policy(),
        )
    }

    /// Field values of a runtime record, read through `schema`
    ///
    /// Fails if `record` is not of the schema's record type.
    #[instrument(skip(self, schema, record), fields(record_type = %schema.name))]
    pub fn schema_field_values(
        &self,
        schema: &ObjectSchema,
        record: &DynamicRecord,
        rank: u32,
    ) -> Result<FieldMap, MappingError> {
        schema.check_record(record)?;
        collect_entries(
            &schema.name,
            eligible_slots(&schema.fields, rank)
                .map(|(name, field)| (name, record.value_string(&field.name))),
            self.policy(),
        )
    }

    /// Identifier fields of a runtime record, read through `schema`
    #[instrument(skip(self, schema, record), fields(record_type = %schema.name))]
    pub fn schema_identifier_fields(
        &self,
        schema: &ObjectSchema,
        record: &DynamicRecord,
        filter: Option<&RecordTypeRef>,
    ) -> Result<IdentifierMap, MappingError> {
        schema.check_record(record)?;
        collect_entries(
            &schema.name,
            identifier_slots(&schema.fields, filter).map(|(name, linked)| (name, linked.clone())),
            self.policy(),
        )
    }
}

/// Runtime-schema counterparts of the free functions, with overwrite semantics
pub(crate) mod schema_ops {
    use super::*;

    pub(crate) fn eligible_field_names(schema: &ObjectSchema, rank: u32) -> Vec<String> {
        eligible_slots(&schema.fields, rank)
            .map(|(name, _)| name.to_owned())
            .collect()
    }

    pub(crate) fn field_values(
        schema: &ObjectSchema,
        record: &DynamicRecord,
        rank: u32,
    ) -> Result<FieldMap, MappingError> {
        schema.check_record(record)?;
        Ok(collect_overwriting(
            &schema.name,
            eligible_slots(&schema.fields, rank)
                .map(|(name, field)| (name, record.value_string(&field.name))),
        ))
    }

    pub(crate) fn identifier_fields_of_type(
        schema: &ObjectSchema,
        record: &DynamicRecord,
        filter: Option<&RecordTypeRef>,
    ) -> Result<IdentifierMap, MappingError> {
        schema.check_record(record)?;
        Ok(collect_overwriting(
            &schema.name,
            identifier_slots(&schema.fields, filter).map(|(name, linked)| (name, linked.clone())),
        ))
    }
}
