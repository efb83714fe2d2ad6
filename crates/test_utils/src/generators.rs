//! Property-Based Test Generators
//!
//! Provides proptest strategies for descriptors, runtime schemas and
//! matching records. Generated schemas always use distinct declared names,
//! and external names are drawn from a disjoint pool, so resolved names
//! never collide unless a strategy says otherwise.

use proptest::prelude::*;
use sf_kernel::RecordTypeRef;
use sf_mapping::{DynamicRecord, FieldDescriptor, FieldValue, ObjectSchema};

/// Record types identifier fields may link to
pub fn linked_type_strategy() -> impl Strategy<Value = RecordTypeRef> {
    prop_oneof![
        Just(RecordTypeRef::new("Account")),
        Just(RecordTypeRef::new("Contact")),
        Just(RecordTypeRef::new("Opportunity")),
    ]
}

/// Strategy for ranks, biased towards small tiers
pub fn rank_strategy() -> impl Strategy<Value = u32> {
    prop_oneof![
        3 => 0u32..4u32,
        1 => 4u32..20u32,
    ]
}

/// Strategy for descriptors of either variant; `index` keeps external names unique
pub fn descriptor_strategy(index: usize) -> impl Strategy<Value = FieldDescriptor> {
    let variant = prop_oneof![
        3 => Just(None),
        1 => linked_type_strategy().prop_map(Some),
    ];

    (variant, any::<bool>(), any::<bool>(), any::<bool>(), rank_strategy()).prop_map(
        move |(linked, ignore, ignore_on_update, renamed, rank)| {
            let mut descriptor = match linked {
                Some(linked_type) => FieldDescriptor::identifier(linked_type),
                None => FieldDescriptor::field(),
            };
            descriptor = descriptor.with_rank(rank);
            if ignore {
                descriptor = descriptor.ignored();
            }
            if ignore_on_update {
                descriptor = descriptor.ignored_on_update();
            }
            if renamed {
                descriptor = descriptor.with_external_name(format!("Field{}__c", index));
            }
            descriptor
        },
    )
}

/// Strategy for an optional descriptor (`None` means an undescribed field)
pub fn optional_descriptor_strategy(index: usize) -> impl Strategy<Value = Option<FieldDescriptor>> {
    prop_oneof![
        1 => Just(None),
        4 => descriptor_strategy(index).prop_map(Some),
    ]
}

/// Strategy for a schema of up to `max_fields` fields named `Field0`, `Field1`, ...
pub fn schema_strategy(max_fields: usize) -> impl Strategy<Value = ObjectSchema> {
    (0..=max_fields)
        .prop_flat_map(|len| {
            (0..len)
                .map(optional_descriptor_strategy)
                .collect::<Vec<_>>()
        })
        .prop_map(|descriptors| {
            descriptors
                .into_iter()
                .enumerate()
                .fold(ObjectSchema::new("Generated__c"), |schema, (index, descriptor)| {
                    let name = format!("Field{}", index);
                    match descriptor {
                        Some(descriptor) => schema.with_field(name, descriptor),
                        None => schema.with_undescribed_field(name),
                    }
                })
        })
}

/// Strategy for scalar field values, including nulls
pub fn field_value_strategy() -> impl Strategy<Value = FieldValue> {
    prop_oneof![
        Just(FieldValue::Null),
        any::<bool>().prop_map(FieldValue::Boolean),
        any::<i64>().prop_map(FieldValue::Integer),
        "[a-zA-Z0-9 ]{0,12}".prop_map(FieldValue::Text),
    ]
}

/// Strategy for a schema together with a record holding a value for every field
pub fn schema_and_record_strategy(
    max_fields: usize,
) -> impl Strategy<Value = (ObjectSchema, DynamicRecord)> {
    schema_strategy(max_fields).prop_flat_map(|schema| {
        let len = schema.fields.len();
        (Just(schema), prop::collection::vec(field_value_strategy(), len)).prop_map(
            |(schema, values)| {
                let record = schema.fields.iter().zip(values).fold(
                    DynamicRecord::new(schema.name.clone()),
                    |record, (field, value)| record.with_value(field.name.clone(), value),
                );
                (schema, record)
            },
        )
    })
}
