//! Table synthesis: walks a record type descriptor into a relational schema
//!
//! Synthesis is a single pass over the root type's fields. Each field is
//! matched against the rules in order: scalar, reference, `*List` collection.
//! A collection becomes a child table whose element fields get the scalar and
//! reference rules only, so traversal is bounded at two levels; collections
//! of collections are never expanded. Fields matching no rule are skipped
//! silently; the skip is policy, not an error.

use tracing::debug;

use crate::descriptor::{
    FieldDescriptor, FieldShape, TypeDescriptor, COLLECTION_SUFFIX, IDENTITY_FIELD,
};

use super::error::{SchemaError, SchemaResult};
use super::mapping::{
    reference_sql_type, scalar_sql_type, KEY_SQL_TYPE, REFERENCE_SUB_FIELDS, SYNTHETIC_PK_SQL_TYPE,
};
use super::schema::{Schema, Table};

/// Synthesize a schema for a root type, naming the root table after the type.
///
/// Equivalent to [`synthesize_named`] with no name override.
pub fn synthesize(root: &TypeDescriptor) -> SchemaResult<Schema> {
    synthesize_named(root, None)
}

/// Synthesize a schema for a root type with an explicit root table name.
///
/// Produces the root table plus one child table per `*List` collection field,
/// in field-encounter order. Synthesis is a pure function of the descriptor:
/// the same input always yields a structurally identical schema.
pub fn synthesize_named(
    root: &TypeDescriptor,
    root_table_name: Option<&str>,
) -> SchemaResult<Schema> {
    if root.is_unnamed() {
        return Err(SchemaError::InvalidInput);
    }

    let mut table = Table::new(root_table_name.unwrap_or(root.name()));

    // Every table gets a primary key: the source's own identity field when
    // present, a synthetic "{Table}Id" otherwise.
    if root.has_field(IDENTITY_FIELD) {
        table.upsert_column(IDENTITY_FIELD, KEY_SQL_TYPE, false);
        table.primary_key_column = Some(IDENTITY_FIELD.to_string());
    } else {
        let pk = format!("{}Id", table.name);
        table.upsert_column(pk.clone(), KEY_SQL_TYPE, false);
        table.primary_key_column = Some(pk);
    }

    let mut children = Vec::new();
    for field in root.persisted_fields() {
        add_field(field, &mut table, &mut children);
    }

    let mut schema = Schema::new(table);
    for child in children {
        schema.add_table(child);
    }
    Ok(schema)
}

/// Apply the synthesis rules to one root field, appending columns to the root
/// table or a new table to `children`.
fn add_field(field: &FieldDescriptor, table: &mut Table, children: &mut Vec<Table>) {
    match &field.shape {
        FieldShape::Scalar(kind) => {
            table.upsert_column(field.name.clone(), scalar_sql_type(*kind), true);
        }
        FieldShape::Reference => {
            add_reference_columns(&field.name, table);
        }
        _ if field.name.ends_with(COLLECTION_SUFFIX) => {
            if let Some(child) = synthesize_child_table(field, table) {
                children.push(child);
            }
        }
        _ => {
            debug!(field = %field.name, "skipping field of unsupported shape");
        }
    }
}

/// Flatten a reference field into its three fixed columns. The reference
/// type's own fields are never inspected.
fn add_reference_columns(field_name: &str, table: &mut Table) {
    for sub_field in REFERENCE_SUB_FIELDS {
        table.upsert_column(
            format!("{}_rf_{}", field_name, sub_field),
            reference_sql_type(sub_field),
            true,
        );
    }
}

/// Build the child table for a `*List` collection field on `parent`.
///
/// Returns `None` when the field exposes no element type; the collection is
/// skipped and the parent table is unaffected.
fn synthesize_child_table(field: &FieldDescriptor, parent: &Table) -> Option<Table> {
    let FieldShape::Collection(element) = &field.shape else {
        debug!(field = %field.name, "collection field exposes no element type, skipping");
        return None;
    };
    let parent_pk = parent.primary_key_column.as_deref()?;

    let mut child = Table::new(format!("{}_{}", parent.name, field.name));
    child.parent_table_name = Some(parent.name.clone());
    child.parent_pk_column = Some(parent_pk.to_string());

    let fk = format!("{}_{}", parent.name, parent_pk);
    child.upsert_column(fk.clone(), KEY_SQL_TYPE, false);
    child.foreign_key_column = Some(fk);

    // List elements rarely carry their own identity; give the child a
    // synthetic primary key instead.
    let pk = format!("{}Id", child.name);
    child.upsert_column(pk.clone(), SYNTHETIC_PK_SQL_TYPE, false);
    child.primary_key_column = Some(pk);

    for element_field in element.element_fields() {
        match &element_field.shape {
            FieldShape::Scalar(kind) => {
                child.upsert_column(element_field.name.clone(), scalar_sql_type(*kind), true);
            }
            FieldShape::Reference => {
                add_reference_columns(&element_field.name, &mut child);
            }
            // Nested collections and other complex shapes are not expanded
            _ => {
                debug!(
                    field = %element_field.name,
                    table = %child.name,
                    "skipping element field of unsupported shape"
                );
            }
        }
    }

    Some(child)
}
