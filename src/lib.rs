//! # recsql
//!
//! Derive relational schemas and CREATE TABLE DDL from explicit descriptions
//! of record types. An ERP "Invoice" with nested line-item collections
//! becomes a root table, flattened reference columns, and one child table per
//! collection, with primary and foreign keys assigned by convention.
//!
//! The input is a [`descriptor::TypeDescriptor`] built at the caller's
//! boundary; the output is a [`sql::Schema`] and, from it, DDL text or one
//! `.sql` file per table. Nothing here connects to a database or executes
//! SQL.

pub mod descriptor;
pub mod sql;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use descriptor::{FieldDescriptor, FieldShape, ScalarKind, TypeDescriptor};
pub use sql::{
    synthesize, synthesize_named, Column, DdlEmitter, Schema, SchemaError, SchemaResult, Table,
};
