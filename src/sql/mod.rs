//! Relational schema synthesis and DDL generation
//!
//! This module turns a [`TypeDescriptor`](crate::descriptor::TypeDescriptor)
//! into a relational [`Schema`] and renders it as CREATE TABLE DDL for a
//! bracket-identifier SQL dialect.
//!
//! # Overview
//!
//! Synthesis applies a fixed set of structural conventions:
//! 1. Every table gets a primary key: the source's `internalId` field when
//!    present, a synthetic `{Table}Id` otherwise.
//! 2. Scalar fields become columns via the type mapping in [`mapping`].
//! 3. Reference fields flatten into three `{field}_rf_*` columns.
//! 4. `*List` collection fields become child tables named
//!    `{Parent}_{field}`, carrying a `{Parent}_{parentPk}` foreign key and a
//!    synthetic `{Child}Id` primary key.
//! 5. Anything else is skipped; traversal never goes deeper than one level
//!    of collections.
//!
//! # Example
//!
//! ```rust
//! use recsql::descriptor::{ScalarKind, TypeDescriptor};
//! use recsql::sql::{synthesize, DdlEmitter};
//!
//! let item = TypeDescriptor::new("InvoiceItem")
//!     .with_scalar("quantity", ScalarKind::Double)
//!     .with_scalar("price", ScalarKind::Decimal)
//!     .with_reference("item");
//!
//! let invoice = TypeDescriptor::new("Invoice")
//!     .with_scalar("internalId", ScalarKind::Text)
//!     .with_scalar("tranDate", ScalarKind::DateTime)
//!     .with_reference("vendor")
//!     .with_collection("itemList", item);
//!
//! let schema = synthesize(&invoice).unwrap();
//! assert_eq!(schema.tables().len(), 2);
//!
//! let ddl = DdlEmitter::new().emit_schema(&schema);
//! assert!(ddl.contains("CREATE TABLE [Invoice]"));
//! assert!(ddl.contains("CREATE TABLE [Invoice_itemList]"));
//! ```

pub mod ddl;
pub mod error;
pub mod mapping;
pub mod schema;
pub mod synthesize;

// Re-export main types
pub use ddl::DdlEmitter;
pub use error::{SchemaError, SchemaResult};
pub use mapping::{reference_sql_type, scalar_sql_type};
pub use schema::{Column, Schema, Table};
pub use synthesize::{synthesize, synthesize_named};
