//! Scenario and property tests for schema synthesis

use pretty_assertions::assert_eq;
use recsql::{synthesize, synthesize_named, ScalarKind, SchemaError, TypeDescriptor};

/// Line-item element type shared by several tests
fn line_item_descriptor() -> TypeDescriptor {
    TypeDescriptor::new("InvoiceItem")
        .with_reference("item")
        .with_scalar("quantity", ScalarKind::Double)
        .with_scalar("quantitySpecified", ScalarKind::Boolean)
        .with_scalar("price", ScalarKind::Decimal)
        .with_scalar("description", ScalarKind::Text)
}

/// Invoice root with identity, scalars, a reference, and a collection
fn invoice_descriptor() -> TypeDescriptor {
    TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_scalar("tranDate", ScalarKind::DateTime)
        .with_scalar("tranDateSpecified", ScalarKind::Boolean)
        .with_reference("entity")
        .with_scalar("total", ScalarKind::Decimal)
        .with_collection("itemList", line_item_descriptor())
        .with_other("billingAddress")
}

// =============================================================================
// Named scenarios
// =============================================================================

#[test]
fn test_scalar_only_root() {
    // Scenario A: identity plus one scalar, no collections
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_scalar("amount", ScalarKind::Decimal);

    let schema = synthesize(&desc).unwrap();
    assert_eq!(schema.tables().len(), 1);

    let root = schema.root();
    assert_eq!(root.name, "Invoice");
    assert_eq!(root.columns().len(), 2);
    assert_eq!(root.primary_key_column.as_deref(), Some("internalId"));
    assert_eq!(root.foreign_key(), None);

    let pk = root.column("internalId").unwrap();
    assert_eq!(pk.sql_type, "NVARCHAR(50)");
    assert!(!pk.nullable);

    let amount = root.column("amount").unwrap();
    assert_eq!(amount.sql_type, "DECIMAL(18, 6)");
    assert!(amount.nullable);
}

#[test]
fn test_synthetic_primary_key_fallback() {
    // Scenario B: no identity field on the source type
    let desc = TypeDescriptor::new("Widget").with_scalar("label", ScalarKind::Text);

    let schema = synthesize(&desc).unwrap();
    let root = schema.root();
    assert_eq!(root.name, "Widget");
    assert_eq!(root.primary_key_column.as_deref(), Some("WidgetId"));

    let pk = root.column("WidgetId").unwrap();
    assert_eq!(pk.sql_type, "NVARCHAR(50)");
    assert!(!pk.nullable);
}

#[test]
fn test_reference_field_flattens() {
    // Scenario C: one reference field becomes three columns, no child table
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_reference("vendor");

    let schema = synthesize(&desc).unwrap();
    assert_eq!(schema.tables().len(), 1);

    let root = schema.root();
    let id = root.column("vendor_rf_InternalId").unwrap();
    assert_eq!(id.sql_type, "NVARCHAR(50)");
    assert!(id.nullable);
    let name = root.column("vendor_rf_Name").unwrap();
    assert_eq!(name.sql_type, "NVARCHAR(MAX)");
    let kind = root.column("vendor_rf_Type").unwrap();
    assert_eq!(kind.sql_type, "NVARCHAR(50)");
}

#[test]
fn test_collection_becomes_child_table() {
    // Scenario D: a *List collection becomes a keyed child table
    let element = TypeDescriptor::new("InvoiceItem").with_scalar("price", ScalarKind::Decimal);
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_collection("itemList", element);

    let schema = synthesize(&desc).unwrap();
    assert_eq!(schema.tables().len(), 2);
    assert_eq!(schema.tables()[0].name, "Invoice");

    let child = schema.get_table("Invoice_itemList").unwrap();
    assert_eq!(child.parent_table_name.as_deref(), Some("Invoice"));
    assert_eq!(child.parent_pk_column.as_deref(), Some("internalId"));
    assert_eq!(
        child.foreign_key_column.as_deref(),
        Some("Invoice_internalId")
    );

    let fk = child.column("Invoice_internalId").unwrap();
    assert_eq!(fk.sql_type, "NVARCHAR(50)");
    assert!(!fk.nullable);

    assert_eq!(
        child.primary_key_column.as_deref(),
        Some("Invoice_itemListId")
    );
    let pk = child.column("Invoice_itemListId").unwrap();
    assert_eq!(pk.sql_type, "BIGINT");
    assert!(!pk.nullable);

    assert!(child.has_column("price"));
}

#[test]
fn test_malformed_collection_skipped() {
    // Scenario E: a list-named field with no discoverable element type
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_scalar("amount", ScalarKind::Decimal)
        .with_other("customFieldList");

    let schema = synthesize(&desc).unwrap();
    assert_eq!(schema.tables().len(), 1);
    assert_eq!(schema.root().columns().len(), 2);
}

// =============================================================================
// Structural properties
// =============================================================================

#[test]
fn test_synthesis_is_deterministic() {
    let desc = invoice_descriptor();
    let first = synthesize(&desc).unwrap();
    let second = synthesize(&desc).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_every_table_has_a_primary_key() {
    let schema = synthesize(&invoice_descriptor()).unwrap();
    for table in schema.tables() {
        let pk = table
            .primary_key_column
            .as_deref()
            .unwrap_or_else(|| panic!("table {} has no primary key", table.name));
        assert!(
            table.has_column(pk),
            "primary key {} of {} names no column",
            pk,
            table.name
        );
    }
}

#[test]
fn test_foreign_key_triple_is_all_or_nothing() {
    let schema = synthesize(&invoice_descriptor()).unwrap();
    for table in schema.tables() {
        let set = [
            table.parent_table_name.is_some(),
            table.parent_pk_column.is_some(),
            table.foreign_key_column.is_some(),
        ];
        assert!(
            set.iter().all(|s| *s) || set.iter().all(|s| !*s),
            "table {} has a partial parent link",
            table.name
        );
    }

    assert_eq!(schema.root().foreign_key(), None);
    assert!(schema
        .get_table("Invoice_itemList")
        .unwrap()
        .foreign_key()
        .is_some());
}

#[test]
fn test_column_names_unique_case_insensitive() {
    let desc = invoice_descriptor();
    let schema = synthesize(&desc).unwrap();
    for table in schema.tables() {
        let mut seen: Vec<String> = Vec::new();
        for column in table.columns() {
            let lower = column.name.to_lowercase();
            assert!(
                !seen.contains(&lower),
                "duplicate column {} in {}",
                column.name,
                table.name
            );
            seen.push(lower);
        }
    }
}

#[test]
fn test_duplicate_field_overwrites_column() {
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("memo", ScalarKind::Text)
        .with_scalar("MEMO", ScalarKind::Integer);

    let schema = synthesize(&desc).unwrap();
    let root = schema.root();
    // PK plus one memo column; the re-add overwrote type in place
    assert_eq!(root.columns().len(), 2);
    assert_eq!(root.column("memo").unwrap().sql_type, "INT");
}

#[test]
fn test_children_follow_root_in_encounter_order() {
    let items = TypeDescriptor::new("InvoiceItem").with_scalar("price", ScalarKind::Decimal);
    let expenses = TypeDescriptor::new("InvoiceExpense").with_scalar("amount", ScalarKind::Decimal);
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_collection("itemList", items)
        .with_scalar("memo", ScalarKind::Text)
        .with_collection("expenseList", expenses);

    let schema = synthesize(&desc).unwrap();
    let names: Vec<&str> = schema.tables().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Invoice", "Invoice_itemList", "Invoice_expenseList"]
    );
}

// =============================================================================
// Walker and input handling
// =============================================================================

#[test]
fn test_serializer_artifacts_not_persisted() {
    let schema = synthesize(&invoice_descriptor()).unwrap();
    let root = schema.root();
    assert!(root.has_column("tranDate"));
    assert!(!root.has_column("tranDateSpecified"));

    // Element walks filter artifacts too
    let child = schema.get_table("Invoice_itemList").unwrap();
    assert!(child.has_column("quantity"));
    assert!(!child.has_column("quantitySpecified"));
}

#[test]
fn test_identity_field_not_duplicated() {
    // The identity column is materialized once even though the source type
    // also lists internalId as an ordinary field
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_scalar("amount", ScalarKind::Decimal);

    let schema = synthesize(&desc).unwrap();
    let matches = schema
        .root()
        .columns()
        .iter()
        .filter(|c| c.name.eq_ignore_ascii_case("internalId"))
        .count();
    assert_eq!(matches, 1);
}

#[test]
fn test_unnamed_descriptor_is_invalid_input() {
    let err = synthesize(&TypeDescriptor::new("")).unwrap_err();
    assert!(matches!(err, SchemaError::InvalidInput));
}

#[test]
fn test_unsupported_shape_skipped_silently() {
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_other("billingAddress");

    let schema = synthesize(&desc).unwrap();
    assert_eq!(schema.root().columns().len(), 1);
    assert!(!schema.root().has_column("billingAddress"));
}

#[test]
fn test_element_reference_flattens_into_child() {
    let schema = synthesize(&invoice_descriptor()).unwrap();
    let child = schema.get_table("Invoice_itemList").unwrap();
    assert!(child.has_column("item_rf_InternalId"));
    assert!(child.has_column("item_rf_Name"));
    assert!(child.has_column("item_rf_Type"));
}

#[test]
fn test_named_synthesis_threads_table_name() {
    let element = TypeDescriptor::new("InvoiceItem").with_scalar("price", ScalarKind::Decimal);
    let desc = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_collection("itemList", element);

    let schema = synthesize_named(&desc, Some("SalesInvoice")).unwrap();
    let names: Vec<&str> = schema.tables().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["SalesInvoice", "SalesInvoice_itemList"]);

    let child = schema.get_table("SalesInvoice_itemList").unwrap();
    assert_eq!(
        child.foreign_key_column.as_deref(),
        Some("SalesInvoice_internalId")
    );
}
