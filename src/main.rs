use recsql::{synthesize, DdlEmitter, ScalarKind, TypeDescriptor};

fn main() {
    tracing_subscriber::fmt::init();

    // A SuiteTalk-style Invoice record, described the way a boundary
    // generator would emit it: serializer artifacts and all.
    let line_item = TypeDescriptor::new("InvoiceItem")
        .with_reference("item")
        .with_scalar("quantity", ScalarKind::Double)
        .with_scalar("quantitySpecified", ScalarKind::Boolean)
        .with_scalar("rate", ScalarKind::Decimal)
        .with_scalar("amount", ScalarKind::Decimal)
        .with_scalar("description", ScalarKind::Text);

    let invoice = TypeDescriptor::new("Invoice")
        .with_scalar("internalId", ScalarKind::Text)
        .with_scalar("tranId", ScalarKind::Text)
        .with_scalar("tranDate", ScalarKind::DateTime)
        .with_scalar("tranDateSpecified", ScalarKind::Boolean)
        .with_reference("entity")
        .with_reference("subsidiary")
        .with_scalar("total", ScalarKind::Decimal)
        .with_scalar("memo", ScalarKind::Text)
        .with_scalar("status", ScalarKind::Enumeration)
        .with_collection("itemList", line_item)
        .with_other("billingAddress");

    println!("=== recsql Demo ===\n");

    match synthesize(&invoice) {
        Ok(schema) => {
            println!("--- Synthesized {} tables ---\n", schema.tables().len());

            for table in schema.tables() {
                println!("Table: {}", table.name);
                println!(
                    "  Primary key: {}",
                    table.primary_key_column.as_deref().unwrap_or("(none)")
                );
                if let Some((fk_column, parent, parent_pk)) = table.foreign_key() {
                    println!("  Foreign key: {} -> {}({})", fk_column, parent, parent_pk);
                }
                println!("  Columns: {} items", table.columns().len());
                for column in table.columns() {
                    println!(
                        "    - {} {}{}",
                        column.name,
                        column.sql_type,
                        if column.nullable { "" } else { " NOT NULL" }
                    );
                }
                println!();
            }

            println!("--- DDL ---\n");
            println!("{}", DdlEmitter::new().emit_schema(&schema));
        }
        Err(e) => {
            eprintln!("Synthesis error: {}", e);
        }
    }
}
