//! Scalar and reference column type mapping

use crate::descriptor::ScalarKind;

/// SQL type for identity and foreign key columns.
pub(crate) const KEY_SQL_TYPE: &str = "NVARCHAR(50)";

/// SQL type for the synthetic primary key of a child table. Auto-increment
/// semantics are a target-DDL concern and not rendered here.
pub(crate) const SYNTHETIC_PK_SQL_TYPE: &str = "BIGINT";

/// The three logical sub-fields every reference record exposes, in the order
/// their flattened columns are emitted.
pub(crate) const REFERENCE_SUB_FIELDS: [&str; 3] = ["InternalId", "Name", "Type"];

/// Get the SQL column type for a scalar kind.
///
/// Nullability is orthogonal: a nullable-wrapped scalar maps identically to
/// its unwrapped form, and the caller decides the column's nullability.
pub fn scalar_sql_type(kind: ScalarKind) -> &'static str {
    match kind {
        ScalarKind::Text => "NVARCHAR(MAX)",
        ScalarKind::Integer => "INT",
        ScalarKind::Long => "BIGINT",
        ScalarKind::Short => "SMALLINT",
        ScalarKind::Byte => "TINYINT",
        ScalarKind::Boolean => "BIT",
        ScalarKind::DateTime => "DATETIME",
        // Doubles are persisted as fixed-point alongside decimals
        ScalarKind::Decimal | ScalarKind::Double => "DECIMAL(18, 6)",
        ScalarKind::Float => "REAL",
        // Enum labels stored as text for readability
        ScalarKind::Enumeration => "NVARCHAR(50)",
    }
}

/// Get the SQL column type for one flattened reference sub-field.
pub fn reference_sql_type(sub_field: &str) -> &'static str {
    match sub_field {
        "InternalId" => "NVARCHAR(50)",
        "Name" => "NVARCHAR(MAX)",
        "Type" => "NVARCHAR(50)",
        _ => "NVARCHAR(MAX)",
    }
}
