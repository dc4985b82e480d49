//! Relational schema model produced by synthesis

/// A single column on a table
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub struct Column {
    /// Column name, unique within its table (case-insensitive)
    pub name: String,
    /// Rendered SQL type (e.g. "NVARCHAR(50)")
    pub sql_type: String,
    /// Whether the column accepts NULL
    pub nullable: bool,
}

/// One table in a synthesized schema
///
/// A table links to its parent iff all three of `parent_table_name`,
/// `parent_pk_column` and `foreign_key_column` are set; the synthesizer never
/// sets them partially. Use [`Table::foreign_key`] to read the triple.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub struct Table {
    pub name: String,
    columns: Vec<Column>,
    /// Primary key column; always set by the synthesizer and always naming an
    /// existing column
    pub primary_key_column: Option<String>,
    /// Parent table name, when this is a child table
    pub parent_table_name: Option<String>,
    /// Primary key column of the parent table
    pub parent_pk_column: Option<String>,
    /// Column on this table referencing the parent (e.g. "Invoice_internalId")
    pub foreign_key_column: Option<String>,
}

impl Table {
    /// Create an empty table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Append a column, or overwrite the type and nullability of an existing
    /// column with the same name (case-insensitive). Column order is append
    /// order; an overwrite keeps the original position.
    pub fn upsert_column(
        &mut self,
        name: impl Into<String>,
        sql_type: impl Into<String>,
        nullable: bool,
    ) {
        let name = name.into();
        let sql_type = sql_type.into();

        if let Some(existing) = self
            .columns
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&name))
        {
            existing.sql_type = sql_type;
            existing.nullable = nullable;
            return;
        }

        self.columns.push(Column {
            name,
            sql_type,
            nullable,
        });
    }

    /// All columns in emission order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Look up a column by name (case-insensitive)
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Check if a column exists (case-insensitive)
    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// The parent link as `(fk_column, parent_table, parent_pk)`, present only
    /// when the full triple is set
    pub fn foreign_key(&self) -> Option<(&str, &str, &str)> {
        match (
            &self.foreign_key_column,
            &self.parent_table_name,
            &self.parent_pk_column,
        ) {
            (Some(fk), Some(parent), Some(pk)) => {
                Some((fk.as_str(), parent.as_str(), pk.as_str()))
            }
            _ => None,
        }
    }
}

/// An ordered set of tables: the root table first, then child tables in the
/// order their collection fields were encountered
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "wasm", derive(serde::Serialize))]
pub struct Schema {
    tables: Vec<Table>,
}

impl Schema {
    /// Create a schema holding only its root table
    pub fn new(root: Table) -> Self {
        Self { tables: vec![root] }
    }

    /// Append a child table
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// All tables, root first
    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    /// The root table
    pub fn root(&self) -> &Table {
        &self.tables[0]
    }

    /// Look up a table by name (case-insensitive)
    pub fn get_table(&self, name: &str) -> Option<&Table> {
        self.tables
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }
}
