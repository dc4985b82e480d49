//! CREATE TABLE DDL emission for synthesized schemas

use std::fs;
use std::path::Path;

use tracing::debug;

use super::error::{SchemaError, SchemaResult};
use super::schema::{Schema, Table};

/// Emitter for CREATE TABLE statements
///
/// Targets a bracket-identifier SQL dialect. Clause order within a statement
/// is fixed: all columns, then the primary key constraint, then the foreign
/// key constraint.
#[derive(Debug, Clone, Copy, Default)]
pub struct DdlEmitter;

impl DdlEmitter {
    pub fn new() -> Self {
        Self
    }

    /// Render one CREATE TABLE statement, including the primary key clause
    /// and, for child tables, the foreign key clause.
    pub fn emit_table(&self, table: &Table) -> String {
        let mut sql = format!("CREATE TABLE {} (\n", quote_identifier(&table.name));

        let columns = table.columns();
        for (i, column) in columns.iter().enumerate() {
            let nullability = if column.nullable { "NULL" } else { "NOT NULL" };
            let comma = if i + 1 < columns.len() { "," } else { "" };
            sql.push_str(&format!(
                "    {} {} {}{}\n",
                quote_identifier(&column.name),
                column.sql_type,
                nullability,
                comma
            ));
        }

        if let Some(pk) = &table.primary_key_column {
            sql.push_str(&format!(
                "    ,CONSTRAINT {} PRIMARY KEY ({})\n",
                quote_identifier(&format!("PK_{}", table.name)),
                quote_identifier(pk)
            ));
        }

        if let Some((fk_column, parent_table, parent_pk)) = table.foreign_key() {
            sql.push_str(&format!(
                "    ,CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {}({})\n",
                quote_identifier(&format!("FK_{}_{}", table.name, parent_table)),
                quote_identifier(fk_column),
                quote_identifier(parent_table),
                quote_identifier(parent_pk)
            ));
        }

        sql.push_str(");\n");
        sql
    }

    /// Render the whole schema as one script, parents before children,
    /// statements separated by blank lines.
    pub fn emit_schema(&self, schema: &Schema) -> String {
        let mut sql = String::new();
        for table in schema.tables() {
            sql.push_str(&self.emit_table(table));
            sql.push('\n');
        }
        sql
    }

    /// As [`emit_schema`](Self::emit_schema), additionally writing one
    /// `{table}.sql` file per table into `directory` (created if absent).
    ///
    /// File writes are independent: a failed write aborts the remaining ones
    /// but leaves already-written files in place. Regeneration is idempotent,
    /// so a partial set is recoverable by re-running.
    pub fn emit_schema_to_files(
        &self,
        schema: &Schema,
        directory: impl AsRef<Path>,
    ) -> SchemaResult<String> {
        let directory = directory.as_ref();
        fs::create_dir_all(directory).map_err(|source| SchemaError::Io {
            path: directory.to_path_buf(),
            source,
        })?;

        let mut sql = String::new();
        for table in schema.tables() {
            let statement = self.emit_table(table);
            sql.push_str(&statement);
            sql.push('\n');

            let path = directory.join(format!("{}.sql", table.name));
            fs::write(&path, &statement).map_err(|source| SchemaError::Io {
                path: path.clone(),
                source,
            })?;
            debug!(table = %table.name, path = %path.display(), "wrote DDL file");
        }

        Ok(sql)
    }
}

/// Bracket-quote an identifier, doubling any closing bracket it contains.
fn quote_identifier(name: &str) -> String {
    format!("[{}]", name.replace(']', "]]"))
}
