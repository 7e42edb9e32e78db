// ABOUTME: Table schema assembled from mixins and columns in explicit declaration order
// ABOUTME: Detects duplicate columns and renders CREATE TABLE / CREATE INDEX per dialect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::column::{ColumnDef, ColumnType};
use super::dialect::Dialect;
use super::mixins::SchemaMixin;
use super::naming::NamingConvention;
use brussels_core::{AppError, AppResult};
use std::fmt::Write as _;

/// Column together with the fragment that declared it
#[derive(Debug, Clone)]
struct Declared {
    source: String,
    column: ColumnDef,
}

/// Validated table schema
#[derive(Debug, Clone)]
pub struct TableSchema {
    name: String,
    columns: Vec<ColumnDef>,
    naming: NamingConvention,
}

impl TableSchema {
    /// Start declaring a table
    #[must_use]
    pub fn builder(name: impl Into<String>) -> TableSchemaBuilder {
        TableSchemaBuilder {
            name: name.into(),
            declared: Vec::new(),
            naming: NamingConvention::default(),
        }
    }

    /// Table name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in declaration order
    #[must_use]
    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    /// Look up a column by name
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|column| column.name == name)
    }

    /// Naming convention used for constraints and indexes
    #[must_use]
    pub const fn naming(&self) -> &NamingConvention {
        &self.naming
    }

    /// Columns the caller supplies when constructing a record
    #[must_use]
    pub fn constructor_fields(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|column| column.constructor)
            .map(|column| column.name.as_str())
            .collect()
    }

    /// `CREATE TABLE` statement for a dialect
    ///
    /// Server defaults the dialect cannot evaluate are omitted; the pre-insert
    /// hooks supply those values instead.
    #[must_use]
    pub fn create_table_sql(&self, dialect: Dialect) -> String {
        let mut lines: Vec<String> = self
            .columns
            .iter()
            .map(|column| column_sql(column, dialect))
            .collect();

        let primary: Vec<&str> = self
            .columns
            .iter()
            .filter(|column| column.primary_key)
            .map(|column| column.name.as_str())
            .collect();
        if !primary.is_empty() {
            lines.push(format!(
                "CONSTRAINT {} PRIMARY KEY ({})",
                self.naming.primary_key_name(&self.name),
                primary.join(", ")
            ));
        }

        for column in self.columns.iter().filter(|column| column.unique) {
            lines.push(format!(
                "CONSTRAINT {} UNIQUE ({})",
                self.naming.unique_name(&self.name, &column.name),
                column.name
            ));
        }

        for column in &self.columns {
            if let Some(fk) = &column.foreign_key {
                lines.push(format!(
                    "CONSTRAINT {} FOREIGN KEY ({}) REFERENCES {} ({})",
                    self.naming
                        .foreign_key_name(&self.name, &column.name, &fk.table),
                    column.name,
                    fk.table,
                    fk.column
                ));
            }
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            self.name,
            lines.join(",\n    ")
        )
    }

    /// `CREATE INDEX` statements for every indexed column
    #[must_use]
    pub fn create_index_sql(&self, dialect: Dialect) -> Vec<String> {
        let jsonb = dialect.capabilities().jsonb;
        self.columns
            .iter()
            .filter(|column| column.index)
            .map(|column| {
                let using = if jsonb && column.column_type == ColumnType::Json {
                    " USING GIN"
                } else {
                    ""
                };
                format!(
                    "CREATE INDEX IF NOT EXISTS {} ON {}{using} ({})",
                    self.naming.index_name(&self.name, &column.name),
                    self.name,
                    column.name
                )
            })
            .collect()
    }
}

fn column_sql(column: &ColumnDef, dialect: Dialect) -> String {
    let mut sql = format!(
        "{} {}",
        column.name,
        column.column_type.physical_type(dialect)
    );
    if !column.nullable {
        sql.push_str(" NOT NULL");
    }
    if let Some(default) = column
        .server_default
        .as_ref()
        .and_then(|default| default.render(dialect))
    {
        let _ = write!(sql, " DEFAULT {default}");
    }
    sql
}

/// Collects mixins and columns, validated on [`TableSchemaBuilder::build`]
#[derive(Debug, Clone)]
pub struct TableSchemaBuilder {
    name: String,
    declared: Vec<Declared>,
    naming: NamingConvention,
}

impl TableSchemaBuilder {
    /// Merge every column of a mixin, in the mixin's order
    #[must_use]
    pub fn mixin(mut self, mixin: &dyn SchemaMixin) -> Self {
        let source = mixin.name();
        self.declared
            .extend(mixin.columns().into_iter().map(|column| Declared {
                source: source.to_owned(),
                column,
            }));
        self
    }

    /// Declare a column owned by the table itself
    #[must_use]
    pub fn column(mut self, column: ColumnDef) -> Self {
        self.declared.push(Declared {
            source: self.name.clone(),
            column,
        });
        self
    }

    /// Replace the default naming convention
    #[must_use]
    pub fn naming(mut self, naming: NamingConvention) -> Self {
        self.naming = naming;
        self
    }

    /// Validate and produce the schema
    ///
    /// # Errors
    ///
    /// Returns `SchemaConflict` if two fragments declare the same column name
    pub fn build(self) -> AppResult<TableSchema> {
        for (index, declared) in self.declared.iter().enumerate() {
            if let Some(earlier) = self.declared[..index]
                .iter()
                .find(|earlier| earlier.column.name == declared.column.name)
            {
                return Err(AppError::schema_conflict(format!(
                    "Column '{}' of table '{}' declared by both {} and {}",
                    declared.column.name, self.name, earlier.source, declared.source
                )));
            }
        }

        tracing::debug!(
            table = %self.name,
            columns = self.declared.len(),
            "Built table schema"
        );

        Ok(TableSchema {
            name: self.name,
            columns: self.declared.into_iter().map(|d| d.column).collect(),
            naming: self.naming,
        })
    }
}
