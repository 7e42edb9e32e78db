// ABOUTME: SQLite host adapter binding and reading column values through sqlx
// ABOUTME: Lets codec output be persisted and fetched without an object mapper
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use crate::schema::{ColumnType, Dialect, TableSchema};
use brussels_core::{AppError, AppResult, ColumnValue};
use serde_json::Value;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{Row, Sqlite, SqlitePool, TypeInfo, ValueRef};
use tracing::{debug, info};
use uuid::Uuid;

/// Query under construction against a `SQLite` pool
pub type SqliteQuery<'q> = sqlx::query::Query<'q, Sqlite, SqliteArguments<'q>>;

/// Bind one column value as its `SQLite` storage form
///
/// UUIDs and JSON documents are stored as text, aware timestamps as RFC 3339.
#[must_use]
pub fn bind_column(query: SqliteQuery<'_>, value: ColumnValue) -> SqliteQuery<'_> {
    match value {
        ColumnValue::Null => query.bind(None::<String>),
        ColumnValue::Bool(flag) => query.bind(flag),
        ColumnValue::Integer(number) => query.bind(number),
        ColumnValue::Float(number) => query.bind(number),
        ColumnValue::Text(text) => query.bind(text),
        ColumnValue::Bytes(bytes) => query.bind(bytes),
        ColumnValue::Uuid(id) => query.bind(id.to_string()),
        ColumnValue::Date(date) => query.bind(date),
        ColumnValue::Time(time) => query.bind(time),
        ColumnValue::NaiveTimestamp(naive) => query.bind(naive),
        ColumnValue::Timestamp(aware) => query.bind(aware.to_rfc3339()),
        ColumnValue::Json(document) => query.bind(document.to_string()),
    }
}

/// Fetch the raw stored value of a column
///
/// Timestamps and JSON come back as text for the codecs to interpret, except
/// JSON numbers, which SQLite stores numerically and are lifted to JSON here.
///
/// # Errors
///
/// Returns a database error if the column is missing, has an unexpected
/// storage class, or holds a malformed UUID
pub fn read_column(
    row: &SqliteRow,
    name: &str,
    column_type: ColumnType,
) -> AppResult<ColumnValue> {
    let value = match column_type {
        ColumnType::Integer => get::<i64>(row, name)?.map(ColumnValue::Integer),
        ColumnType::Boolean => get::<bool>(row, name)?.map(ColumnValue::Bool),
        ColumnType::Uuid => get::<String>(row, name)?
            .map(|text| {
                Uuid::parse_str(&text).map(ColumnValue::Uuid).map_err(|e| {
                    AppError::database(format!("Invalid UUID in column '{name}': {e}"))
                })
            })
            .transpose()?,
        ColumnType::Json => read_json(row, name)?,
        ColumnType::Text | ColumnType::EncryptedString | ColumnType::DateTimeUtc => {
            get::<String>(row, name)?.map(ColumnValue::Text)
        }
    };
    Ok(value.unwrap_or(ColumnValue::Null))
}

/// `JSON` columns have NUMERIC affinity, so bare number documents come back
/// as INTEGER or REAL storage rather than text
fn read_json(row: &SqliteRow, name: &str) -> AppResult<Option<ColumnValue>> {
    let raw = row
        .try_get_raw(name)
        .map_err(|e| AppError::database(format!("Failed to get column '{name}': {e}")))?;
    if raw.is_null() {
        return Ok(None);
    }
    let storage = raw.type_info().name().to_owned();

    match storage.as_str() {
        "INTEGER" => Ok(get::<i64>(row, name)?.map(|n| ColumnValue::Json(Value::from(n)))),
        "REAL" => Ok(get::<f64>(row, name)?.map(|n| ColumnValue::Json(Value::from(n)))),
        _ => Ok(get::<String>(row, name)?.map(ColumnValue::Text)),
    }
}

fn get<T>(row: &SqliteRow, name: &str) -> AppResult<Option<T>>
where
    T: for<'r> sqlx::Decode<'r, Sqlite> + sqlx::Type<Sqlite>,
{
    row.try_get::<Option<T>, _>(name)
        .map_err(|e| AppError::database(format!("Failed to get column '{name}': {e}")))
}

/// Create a table and its indexes if they do not exist
///
/// # Errors
///
/// Returns a database error if any statement fails
pub async fn create_table(pool: &SqlitePool, schema: &TableSchema) -> AppResult<()> {
    let ddl = schema.create_table_sql(Dialect::Sqlite);
    debug!(table = schema.name(), "Creating table");
    sqlx::query(&ddl)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::database(format!("Failed to create table '{}': {e}", schema.name()))
        })?;

    for statement in schema.create_index_sql(Dialect::Sqlite) {
        sqlx::query(&statement)
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::database(format!(
                    "Failed to create index on '{}': {e}",
                    schema.name()
                ))
            })?;
    }

    info!(table = schema.name(), "Table ready");
    Ok(())
}
