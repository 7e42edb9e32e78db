// ABOUTME: Integration tests persisting codec output through the sqlx SQLite adapter
// ABOUTME: Validates DDL execution, ciphertext at rest, UTC timestamps, JSON and ordered reloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![cfg(feature = "sqlite")]

mod common;

use anyhow::Result;
use brussels::host::{bind_column, create_table, read_column};
use brussels::ordering::{OrderingList, Position, Positioned};
use brussels::schema::{
    ColumnDef, ColumnType, Dialect, InsertContext, OrderedMixin, PreInsert, PrimaryKey,
    PrimaryKeyMixin, TableSchema, TimestampMixin,
};
use brussels::types::{ColumnCodec, DateTimeUtc, EncryptedString, Json};
use brussels_core::ColumnValue;
use chrono::{DateTime, Utc};
use common::{init_test_logging, list_of, names, TodoItem, MODEL_KEY, OTHER_KEY};
use serde_json::json;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};

const INSERT_SQL: &str = "INSERT INTO todo_item \
     (id, created_at, updated_at, deleted_at, position, name, note, payload) \
     VALUES (?, ?, ?, ?, ?, ?, ?, ?)";

fn todo_schema() -> TableSchema {
    TableSchema::builder("todo_item")
        .mixin(&PrimaryKeyMixin)
        .mixin(&TimestampMixin)
        .mixin(&OrderedMixin)
        .column(ColumnDef::new("name", ColumnType::Text))
        .column(ColumnDef::new("note", ColumnType::EncryptedString).nullable())
        .column(ColumnDef::new("payload", ColumnType::Json).nullable())
        .build()
        .unwrap()
}

async fn setup() -> Result<(SqlitePool, TableSchema)> {
    init_test_logging();
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    let schema = todo_schema();
    create_table(&pool, &schema).await?;
    Ok((pool, schema))
}

async fn insert(
    pool: &SqlitePool,
    codec: &EncryptedString,
    item: &TodoItem,
    note: Option<&str>,
) -> Result<()> {
    let values = vec![
        ColumnValue::from(item.key.id),
        DateTimeUtc.process_bind(item.stamps.created_at.into())?,
        DateTimeUtc.process_bind(item.stamps.updated_at.into())?,
        DateTimeUtc.process_bind(item.stamps.deleted_at.into())?,
        ColumnValue::from(item.position.get()),
        ColumnValue::from(item.name.as_str()),
        codec.process_bind(note.into())?,
        Json.process_bind(ColumnValue::Json(json!({"name": item.name})))?,
    ];

    let mut query = sqlx::query(INSERT_SQL);
    for value in values {
        query = bind_column(query, value);
    }
    query.execute(pool).await?;
    Ok(())
}

fn as_utc(value: &ColumnValue) -> DateTime<Utc> {
    value.as_timestamp().unwrap().with_timezone(&Utc)
}

#[tokio::test]
async fn test_encrypted_note_is_ciphertext_at_rest() -> Result<()> {
    let (pool, schema) = setup().await?;
    let codec = EncryptedString::new(MODEL_KEY)?;

    let mut item = TodoItem::new("groceries");
    item.position = Position::from_stored(0);
    item.pre_insert(&InsertContext::new(Dialect::Sqlite));
    insert(&pool, &codec, &item, Some("buy oat milk")).await?;

    let row = sqlx::query("SELECT * FROM todo_item").fetch_one(&pool).await?;

    let raw_note: String = row.try_get("note")?;
    assert_ne!(raw_note, "buy oat milk");
    assert!(!raw_note.contains("oat"));

    let note_type = schema.column("note").unwrap().column_type;
    let stored = read_column(&row, "note", note_type)?;
    assert_eq!(codec.process_result(stored)?, ColumnValue::from("buy oat milk"));

    let other = EncryptedString::new(OTHER_KEY)?;
    assert!(other
        .process_result(read_column(&row, "note", note_type)?)
        .is_err());

    Ok(())
}

#[tokio::test]
async fn test_row_reads_back_through_codecs() -> Result<()> {
    let (pool, _schema) = setup().await?;
    let codec = EncryptedString::new(MODEL_KEY)?;

    let mut item = TodoItem::new("laundry");
    item.position = Position::from_stored(0);
    item.pre_insert(&InsertContext::new(Dialect::Sqlite));
    insert(&pool, &codec, &item, None).await?;

    let row = sqlx::query("SELECT * FROM todo_item").fetch_one(&pool).await?;

    let id = read_column(&row, "id", ColumnType::Uuid)?;
    assert_eq!(id, ColumnValue::from(item.key.id));

    let created =
        DateTimeUtc.process_result(read_column(&row, "created_at", ColumnType::DateTimeUtc)?)?;
    assert_eq!(as_utc(&created), item.stamps.created_at.unwrap());
    assert_eq!(created.as_timestamp().unwrap().offset().local_minus_utc(), 0);

    let deleted =
        DateTimeUtc.process_result(read_column(&row, "deleted_at", ColumnType::DateTimeUtc)?)?;
    assert_eq!(deleted, ColumnValue::Null);

    let note = codec.process_result(read_column(&row, "note", ColumnType::EncryptedString)?)?;
    assert_eq!(note, ColumnValue::Null);

    let payload = Json.process_result(read_column(&row, "payload", ColumnType::Json)?)?;
    assert_eq!(payload, ColumnValue::Json(json!({"name": "laundry"})));

    Ok(())
}

#[tokio::test]
async fn test_server_default_timestamp_is_decoded_as_utc() -> Result<()> {
    let (pool, _schema) = setup().await?;

    let mut key = PrimaryKey::default();
    key.pre_insert(&InsertContext::new(Dialect::Sqlite));
    let query = sqlx::query("INSERT INTO todo_item (id, position, name) VALUES (?, ?, ?)");
    let query = bind_column(query, ColumnValue::from(key.id));
    let query = bind_column(query, ColumnValue::Integer(0));
    bind_column(query, ColumnValue::from("defaults"))
        .execute(&pool)
        .await?;

    let row = sqlx::query("SELECT created_at FROM todo_item")
        .fetch_one(&pool)
        .await?;
    let created =
        DateTimeUtc.process_result(read_column(&row, "created_at", ColumnType::DateTimeUtc)?)?;

    let age = Utc::now() - as_utc(&created);
    assert!(age.num_seconds().abs() < 60, "created_at drifted by {age}");

    Ok(())
}

#[tokio::test]
async fn test_json_scalar_documents_round_trip() -> Result<()> {
    let (pool, _schema) = setup().await?;

    // JSON columns have NUMERIC affinity, so bare numbers are stored numerically
    let documents = [json!(42), json!(1.5), json!(-7), json!("42"), json!(true)];
    for (index, document) in documents.iter().enumerate() {
        let mut key = PrimaryKey::default();
        key.pre_insert(&InsertContext::new(Dialect::Sqlite));
        let bound = Json.process_bind(ColumnValue::Json(document.clone()))?;

        let query =
            sqlx::query("INSERT INTO todo_item (id, position, name, payload) VALUES (?, ?, ?, ?)");
        let query = bind_column(query, ColumnValue::from(key.id));
        let query = bind_column(query, ColumnValue::from(i64::try_from(index)?));
        let query = bind_column(query, ColumnValue::from("scalar"));
        bind_column(query, bound).execute(&pool).await?;
    }

    let rows = sqlx::query("SELECT payload FROM todo_item ORDER BY position")
        .fetch_all(&pool)
        .await?;
    let decoded: Vec<ColumnValue> = rows
        .iter()
        .map(|row| -> Result<ColumnValue> {
            Ok(Json.process_result(read_column(row, "payload", ColumnType::Json)?)?)
        })
        .collect::<Result<_>>()?;

    let expected: Vec<ColumnValue> = documents.into_iter().map(ColumnValue::Json).collect();
    assert_eq!(decoded, expected);

    Ok(())
}

#[tokio::test]
async fn test_ordered_collection_survives_reload() -> Result<()> {
    let (pool, _schema) = setup().await?;
    let codec = EncryptedString::new(MODEL_KEY)?;
    let ctx = InsertContext::new(Dialect::Sqlite);

    let mut list = list_of(&["first", "second", "third", "fourth"]);
    list.remove_at(1);
    list.insert(0, TodoItem::new("zeroth"));

    for item in list.as_mut_slice() {
        item.pre_insert(&ctx);
    }
    for item in list.iter() {
        insert(&pool, &codec, item, None).await?;
    }

    // Load in reverse to prove ordering comes from the stored position
    let rows = sqlx::query("SELECT name, position FROM todo_item ORDER BY name DESC")
        .fetch_all(&pool)
        .await?;
    let loaded: Vec<TodoItem> = rows
        .iter()
        .map(|row| {
            let mut item = TodoItem::new(row.get::<String, _>("name").as_str());
            item.position = Position::from_stored(row.get::<i32, _>("position"));
            item
        })
        .collect();

    let reloaded = OrderingList::from_loaded(loaded);
    assert_eq!(names(&reloaded), vec!["zeroth", "first", "third", "fourth"]);
    assert!(reloaded.is_dense());
    assert_eq!(reloaded[3].position(), Some(3));

    Ok(())
}
