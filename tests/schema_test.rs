// ABOUTME: Integration tests for schema fragments and pre-insert hooks
// ABOUTME: Validates mixin composition, conflicts, naming, DDL per dialect and hook ordering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use brussels::schema::{
    ColumnDef, ColumnType, Dialect, InsertContext, NamingConvention, OrderedMixin, PreInsert,
    PreUpdate, PrimaryKeyMixin, TableSchema, TimestampMixin,
};
use brussels_core::ErrorCode;
use chrono::DateTime;
use common::TodoItem;

fn todo_schema() -> TableSchema {
    TableSchema::builder("todo_item")
        .mixin(&PrimaryKeyMixin)
        .mixin(&TimestampMixin)
        .mixin(&OrderedMixin)
        .column(ColumnDef::new("name", ColumnType::Text))
        .column(ColumnDef::new("note", ColumnType::EncryptedString).nullable())
        .column(ColumnDef::new("list_id", ColumnType::Uuid).references("todo_list", "id"))
        .build()
        .unwrap()
}

#[test]
fn test_columns_follow_declaration_order() {
    let schema = todo_schema();
    let names: Vec<&str> = schema.columns().iter().map(|c| c.name.as_str()).collect();

    assert_eq!(
        names,
        vec![
            "id",
            "created_at",
            "updated_at",
            "deleted_at",
            "position",
            "name",
            "note",
            "list_id"
        ]
    );
    assert_eq!(schema.constructor_fields(), vec!["name", "note", "list_id"]);
}

#[test]
fn test_duplicate_column_is_schema_conflict() {
    let error = TableSchema::builder("todo_item")
        .mixin(&TimestampMixin)
        .mixin(&TimestampMixin)
        .build()
        .unwrap_err();

    assert_eq!(error.code, ErrorCode::SchemaConflict);
    assert!(error.message.contains("created_at"));
}

#[test]
fn test_primary_key_column_flags() {
    let schema = todo_schema();
    let id = schema.column("id").unwrap();

    assert!(id.primary_key && id.unique && id.index);
    assert!(!id.constructor);
    assert!(schema.column("deleted_at").unwrap().nullable);
}

#[test]
fn test_sqlite_ddl_omits_uuidv7_default() {
    let ddl = todo_schema().create_table_sql(Dialect::Sqlite);

    assert!(ddl.starts_with("CREATE TABLE IF NOT EXISTS todo_item ("));
    assert!(ddl.contains("id TEXT NOT NULL,"));
    assert!(!ddl.contains("uuidv7"));
    assert!(ddl.contains("created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP"));
    assert!(ddl.contains("deleted_at TIMESTAMP,"));
    assert!(ddl.contains("note TEXT,"));
    assert!(ddl.contains("CONSTRAINT pk_todo_item PRIMARY KEY (id)"));
    assert!(ddl.contains("CONSTRAINT uq_todo_item_id UNIQUE (id)"));
    assert!(ddl.contains(
        "CONSTRAINT fk_todo_item_list_id_todo_list FOREIGN KEY (list_id) REFERENCES todo_list (id)"
    ));
}

#[test]
fn test_postgres_ddl_uses_native_types() {
    let ddl = todo_schema().create_table_sql(Dialect::Postgresql);

    assert!(ddl.contains("id UUID NOT NULL DEFAULT uuidv7()"));
    assert!(ddl.contains("created_at TIMESTAMP WITH TIME ZONE NOT NULL"));
}

#[test]
fn test_index_statements() {
    let statements = todo_schema().create_index_sql(Dialect::Sqlite);

    assert_eq!(
        statements,
        vec![
            "CREATE INDEX IF NOT EXISTS ix_todo_item_id ON todo_item (id)".to_owned(),
            "CREATE INDEX IF NOT EXISTS ix_todo_item_position ON todo_item (position)".to_owned(),
        ]
    );
}

#[test]
fn test_jsonb_index_uses_gin_on_postgres() {
    let schema = TableSchema::builder("event")
        .column(ColumnDef::new("payload", ColumnType::Json).indexed())
        .build()
        .unwrap();

    assert_eq!(
        schema.create_index_sql(Dialect::Postgresql),
        vec!["CREATE INDEX IF NOT EXISTS ix_event_payload ON event USING GIN (payload)".to_owned()]
    );
    assert!(!schema.create_index_sql(Dialect::Sqlite)[0].contains("GIN"));
}

#[test]
fn test_custom_naming_convention() {
    let naming = NamingConvention {
        index: "idx_%(table_name)s__%(column_0_name)s".to_owned(),
        ..NamingConvention::default()
    };
    let schema = TableSchema::builder("todo_item")
        .mixin(&OrderedMixin)
        .naming(naming)
        .build()
        .unwrap();

    assert_eq!(
        schema.create_index_sql(Dialect::Sqlite),
        vec![
            "CREATE INDEX IF NOT EXISTS idx_todo_item__position ON todo_item (position)".to_owned()
        ]
    );
}

#[test]
fn test_capability_table() {
    let sqlite = Dialect::Sqlite.capabilities();
    let postgres = Dialect::Postgresql.capabilities();

    assert!(!sqlite.server_uuid_v7 && !sqlite.jsonb && !sqlite.native_uuid);
    assert!(postgres.server_uuid_v7 && postgres.jsonb && postgres.timestamptz);
    assert_eq!("postgresql".parse::<Dialect>().unwrap().to_string(), "postgresql");
}

#[test]
fn test_entity_hooks_on_sqlite() {
    let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
    let mut item = TodoItem::new("write tests");
    item.pre_insert(&InsertContext::at(Dialect::Sqlite, now));

    assert!(item.key.id.is_some());
    assert_eq!(item.stamps.created_at, Some(now));
    assert_eq!(item.stamps.updated_at, Some(now));
}

#[test]
fn test_entity_hooks_on_postgres_leave_id_to_server() {
    let mut item = TodoItem::new("write tests");
    item.pre_insert(&InsertContext::new(Dialect::Postgresql));

    assert!(item.key.id.is_none());
    assert!(item.stamps.created_at.is_some());
}

#[test]
fn test_update_and_soft_delete() {
    let inserted = DateTime::from_timestamp(1_000, 0).unwrap();
    let updated = DateTime::from_timestamp(2_000, 0).unwrap();
    let deleted = DateTime::from_timestamp(3_000, 0).unwrap();

    let mut item = TodoItem::new("temporary");
    item.pre_insert(&InsertContext::at(Dialect::Sqlite, inserted));
    let id = item.key.id;

    item.pre_update(&InsertContext::at(Dialect::Sqlite, updated));
    assert_eq!(item.stamps.created_at, Some(inserted));
    assert_eq!(item.stamps.updated_at, Some(updated));

    item.stamps.mark_deleted(deleted);
    assert!(item.stamps.is_deleted());
    assert_eq!(item.stamps.updated_at, Some(deleted));

    // A second insert pass never replaces an assigned id
    item.pre_insert(&InsertContext::at(Dialect::Sqlite, deleted));
    assert_eq!(item.key.id, id);
}
