// ABOUTME: Criterion benchmarks for the column codecs and position maintenance
// ABOUTME: Measures encrypt and decrypt throughput, timestamp normalization and list renumbering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

//! Criterion benchmarks for the column codecs.
//!
//! Covers the encrypted string token path at several payload sizes, UTC
//! normalization of stored timestamps, and renumbering of ordered lists.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use brussels::ordering::{OrderingList, Position, Positioned};
use brussels::types::{ColumnCodec, DateTimeUtc, EncryptedString, Json};
use brussels_core::ColumnValue;
use chrono::{FixedOffset, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use serde_json::json;

const BENCH_KEY: &str = "MDEyMzQ1Njc4OWFiY2RlZjAxMjM0NTY3ODlhYmNkZWY=";

#[derive(Debug, Clone, Default)]
struct Card {
    position: Position,
}

impl Positioned for Card {
    fn ordinal(&self) -> &Position {
        &self.position
    }

    fn ordinal_mut(&mut self) -> &mut Position {
        &mut self.position
    }
}

/// Benchmark token creation and opening
#[allow(clippy::cast_possible_truncation)]
fn bench_encrypted_string(c: &mut Criterion) {
    let codec = EncryptedString::new(BENCH_KEY).unwrap();
    let mut group = c.benchmark_group("encrypted_string");

    for size in [16_usize, 1024, 64 * 1024] {
        let plaintext = "x".repeat(size);
        let token = codec.encrypt(&plaintext).unwrap();

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("encrypt_{size}"), |b| {
            b.iter(|| codec.encrypt(black_box(&plaintext)));
        });
        group.bench_function(format!("decrypt_{size}"), |b| {
            b.iter(|| codec.decrypt(black_box(&token)));
        });
    }

    group.finish();
}

/// Benchmark timestamp normalization on both hooks
fn bench_datetime_utc(c: &mut Criterion) {
    let mut group = c.benchmark_group("datetime_utc");

    let offset = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
    let aware = offset.with_ymd_and_hms(2024, 3, 10, 14, 30, 0).unwrap();
    group.bench_function("bind_aware", |b| {
        b.iter(|| DateTimeUtc.process_bind(black_box(ColumnValue::Timestamp(aware))));
    });

    let stored = ColumnValue::Text("2024-03-10 09:00:00".to_owned());
    group.bench_function("result_from_text", |b| {
        b.iter(|| DateTimeUtc.process_result(black_box(stored.clone())));
    });

    group.finish();
}

/// Benchmark JSON lifting and parsing
fn bench_json(c: &mut Criterion) {
    let mut group = c.benchmark_group("json");

    let document = json!({"theme": "dark", "columns": [1, 2, 3], "nested": {"on": true}});
    let text = ColumnValue::Text(document.to_string());
    group.bench_function("result_from_text", |b| {
        b.iter(|| Json.process_result(black_box(text.clone())));
    });

    group.finish();
}

/// Benchmark renumbering after front inserts
fn bench_ordering(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordering_list");

    for size in [10_usize, 1000] {
        let list: OrderingList<Card> = (0..size).map(|_| Card::default()).collect();
        group.bench_function(format!("insert_front_{size}"), |b| {
            b.iter_batched(
                || list.clone(),
                |mut list| list.insert(0, Card::default()),
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_encrypted_string,
    bench_datetime_utc,
    bench_json,
    bench_ordering
);
criterion_main!(benches);
