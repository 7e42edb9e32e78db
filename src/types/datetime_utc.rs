// ABOUTME: Codec normalizing every timestamp to UTC on write and read
// ABOUTME: Naive timestamps are tagged UTC without shifting, aware ones are converted
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::ColumnCodec;
use crate::schema::ColumnType;
use brussels_core::constants::codec_names::DATETIME_UTC;
use brussels_core::{CodecError, CodecResult, ColumnValue};
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

const DATE_HINT: &str = "If using a date, convert it to a timestamp first by combining it \
                         with a zero time of day: date.and_time(NaiveTime::MIN)";

/// Naive layouts accepted from text storage, all read as UTC wall-clock time
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// Offset layout `SQLite` produces for timestamps written without the `T` separator
const OFFSET_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f%:z";

/// Timestamps that can be normalized to UTC
pub trait IntoUtc {
    /// Same instant, tagged UTC
    fn into_utc(self) -> DateTime<Utc>;
}

impl IntoUtc for NaiveDateTime {
    fn into_utc(self) -> DateTime<Utc> {
        Utc.from_utc_datetime(&self)
    }
}

impl<Tz: TimeZone> IntoUtc for DateTime<Tz> {
    fn into_utc(self) -> DateTime<Utc> {
        self.with_timezone(&Utc)
    }
}

/// UTC datetime codec
///
/// Stateless: a single instance can serve every column.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeUtc;

impl DateTimeUtc {
    /// Normalize one timestamp
    #[must_use]
    pub fn normalize(value: impl IntoUtc) -> DateTime<Utc> {
        value.into_utc()
    }

    /// Normalize an optional timestamp on the write path
    #[must_use]
    pub fn encode<T: IntoUtc>(value: Option<T>) -> Option<DateTime<Utc>> {
        value.map(IntoUtc::into_utc)
    }

    /// Normalize an optional timestamp on the read path
    #[must_use]
    pub fn decode<T: IntoUtc>(value: Option<T>) -> Option<DateTime<Utc>> {
        value.map(IntoUtc::into_utc)
    }

    /// Parse a timestamp stored as text
    ///
    /// # Errors
    ///
    /// Returns `InvalidStoredValue` if the text matches no accepted layout
    pub fn parse_stored(text: &str) -> CodecResult<DateTime<Utc>> {
        if let Ok(aware) = DateTime::parse_from_rfc3339(text) {
            return Ok(aware.into_utc());
        }
        if let Ok(aware) = DateTime::parse_from_str(text, OFFSET_FORMAT) {
            return Ok(aware.into_utc());
        }
        NAIVE_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
            .map(IntoUtc::into_utc)
            .ok_or_else(|| {
                CodecError::invalid_stored_value(
                    DATETIME_UTC,
                    format!("'{text}' is not a recognized timestamp"),
                )
            })
    }
}

fn tagged(value: DateTime<Utc>) -> ColumnValue {
    ColumnValue::Timestamp(value.fixed_offset())
}

impl ColumnCodec for DateTimeUtc {
    fn name(&self) -> &'static str {
        DATETIME_UTC
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::DateTimeUtc
    }

    fn process_bind(&self, value: ColumnValue) -> CodecResult<ColumnValue> {
        match value {
            ColumnValue::Null => Ok(ColumnValue::Null),
            ColumnValue::NaiveTimestamp(naive) => Ok(tagged(naive.into_utc())),
            ColumnValue::Timestamp(aware) => Ok(tagged(aware.into_utc())),
            other => Err(CodecError::type_mismatch_with_hint(
                DATETIME_UTC,
                "timestamp",
                other.type_name(),
                DATE_HINT,
            )),
        }
    }

    fn process_result(&self, value: ColumnValue) -> CodecResult<ColumnValue> {
        match value {
            ColumnValue::Null => Ok(ColumnValue::Null),
            ColumnValue::NaiveTimestamp(naive) => Ok(tagged(naive.into_utc())),
            ColumnValue::Timestamp(aware) => Ok(tagged(aware.into_utc())),
            ColumnValue::Text(text) => Self::parse_stored(&text).map(tagged),
            other => Err(CodecError::invalid_stored_value(
                DATETIME_UTC,
                format!("expected a timestamp, got {}", other.type_name()),
            )),
        }
    }
}
