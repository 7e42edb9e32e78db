// ABOUTME: Logical JSON column stored as JSONB on PostgreSQL and JSON text on SQLite
// ABOUTME: Passes documents through and lifts scalars into JSON values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Brussels Contributors

use super::ColumnCodec;
use crate::schema::ColumnType;
use brussels_core::constants::codec_names::JSON;
use brussels_core::{CodecError, CodecResult, ColumnValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Number, Value};

/// JSON codec
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl Json {
    /// Serialize a typed value into a JSON column value
    ///
    /// # Errors
    ///
    /// Returns `TypeMismatch` if the value has no JSON representation
    pub fn encode<T: Serialize>(value: &T) -> CodecResult<ColumnValue> {
        serde_json::to_value(value)
            .map(ColumnValue::Json)
            .map_err(|e| CodecError::TypeMismatch {
                received: std::any::type_name::<T>(),
                message: format!("{JSON} cannot serialize value: {e}"),
            })
    }

    /// Deserialize a stored JSON column value into a typed value
    ///
    /// # Errors
    ///
    /// Returns `InvalidStoredValue` if the document does not match `T`
    pub fn decode<T: DeserializeOwned>(value: ColumnValue) -> CodecResult<T> {
        let document = match Self.process_result(value)? {
            ColumnValue::Json(document) => document,
            _ => Value::Null,
        };
        serde_json::from_value(document)
            .map_err(|e| CodecError::invalid_stored_value(JSON, e.to_string()))
    }
}

impl ColumnCodec for Json {
    fn name(&self) -> &'static str {
        JSON
    }

    fn column_type(&self) -> ColumnType {
        ColumnType::Json
    }

    fn process_bind(&self, value: ColumnValue) -> CodecResult<ColumnValue> {
        let document = match value {
            ColumnValue::Null => return Ok(ColumnValue::Null),
            ColumnValue::Json(document) => document,
            ColumnValue::Bool(flag) => Value::Bool(flag),
            ColumnValue::Integer(number) => Value::from(number),
            ColumnValue::Float(number) => Number::from_f64(number)
                .map(Value::Number)
                .ok_or_else(|| CodecError::TypeMismatch {
                    received: "float",
                    message: format!("{JSON} requires a finite float, got {number}."),
                })?,
            ColumnValue::Text(text) => Value::String(text),
            other => {
                return Err(CodecError::type_mismatch(
                    JSON,
                    "JSON-compatible",
                    other.type_name(),
                ))
            }
        };
        Ok(ColumnValue::Json(document))
    }

    fn process_result(&self, value: ColumnValue) -> CodecResult<ColumnValue> {
        match value {
            ColumnValue::Null => Ok(ColumnValue::Null),
            ColumnValue::Json(document) => Ok(ColumnValue::Json(document)),
            ColumnValue::Text(text) => serde_json::from_str(&text)
                .map(ColumnValue::Json)
                .map_err(|e| CodecError::invalid_stored_value(JSON, e.to_string())),
            other => Err(CodecError::invalid_stored_value(
                JSON,
                format!("expected JSON text, got {}", other.type_name()),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_float_rejected() {
        let error = Json.process_bind(ColumnValue::Float(f64::NAN)).unwrap_err();
        assert!(matches!(error, CodecError::TypeMismatch { received: "float", .. }));
    }

    #[test]
    fn test_text_result_is_parsed() {
        let value = Json
            .process_result(ColumnValue::Text(r#"{"a":[1,2]}"#.to_owned()))
            .unwrap();
        assert_eq!(value, ColumnValue::Json(serde_json::json!({"a": [1, 2]})));
    }
}
