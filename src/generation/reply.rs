//! Structured replies from the completion service.
//!
//! The service is asked for a JSON object but nothing guarantees it sends one,
//! or that the object carries the fields a use case needs. Every read goes
//! through the typed accessors here so a missing or mistyped field is reported
//! rather than defaulted.

use crate::error::ApiError;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq)]
pub struct StructuredReply {
    fields: Map<String, Value>,
}

impl StructuredReply {
    /// Parse raw reply text into a field map.
    ///
    /// A surrounding markdown code fence is tolerated; anything other than a
    /// JSON object is a [`ApiError::MalformedReply`].
    pub fn parse(raw: &str) -> Result<Self, ApiError> {
        let body = strip_code_fence(raw.trim());
        if body.is_empty() {
            return Err(ApiError::MalformedReply("reply was empty".to_string()));
        }

        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(fields)) => Ok(Self { fields }),
            Ok(other) => Err(ApiError::MalformedReply(format!(
                "expected a JSON object, got {}",
                json_kind(&other)
            ))),
            Err(e) => Err(ApiError::MalformedReply(e.to_string())),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.fields
    }

    /// A required string field. `null` counts as missing.
    pub fn require_str(&self, field: &str) -> Result<String, ApiError> {
        match self.fields.get(field) {
            None | Some(Value::Null) => Err(ApiError::MissingField(field.to_string())),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ApiError::FieldType {
                field: field.to_string(),
                expected: "string",
            }),
        }
    }

    /// A required list of strings. An empty list is accepted.
    pub fn require_str_list(&self, field: &str) -> Result<Vec<String>, ApiError> {
        let items = match self.fields.get(field) {
            None | Some(Value::Null) => return Err(ApiError::MissingField(field.to_string())),
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(ApiError::FieldType {
                    field: field.to_string(),
                    expected: "array of strings",
                })
            }
        };

        items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                _ => Err(ApiError::FieldType {
                    field: field.to_string(),
                    expected: "array of strings",
                }),
            })
            .collect()
    }
}

fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop the language tag line (```json), then the closing fence.
    let rest = match rest.find('\n') {
        Some(idx) => &rest[idx + 1..],
        None => rest,
    };
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
