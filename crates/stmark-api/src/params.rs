// SPDX-License-Identifier: Apache-2.0

use crate::ApiError;
use serde_json::{Map, Value};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyError {
    /// Text does not parse as JSON.
    InvalidJson(String),
    /// Bytes do not decode as UTF-8.
    InvalidUtf8(String),
    /// JSON parsed but is not an object; carries the JSON type name.
    NotAnObject(&'static str),
}

impl BodyError {
    /// JSON parse failures are client errors. Undecodable bytes and
    /// non-object bodies are unexpected failures whose description is
    /// reported through `unexpected`.
    #[must_use]
    pub fn into_api_error(self, unexpected: impl FnOnce(&str) -> ApiError) -> ApiError {
        match &self {
            Self::InvalidJson(_) => ApiError::invalid_json(),
            Self::InvalidUtf8(_) | Self::NotAnObject(_) => unexpected(&self.to_string()),
        }
    }
}

impl Display for BodyError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidJson(reason) => write!(f, "invalid JSON body: {reason}"),
            Self::InvalidUtf8(reason) => write!(f, "body is not valid UTF-8: {reason}"),
            Self::NotAnObject(kind) => write!(f, "expected a JSON object body, got {kind}"),
        }
    }
}

impl std::error::Error for BodyError {}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Parsed request body. No field is required; lookups fall back to defaults
/// and present values are returned verbatim.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JsonBody(Map<String, Value>);

impl JsonBody {
    #[must_use]
    pub fn raw(&self, key: &str, default: Value) -> Value {
        self.0.get(key).cloned().unwrap_or(default)
    }

    /// Field value, `""` when absent.
    #[must_use]
    pub fn text(&self, key: &str) -> Value {
        self.raw(key, Value::String(String::new()))
    }

    /// Index field value, `-1` when absent.
    #[must_use]
    pub fn index(&self, key: &str) -> Value {
        self.raw(key, Value::from(-1))
    }

    /// String view used for dispatch; non-strings read as `""`.
    #[must_use]
    pub fn str_or_empty(&self, key: &str) -> &str {
        self.0.get(key).and_then(Value::as_str).unwrap_or("")
    }
}

pub fn parse_json_body(bytes: &[u8]) -> Result<JsonBody, BodyError> {
    let text = std::str::from_utf8(bytes).map_err(|e| BodyError::InvalidUtf8(e.to_string()))?;
    let value: Value =
        serde_json::from_str(text).map_err(|e| BodyError::InvalidJson(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(JsonBody(map)),
        other => Err(BodyError::NotAnObject(json_kind(&other))),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialStatsFormat {
    Full,
    Simple,
}

impl SocialStatsFormat {
    /// Unrecognized or missing values mean `Full`.
    #[must_use]
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("simple") => Self::Simple,
            _ => Self::Full,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WelcomeAction {
    Navigate,
    HighlightInteraction,
}

impl WelcomeAction {
    pub fn parse(action: &str) -> Result<Self, ApiError> {
        match action {
            "navigate" => Ok(Self::Navigate),
            "highlight_interaction" => Ok(Self::HighlightInteraction),
            other => Err(ApiError::invalid_action(other)),
        }
    }
}

#[must_use]
pub fn navigation_target_url(target: &str) -> &'static str {
    match target {
        "about" => "/about",
        "admissions" => "/admissions",
        _ => "/",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_kind_names_match_serde_value_variants() {
        assert_eq!(json_kind(&Value::from(1)), "number");
        assert_eq!(json_kind(&Value::Null), "null");
    }
}
