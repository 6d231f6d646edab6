use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::url_diff::values_equal;

/// Query parameters keyed by name, in order of first appearance
pub type ParamMap = IndexMap<String, ParamValue>;

/// A decoded query parameter value
///
/// Plain text passes through as `Text`. Keys repeated in the query string
/// collect their values into a `List`. Values that parse as JSON after
/// decoding are kept as `Json` so structured parameters surface as nested data.
#[derive(Debug, Clone)]
pub enum ParamValue {
    Text(String),
    List(Vec<ParamValue>),
    Json(serde_json::Value),
}

impl ParamValue {
    /// Projects the value onto its JSON shape, which is what gets compared and rendered
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            ParamValue::Text(text) => serde_json::Value::String(text.clone()),
            ParamValue::List(items) => {
                serde_json::Value::Array(items.iter().map(ParamValue::to_json).collect())
            }
            ParamValue::Json(value) => value.clone(),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParamValue::Text(text) => Some(text),
            ParamValue::Json(serde_json::Value::String(text)) => Some(text),
            _ => None,
        }
    }
}

impl From<serde_json::Value> for ParamValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(text) => ParamValue::Text(text),
            other => ParamValue::Json(other),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(text: &str) -> Self {
        ParamValue::Text(text.to_string())
    }
}

impl PartialEq for ParamValue {
    fn eq(&self, other: &Self) -> bool {
        values_equal(&self.to_json(), &other.to_json())
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Text(text) => serializer.serialize_str(text),
            ParamValue::List(items) => items.serialize(serializer),
            ParamValue::Json(value) => value.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ParamValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(ParamValue::from)
    }
}

/// Readable decomposition of a URL: its base URL plus decoded query parameters
///
/// `error` is set only when the input could not be parsed as a URL, in which
/// case `base_url` is empty and `params` holds nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedUrl {
    pub base_url: String,
    #[serde(default)]
    pub params: ParamMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ParsedUrl {
    pub fn success(base_url: String, params: ParamMap) -> Self {
        Self {
            base_url,
            params,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            base_url: String::new(),
            params: ParamMap::new(),
            error: Some(message.into()),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}
