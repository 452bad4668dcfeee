//! Lenient text decoding for backend fields.
//!
//! The product backend stores `price` as text but `id` and `count` as
//! integers, and older records may carry either. Form fields are plain text,
//! so every scalar is accepted and kept as its textual form.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize a JSON scalar (string, number, bool) into `Option<String>`.
///
/// `null` and missing keys (with `#[serde(default)]`) map to `None`.
pub fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Holder {
        #[serde(default, deserialize_with = "deserialize_text")]
        value: Option<String>,
    }

    fn decode(json: &str) -> Option<String> {
        serde_json::from_str::<Holder>(json).unwrap().value
    }

    #[test]
    fn test_scalars_become_text() {
        assert_eq!(decode(r#"{"value": "12.50"}"#), Some("12.50".to_string()));
        assert_eq!(decode(r#"{"value": 7}"#), Some("7".to_string()));
        assert_eq!(decode(r#"{"value": 2.5}"#), Some("2.5".to_string()));
        assert_eq!(decode(r#"{"value": true}"#), Some("true".to_string()));
    }

    #[test]
    fn test_null_and_missing() {
        assert_eq!(decode(r#"{"value": null}"#), None);
        assert_eq!(decode("{}"), None);
    }
}
