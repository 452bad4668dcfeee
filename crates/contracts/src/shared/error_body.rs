use super::text_field::deserialize_text;
use serde::{Deserialize, Serialize};

/// Error payload returned by the backend on non-2xx responses
///
/// Shape: `{"status": 404, "error": "Not Found", "message": "..."}`.
/// Only `message` is shown to the user, so every field is decoded as loose
/// text and an odd `status` or `error` never hides the message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub error: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parse an error body, returning `None` when the text is not a JSON object.
    pub fn parse(text: &str) -> Option<Self> {
        serde_json::from_str(text).ok()
    }

    /// The `message` field, if present and non-blank
    pub fn usable_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .filter(|m| !m.trim().is_empty())
    }
}
