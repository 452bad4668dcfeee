use crate::shared::text_field::deserialize_text;
use serde::{Deserialize, Serialize};

// ============================================================================
// Product (response)
// ============================================================================

/// Product as returned by the backend
///
/// The client never interprets the values, it only reflects them back into
/// the form, so every field is optional text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(default, deserialize_with = "deserialize_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub color: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub price: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub count: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub description: Option<String>,
}

// ============================================================================
// DTO (request body)
// ============================================================================

/// Body of create and update requests.
///
/// Exactly the six editable fields; the id travels in the path.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub name: String,
    pub category: String,
    pub color: String,
    pub price: String,
    pub count: String,
    pub description: String,
}
