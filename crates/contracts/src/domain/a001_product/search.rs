/// Search criteria sent to `GET /products`
///
/// Only `name` and `category` are part of the query. The form also holds
/// price, color, count and description, but the backend search never
/// received them and they stay out of the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductSearchQuery {
    pub name: String,
    pub category: String,
}

impl ProductSearchQuery {
    pub fn new(name: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
        }
    }

    /// Build the query string without the leading `?`.
    ///
    /// Empty criteria are skipped; both empty yields an empty string.
    pub fn to_query_string(&self) -> String {
        let mut query = String::new();

        if !self.name.is_empty() {
            query.push_str("name=");
            query.push_str(&urlencoding::encode(&self.name));
        }
        if !self.category.is_empty() {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str("category=");
            query.push_str(&urlencoding::encode(&self.category));
        }

        query
    }
}
