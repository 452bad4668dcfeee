use super::aggregate::ProductDto;
use super::search::ProductSearchQuery;
use std::fmt;

pub const PRODUCTS_PATH: &str = "/products";
pub const HEALTHCHECK_PATH: &str = "/healthcheck";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One call against the product backend: method, path (relative to the API
/// base) and optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<ProductDto>,
}

impl ProductRequest {
    fn new(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            body: None,
        }
    }

    fn with_body(mut self, body: ProductDto) -> Self {
        self.body = Some(body);
        self
    }

    /// `POST /products`
    pub fn create(dto: ProductDto) -> Self {
        Self::new(HttpMethod::Post, PRODUCTS_PATH.to_string()).with_body(dto)
    }

    /// `PUT /products/{id}`
    pub fn update(id: &str, dto: ProductDto) -> Self {
        Self::new(HttpMethod::Put, item_path(id)).with_body(dto)
    }

    /// `GET /products/{id}`
    pub fn retrieve(id: &str) -> Self {
        Self::new(HttpMethod::Get, item_path(id))
    }

    /// `PUT /products/{id}/add_unit`
    pub fn add_unit(id: &str) -> Self {
        Self::new(HttpMethod::Put, format!("{}/add_unit", item_path(id)))
    }

    /// `PUT /products/{id}/sell_products`
    pub fn sell_unit(id: &str) -> Self {
        Self::new(HttpMethod::Put, format!("{}/sell_products", item_path(id)))
    }

    /// `DELETE /products/{id}`
    pub fn delete(id: &str) -> Self {
        Self::new(HttpMethod::Delete, item_path(id))
    }

    /// `GET /products?<query>`
    pub fn search(query: &ProductSearchQuery) -> Self {
        Self::new(
            HttpMethod::Get,
            format!("{}?{}", PRODUCTS_PATH, query.to_query_string()),
        )
    }

    /// `GET /products/available`
    pub fn available() -> Self {
        Self::new(HttpMethod::Get, format!("{}/available", PRODUCTS_PATH))
    }

    /// `GET /healthcheck`
    pub fn healthcheck() -> Self {
        Self::new(HttpMethod::Get, HEALTHCHECK_PATH.to_string())
    }
}

fn item_path(id: &str) -> String {
    format!("{}/{}", PRODUCTS_PATH, urlencoding::encode(id))
}
