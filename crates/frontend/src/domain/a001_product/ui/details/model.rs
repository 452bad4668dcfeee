use crate::shared::api_error::ApiError;
use crate::shared::api_utils::api_url;
use contracts::domain::a001_product::{
    HttpMethod, Product, ProductDto, ProductRequest, ProductSearchQuery,
};
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Backend health report
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    #[serde(default)]
    pub message: Option<String>,
}

/// Send one request; non-2xx responses become `ApiError`
async fn send(request: &ProductRequest) -> Result<Response, ApiError> {
    let url = api_url(&request.path);
    log::debug!("{} {}", request.method, url);

    let builder: RequestBuilder = match request.method {
        HttpMethod::Get => Request::get(&url),
        HttpMethod::Post => Request::post(&url),
        HttpMethod::Put => Request::put(&url),
        HttpMethod::Delete => Request::delete(&url),
    }
    .header("Accept", "application/json");

    let sent = match &request.body {
        Some(body) => {
            builder
                .json(body)
                .map_err(|e| ApiError::Encode(e.to_string()))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    let response = sent.map_err(|e| ApiError::Transport(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_response(status, &body));
    }

    Ok(response)
}

async fn send_json<T: DeserializeOwned>(request: &ProductRequest) -> Result<T, ApiError> {
    let response = send(request).await?;
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a product
pub async fn create(dto: ProductDto) -> Result<Product, ApiError> {
    send_json(&ProductRequest::create(dto)).await
}

/// Update a product
pub async fn update(id: &str, dto: ProductDto) -> Result<Product, ApiError> {
    send_json(&ProductRequest::update(id, dto)).await
}

/// Load a product by ID
pub async fn fetch_by_id(id: &str) -> Result<Product, ApiError> {
    send_json(&ProductRequest::retrieve(id)).await
}

pub async fn add_unit(id: &str) -> Result<Product, ApiError> {
    send_json(&ProductRequest::add_unit(id)).await
}

pub async fn sell_unit(id: &str) -> Result<Product, ApiError> {
    send_json(&ProductRequest::sell_unit(id)).await
}

/// Delete a product; the response body is ignored
pub async fn delete(id: &str) -> Result<(), ApiError> {
    send(&ProductRequest::delete(id)).await.map(|_| ())
}

pub async fn search(query: &ProductSearchQuery) -> Result<Vec<Product>, ApiError> {
    send_json(&ProductRequest::search(query)).await
}

/// Products with stock left
pub async fn list_available() -> Result<Vec<Product>, ApiError> {
    send_json(&ProductRequest::available()).await
}

pub async fn healthcheck() -> Result<Health, ApiError> {
    send_json(&ProductRequest::healthcheck()).await
}
