//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// Taken from `[api] base_url` in the configuration, without a trailing
/// slash.
///
/// # Returns
/// - API base URL like "http://localhost:5000"
/// - Empty string when the backend is served from the same origin, so
///   request URLs stay relative ("/products")
pub fn api_base() -> String {
    base_from(&config().api.base_url)
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/")
///
/// # Example
/// ```ignore
/// let url = api_url("/products/42");
/// ```
pub fn api_url(path: &str) -> String {
    join(&api_base(), path)
}

fn base_from(configured: &str) -> String {
    configured.trim().trim_end_matches('/').to_string()
}

fn join(base: &str, path: &str) -> String {
    format!("{}{}", base, path)
}
