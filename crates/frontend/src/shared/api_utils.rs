//! API utilities for frontend-backend communication
//!
//! Builds API URLs and wraps `gloo-net` requests so that every call carries
//! the bearer token and reports failures as [`FetchError`].

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::shared::data_view::FetchError;
use crate::system::auth::storage;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/api/products/123");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn check(response: Response) -> Result<Response, FetchError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .filter(|body| !body.trim().is_empty())
        .unwrap_or_else(|| response.status_text());
    Err(FetchError::from_status(status, message))
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, FetchError> {
    response
        .json::<T>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// GET `path` and decode the JSON body
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let response = with_auth(gloo_net::http::Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

/// POST `body` as JSON to `path` and decode the JSON reply
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, FetchError> {
    let response = with_auth(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| FetchError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    decode(check(response).await?).await
}

/// DELETE `path`, passing the record's concurrency stamp
pub async fn delete_with_stamp(path: &str, stamp: &str) -> Result<(), FetchError> {
    let url = format!("{}?stamp={}", api_url(path), urlencoding::encode(stamp));
    let response = with_auth(gloo_net::http::Request::delete(&url))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    check(response).await?;
    Ok(())
}
