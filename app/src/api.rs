//! Catalog API client.
//!
//! One fetch per page view against the public DummyJSON catalog; no retry,
//! no validation beyond the product shape deserializing.

use gloo_net::http::Request;
use storefront_commerce::{Product, ProductsResponse};
use thiserror::Error;

const API_BASE: &str = "https://dummyjson.com";

/// Errors from the catalog API boundary.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// Request never completed (network failure, CORS, aborted).
    #[error("Request failed: {0}")]
    Request(String),

    /// Non-2xx response.
    #[error("Catalog API returned status {0}")]
    Status(u16),

    /// Response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Fetch the full product collection.
pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    let response = Request::get(&format!("{API_BASE}/products"))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    let body: ProductsResponse = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    Ok(body.products)
}

/// Fetch a single product by id.
pub async fn fetch_product(id: u64) -> Result<Product, ApiError> {
    let response = Request::get(&format!("{API_BASE}/products/{id}"))
        .send()
        .await
        .map_err(|e| ApiError::Request(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
