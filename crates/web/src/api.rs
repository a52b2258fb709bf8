//! Items API client.

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

use catalog::{NewProduct, Product, ProductUpdate, ProductUuid};

/// Collection URL used when none is configured at build time.
pub const DEFAULT_API_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(url) => url,
    None => "http://localhost:4000/items",
};

/// Failures talking to the items API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network, CORS or body decoding failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The item no longer exists.
    #[error("item not found")]
    NotFound,

    /// Any other non-success response.
    #[error("server responded with status {0}")]
    Status(u16),
}

/// Remote operations on the `/items` collection.
pub trait ItemsApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError>;

    async fn create(&self, product: &NewProduct) -> Result<Product, ApiError>;

    async fn update(&self, id: ProductUuid, update: &ProductUpdate) -> Result<Product, ApiError>;

    async fn delete(&self, id: ProductUuid) -> Result<Product, ApiError>;
}

/// [`ItemsApi`] over HTTP with JSON bodies.
#[derive(Debug, Clone)]
pub struct HttpItemsApi {
    client: Client,
    base_url: String,
}

impl HttpItemsApi {
    /// Client for the collection at `base_url`, e.g. `http://localhost:4000/items`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn item_url(&self, id: ProductUuid) -> String {
        format!("{}/{id}", self.base_url)
    }
}

impl Default for HttpItemsApi {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl ItemsApi for HttpItemsApi {
    async fn list(&self) -> Result<Vec<Product>, ApiError> {
        decode(self.client.get(&self.base_url).send().await?).await
    }

    async fn create(&self, product: &NewProduct) -> Result<Product, ApiError> {
        decode(self.client.post(&self.base_url).json(product).send().await?).await
    }

    async fn update(&self, id: ProductUuid, update: &ProductUpdate) -> Result<Product, ApiError> {
        decode(self.client.put(self.item_url(id)).json(update).send().await?).await
    }

    async fn delete(&self, id: ProductUuid) -> Result<Product, ApiError> {
        decode(self.client.delete(self.item_url(id)).send().await?).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ApiError::NotFound),
        status if !status.is_success() => Err(ApiError::Status(status.as_u16())),
        _ => Ok(response.json().await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_urls_ignore_trailing_slash() {
        let id = ProductUuid::new();
        let api = HttpItemsApi::new("http://localhost:4000/items/");

        assert_eq!(api.item_url(id), format!("http://localhost:4000/items/{id}"));
    }
}
