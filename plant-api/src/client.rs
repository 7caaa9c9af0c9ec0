use serde_json::Value;
use thiserror::Error;

use crate::CatalogUrl;

/// Client for the remote plant catalog API.
///
/// The upstream API is flaky and loosely shaped, so every public fetch
/// degrades to `None` on failure instead of surfacing an error. Callers
/// treat `None` the same as "no data" and render an empty list.
pub struct CatalogClient {
    base_url: CatalogUrl,
}

impl Default for CatalogClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogClient {
    pub fn new() -> Self {
        Self {
            base_url: CatalogUrl::new(),
        }
    }

    pub fn with_base(base_url: CatalogUrl) -> Self {
        Self { base_url }
    }

    async fn fetch_json(&self, url: impl AsRef<str>) -> Result<Value, CatalogFetchError> {
        let client = reqwest::Client::new();

        let resp = client
            .get(url.as_ref())
            .send()
            .await
            .map_err(|e| CatalogFetchError::ResponseError(e.to_string()))?;

        let resp_data = resp.json::<Value>().await.map_err(|e| {
            CatalogFetchError::ParsingError(format!("Failed to parse response as JSON: {}", e))
        })?;

        Ok(resp_data)
    }

    /// Fetch a URL, absorbing any failure into `None` after logging it.
    async fn fetch_or_none(&self, url: CatalogUrl) -> Option<Value> {
        match self.fetch_json(&url).await {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!(url = url.as_ref(), error = %err, "catalog fetch failed");
                None
            }
        }
    }

    pub async fn fetch_categories(&self) -> Option<Value> {
        let url = self.base_url.append_path("/categories");
        self.fetch_or_none(url).await
    }

    pub async fn fetch_all_plants(&self) -> Option<Value> {
        let url = self.base_url.append_path("/plants");
        self.fetch_or_none(url).await
    }

    pub async fn fetch_plants_by_category(&self, category_id: &str) -> Option<Value> {
        let url = self
            .base_url
            .append_path(&format!("/category/{}", category_id));
        self.fetch_or_none(url).await
    }

    pub async fn fetch_plant(&self, plant_id: &str) -> Option<Value> {
        let url = self.base_url.append_path(&format!("/plant/{}", plant_id));
        self.fetch_or_none(url).await
    }
}

#[derive(Error, Debug)]
pub enum CatalogFetchError {
    #[error("ResponseError: {0}")]
    ResponseError(String),
    #[error("ParsingError: {0}")]
    ParsingError(String),
}
