use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use plant_api::CatalogClient;

/// Source of raw catalog payloads.
///
/// Abstracts the remote API so the state layer can be driven by canned
/// payloads in tests. Every method degrades to `None` on failure, which
/// callers treat the same as "no data".
#[async_trait]
pub trait CatalogFetcher: Send + Sync {
    async fn fetch_categories(&self) -> Option<Value>;

    async fn fetch_all_plants(&self) -> Option<Value>;

    async fn fetch_plants_by_category(&self, category_id: &str) -> Option<Value>;
}

#[async_trait]
impl CatalogFetcher for CatalogClient {
    async fn fetch_categories(&self) -> Option<Value> {
        CatalogClient::fetch_categories(self).await
    }

    async fn fetch_all_plants(&self) -> Option<Value> {
        CatalogClient::fetch_all_plants(self).await
    }

    async fn fetch_plants_by_category(&self, category_id: &str) -> Option<Value> {
        CatalogClient::fetch_plants_by_category(self, category_id).await
    }
}

/// Canned-payload fetcher for tests.
///
/// Unconfigured endpoints return `None`, which is exactly what the real
/// client returns on a failed fetch.
#[derive(Clone, Default)]
pub struct MockFetcher {
    categories: Option<Value>,
    all_plants: Option<Value>,
    by_category: HashMap<String, Value>,
    fetch_count: Arc<AtomicUsize>,
}

impl MockFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories(mut self, payload: Value) -> Self {
        self.categories = Some(payload);
        self
    }

    pub fn with_all_plants(mut self, payload: Value) -> Self {
        self.all_plants = Some(payload);
        self
    }

    pub fn with_category(mut self, category_id: &str, payload: Value) -> Self {
        self.by_category.insert(category_id.to_string(), payload);
        self
    }

    /// Number of plant fetches issued so far (all-plants and by-category).
    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl CatalogFetcher for MockFetcher {
    async fn fetch_categories(&self) -> Option<Value> {
        self.categories.clone()
    }

    async fn fetch_all_plants(&self) -> Option<Value> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.all_plants.clone()
    }

    async fn fetch_plants_by_category(&self, category_id: &str) -> Option<Value> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.by_category.get(category_id).cloned()
    }
}
