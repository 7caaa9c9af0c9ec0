use std::env;

/// Base URL of the public plant catalog API.
pub const DEFAULT_CATALOG_URL: &str = "https://openapi.programming-hero.com/api";

#[derive(Debug, Clone)]
pub struct CatalogUrl(String);

impl AsRef<str> for CatalogUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Default for CatalogUrl {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogUrl {
    /// Creates a CatalogUrl pointing at the public catalog API.
    pub fn new() -> Self {
        Self(DEFAULT_CATALOG_URL.to_string())
    }

    /// Creates a CatalogUrl from the environment variable `CATALOG_API_URL`,
    /// falling back to the public catalog API when it is unset.
    pub fn from_env() -> Self {
        match env::var("CATALOG_API_URL") {
            Ok(url) => Self(url),
            Err(_) => Self::new(),
        }
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }
}
