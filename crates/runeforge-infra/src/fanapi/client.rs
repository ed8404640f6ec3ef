//! FanApiCatalog -- concrete [`CatalogSource`] over the public Elden Ring fan API.
//!
//! Issues one GET per fetch (`/classes` or `/weapons`), with no retries and
//! no caching. Transport failures and non-2xx statuses surface as network
//! errors; unreadable bodies as decode errors.

use std::time::Duration;

use serde::de::DeserializeOwned;

use runeforge_core::catalog::source::CatalogSource;
use runeforge_types::character::ClassEntry;
use runeforge_types::config::CatalogConfig;
use runeforge_types::error::CatalogError;
use runeforge_types::weapon::Weapon;

use super::types::{parse_payload, ApiClass, ApiWeapon};

/// HTTP catalog client.
pub struct FanApiCatalog {
    client: reqwest::Client,
    base_url: String,
    limit: Option<u32>,
}

impl FanApiCatalog {
    const CLASSES_PATH: &'static str = "/classes";
    const WEAPONS_PATH: &'static str = "/weapons";

    /// Create a client from catalog settings.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Network`] if the HTTP client cannot be built
    /// (e.g., no TLS backend available).
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("runeforge/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.limit,
        })
    }

    /// Override the base URL (useful for testing or mirrors).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, CatalogError> {
        let url = self.url(path);
        let mut request = self.client.get(&url);
        if let Some(limit) = self.limit {
            request = request.query(&[("limit", limit)]);
        }

        tracing::debug!(%url, limit = ?self.limit, "Fetching catalog");
        let response = request
            .send()
            .await
            .map_err(|e| CatalogError::Network(format!("GET {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| CatalogError::Network(format!("failed to read body from {url}: {e}")))?;
        parse_payload(&bytes)
    }
}

impl CatalogSource for FanApiCatalog {
    fn name(&self) -> &str {
        "fanapi"
    }

    async fn fetch_classes(&self) -> Result<Vec<ClassEntry>, CatalogError> {
        let classes: Vec<ApiClass> = self.get_list(Self::CLASSES_PATH).await?;
        Ok(classes.into_iter().map(ClassEntry::from).collect())
    }

    async fn fetch_weapons(&self) -> Result<Vec<Weapon>, CatalogError> {
        let weapons: Vec<ApiWeapon> = self.get_list(Self::WEAPONS_PATH).await?;
        Ok(weapons.into_iter().map(Weapon::from).collect())
    }
}
