//! PokeAPI catalog source.
//!
//! Two endpoints are used:
//! - `GET {base}/pokemon?limit={limit}&offset=0` for the whole listing in one
//!   request (`{ "results": [{ "name", "url" }] }`)
//! - `GET {base}/pokemon/{id}/` for one detail record

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::catalog::source::{CatalogSource, SourceError};
use crate::catalog::types::{CatalogEntry, CatalogResponse, CreatureDetail};
use crate::core::config::{DEFAULT_CATALOG_LIMIT, DEFAULT_POKEAPI_BASE_URL};

pub struct PokeApiSource {
    base_url: String,
    catalog_limit: u32,
    client: reqwest::Client,
}

impl PokeApiSource {
    pub fn new(base_url: Option<String>, catalog_limit: Option<u32>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_POKEAPI_BASE_URL.to_string());
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            catalog_limit: catalog_limit.unwrap_or(DEFAULT_CATALOG_LIMIT),
            client: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GETs `url` and decodes the JSON body. Non-success statuses become
    /// `SourceError::Api` carrying the response body.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, SourceError> {
        debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;

        let status = response.status();
        debug!("PokeAPI response status: {}", status);

        if !status.is_success() {
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("PokeAPI error: {} - {}", status, err_body);
            return Err(SourceError::Api {
                status: status.as_u16(),
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::Network(e.to_string()))?;
        serde_json::from_str(&body).map_err(|e| SourceError::Parse(e.to_string()))
    }
}

#[async_trait]
impl CatalogSource for PokeApiSource {
    fn name(&self) -> &str {
        "pokeapi"
    }

    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SourceError> {
        let url = format!(
            "{}/pokemon?limit={}&offset=0",
            self.base_url, self.catalog_limit
        );
        let listing: CatalogResponse = self.get_json(&url).await?;
        let entries = listing.into_entries();
        info!("PokeAPI catalog: {} entries", entries.len());
        Ok(entries)
    }

    async fn fetch_detail(&self, id: &str) -> Result<CreatureDetail, SourceError> {
        if id.is_empty() {
            return Err(SourceError::NotFound(String::new()));
        }
        let url = format!("{}/pokemon/{}/", self.base_url, id);
        match self.get_json(&url).await {
            Err(SourceError::Api { status: 404, .. }) => Err(SourceError::NotFound(id.to_string())),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let source = PokeApiSource::new(None, None);
        assert_eq!(source.base_url(), DEFAULT_POKEAPI_BASE_URL);
        assert_eq!(source.catalog_limit, DEFAULT_CATALOG_LIMIT);
        assert_eq!(source.name(), "pokeapi");
    }

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let source = PokeApiSource::new(Some("http://localhost:8000/api/v2/".to_string()), Some(10));
        assert_eq!(source.base_url(), "http://localhost:8000/api/v2");
    }

    #[tokio::test]
    async fn test_empty_id_is_not_found_without_request() {
        let source = PokeApiSource::new(Some("http://127.0.0.1:1".to_string()), None);
        let result = source.fetch_detail("").await;
        assert!(matches!(result, Err(SourceError::NotFound(_))));
    }
}
