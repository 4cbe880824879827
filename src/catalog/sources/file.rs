//! Local JSON catalog source.
//!
//! The catalog file holds either `{ "results": [...] }` or a bare array of
//! `{ "name", "url" }` entries. Detail records, when available, live next to
//! each other as `<detail_dir>/<id>.json`.

use std::path::PathBuf;

use async_trait::async_trait;
use log::{debug, info};

use crate::catalog::source::{CatalogSource, SourceError};
use crate::catalog::types::{CatalogEntry, CatalogResponse, CreatureDetail};

pub struct FileSource {
    catalog_path: PathBuf,
    detail_dir: Option<PathBuf>,
}

impl FileSource {
    pub fn new(catalog_path: impl Into<PathBuf>, detail_dir: Option<PathBuf>) -> Self {
        Self {
            catalog_path: catalog_path.into(),
            detail_dir,
        }
    }

    fn detail_path(&self, id: &str) -> Option<PathBuf> {
        // Ids are numeric; anything else can't name a file safely.
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        self.detail_dir
            .as_ref()
            .map(|dir| dir.join(format!("{id}.json")))
    }
}

#[async_trait]
impl CatalogSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SourceError> {
        debug!("Reading catalog from {}", self.catalog_path.display());
        let contents = tokio::fs::read_to_string(&self.catalog_path).await?;
        let listing: CatalogResponse = serde_json::from_str(&contents).map_err(|e| {
            SourceError::Parse(format!("{}: {e}", self.catalog_path.display()))
        })?;
        let entries = listing.into_entries();
        info!(
            "File catalog {}: {} entries",
            self.catalog_path.display(),
            entries.len()
        );
        Ok(entries)
    }

    async fn fetch_detail(&self, id: &str) -> Result<CreatureDetail, SourceError> {
        let path = self
            .detail_path(id)
            .ok_or_else(|| SourceError::NotFound(id.to_string()))?;
        debug!("Reading detail from {}", path.display());

        let contents = match tokio::fs::read_to_string(&path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(SourceError::NotFound(id.to_string()));
            }
            Err(e) => return Err(SourceError::Io(e)),
        };
        serde_json::from_str(&contents)
            .map_err(|e| SourceError::Parse(format!("{}: {e}", path.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_path_requires_numeric_id_and_dir() {
        let without_dir = FileSource::new("catalog.json", None);
        assert!(without_dir.detail_path("1").is_none());

        let source = FileSource::new("catalog.json", Some(PathBuf::from("details")));
        assert_eq!(
            source.detail_path("25"),
            Some(PathBuf::from("details").join("25.json"))
        );
        assert!(source.detail_path("").is_none());
        assert!(source.detail_path("../secret").is_none());
    }

    #[tokio::test]
    async fn test_missing_catalog_is_io_error() {
        let source = FileSource::new("/nonexistent/menagerie/catalog.json", None);
        let result = source.fetch_catalog().await;
        assert!(matches!(result, Err(SourceError::Io(_))));
    }

    #[test]
    fn test_detail_without_dir_is_not_found() {
        let source = FileSource::new("catalog.json", None);
        let result = tokio_test::block_on(source.fetch_detail("25"));
        assert!(matches!(result, Err(SourceError::NotFound(id)) if id == "25"));
    }
}
