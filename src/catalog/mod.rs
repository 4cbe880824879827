//! # Catalog Sources
//!
//! External collaborators that deliver the catalog listing and per-item
//! detail records. The core never calls these directly; the TUI adapter runs
//! them on background tasks and feeds the results back as actions.

pub mod source;
pub mod sources;
pub mod types;

use std::sync::Arc;

use log::info;

pub use source::{CatalogSource, SourceError};
pub use sources::{FileSource, PokeApiSource};
pub use types::{CatalogEntry, CatalogResponse, CreatureDetail};

use crate::core::config::ResolvedConfig;
use crate::SourceKind;

/// Builds the source selected by the resolved config.
pub fn build_source(config: &ResolvedConfig) -> Result<Arc<dyn CatalogSource>, SourceError> {
    let source: Arc<dyn CatalogSource> = match config.source {
        SourceKind::PokeApi => Arc::new(PokeApiSource::new(
            Some(config.pokeapi_base_url.clone()),
            Some(config.catalog_limit),
        )),
        SourceKind::File => {
            let path = config.catalog_path.clone().ok_or_else(|| {
                SourceError::Config(
                    "file source needs a catalog path (--catalog-file or MENAGERIE_CATALOG_FILE)"
                        .to_string(),
                )
            })?;
            Arc::new(FileSource::new(path, config.detail_dir.clone()))
        }
    };
    info!("Using catalog source: {}", source.name());
    Ok(source)
}
