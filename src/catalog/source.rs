use std::fmt;

use async_trait::async_trait;

use super::types::{CatalogEntry, CreatureDetail};

/// Errors a catalog source can report.
#[derive(Debug)]
pub enum SourceError {
    /// Source misconfigured (missing file path, bad URL).
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// The remote answered with a non-success status.
    Api { status: u16, message: String },
    /// No detail record exists for this id.
    NotFound(String),
    /// The response or file was not the JSON we expected.
    Parse(String),
    /// Reading a local file failed.
    Io(std::io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::NotFound(id) => write!(f, "no entry with id {id}"),
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SourceError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SourceError {
    fn from(e: std::io::Error) -> Self {
        SourceError::Io(e)
    }
}

/// Where the catalog listing and per-item detail records come from.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short label for the title bar and logs.
    fn name(&self) -> &str;

    /// Fetches the full `{ name, url }` listing, in display order.
    async fn fetch_catalog(&self) -> Result<Vec<CatalogEntry>, SourceError>;

    /// Fetches the detail record for one item id.
    async fn fetch_detail(&self, id: &str) -> Result<CreatureDetail, SourceError>;
}
