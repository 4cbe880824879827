//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.menagerie/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use simplelog::LevelFilter;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::SourceKind;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct MenagerieConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub pokeapi: PokeApiConfig,
    #[serde(default)]
    pub file: FileConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub source: Option<SourceKind>,
    pub log_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PokeApiConfig {
    pub base_url: Option<String>,
    pub catalog_limit: Option<u32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FileConfig {
    pub catalog_path: Option<String>,
    pub detail_dir: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Large enough to list every entry in one request.
pub const DEFAULT_CATALOG_LIMIT: u32 = 100_000;
pub const DEFAULT_LOG_FILE: &str = "menagerie.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub source: SourceKind,
    pub log_file: PathBuf,
    pub log_level: LevelFilter,
    pub pokeapi_base_url: String,
    pub catalog_limit: u32,
    pub catalog_path: Option<PathBuf>,
    pub detail_dir: Option<PathBuf>,
}

/// Values given on the command line. `None` means "not specified".
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub source: Option<SourceKind>,
    pub catalog_file: Option<PathBuf>,
    pub detail_dir: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.menagerie/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".menagerie").join("config.toml"))
}

/// Load config from `~/.menagerie/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `MenagerieConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<MenagerieConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(MenagerieConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(MenagerieConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<MenagerieConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: MenagerieConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_FILE: &str = r#"# Menagerie Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# source = "pokeapi"                 # "pokeapi" or "file"
# log_file = "menagerie.log"         # Or set MENAGERIE_LOG_FILE env var
# log_level = "debug"                # "off", "error", "warn", "info", "debug", "trace"

# [pokeapi]
# base_url = "https://pokeapi.co/api/v2"   # Or set POKEAPI_BASE_URL env var
# catalog_limit = 100000

# [file]
# catalog_path = "catalog.json"      # Or set MENAGERIE_CATALOG_FILE env var
# detail_dir = "details"             # Holds <id>.json detail records
"#;

fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_FILE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &MenagerieConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// `resolve` with an injectable environment lookup.
pub fn resolve_with_env<F>(config: &MenagerieConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Source: CLI → env → config → default
    let source = cli
        .source
        .or_else(|| {
            env("MENAGERIE_SOURCE").and_then(|raw| match raw.parse::<SourceKind>() {
                Ok(kind) => Some(kind),
                Err(e) => {
                    warn!("Ignoring MENAGERIE_SOURCE: {}", e);
                    None
                }
            })
        })
        .or(config.general.source)
        .unwrap_or_default();

    // Catalog file: CLI → env → config
    let catalog_path = cli
        .catalog_file
        .clone()
        .or_else(|| env("MENAGERIE_CATALOG_FILE").map(PathBuf::from))
        .or_else(|| config.file.catalog_path.as_ref().map(PathBuf::from));

    let detail_dir = cli
        .detail_dir
        .clone()
        .or_else(|| config.file.detail_dir.as_ref().map(PathBuf::from));

    // Base URL: env → config → default
    let pokeapi_base_url = env("POKEAPI_BASE_URL")
        .or_else(|| config.pokeapi.base_url.clone())
        .unwrap_or_else(|| DEFAULT_POKEAPI_BASE_URL.to_string());

    let log_file = env("MENAGERIE_LOG_FILE")
        .or_else(|| config.general.log_file.clone())
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    let log_level = config
        .general
        .log_level
        .as_deref()
        .and_then(|raw| match raw.parse::<LevelFilter>() {
            Ok(level) => Some(level),
            Err(_) => {
                warn!("Unknown log level {:?}, using default", raw);
                None
            }
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        source,
        log_file: PathBuf::from(log_file),
        log_level,
        pokeapi_base_url,
        catalog_limit: config
            .pokeapi
            .catalog_limit
            .unwrap_or(DEFAULT_CATALOG_LIMIT),
        catalog_path,
        detail_dir,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = MenagerieConfig::default();
        assert!(config.general.source.is_none());
        assert!(config.file.catalog_path.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&MenagerieConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.source, SourceKind::PokeApi);
        assert_eq!(resolved.pokeapi_base_url, DEFAULT_POKEAPI_BASE_URL);
        assert_eq!(resolved.catalog_limit, DEFAULT_CATALOG_LIMIT);
        assert_eq!(resolved.log_file, PathBuf::from(DEFAULT_LOG_FILE));
        assert_eq!(resolved.log_level, LevelFilter::Debug);
        assert!(resolved.catalog_path.is_none());
        assert!(resolved.detail_dir.is_none());
    }

    #[test]
    fn test_resolve_config_values_override_defaults() {
        let config = MenagerieConfig {
            general: GeneralConfig {
                source: Some(SourceKind::File),
                log_file: Some("custom.log".to_string()),
                log_level: Some("warn".to_string()),
            },
            pokeapi: PokeApiConfig {
                base_url: Some("http://localhost:9000/api/v2".to_string()),
                catalog_limit: Some(151),
            },
            file: FileConfig {
                catalog_path: Some("dex.json".to_string()),
                detail_dir: Some("dex".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        assert_eq!(resolved.source, SourceKind::File);
        assert_eq!(resolved.log_file, PathBuf::from("custom.log"));
        assert_eq!(resolved.log_level, LevelFilter::Warn);
        assert_eq!(resolved.pokeapi_base_url, "http://localhost:9000/api/v2");
        assert_eq!(resolved.catalog_limit, 151);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("dex.json")));
        assert_eq!(resolved.detail_dir, Some(PathBuf::from("dex")));
    }

    #[test]
    fn test_env_overrides_config_and_cli_overrides_env() {
        let config = MenagerieConfig {
            general: GeneralConfig {
                source: Some(SourceKind::PokeApi),
                ..Default::default()
            },
            file: FileConfig {
                catalog_path: Some("from-config.json".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| match key {
            "MENAGERIE_SOURCE" => Some("file".to_string()),
            "MENAGERIE_CATALOG_FILE" => Some("from-env.json".to_string()),
            "POKEAPI_BASE_URL" => Some("http://env".to_string()),
            _ => None,
        };

        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.source, SourceKind::File);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("from-env.json")));
        assert_eq!(resolved.pokeapi_base_url, "http://env");

        let cli = CliOverrides {
            source: Some(SourceKind::PokeApi),
            catalog_file: Some(PathBuf::from("from-cli.json")),
            detail_dir: None,
        };
        let resolved = resolve_with_env(&config, &cli, env);
        assert_eq!(resolved.source, SourceKind::PokeApi);
        assert_eq!(resolved.catalog_path, Some(PathBuf::from("from-cli.json")));
    }

    #[test]
    fn test_bad_env_source_and_log_level_fall_back() {
        let config = MenagerieConfig {
            general: GeneralConfig {
                log_level: Some("loud".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let env = |key: &str| (key == "MENAGERIE_SOURCE").then(|| "ftp".to_string());
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.source, SourceKind::PokeApi);
        assert_eq!(resolved.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[general]
source = "file"
log_level = "info"

[pokeapi]
catalog_limit = 151

[file]
catalog_path = "catalog.json"
detail_dir = "details"
"#;
        let config: MenagerieConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.source, Some(SourceKind::File));
        assert_eq!(config.general.log_level.as_deref(), Some("info"));
        assert_eq!(config.pokeapi.catalog_limit, Some(151));
        assert!(config.pokeapi.base_url.is_none());
        assert_eq!(config.file.detail_dir.as_deref(), Some("details"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let config: MenagerieConfig = toml::from_str("[pokeapi]\nbase_url = \"http://x\"\n").unwrap();
        assert_eq!(config.pokeapi.base_url.as_deref(), Some("http://x"));
        assert!(config.general.source.is_none());
        assert!(config.file.catalog_path.is_none());
    }

    #[test]
    fn test_generated_default_is_valid_toml() {
        let config: MenagerieConfig = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert!(config.general.source.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let path = std::env::temp_dir().join(format!("menagerie-{}.toml", uuid::Uuid::new_v4()));
        fs::write(&path, "[general\nsource = ").unwrap();
        let result = load_config_from(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
