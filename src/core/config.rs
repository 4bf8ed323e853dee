//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.postdeck/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::feed::DEFAULT_ENDPOINT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct PostdeckConfig {
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct FeedConfig {
    pub endpoint: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub log_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_FILE: &str = "postdeck.log";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub log_file: String,
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

/// Returns the path to `~/.postdeck/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".postdeck").join("config.toml"))
}

/// Load config from the given path, or `~/.postdeck/config.toml` if None.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `PostdeckConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config(path_override: Option<PathBuf>) -> Result<PostdeckConfig, ConfigError> {
    let path = match path_override.or_else(config_path) {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(PostdeckConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(PostdeckConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: PostdeckConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Postdeck Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [feed]
# endpoint = "https://jsonplaceholder.typicode.com/posts"

# [logging]
# log_file = "postdeck.log"
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_endpoint` is the `--endpoint` flag (None = not specified).
pub fn resolve(config: &PostdeckConfig, cli_endpoint: Option<&str>) -> ResolvedConfig {
    // Endpoint: CLI → env → config → default
    let endpoint = cli_endpoint
        .map(|s| s.to_string())
        .or_else(|| std::env::var("POSTDECK_ENDPOINT").ok())
        .or_else(|| config.feed.endpoint.clone())
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    // Log file: config → default
    let log_file = config
        .logging
        .log_file
        .clone()
        .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

    ResolvedConfig { endpoint, log_file }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_defaults() {
        let config = PostdeckConfig::default();
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(resolved.log_file, DEFAULT_LOG_FILE);
    }

    #[test]
    fn test_resolve_config_file_endpoint() {
        let config = PostdeckConfig {
            feed: FeedConfig {
                endpoint: Some("http://example.test/posts".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, None);
        assert_eq!(resolved.endpoint, "http://example.test/posts");
    }

    #[test]
    fn test_resolve_cli_wins_over_config() {
        let config = PostdeckConfig {
            feed: FeedConfig {
                endpoint: Some("http://from-file.test/posts".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, Some("http://from-cli.test/posts"));
        assert_eq!(resolved.endpoint, "http://from-cli.test/posts");
    }

    #[test]
    fn test_parse_sparse_toml() {
        let config: PostdeckConfig = toml::from_str("[feed]\n").unwrap();
        assert!(config.feed.endpoint.is_none());
        assert!(config.logging.log_file.is_none());
    }

    #[test]
    fn test_parse_full_toml() {
        let toml_str = r#"
            [feed]
            endpoint = "http://example.test/posts"

            [logging]
            log_file = "deck.log"
        "#;
        let config: PostdeckConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.feed.endpoint.as_deref(), Some("http://example.test/posts"));
        assert_eq!(config.logging.log_file.as_deref(), Some("deck.log"));
    }
}
