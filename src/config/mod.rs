//! Configuration management.

mod file_config;

pub use file_config::{ConfigFile, ConfigFileError};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::models::{ColumnMapping, SearchStrategy};

/// File name looked up in the working directory
pub const LOCAL_CONFIG_FILE: &str = "paper-lookup.toml";

/// Prefix for environment overrides, e.g. `PAPER_LOOKUP_SEARCH__STRATEGY=binary`
pub const ENV_PREFIX: &str = "PAPER_LOOKUP";

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search settings
    #[serde(default)]
    pub search: SearchConfig,

    /// Dataset settings
    #[serde(default)]
    pub data: DataConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Search configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Lookup strategy used when the command line does not pick one
    #[serde(default)]
    pub strategy: SearchStrategy,
}

/// Dataset configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Dataset loaded when `--data` is not given
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Source column for each record field
    #[serde(default)]
    pub columns: ColumnMapping,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither `RUST_LOG` nor `-v`/`-q` is set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

/// Load configuration from a file, layered with `PAPER_LOOKUP_*` environment variables
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(environment())
        .build()?;

    settings.try_deserialize()
}

/// Load configuration from defaults and `PAPER_LOOKUP_*` environment variables only
pub fn load_env_config() -> Result<Config, config::ConfigError> {
    config::Config::builder()
        .add_source(environment())
        .build()?
        .try_deserialize()
}

/// Find a configuration file in the default locations.
///
/// Checks `./paper-lookup.toml`, then `<config dir>/paper-lookup/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.is_file() {
        return Some(local);
    }

    default_config_path().filter(|path| path.is_file())
}

/// Per-user configuration path, whether or not it exists
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("paper-lookup").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.strategy, SearchStrategy::Linear);
        assert_eq!(config.data.path, None);
        assert_eq!(config.data.columns.author, "Author");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paper-lookup.toml");
        std::fs::write(
            &path,
            r#"
[search]
strategy = "binary"

[data]
path = "papers.json"

[data.columns]
title = "Judul Paper"
author = "Nama Penulis"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.search.strategy, SearchStrategy::Binary);
        assert_eq!(config.data.path, Some(PathBuf::from("papers.json")));
        assert_eq!(config.data.columns.title, "Judul Paper");
        assert_eq!(config.data.columns.author, "Nama Penulis");
        assert_eq!(config.data.columns.year, "Year");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_env_overrides_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("paper-lookup.toml");
        std::fs::write(&path, "[logging]\nlevel = \"info\"\n").unwrap();

        std::env::set_var("PAPER_LOOKUP_SEARCH__STRATEGY", "binary");
        let from_file = load_config(&path);
        let from_env = load_env_config();
        std::env::remove_var("PAPER_LOOKUP_SEARCH__STRATEGY");

        let from_file = from_file.unwrap();
        assert_eq!(from_file.search.strategy, SearchStrategy::Binary);
        assert_eq!(from_file.logging.level, "info");

        let from_env = from_env.unwrap();
        assert_eq!(from_env.search.strategy, SearchStrategy::Binary);
        assert_eq!(from_env.data.columns, ColumnMapping::default());
    }

    #[test]
    fn test_load_config_missing_file() {
        let path = PathBuf::from("/nonexistent/paper-lookup.toml");
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_default_config_path() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("paper-lookup/config.toml"));
        }
    }
}
