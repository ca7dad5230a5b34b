//! Configuration file support for paper-lookup.
//!
//! This module reads and writes the TOML configuration file directly, without
//! environment overrides. [`load_config`](super::load_config) is the layered
//! loader used at startup; this one backs `config init` and `config show`.
//!
//! # Configuration File Format
//!
//! ```toml
//! [search]
//! strategy = "binary"
//!
//! [data]
//! path = "./papers.json"
//!
//! [data.columns]
//! title = "Judul Paper"
//! author = "Nama Penulis"
//! year = "Tahun Terbit"
//! link = "Link Paper"
//!
//! [logging]
//! level = "info"
//! ```

use std::path::Path;

use super::Config;

/// Reader and writer for the TOML configuration file
#[derive(Debug, Default)]
pub struct ConfigFile {
    /// Parsed configuration
    pub config: Config,
}

impl ConfigFile {
    /// Wrap an existing configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigFileError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io(e.to_string()))?;

        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigFileError> {
        toml::from_str(content)
            .map(Self::new)
            .map_err(|e| ConfigFileError::Parse(e.to_string()))
    }

    /// Render configuration as TOML text
    pub fn to_toml(&self) -> Result<String, ConfigFileError> {
        toml::to_string_pretty(&self.config).map_err(|e| ConfigFileError::Serialize(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories
    pub fn save(&self, path: &Path) -> Result<(), ConfigFileError> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| ConfigFileError::Io(e.to_string()))?;
        }

        std::fs::write(path, content).map_err(|e| ConfigFileError::Io(e.to_string()))
    }
}

/// Configuration file errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("IO error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialize error: {0}")]
    Serialize(String),
}
