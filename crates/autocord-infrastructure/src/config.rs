//! Configuration file management for Autocord.
//!
//! Reads `~/.config/autocord/config.toml`:
//!
//! ```toml
//! [sheets]
//! base_url = "https://sheets.example.com/query"
//! api_token = "..."
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use autocord_core::{AutocordError, Result};
use serde::Deserialize;

/// Root configuration structure for config.toml
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigRoot {
    #[serde(default)]
    pub sheets: Option<SheetsConfig>,
}

/// Spreadsheet query endpoint configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SheetsConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_token: Option<String>,
}

impl SheetsConfig {
    /// Loads the `[sheets]` table from the default config file.
    pub fn load() -> Result<Self> {
        Self::load_from(&default_config_path()?)
    }

    /// Loads the `[sheets]` table from the given file.
    pub fn load_from(path: &Path) -> Result<Self> {
        load_config_root(path)?.sheets.ok_or_else(|| {
            AutocordError::config(format!("[sheets] section not found in {}", path.display()))
        })
    }
}

/// Reads and parses a config file.
pub fn load_config_root(path: &Path) -> Result<ConfigRoot> {
    if !path.exists() {
        return Err(AutocordError::config(format!(
            "Configuration file not found at: {}",
            path.display()
        )));
    }

    let content = fs::read_to_string(path)?;
    let root: ConfigRoot = toml::from_str(&content)?;
    tracing::debug!("Loaded configuration from {}", path.display());
    Ok(root)
}

/// Returns the path to the configuration file: ~/.config/autocord/config.toml
pub fn default_config_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| AutocordError::config("Could not determine home directory"))?;
    Ok(home.join(".config").join("autocord").join("config.toml"))
}
