//! Application configuration for claimsift.
//!
//! User config lives at `~/.claimsift/claimsift.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ClaimsiftError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "claimsift.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".claimsift";

// ---------------------------------------------------------------------------
// Config structs (matching claimsift.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Path to the business-keyword list (one keyword per line).
    #[serde(default = "default_keywords_file")]
    pub keywords_file: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            keywords_file: default_keywords_file(),
        }
    }
}

fn default_keywords_file() -> String {
    "business_keywords.txt".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.claimsift/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| ClaimsiftError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.claimsift/claimsift.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| ClaimsiftError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| ClaimsiftError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| ClaimsiftError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| ClaimsiftError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ClaimsiftError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
