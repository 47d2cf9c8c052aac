//! Application configuration for docdex.
//!
//! User config lives at `~/.docdex/docdex.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DocdexError, Result};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "docdex.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".docdex";

// ---------------------------------------------------------------------------
// Config structs (matching docdex.toml schema)
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
    /// Root directory containing the section directories.
    #[serde(default = "default_docs_root")]
    pub docs_root: String,

    /// Section directories to scan, relative to `docs_root`.
    #[serde(default = "default_section_dirs")]
    pub section_dirs: Vec<String>,

    /// Path to the component catalog JSON, relative to `docs_root`.
    #[serde(default = "default_catalog_file")]
    pub catalog_file: String,

    /// Output directory for rendered index pages, relative to `docs_root`.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            docs_root: default_docs_root(),
            section_dirs: default_section_dirs(),
            catalog_file: default_catalog_file(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_docs_root() -> String {
    ".".into()
}
fn default_section_dirs() -> Vec<String> {
    vec!["section-1".into(), "section-2".into(), "section-3".into()]
}
fn default_catalog_file() -> String {
    "components.json".into()
}
fn default_output_dir() -> String {
    "index".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.docdex/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| DocdexError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.docdex/docdex.toml`).
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
    let content = std::fs::read_to_string(path).map_err(|e| DocdexError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| DocdexError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| DocdexError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| DocdexError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| DocdexError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
