//! Application configuration for Routedoc.
//!
//! Config lives at `routedoc.toml` in the documented project's root, next to
//! the route-table export. CLI flags override config file values, which
//! override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutedocError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "routedoc.toml";

// ---------------------------------------------------------------------------
// Config structs (matching routedoc.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Route-table export settings.
    #[serde(default)]
    pub export: ExportConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Staging directory for intermediate group files.
    #[serde(default = "default_staging_dir")]
    pub staging_dir: String,

    /// Output directory for rendered documentation.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Group applied to endpoints whose handler declares none.
    #[serde(default = "default_group")]
    pub default_group: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            staging_dir: default_staging_dir(),
            output_dir: default_output_dir(),
            default_group: default_group(),
        }
    }
}

fn default_staging_dir() -> String {
    ".endpoints".into()
}
fn default_output_dir() -> String {
    "docs".into()
}
fn default_group() -> String {
    crate::types::DEFAULT_GROUP_NAME.into()
}

/// `[export]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Path to the host application's route-table export.
    #[serde(default = "default_export_path")]
    pub path: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            path: default_export_path(),
        }
    }
}

fn default_export_path() -> String {
    "routes.json".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config file inside a project directory.
pub fn config_file_path(project_dir: &Path) -> PathBuf {
    project_dir.join(CONFIG_FILE_NAME)
}

/// Load the config from the current directory. Returns defaults if the file
/// does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path(Path::new("."));

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| RoutedocError::io(path, e))?;

    toml::from_str(&content).map_err(|e| {
        RoutedocError::config(format!("failed to parse {}: {e}", path.display()))
    })
}

/// Write a default config file into a project directory.
/// Returns the path to the created file.
pub fn init_config(project_dir: &Path) -> Result<PathBuf> {
    let path = config_file_path(project_dir);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| RoutedocError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| RoutedocError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}
