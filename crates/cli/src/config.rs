use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::debug;
use vibe_core::init::DEFAULT_PROTECTED_BRANCH;

use crate::errors::CliError;

/// Directory below the user's config directory holding the configuration file
pub const CONFIG_DIR_NAME: &str = "gh-vibe";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "config.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Configuration for the gh-vibe CLI
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// GitHub connection settings
    #[serde(default)]
    pub github: GitHubConfig,

    /// Defaults for command arguments
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

impl AppConfig {
    /// Load configuration from the specified file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        debug!("Loading configuration from {:?}", path);

        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("Failed to read configuration file: {}", e))
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| {
            CliError::ConfigError(format!("Failed to parse configuration file: {}", e))
        })?;

        Ok(config)
    }

    /// Load configuration from the specified file, or the defaults if it doesn't exist
    pub fn load_or_default(path: &Path) -> Result<Self, CliError> {
        if !path.exists() {
            debug!("No configuration file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        Self::load(path)
    }
}

/// GitHub connection settings
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct GitHubConfig {
    /// REST API base URL; GitHub Enterprise uses `https://<host>/api/v3`
    #[serde(default)]
    pub api_url: Option<String>,
}

/// Defaults for command arguments
#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Branch protected by `init` when `--branch` is not given
    #[serde(default = "DefaultsConfig::default_branch")]
    pub branch: String,
}

impl DefaultsConfig {
    fn default_branch() -> String {
        DEFAULT_PROTECTED_BRANCH.to_string()
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            branch: DefaultsConfig::default_branch(),
        }
    }
}

/// Get the path to the configuration file
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(DEFAULT_CONFIG_FILENAME)
    }
}
