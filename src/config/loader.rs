//! Configuration structures and loading logic.

use crate::download::media::{DEFAULT_DOWNLOAD_TIMEOUT, DEFAULT_DOWNLOAD_USER_AGENT};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// API application credentials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountConfig {
    /// OAuth application client ID.
    #[serde(default)]
    pub client_id: String,

    /// OAuth application client secret.
    #[serde(default)]
    pub client_secret: String,

    /// User agent identifying this tool to the API.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

/// Download options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Base directory for saved posts.
    #[serde(default = "default_output_directory")]
    pub output_directory: PathBuf,

    /// Per-request timeout for media downloads, in seconds.
    #[serde(default = "default_download_timeout")]
    pub download_timeout_secs: u64,

    /// User agent sent with media downloads.
    #[serde(default = "default_download_user_agent")]
    pub download_user_agent: String,

    /// Whether to show download progress.
    #[serde(default = "default_true")]
    pub show_downloads: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: default_output_directory(),
            download_timeout_secs: default_download_timeout(),
            download_user_agent: default_download_user_agent(),
            show_downloads: true,
        }
    }
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            client_id: String::new(),
            client_secret: String::new(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_user_agent() -> String {
    "unixporn-fetcher/1.0".to_string()
}

fn default_output_directory() -> PathBuf {
    PathBuf::from("rices")
}

fn default_download_timeout() -> u64 {
    DEFAULT_DOWNLOAD_TIMEOUT.as_secs()
}

fn default_download_user_agent() -> String {
    DEFAULT_DOWNLOAD_USER_AGENT.to_string()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Get the effective download timeout.
    pub fn download_timeout(&self) -> Duration {
        Duration::from_secs(self.options.download_timeout_secs)
    }
}
