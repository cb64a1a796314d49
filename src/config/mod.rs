//! Configuration management for rpmlock

pub mod schema;

pub use schema::{Config, LockfileConfig, RefreshStrategy};

use crate::error::{RpmLockError, RpmLockResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

/// Configuration manager
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager with default path
    pub fn new() -> Self {
        Self {
            config_path: Self::default_config_path(),
        }
    }

    /// Create a config manager with a custom path
    pub fn with_path(path: PathBuf) -> Self {
        Self { config_path: path }
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rpmlock")
            .join("config.toml")
    }

    /// Load configuration, falling back to defaults if not present
    pub async fn load(&self) -> RpmLockResult<Config> {
        match fs::read_to_string(&self.config_path).await {
            Ok(content) => parse_config(&self.config_path, &content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("Config file not found, using defaults");
                Ok(Config::default())
            }
            Err(e) => Err(RpmLockError::io(
                format!("reading config from {}", self.config_path.display()),
                e,
            )),
        }
    }

    /// Save configuration to file
    pub async fn save(&self, config: &Config) -> RpmLockResult<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| RpmLockError::ConfigDirCreate {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
        }

        let content = toml::to_string_pretty(config)?;
        fs::write(&self.config_path, content).await.map_err(|e| {
            RpmLockError::io(
                format!("writing config to {}", self.config_path.display()),
                e,
            )
        })?;

        info!("Configuration saved to {}", self.config_path.display());
        Ok(())
    }

    /// Get the config file path
    pub fn path(&self) -> &Path {
        &self.config_path
    }
}

fn parse_config(path: &Path, content: &str) -> RpmLockResult<Config> {
    toml::from_str(content).map_err(|e| RpmLockError::ConfigInvalid {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
