//! Configuration schema for rpmlock
//!
//! Configuration is stored at `~/.config/rpmlock/config.toml`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// General settings
    pub general: GeneralConfig,

    /// Lockfile generation settings
    pub lockfile: LockfileConfig,
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log format: "text" or "json"
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_format: "text".to_string(),
        }
    }
}

/// How the external generator produces the new lockfile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RefreshStrategy {
    /// Generator rewrites `rpms.lock.yaml` next to the manifest
    InPlace,
    /// Generator writes to a temporary file that the datasource reads later
    #[default]
    TempOutput,
}

impl fmt::Display for RefreshStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::InPlace => "in-place",
            Self::TempOutput => "temp-output",
        };
        write!(f, "{}", name)
    }
}

/// Lockfile generation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LockfileConfig {
    /// Refresh strategy
    pub strategy: RefreshStrategy,

    /// Generator used by the in-place strategy
    pub tool: String,

    /// Generator used by the temp-output strategy
    pub caching_tool: String,

    /// Temporary lockfile name, relative to the manifest directory
    pub temp_lockfile: String,
}

impl Default for LockfileConfig {
    fn default() -> Self {
        Self {
            strategy: RefreshStrategy::default(),
            tool: "rpm-lockfile-prototype".to_string(),
            caching_tool: "caching-rpm-lockfile-prototype".to_string(),
            temp_lockfile: "rpms.lock.tmp.yaml".to_string(),
        }
    }
}

impl LockfileConfig {
    /// Generator executable for the configured strategy
    pub fn program(&self) -> &str {
        match self.strategy {
            RefreshStrategy::InPlace => &self.tool,
            RefreshStrategy::TempOutput => &self.caching_tool,
        }
    }
}
