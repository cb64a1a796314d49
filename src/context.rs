//! Per-run context threaded through managers and datasources

use crate::config::Config;
use std::path::{Path, PathBuf};

/// Repository checkout and settings for one update cycle
#[derive(Debug, Clone)]
pub struct Context {
    /// Root of the repository checkout; all file paths are relative to it
    pub local_dir: PathBuf,
    /// Loaded configuration
    pub config: Config,
}

impl Context {
    /// Create a context for a checkout
    pub fn new(local_dir: impl Into<PathBuf>, config: Config) -> Self {
        Self {
            local_dir: local_dir.into(),
            config,
        }
    }

    /// Repository root
    pub fn local_dir(&self) -> &Path {
        &self.local_dir
    }
}
