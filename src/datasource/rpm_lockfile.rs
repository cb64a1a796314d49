//! Versions from a freshly generated RPM lockfile
//!
//! The temporary lockfile written by the temp-output refresh strategy is read
//! and parsed on the first lookup only. Later lookups are served from memory
//! for the lifetime of the instance.

use crate::context::Context;
use crate::datasource::{Datasource, GetReleasesConfig, Release, ReleaseResult};
use crate::error::{RpmLockError, RpmLockResult};
use crate::fs::read_local_file;
use crate::manager::schema::RpmLockfile;
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::{Mutex, MutexGuard};
use tracing::debug;

/// Lifecycle of the version map
#[derive(Debug)]
enum CacheState {
    Uninitialized,
    Initialized(HashMap<String, String>),
}

/// Resolves package versions from `rpms.lock.tmp.yaml`
pub struct RpmLockfileDatasource {
    ctx: Context,
    lockfile: String,
    state: Mutex<CacheState>,
}

impl RpmLockfileDatasource {
    pub const ID: &'static str = "rpm-lockfile";

    /// Datasource reading the configured temporary lockfile from the checkout root
    pub fn new(ctx: Context) -> Self {
        let lockfile = ctx.config.lockfile.temp_lockfile.clone();
        Self::with_lockfile(ctx, lockfile)
    }

    /// Datasource reading a specific checkout-relative lockfile
    pub fn with_lockfile(ctx: Context, lockfile: impl Into<String>) -> Self {
        Self {
            ctx,
            lockfile: lockfile.into(),
            state: Mutex::new(CacheState::Uninitialized),
        }
    }

    /// Whether the lockfile has already been loaded
    pub async fn is_initialized(&self) -> bool {
        matches!(*self.state.lock().await, CacheState::Initialized(_))
    }

    /// Resolved EVR for a package, `None` if the lockfile does not pin it
    pub async fn resolve_version(&self, package_name: &str) -> RpmLockResult<Option<String>> {
        let state = self.ensure_initialized().await?;
        let version = match &*state {
            CacheState::Initialized(versions) => versions.get(package_name).cloned(),
            CacheState::Uninitialized => None,
        };
        Ok(version)
    }

    /// Load the lockfile on first use; a schema error leaves the cache unloaded
    async fn ensure_initialized(&self) -> RpmLockResult<MutexGuard<'_, CacheState>> {
        let mut state = self.state.lock().await;
        if matches!(*state, CacheState::Uninitialized) {
            let versions = self.load_updated_lockfile().await?;
            debug!("Loaded {} package versions from {}", versions.len(), self.lockfile);
            *state = CacheState::Initialized(versions);
        }
        Ok(state)
    }

    async fn load_updated_lockfile(&self) -> RpmLockResult<HashMap<String, String>> {
        let Some(content) = read_local_file(&self.ctx, &self.lockfile).await? else {
            debug!("New lockfile content is missing: {}", self.lockfile);
            return Ok(HashMap::new());
        };

        let lockfile = RpmLockfile::parse(&content).map_err(|e| RpmLockError::LockfileSchema {
            path: self.lockfile.clone(),
            reason: e.to_string(),
        })?;

        Ok(lockfile.resolved_versions())
    }
}

#[async_trait]
impl Datasource for RpmLockfileDatasource {
    fn id(&self) -> &'static str {
        Self::ID
    }

    async fn get_releases(
        &self,
        config: &GetReleasesConfig,
    ) -> RpmLockResult<Option<ReleaseResult>> {
        let version = self.resolve_version(&config.package_name).await?;
        Ok(version.map(|version| ReleaseResult {
            releases: vec![Release { version }],
        }))
    }
}
