//! Datasources answer "which version does this package resolve to"

mod rpm_lockfile;

pub use rpm_lockfile::RpmLockfileDatasource;

use crate::error::RpmLockResult;
use async_trait::async_trait;
use serde::Serialize;

/// Lookup request for one package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetReleasesConfig {
    pub package_name: String,
}

impl GetReleasesConfig {
    pub fn new(package_name: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
        }
    }
}

/// A single version candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Release {
    pub version: String,
}

/// Versions known for a package
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseResult {
    pub releases: Vec<Release>,
}

/// Version lookup backend
#[async_trait]
pub trait Datasource: Send + Sync {
    /// Stable datasource identifier
    fn id(&self) -> &'static str;

    /// Releases for a package, `None` if the package is unknown
    async fn get_releases(&self, config: &GetReleasesConfig)
        -> RpmLockResult<Option<ReleaseResult>>;
}
