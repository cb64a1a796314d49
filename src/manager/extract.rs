//! Dependency extraction from `rpms.in.yaml`

use crate::datasource::RpmLockfileDatasource;
use crate::error::{RpmLockError, RpmLockResult};
use crate::manager::artifacts::LockfilePaths;
use crate::manager::schema::{ManifestPackage, RpmManifest};
use crate::manager::types::{PackageDependency, PackageFileContent};
use tracing::debug;

/// List the packages a manifest requests
///
/// Returns `Ok(None)` when the manifest requests nothing.
pub fn extract_package_file(
    content: &str,
    package_file: &str,
    temp_lockfile: &str,
) -> RpmLockResult<Option<PackageFileContent>> {
    let manifest: RpmManifest =
        serde_yaml_ng::from_str(content).map_err(|e| RpmLockError::ManifestParse {
            path: package_file.to_string(),
            reason: e.to_string(),
        })?;

    if manifest.packages.is_empty() {
        debug!("No packages in {}", package_file);
        return Ok(None);
    }

    let deps = manifest
        .packages
        .into_iter()
        .map(|package| {
            let dep_name = package.name().to_string();
            let arches = match package {
                ManifestPackage::Name(_) => None,
                ManifestPackage::Detailed { arches, .. } => arches,
            };
            PackageDependency {
                dep_name,
                datasource: RpmLockfileDatasource::ID.to_string(),
                arches,
            }
        })
        .collect();

    let lock_files = LockfilePaths::from_manifest(package_file, temp_lockfile)
        .map(|paths| vec![paths.lockfile])
        .unwrap_or_default();

    Ok(Some(PackageFileContent { deps, lock_files }))
}
