//! RPM lockfile manager
//!
//! Keeps `rpms.lock.yaml` in sync with `rpms.in.yaml` by running
//! `rpm-lockfile-prototype`:
//! - [`artifacts`]: regenerate the lockfile and report changes
//! - [`extract`]: list the packages a manifest requests
//! - `definition()`: registration metadata

pub mod artifacts;
mod definition;
pub mod extract;
pub mod schema;
pub mod types;

pub use artifacts::{refresh_lockfile, update_artifacts, LockfilePaths};
pub use definition::{definition, ManagerDefinition, FILE_MATCH};
pub use extract::extract_package_file;
pub use types::{
    ArtifactError, FileChange, PackageDependency, PackageFileContent, UpdateArtifact,
    UpdateArtifactsResult,
};
