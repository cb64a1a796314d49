//! Manager input and result types
//!
//! Results serialize to the shape update hosts expect, e.g.
//! `{"file":{"type":"addition","path":...,"contents":...}}`.

use serde::{Deserialize, Serialize};

/// Request to refresh the artifacts of one package file
#[derive(Debug, Clone, Default)]
pub struct UpdateArtifact {
    /// Manifest path relative to the checkout
    pub package_file_name: String,
    /// Names of dependencies the host updated, if any
    pub updated_deps: Vec<String>,
}

impl UpdateArtifact {
    /// Lockfile maintenance request: no individual dependency changes
    pub fn lock_file_maintenance(package_file_name: impl Into<String>) -> Self {
        Self {
            package_file_name: package_file_name.into(),
            updated_deps: Vec::new(),
        }
    }
}

/// A file the host should write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FileChange {
    /// Full replacement of the file at `path`
    Addition { path: String, contents: String },
}

/// Per-file failure reported instead of aborting the run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtifactError {
    pub lock_file: String,
    pub stderr: String,
}

/// One entry of an artifact update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateArtifactsResult {
    #[serde(rename = "file")]
    File(FileChange),
    #[serde(rename = "artifactError")]
    ArtifactError(ArtifactError),
}

/// Architecture restriction on a manifest package
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchFilter {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub only: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub not: Vec<String>,
}

/// A dependency found in a manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageDependency {
    pub dep_name: String,
    pub datasource: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arches: Option<ArchFilter>,
}

/// Everything extracted from one manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageFileContent {
    pub deps: Vec<PackageDependency>,
    pub lock_files: Vec<String>,
}
