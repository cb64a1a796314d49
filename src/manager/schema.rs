//! YAML schemas for `rpms.in.yaml` and generated lockfiles
//!
//! Only the fields rpmlock reads are declared; everything else the generator
//! emits is ignored during deserialization.

use crate::manager::types::ArchFilter;
use serde::Deserialize;
use std::collections::HashMap;

/// Generated lockfile (`rpms.lock.yaml`)
#[derive(Debug, Clone, Deserialize)]
pub struct RpmLockfile {
    pub arches: Vec<LockedArch>,
}

/// Packages resolved for one architecture
#[derive(Debug, Clone, Deserialize)]
pub struct LockedArch {
    #[serde(default)]
    pub arch: Option<String>,
    pub packages: Vec<LockedPackage>,
}

/// One pinned package
#[derive(Debug, Clone, Deserialize)]
pub struct LockedPackage {
    pub name: String,
    /// Epoch:version-release
    pub evr: String,
}

impl RpmLockfile {
    /// Parse lockfile YAML
    pub fn parse(content: &str) -> Result<Self, serde_yaml_ng::Error> {
        serde_yaml_ng::from_str(content)
    }

    /// Name to EVR map; the first occurrence of a name wins
    pub fn resolved_versions(&self) -> HashMap<String, String> {
        let mut versions = HashMap::new();
        for arch in &self.arches {
            for package in &arch.packages {
                versions
                    .entry(package.name.clone())
                    .or_insert_with(|| package.evr.clone());
            }
        }
        versions
    }
}

/// Input manifest (`rpms.in.yaml`)
#[derive(Debug, Clone, Deserialize)]
pub struct RpmManifest {
    #[serde(default)]
    pub packages: Vec<ManifestPackage>,
}

/// A requested package, either a bare name or a name with an arch filter
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ManifestPackage {
    Name(String),
    Detailed {
        name: String,
        #[serde(default)]
        arches: Option<ArchFilter>,
    },
}

impl ManifestPackage {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Detailed { name, .. } => name,
        }
    }
}
