//! Declarative manager metadata consumed by update hosts

use crate::datasource::RpmLockfileDatasource;
use crate::error::{RpmLockError, RpmLockResult};
use regex::Regex;
use serde::Serialize;

/// Manifest file pattern
pub const FILE_MATCH: &str = r"(^|/)rpms\.in\.ya?ml$";

/// Registration data for the rpm manager
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagerDefinition {
    pub name: &'static str,
    pub file_match: Vec<&'static str>,
    pub supported_datasources: Vec<&'static str>,
    pub supports_lock_file_maintenance: bool,
    pub categories: Vec<&'static str>,
}

impl ManagerDefinition {
    /// Whether a checkout-relative path is handled by this manager
    pub fn matches(&self, path: &str) -> RpmLockResult<bool> {
        for pattern in &self.file_match {
            let re = Regex::new(pattern)
                .map_err(|e| RpmLockError::Internal(format!("bad file pattern {pattern}: {e}")))?;
            if re.is_match(path) {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// The rpm manager definition
pub fn definition() -> ManagerDefinition {
    ManagerDefinition {
        name: "rpm",
        file_match: vec![FILE_MATCH],
        supported_datasources: vec![RpmLockfileDatasource::ID],
        supports_lock_file_maintenance: true,
        categories: vec!["rpm"],
    }
}
