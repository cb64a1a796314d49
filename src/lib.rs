//! rpmlock - RPM lockfile maintenance
//!
//! Regenerates `rpms.lock.yaml` from `rpms.in.yaml` with
//! `rpm-lockfile-prototype` and resolves package versions from the generated
//! lockfile.

pub mod cli;
pub mod config;
pub mod context;
pub mod datasource;
pub mod error;
pub mod exec;
pub mod fs;
pub mod manager;

pub use context::Context;
pub use error::{RpmLockError, RpmLockResult};
