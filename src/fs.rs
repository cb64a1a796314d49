//! Checkout-relative file access
//!
//! Missing files are data, not errors: reads return `None` and deletes are
//! no-ops. Paths may not leave the checkout.

use crate::context::Context;
use crate::error::{RpmLockError, RpmLockResult};
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// Resolve a checkout-relative path, rejecting absolute paths and `..`
pub fn local_path(ctx: &Context, path: &str) -> RpmLockResult<PathBuf> {
    let relative = Path::new(path);

    for component in relative.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                return Err(RpmLockError::PathInvalid {
                    path: relative.to_path_buf(),
                    reason: "path escapes the local directory".to_string(),
                })
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(RpmLockError::PathInvalid {
                    path: relative.to_path_buf(),
                    reason: "path must be relative to the local directory".to_string(),
                })
            }
        }
    }

    Ok(ctx.local_dir().join(relative))
}

/// Read a UTF-8 file from the checkout, `None` if it does not exist
pub async fn read_local_file(ctx: &Context, path: &str) -> RpmLockResult<Option<String>> {
    let full = local_path(ctx, path)?;

    match fs::read_to_string(&full).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!("{} does not exist", path);
            Ok(None)
        }
        Err(e) => Err(RpmLockError::io(format!("reading {}", full.display()), e)),
    }
}

/// Write a file into the checkout, creating parent directories
pub async fn write_local_file(ctx: &Context, path: &str, contents: &str) -> RpmLockResult<()> {
    let full = local_path(ctx, path)?;

    if let Some(parent) = full.parent() {
        fs::create_dir_all(parent)
            .await
            .map_err(|e| RpmLockError::io(format!("creating {}", parent.display()), e))?;
    }

    fs::write(&full, contents)
        .await
        .map_err(|e| RpmLockError::io(format!("writing {}", full.display()), e))
}

/// Delete a file from the checkout, ignoring absence
pub async fn delete_local_file(ctx: &Context, path: &str) -> RpmLockResult<()> {
    let full = local_path(ctx, path)?;

    match fs::remove_file(&full).await {
        Ok(()) => {
            debug!("Deleted {}", path);
            Ok(())
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(RpmLockError::io(format!("deleting {}", full.display()), e)),
    }
}
