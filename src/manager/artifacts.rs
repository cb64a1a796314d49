//! Lockfile refresh and change detection
//!
//! The generator is run against the manifest and the resulting lockfile is
//! compared byte-for-byte with the committed one. A changed lockfile is
//! reported as a full-file addition; failures become artifact errors unless
//! they are temporary.

use crate::config::{LockfileConfig, RefreshStrategy};
use crate::context::Context;
use crate::error::{RpmLockError, RpmLockResult};
use crate::exec::{CommandRunner, ExecCommand, ExecOptions};
use crate::fs::{delete_local_file, local_path, read_local_file};
use crate::manager::types::{ArtifactError, FileChange, UpdateArtifact, UpdateArtifactsResult};
use tracing::debug;

const MANIFEST_STEM: &str = "rpms.in.";
const LOCKFILE_STEM: &str = "rpms.lock.";

/// Checkout-relative paths involved in refreshing one manifest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockfilePaths {
    /// Directory holding the manifest, empty for the checkout root
    pub dir: String,
    /// Manifest file name without directory
    pub manifest_file: String,
    /// Final lockfile path
    pub lockfile: String,
    /// Temporary generator output path
    pub temp_lockfile: String,
}

impl LockfilePaths {
    /// Derive lockfile paths from a manifest path, keeping its extension
    pub fn from_manifest(manifest: &str, temp_name: &str) -> RpmLockResult<Self> {
        let (dir, file) = match manifest.rsplit_once('/') {
            Some((dir, file)) => (dir, file),
            None => ("", manifest),
        };

        let extension = file
            .strip_prefix(MANIFEST_STEM)
            .filter(|ext| matches!(*ext, "yaml" | "yml"))
            .ok_or_else(|| RpmLockError::InvalidManifest(manifest.to_string()))?;

        let join = |name: &str| {
            if dir.is_empty() {
                name.to_string()
            } else {
                format!("{}/{}", dir, name)
            }
        };

        Ok(Self {
            dir: dir.to_string(),
            manifest_file: file.to_string(),
            lockfile: join(&format!("{}{}", LOCKFILE_STEM, extension)),
            temp_lockfile: join(temp_name),
        })
    }

    /// Where the generator leaves its output for a strategy
    pub fn output(&self, strategy: RefreshStrategy) -> &str {
        match strategy {
            RefreshStrategy::InPlace => &self.lockfile,
            RefreshStrategy::TempOutput => &self.temp_lockfile,
        }
    }
}

/// Generator invocation for a strategy, relative to the manifest directory
pub fn refresh_command(config: &LockfileConfig, paths: &LockfilePaths) -> ExecCommand {
    let cmd = ExecCommand::new(config.program()).arg(paths.manifest_file.as_str());
    match config.strategy {
        RefreshStrategy::InPlace => cmd,
        RefreshStrategy::TempOutput => cmd.arg("--outfile").arg(config.temp_lockfile.as_str()),
    }
}

/// Remove the previous output and run the generator in the manifest directory
pub async fn refresh_lockfile(
    ctx: &Context,
    runner: &dyn CommandRunner,
    paths: &LockfilePaths,
) -> RpmLockResult<()> {
    let config = &ctx.config.lockfile;

    delete_local_file(ctx, &paths.lockfile).await?;
    if config.strategy == RefreshStrategy::TempOutput {
        delete_local_file(ctx, &paths.temp_lockfile).await?;
    }

    let cmd = refresh_command(config, paths);
    let options = ExecOptions {
        cwd: Some(local_path(ctx, &paths.dir)?),
    };

    runner.exec(&cmd, &options).await?;
    Ok(())
}

/// Refresh the lockfile belonging to a manifest
///
/// Returns `Ok(None)` when the regenerated lockfile is identical to the
/// committed one. Only temporary errors are returned as `Err`.
pub async fn update_artifacts(
    ctx: &Context,
    runner: &dyn CommandRunner,
    request: &UpdateArtifact,
) -> RpmLockResult<Option<Vec<UpdateArtifactsResult>>> {
    debug!("rpm.update_artifacts({})", request.package_file_name);
    if !request.updated_deps.is_empty() {
        debug!("Updated dependencies: {:?}", request.updated_deps);
    }

    let config = &ctx.config.lockfile;
    let paths = match LockfilePaths::from_manifest(&request.package_file_name, &config.temp_lockfile)
    {
        Ok(paths) => paths,
        Err(err) => return Ok(Some(vec![artifact_error(&request.package_file_name, &err)])),
    };
    debug!("RPM lock file: {} ({} strategy)", paths.lockfile, config.strategy);

    match regenerate(ctx, runner, &paths).await {
        Ok(None) => {
            debug!("{} is unchanged", paths.lockfile);
            Ok(None)
        }
        Ok(Some(contents)) => {
            debug!("Returning updated {}", paths.lockfile);
            Ok(Some(vec![UpdateArtifactsResult::File(FileChange::Addition {
                path: paths.lockfile,
                contents,
            })]))
        }
        Err(err) if err.is_temporary() => Err(err),
        Err(err) => {
            debug!(error = %err, "Failed to update {} file", paths.lockfile);
            Ok(Some(vec![artifact_error(&paths.lockfile, &err)]))
        }
    }
}

/// Run the generator and return the new lockfile contents if they changed
async fn regenerate(
    ctx: &Context,
    runner: &dyn CommandRunner,
    paths: &LockfilePaths,
) -> RpmLockResult<Option<String>> {
    let existing = read_local_file(ctx, &paths.lockfile).await?;

    debug!("Updating {}", paths.lockfile);
    refresh_lockfile(ctx, runner, paths).await?;

    let output = paths.output(ctx.config.lockfile.strategy);
    let updated = read_local_file(ctx, output).await?;

    if existing == updated {
        return Ok(None);
    }

    updated
        .map(Some)
        .ok_or_else(|| RpmLockError::LockfileMissing(output.to_string()))
}

fn artifact_error(lock_file: &str, err: &RpmLockError) -> UpdateArtifactsResult {
    let (stdout, stderr) = err.output();
    UpdateArtifactsResult::ArtifactError(ArtifactError {
        lock_file: lock_file.to_string(),
        stderr: format!("{}\n{}", stdout, stderr),
    })
}
