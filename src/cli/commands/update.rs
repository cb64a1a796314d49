//! Update command - regenerate a lockfile
//!
//! The refresh removes the committed lockfile before the generator runs, so
//! the prior contents are put back whenever the new lockfile is not applied.

use crate::cli::args::{OutputFormat, UpdateArgs};
use crate::config::RefreshStrategy;
use crate::context::Context;
use crate::error::{RpmLockError, RpmLockResult};
use crate::exec::ProcessRunner;
use crate::fs::{delete_local_file, read_local_file, write_local_file};
use crate::manager::{self, FileChange, LockfilePaths, UpdateArtifact, UpdateArtifactsResult};
use console::style;
use tracing::{debug, info, warn};

/// Committed lockfile state captured before a refresh
struct LockfileSnapshot {
    path: String,
    contents: Option<String>,
}

impl LockfileSnapshot {
    async fn capture(ctx: &Context, manifest: &str) -> RpmLockResult<Option<Self>> {
        let Ok(paths) = LockfilePaths::from_manifest(manifest, &ctx.config.lockfile.temp_lockfile)
        else {
            return Ok(None);
        };
        let contents = read_local_file(ctx, &paths.lockfile).await?;
        Ok(Some(Self {
            path: paths.lockfile,
            contents,
        }))
    }

    /// Put the committed lockfile back exactly as it was
    async fn restore(&self, ctx: &Context) -> RpmLockResult<()> {
        match self.contents {
            Some(ref contents) => write_local_file(ctx, &self.path, contents).await?,
            // In-place generation may have created a file that was never committed
            None if ctx.config.lockfile.strategy == RefreshStrategy::InPlace => {
                delete_local_file(ctx, &self.path).await?
            }
            None => {}
        }
        debug!("Restored {}", self.path);
        Ok(())
    }
}

/// Execute the update command
pub async fn execute(args: UpdateArgs, ctx: &Context) -> RpmLockResult<()> {
    if !manager::definition().matches(&args.manifest)? {
        warn!("{} does not look like an RPM manifest", args.manifest);
    }

    let snapshot = LockfileSnapshot::capture(ctx, &args.manifest).await?;
    let runner = ProcessRunner::new();
    let request = UpdateArtifact::lock_file_maintenance(&args.manifest);
    let outcome = manager::update_artifacts(ctx, &runner, &request).await;

    let applied = match outcome {
        Ok(results) => report(&args, ctx, results).await,
        Err(err) => Err(err),
    };

    let restored = match snapshot {
        Some(ref snapshot) if !matches!(applied, Ok(true)) => snapshot.restore(ctx).await,
        _ => Ok(()),
    };

    // The update error outranks a failed restore
    applied?;
    restored
}

/// Print and apply the results, returning whether a new lockfile was written
async fn report(
    args: &UpdateArgs,
    ctx: &Context,
    results: Option<Vec<UpdateArtifactsResult>>,
) -> RpmLockResult<bool> {
    if args.format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&results)?);
    }

    let Some(results) = results else {
        if args.format == OutputFormat::Plain {
            println!("Lockfile for {} is up to date", args.manifest);
        }
        return Ok(false);
    };

    let mut written = false;
    for result in results {
        match result {
            UpdateArtifactsResult::File(FileChange::Addition { path, contents }) => {
                if !args.dry_run {
                    write_local_file(ctx, &path, &contents).await?;
                    info!("Wrote {}", path);
                    written = true;
                }
                if args.format == OutputFormat::Plain {
                    let verb = if args.dry_run { "Would update" } else { "Updated" };
                    println!("{} {}", style(verb).green(), path);
                }
            }
            UpdateArtifactsResult::ArtifactError(err) => {
                if args.format == OutputFormat::Plain {
                    eprintln!("{}", err.stderr.trim());
                }
                return Err(RpmLockError::UpdateFailed(err.lock_file));
            }
        }
    }

    Ok(written)
}
