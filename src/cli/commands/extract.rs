//! Extract command - list the packages a manifest requests

use crate::cli::args::{ExtractArgs, OutputFormat};
use crate::context::Context;
use crate::error::{RpmLockError, RpmLockResult};
use crate::fs::read_local_file;
use crate::manager;

/// Execute the extract command
pub async fn execute(args: ExtractArgs, ctx: &Context) -> RpmLockResult<()> {
    let content = read_local_file(ctx, &args.manifest)
        .await?
        .ok_or_else(|| RpmLockError::ManifestParse {
            path: args.manifest.clone(),
            reason: "file not found".to_string(),
        })?;

    let extracted = manager::extract_package_file(
        &content,
        &args.manifest,
        &ctx.config.lockfile.temp_lockfile,
    )?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&extracted)?),
        OutputFormat::Plain => match extracted {
            Some(content) => {
                for dep in &content.deps {
                    println!("{}", dep.dep_name);
                }
            }
            None => println!("No packages in {}", args.manifest),
        },
    }

    Ok(())
}
