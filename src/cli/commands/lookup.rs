//! Lookup command - resolve package versions from the generated lockfile

use crate::cli::args::{LookupArgs, OutputFormat};
use crate::context::Context;
use crate::datasource::{Datasource, GetReleasesConfig, RpmLockfileDatasource};
use crate::error::RpmLockResult;
use console::style;
use std::collections::BTreeMap;

/// Execute the lookup command
pub async fn execute(args: LookupArgs, ctx: &Context) -> RpmLockResult<()> {
    let datasource = match args.lockfile {
        Some(lockfile) => RpmLockfileDatasource::with_lockfile(ctx.clone(), lockfile),
        None => RpmLockfileDatasource::new(ctx.clone()),
    };

    let mut resolved = BTreeMap::new();
    for package in &args.packages {
        let releases = datasource
            .get_releases(&GetReleasesConfig::new(package.as_str()))
            .await?;
        let version = releases
            .and_then(|r| r.releases.into_iter().next())
            .map(|release| release.version);
        resolved.insert(package.as_str(), version);
    }

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&resolved)?),
        OutputFormat::Plain => {
            for (package, version) in &resolved {
                match version {
                    Some(version) => println!("{} {}", package, version),
                    None => println!("{} {}", package, style("not found").dim()),
                }
            }
        }
    }

    Ok(())
}
