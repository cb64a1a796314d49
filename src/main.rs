//! rpmlock - RPM lockfile maintenance
//!
//! CLI entry point that dispatches to subcommands.

use clap::Parser;
use console::style;
use rpmlock::cli::{Cli, Commands};
use rpmlock::config::ConfigManager;
use rpmlock::error::{RpmLockError, RpmLockResult};
use rpmlock::Context;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> RpmLockResult<()> {
    let cli = Cli::parse();

    let config_manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    let config = config_manager.load().await?;

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("rpmlock=warn"),
        1 => EnvFilter::new("rpmlock=info"),
        _ => EnvFilter::new("rpmlock=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if config.general.log_format == "json" {
        subscriber.json().init();
    } else {
        subscriber.without_time().init();
    }

    let local_dir = match cli.local_dir {
        Some(dir) => dir,
        None => std::env::current_dir()
            .map_err(|e| RpmLockError::io("getting current directory", e))?,
    };
    debug!("Local directory: {}", local_dir.display());

    if let Commands::Config(args) = cli.command {
        return rpmlock::cli::commands::config(args, &config_manager, &config).await;
    }

    let ctx = Context::new(local_dir, config);

    match cli.command {
        Commands::Config(_) => unreachable!("Config handled above"),
        Commands::Update(args) => rpmlock::cli::commands::update(args, &ctx).await,
        Commands::Lookup(args) => rpmlock::cli::commands::lookup(args, &ctx).await,
        Commands::Extract(args) => rpmlock::cli::commands::extract(args, &ctx).await,
        Commands::Info => rpmlock::cli::commands::info(),
    }
}
