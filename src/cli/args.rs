//! CLI argument definitions using clap derive

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// rpmlock - RPM lockfile maintenance
///
/// Regenerates rpms.lock.yaml from rpms.in.yaml with rpm-lockfile-prototype
/// and resolves package versions from the generated lockfile.
#[derive(Parser, Debug)]
#[command(name = "rpmlock")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true, env = "RPMLOCK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Repository checkout (defaults to current directory)
    #[arg(short = 'C', long, global = true)]
    pub local_dir: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Regenerate the lockfile for a manifest
    Update(UpdateArgs),

    /// Look up resolved package versions in the generated lockfile
    Lookup(LookupArgs),

    /// List the packages a manifest requests
    Extract(ExtractArgs),

    /// Show manager registration metadata
    Info,

    /// Show or edit configuration
    Config(ConfigArgs),
}

/// Arguments for the update command
#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Manifest path relative to the checkout
    #[arg(default_value = "rpms.in.yaml")]
    pub manifest: String,

    /// Report the result without writing the lockfile
    #[arg(long)]
    pub dry_run: bool,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the lookup command
#[derive(Parser, Debug)]
pub struct LookupArgs {
    /// Package names
    #[arg(required = true)]
    pub packages: Vec<String>,

    /// Lockfile to read instead of the configured temporary lockfile
    #[arg(long)]
    pub lockfile: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Arguments for the extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Manifest path relative to the checkout
    #[arg(default_value = "rpms.in.yaml")]
    pub manifest: String,

    /// Output format
    #[arg(short, long, default_value = "plain")]
    pub format: OutputFormat,
}

/// Output format for command results
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Plain,
    /// JSON output
    Json,
}

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Config action
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

/// Config subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Show configuration file path
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}
