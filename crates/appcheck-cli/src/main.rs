//! appcheck CLI tool.
//!
//! Usage:
//! ```bash
//! appcheck check <module-id>
//! appcheck list-blacklist
//! appcheck init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod locator;

/// Compliance checker gating pluggable app modules before distribution
#[derive(Parser)]
#[command(name = "appcheck")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a module's source for disallowed legacy symbols
    Check {
        /// Identifier of the module to check
        module_id: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Directory to search for modules (can be specified multiple times,
        /// overrides the configured roots)
        #[arg(long)]
        apps_dir: Vec<PathBuf>,
    },

    /// Print the configured blacklist
    ListBlacklist,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for scan results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output (ordered array of violation records).
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            module_id,
            format,
            apps_dir,
        } => commands::check::run(&module_id, format, apps_dir, cli.config.as_deref()),
        Commands::ListBlacklist => commands::list_blacklist::run(cli.config.as_deref()),
        Commands::Init { force } => commands::init::run(force),
    }
}
