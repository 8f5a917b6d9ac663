//! List-blacklist command implementation.

use anyhow::{Context, Result};
use appcheck_core::Config;
use std::path::Path;

/// Runs the list-blacklist command.
pub fn run(config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };

    let registry = config.registry();
    let mut names: Vec<&str> = registry.iter().collect();
    names.sort_unstable();

    println!("Blacklisted symbols ({}):\n", names.len());
    for name in names {
        println!("  {name}");
    }

    println!("\nMatching is case-insensitive and exact (no substrings).");
    println!("Override the list via `blacklist = [...]` in appcheck.toml.");

    Ok(())
}
