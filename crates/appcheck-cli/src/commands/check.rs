//! Check command implementation.

use anyhow::{Context, Result};
use appcheck_core::{Checker, Config, ModuleLocator};
use std::path::{Path, PathBuf};

use super::output;
use crate::locator::DirectoryLocator;
use crate::OutputFormat;

/// Runs the check command.
pub fn run(
    module_id: &str,
    format: OutputFormat,
    apps_dirs: Vec<PathBuf>,
    config_path: Option<&Path>,
) -> Result<()> {
    let config = match config_path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => Config::default(),
    };

    // Explicit --apps-dir flags take precedence over configured roots.
    let roots = if apps_dirs.is_empty() {
        config.locator.roots.clone()
    } else {
        apps_dirs
    };

    let locator = DirectoryLocator::new(roots);
    let module_root = locator
        .resolve(module_id)
        .with_context(|| format!("Cannot resolve module '{module_id}'"))?;

    let checker = Checker::new(config.registry());
    tracing::info!(
        "Checking module '{}' at {} against {} blacklisted symbol(s)",
        module_id,
        module_root.display(),
        checker.blacklist().len()
    );

    let result = checker
        .scan(&module_root)
        .with_context(|| format!("Scan of module '{module_id}' failed"))?;

    output::print(module_id, &result, format)?;

    // Exit with error code when the module is not compliant
    if !result.is_compliant() {
        std::process::exit(1);
    }

    Ok(())
}
