//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# appcheck configuration

# Symbols third-party modules must not reference. Omit this key to use the
# built-in set of legacy platform types superseded by the public API.
#
# blacklist = [
#     "LegacyApi",
#     "LegacyDb",
# ]

[locator]
# Directories searched, in order, for a subdirectory named after the module id
roots = ["apps"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("appcheck.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created appcheck.toml");
    println!("\nNext steps:");
    println!("  1. Edit appcheck.toml to point `roots` at your module directories");
    println!("  2. Run: appcheck check <module-id>");

    Ok(())
}
