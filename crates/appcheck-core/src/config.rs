//! Configuration for the compliance checker.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry::Blacklist;

/// Legacy platform types superseded by the stable public API. Third-party
/// modules must not reference them in any form.
const DEFAULT_BLACKLIST: &[&str] = &[
    "LegacyApi",
    "LegacyApp",
    "LegacyAppConfig",
    "LegacyAvatar",
    "LegacyBackgroundJob",
    "LegacyConfig",
    "LegacyDb",
    "LegacyFiles",
    "LegacyHelper",
    "LegacyHook",
    "LegacyImage",
    "LegacyJson",
    "LegacyL10n",
    "LegacyLog",
    "LegacyMail",
    "LegacyPreferences",
    "LegacyRequest",
    "LegacyResponse",
    "LegacyTemplate",
    "LegacyUser",
    "LegacyUtil",
];

/// Top-level configuration, usually loaded from `appcheck.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Disallowed symbol names. Defaults to the built-in set of superseded
    /// platform types.
    #[serde(default = "default_blacklist")]
    pub blacklist: Vec<String>,

    /// Module locator configuration.
    #[serde(default)]
    pub locator: LocatorConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blacklist: default_blacklist(),
            locator: LocatorConfig::default(),
        }
    }
}

impl Config {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Builds the blacklist registry from the configured names.
    #[must_use]
    pub fn registry(&self) -> Blacklist {
        Blacklist::new(&self.blacklist)
    }
}

/// Module locator configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocatorConfig {
    /// Directories probed, in order, for a subdirectory named after the
    /// module id.
    #[serde(default = "default_roots")]
    pub roots: Vec<PathBuf>,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            roots: default_roots(),
        }
    }
}

fn default_blacklist() -> Vec<String> {
    DEFAULT_BLACKLIST.iter().map(ToString::to_string).collect()
}

fn default_roots() -> Vec<PathBuf> {
    vec![PathBuf::from("apps")]
}

/// Errors loading or parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the configuration file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML.
    #[error("invalid configuration: {message}")]
    Parse {
        /// Parser message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_carries_builtin_blacklist() {
        let config = Config::default();
        let registry = config.registry();
        assert!(registry.contains("LegacyApi"));
        assert!(registry.contains("legacyutil"));
        assert_eq!(registry.len(), DEFAULT_BLACKLIST.len());
        assert_eq!(config.locator.roots, vec![PathBuf::from("apps")]);
    }

    #[test]
    fn parse_overrides_blacklist_and_roots() {
        let config = Config::parse(
            r#"
blacklist = ["OldGateway", "OldStore"]

[locator]
roots = ["modules", "vendor/modules"]
"#,
        )
        .expect("valid config");
        assert_eq!(config.blacklist, vec!["OldGateway", "OldStore"]);
        assert_eq!(
            config.locator.roots,
            vec![PathBuf::from("modules"), PathBuf::from("vendor/modules")]
        );
    }

    #[test]
    fn parse_falls_back_to_defaults_for_missing_sections() {
        let config = Config::parse("").expect("empty config is valid");
        assert_eq!(config.blacklist.len(), DEFAULT_BLACKLIST.len());
        assert_eq!(config.locator.roots, vec![PathBuf::from("apps")]);
    }

    #[test]
    fn parse_rejects_invalid_toml() {
        let err = Config::parse("blacklist = not-a-list").expect_err("must fail");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
