//! Module locator boundary.
//!
//! The checker itself only understands filesystem paths; how a module id
//! maps to a directory is the host's business. Callers supply a
//! [`ModuleLocator`] and feed the resolved path into
//! [`Checker::scan`](crate::Checker::scan).

use std::path::PathBuf;

use thiserror::Error;

/// Resolves a module identifier to the directory holding its source tree.
pub trait ModuleLocator {
    /// Resolves `module_id` to a filesystem path.
    ///
    /// # Errors
    ///
    /// Returns [`ModuleNotFound`] when the identifier is unknown.
    fn resolve(&self, module_id: &str) -> Result<PathBuf, ModuleNotFound>;
}

/// The locator does not know the given module identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown module: {0}")]
pub struct ModuleNotFound(pub String);
