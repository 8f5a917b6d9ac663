//! Directory-based module locator.

use std::path::PathBuf;

use appcheck_core::{ModuleLocator, ModuleNotFound};

/// Resolves a module id to a subdirectory of one of the configured roots.
///
/// Roots are probed in order; the first root containing a directory named
/// after the module id wins.
#[derive(Debug, Clone)]
pub struct DirectoryLocator {
    roots: Vec<PathBuf>,
}

impl DirectoryLocator {
    /// Creates a locator over the given search roots.
    #[must_use]
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }
}

impl ModuleLocator for DirectoryLocator {
    fn resolve(&self, module_id: &str) -> Result<PathBuf, ModuleNotFound> {
        for root in &self.roots {
            let candidate = root.join(module_id);
            if candidate.is_dir() {
                return Ok(candidate);
            }
        }
        Err(ModuleNotFound(module_id.to_string()))
    }
}
