//! Module checker: enumerates a module's source files and aggregates
//! per-file findings into one ordered report.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};
use walkdir::WalkDir;

use crate::detector::Detector;
use crate::parser::parse_source;
use crate::registry::Blacklist;
use crate::types::{AnalysisResult, Violation};

/// Errors that abort a scan.
///
/// Violations are not in this taxonomy: they are findings, collected in full
/// and returned inside the [`AnalysisResult`].
#[derive(Debug, Error)]
pub enum ScanError {
    /// IO failure reading the module tree.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A source file could not be parsed into a tree. Fatal to the whole
    /// scan: skipping the file would forge a "compliant" verdict.
    #[error("parse error in {path}: {reason}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// The scan root is not a directory. Raised before any file is touched;
    /// an unresolved module path is a precondition failure, not a scan.
    #[error("module root {0} is not a directory")]
    InvalidRoot(PathBuf),
}

/// Scans a module's source tree against a blacklist registry.
pub struct Checker {
    blacklist: Blacklist,
}

impl Checker {
    /// Creates a checker over the given registry.
    #[must_use]
    pub fn new(blacklist: Blacklist) -> Self {
        Self { blacklist }
    }

    /// Returns the registry this checker consults.
    #[must_use]
    pub fn blacklist(&self) -> &Blacklist {
        &self.blacklist
    }

    /// Scans every source file under `module_root` and returns the
    /// aggregated result.
    ///
    /// Files are visited in lexicographic path order so repeated scans of an
    /// unchanged module produce identical reports. Each file's violations
    /// are appended in visitation order.
    ///
    /// # Errors
    ///
    /// Fails fast with [`ScanError::InvalidRoot`] when the root is not a
    /// directory, [`ScanError::Io`] on a read failure, or
    /// [`ScanError::Parse`] on the first file that does not parse. A partial
    /// result is never returned.
    pub fn scan(&self, module_root: &Path) -> Result<AnalysisResult, ScanError> {
        if !module_root.is_dir() {
            return Err(ScanError::InvalidRoot(module_root.to_path_buf()));
        }

        info!("scanning module at {}", module_root.display());
        let files = discover_sources(module_root)?;
        debug!("found {} source files", files.len());

        let mut result = AnalysisResult::new();
        for file in &files {
            let violations = self.scan_file(file)?;
            result.absorb(violations);
        }

        info!(
            "scan complete: {} violation(s) in {} file(s)",
            result.violations().len(),
            result.files_checked()
        );
        Ok(result)
    }

    /// Reads, parses and checks a single source file.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Io`] when the file cannot be read and
    /// [`ScanError::Parse`] when it cannot be parsed.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<Violation>, ScanError> {
        debug!("checking {}", path.display());
        let source = std::fs::read_to_string(path)?;
        let tree = parse_source(path, &source)?;
        Ok(Detector::new(&self.blacklist).detect(&tree))
    }
}

/// Recursively collects source files under `root`, sorted by path.
///
/// The extension filter is case-insensitive; everything that is not a
/// source file (templates, assets, configuration) is ignored.
fn discover_sources(root: &Path) -> Result<Vec<PathBuf>, ScanError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(std::io::Error::from)?;
        if entry.file_type().is_file() && is_source_file(entry.path()) {
            files.push(entry.into_path());
        }
    }
    files.sort();
    Ok(files)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(std::ffi::OsStr::to_str)
        .map_or(false, |ext| ext.eq_ignore_ascii_case("rs"))
}
