//! # appcheck-core
//!
//! Static compliance checker for pluggable application modules.
//!
//! Scans a module's source tree and flags references to a fixed set of
//! disallowed legacy symbols (types superseded by the stable public API).
//! The result is a machine-checkable verdict used to gate third-party
//! modules before distribution: an empty [`AnalysisResult`] means the module
//! is compliant, anything else lists the offending references in a stable,
//! reproducible order.
//!
//! The pieces:
//!
//! - [`Blacklist`] — case-insensitive registry of disallowed symbol names
//! - [`Detector`] — single-pass AST walk recognizing the five reference shapes
//! - [`Checker`] — per-module orchestration: enumerate, parse, detect, aggregate
//! - [`ModuleLocator`] — boundary trait mapping module ids to directories
//!
//! ## Example
//!
//! ```ignore
//! use appcheck_core::{Checker, Config};
//!
//! let checker = Checker::new(Config::default().registry());
//! let result = checker.scan(module_path)?;
//! if result.is_compliant() {
//!     println!("module is compliant");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod config;
mod detector;
mod locator;
mod parser;
mod registry;
mod types;

pub use checker::{Checker, ScanError};
pub use config::{Config, ConfigError, LocatorConfig};
pub use detector::Detector;
pub use locator::{ModuleLocator, ModuleNotFound};
pub use parser::parse_source;
pub use registry::Blacklist;
pub use types::{AnalysisResult, Violation, ViolationKind};
