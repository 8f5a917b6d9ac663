//! Source parser boundary around the `syn` grammar.

use std::path::Path;

use crate::checker::ScanError;

/// Parses one file's source text into a syntax tree.
///
/// A structural parse failure surfaces as [`ScanError::Parse`] carrying the
/// file path; it is a distinct outcome from "parsed, zero violations found"
/// and callers must never conflate the two.
///
/// # Errors
///
/// Returns [`ScanError::Parse`] when the source is not well-formed.
pub fn parse_source(path: &Path, source: &str) -> Result<syn::File, ScanError> {
    syn::parse_file(source).map_err(|e| ScanError::Parse {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_source_parses() {
        let tree = parse_source(Path::new("ok.rs"), "fn main() {}").expect("parse");
        assert_eq!(tree.items.len(), 1);
    }

    #[test]
    fn malformed_source_reports_the_file() {
        let err = parse_source(Path::new("broken.rs"), "fn main( {").expect_err("must fail");
        match err {
            ScanError::Parse { path, reason } => {
                assert_eq!(path, Path::new("broken.rs"));
                assert!(!reason.is_empty());
            }
            other => panic!("expected parse error, got {other}"),
        }
    }
}
