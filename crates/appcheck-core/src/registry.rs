//! Blacklist registry of disallowed legacy symbols.

use std::collections::HashSet;

/// An immutable, case-insensitive set of disallowed symbol names.
///
/// Entries are normalized to lower case once at construction and queries are
/// normalized at call time, so membership never depends on how the symbol was
/// cased in the source under scan. The list itself is host-supplied data; the
/// registry carries no knowledge of what the names mean.
#[derive(Debug, Clone)]
pub struct Blacklist {
    names: HashSet<String>,
}

impl Blacklist {
    /// Builds a registry from a list of symbol names. Never fails.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names
                .into_iter()
                .map(|name| name.as_ref().to_ascii_lowercase())
                .collect(),
        }
    }

    /// Returns true when `name` is blacklisted, ignoring case.
    ///
    /// Exact symbol identity only; no substring or prefix matching.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_ascii_lowercase())
    }

    /// Returns the number of distinct entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true when the registry holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates over the normalized (lower-cased) entries, unordered.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
