//! Core types for compliance findings and scan results.

use serde::{Deserialize, Serialize};

/// Syntactic shape of a disallowed symbol reference.
///
/// Each variant carries a fixed numeric wire code; reports serialize the
/// code, not the variant name, so the codes are stable across releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ViolationKind {
    /// A trait declaration names a disallowed supertrait (`trait T: Base`).
    ClassExtendsNotAllowed,
    /// An impl block implements a disallowed trait (`impl Cap for T`).
    ClassImplementsNotAllowed,
    /// A static-style call on a disallowed receiver type (`Recv::f()`).
    StaticCallNotAllowed,
    /// A constant member access on a disallowed receiver type (`Recv::CONST`).
    ClassConstFetchNotAllowed,
    /// A construction of a disallowed type (`Recv { .. }` or `Recv(..)`).
    ClassInstantiationNotAllowed,
}

impl ViolationKind {
    /// Returns the numeric wire code for this kind.
    #[must_use]
    pub fn code(self) -> u16 {
        match self {
            Self::ClassExtendsNotAllowed => 1000,
            Self::ClassImplementsNotAllowed => 1001,
            Self::StaticCallNotAllowed => 1002,
            Self::ClassConstFetchNotAllowed => 1003,
            Self::ClassInstantiationNotAllowed => 1004,
        }
    }

    /// Returns the kind for a numeric wire code, if the code is known.
    #[must_use]
    pub fn from_code(code: u16) -> Option<Self> {
        match code {
            1000 => Some(Self::ClassExtendsNotAllowed),
            1001 => Some(Self::ClassImplementsNotAllowed),
            1002 => Some(Self::StaticCallNotAllowed),
            1003 => Some(Self::ClassConstFetchNotAllowed),
            1004 => Some(Self::ClassInstantiationNotAllowed),
            _ => None,
        }
    }

    /// Returns the kebab-case name of this kind.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ClassExtendsNotAllowed => "class-extends-not-allowed",
            Self::ClassImplementsNotAllowed => "class-implements-not-allowed",
            Self::StaticCallNotAllowed => "static-call-not-allowed",
            Self::ClassConstFetchNotAllowed => "class-const-fetch-not-allowed",
            Self::ClassInstantiationNotAllowed => "class-instantiation-not-allowed",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl Serialize for ViolationKind {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u16(self.code())
    }
}

impl<'de> Deserialize<'de> for ViolationKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = u16::deserialize(deserializer)?;
        Self::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown error code: {code}")))
    }
}

/// A confirmed reference to a blacklisted symbol.
///
/// Created by the detector the instant a reference is confirmed against the
/// registry; immutable afterwards. A violation is an analytical finding, not
/// an error: it is collected, never propagated with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    /// The symbol exactly as written in the source, original casing kept.
    #[serde(rename = "disallowedToken")]
    pub disallowed_token: String,
    /// Syntactic shape of the reference.
    #[serde(rename = "errorCode")]
    pub kind: ViolationKind,
}

impl Violation {
    /// Creates a new violation.
    #[must_use]
    pub fn new(disallowed_token: impl Into<String>, kind: ViolationKind) -> Self {
        Self {
            disallowed_token: disallowed_token.into(),
            kind,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{} {}]",
            self.disallowed_token,
            self.kind.code(),
            self.kind
        )
    }
}

/// Ordered result of scanning one file or one whole module.
///
/// Violations appear in discovery order: lexicographic file order, then node
/// visitation order within a file. An empty sequence means the scanned unit
/// is compliant. Serializes transparently as the violation array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisResult {
    violations: Vec<Violation>,
    #[serde(skip)]
    files_checked: usize,
}

impl AnalysisResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when no violations were found.
    #[must_use]
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    /// Returns the violations in discovery order.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Returns the number of source files that were parsed and checked.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    /// Appends one file's violations, preserving their order.
    pub(crate) fn absorb(&mut self, file_violations: Vec<Violation>) {
        self.violations.extend(file_violations);
        self.files_checked += 1;
    }
}
