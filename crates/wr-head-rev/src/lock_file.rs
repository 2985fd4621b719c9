// Copyright 2026 Oxide Computer Company

//! `Cargo.lock` parsing.

use serde::Deserialize;

/// The subset of a `Cargo.lock` needed to find a package's source.
///
/// Keys other than `[[package]]` (`version`, `[metadata]`, and so on) are
/// ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct LockDocument {
    /// Package entries, in document order.
    #[serde(default)]
    pub package: Vec<LockedPackage>,
}

/// A single `[[package]]` entry.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LockedPackage {
    /// The package name.
    pub name: String,
    /// The locked version, if recorded.
    #[serde(default)]
    pub version: Option<String>,
    /// Where the package comes from, e.g.
    /// `git+https://github.com/servo/webrender?rev=abc#abcdef0123`.
    ///
    /// Absent for workspace and path packages.
    #[serde(default)]
    pub source: Option<String>,
}

impl LockDocument {
    /// Parses a lock document from TOML.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Returns the first package named `name`, in document order.
    ///
    /// A lock file may list the same crate more than once (different
    /// versions or sources); only the first one is considered.
    pub fn find_package(&self, name: &str) -> Option<&LockedPackage> {
        self.package.iter().find(|pkg| pkg.name == name)
    }
}

impl LockedPackage {
    /// Returns the part of `source` between the first `#` and the next one
    /// (or the end of the string).
    ///
    /// For git sources, Cargo records the resolved commit there.
    pub fn revision_fragment(&self) -> Option<&str> {
        let source = self.source.as_deref()?;
        source.split('#').nth(1)
    }
}
