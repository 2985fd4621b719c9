// Copyright 2026 Oxide Computer Company

//! `Cargo.toml` parsing.

use serde::Deserialize;
use std::collections::BTreeMap;

/// The subset of a `Cargo.toml` needed to find a dependency's pinned
/// revision.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct ManifestDocument {
    /// The `[dependencies]` table.
    #[serde(default)]
    pub dependencies: BTreeMap<String, DependencySpec>,
}

/// A dependency declaration in `[dependencies]`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DependencySpec {
    /// `name = "1.0"`
    Simple(String),
    /// `name = { git = "...", rev = "..." }` or a `[dependencies.name]`
    /// table.
    Detailed(DetailedDependency),
}

/// The table form of a dependency declaration.
///
/// Only the source-related keys are kept; everything else (`features`,
/// `optional`, `package`, ...) is ignored.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
pub struct DetailedDependency {
    /// Version requirement.
    #[serde(default)]
    pub version: Option<String>,
    /// Git repository URL.
    #[serde(default)]
    pub git: Option<String>,
    /// Pinned git revision.
    #[serde(default)]
    pub rev: Option<String>,
    /// Git branch.
    #[serde(default)]
    pub branch: Option<String>,
    /// Git tag.
    #[serde(default)]
    pub tag: Option<String>,
    /// Local path.
    #[serde(default)]
    pub path: Option<String>,
}

impl ManifestDocument {
    /// Parses a manifest from TOML.
    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Returns the declaration for `name` in `[dependencies]`.
    pub fn dependency(&self, name: &str) -> Option<&DependencySpec> {
        self.dependencies.get(name)
    }
}

impl DependencySpec {
    /// Returns the pinned `rev`, if any. Always `None` for the bare-version
    /// form.
    pub fn rev(&self) -> Option<&str> {
        match self {
            DependencySpec::Simple(_) => None,
            DependencySpec::Detailed(detailed) => detailed.rev.as_deref(),
        }
    }
}
