// Copyright 2026 Oxide Computer Company

//! Revision identifier types.

use camino::{Utf8Path, Utf8PathBuf};
use std::fmt;

/// A source-control revision identifier, such as a commit hash.
///
/// The value is taken verbatim from the lock file or manifest. No attempt is
/// made to check that it looks like a hash: the build system consuming it is
/// the one that knows what a valid revision is.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(String);

impl Revision {
    /// Creates a new revision from a raw token.
    pub fn new(token: impl Into<String>) -> Self {
        Revision(token.into())
    }

    /// Returns the revision as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the revision, returning the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for Revision {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Revision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The kind of document a [`Revision`] was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum RevisionOrigin {
    /// The `source` of a `[[package]]` entry in `Cargo.lock`.
    LockFile,
    /// The `rev` of a dependency in a `Cargo.toml`.
    Manifest,
}

impl fmt::Display for RevisionOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevisionOrigin::LockFile => write!(f, "lock file"),
            RevisionOrigin::Manifest => write!(f, "manifest"),
        }
    }
}

/// The result of a successful extraction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extracted {
    revision: Revision,
    origin: RevisionOrigin,
    path: Utf8PathBuf,
}

impl Extracted {
    pub(crate) fn new(
        revision: Revision,
        origin: RevisionOrigin,
        path: Utf8PathBuf,
    ) -> Self {
        Extracted { revision, origin, path }
    }

    /// Returns the extracted revision.
    pub fn revision(&self) -> &Revision {
        &self.revision
    }

    /// Consumes `self`, returning the revision.
    pub fn into_revision(self) -> Revision {
        self.revision
    }

    /// Returns the kind of document the revision came from.
    pub fn origin(&self) -> RevisionOrigin {
        self.origin
    }

    /// Returns the path of the document the revision came from.
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}
