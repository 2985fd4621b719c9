// Copyright 2026 Oxide Computer Company

//! Error types for revision extraction.

use camino::Utf8PathBuf;
use std::{ffi::OsString, io};
use thiserror::Error;

/// An error from reading the source root from the environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceRootEnvError {
    /// The environment variable is not set.
    #[error("${var} environment variable is not set")]
    NotPresent {
        /// The environment variable name.
        var: &'static str,
    },

    /// The environment variable is set but empty or whitespace-only.
    #[error("${var} environment variable is empty")]
    Empty {
        /// The environment variable name.
        var: &'static str,
    },

    /// The environment variable is set but is not valid UTF-8.
    #[error(
        "${var} environment variable is not valid \
         UTF-8: {value:?}"
    )]
    NonUtf8 {
        /// The environment variable name.
        var: &'static str,
        /// The non-UTF-8 value.
        value: OsString,
    },
}

/// Errors that can occur while extracting a revision.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ExtractError {
    /// Checking whether the lock file exists failed.
    #[error("I/O error while checking for {path}")]
    ProbeLockFile {
        /// The lock file path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// Failed to read the lock file.
    #[error("failed to read lock file")]
    ReadLockFile {
        /// The lock file path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The lock file is not valid TOML, or does not have the expected
    /// shape.
    #[error("failed to parse lock file {path}")]
    ParseLockFile {
        /// The lock file path.
        path: Utf8PathBuf,
        /// Details about the parsing error.
        #[source]
        error: toml::de::Error,
    },

    /// No `[[package]]` entry in the lock file has the requested name.
    #[error("no package named {name:?} in {path}")]
    PackageNotFound {
        /// The lock file path.
        path: Utf8PathBuf,
        /// The package name that was looked up.
        name: String,
    },

    /// The package entry has no `source` field (e.g. a path dependency).
    #[error("package {name:?} in {path} has no source")]
    MissingSource {
        /// The lock file path.
        path: Utf8PathBuf,
        /// The package name.
        name: String,
    },

    /// The package source does not contain a `#` revision fragment.
    #[error(
        "source of package {name:?} in {path} has no revision fragment \
         (expected '#' in {source_url:?})"
    )]
    MissingRevisionFragment {
        /// The lock file path.
        path: Utf8PathBuf,
        /// The package name.
        name: String,
        /// The source string as it appears in the lock file.
        source_url: String,
    },

    /// Failed to read the manifest.
    #[error("failed to read manifest")]
    ReadManifest {
        /// The manifest path.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        error: io::Error,
    },

    /// The manifest is not valid TOML, or does not have the expected
    /// shape.
    #[error("failed to parse manifest {path}")]
    ParseManifest {
        /// The manifest path.
        path: Utf8PathBuf,
        /// Details about the parsing error.
        #[source]
        error: toml::de::Error,
    },

    /// The manifest's `[dependencies]` table has no entry for the
    /// dependency.
    #[error("no dependency named {name:?} in {path}")]
    DependencyNotFound {
        /// The manifest path.
        path: Utf8PathBuf,
        /// The dependency name that was looked up.
        name: String,
    },

    /// The dependency entry has no `rev` field.
    #[error("dependency {name:?} in {path} has no `rev` field")]
    MissingRev {
        /// The manifest path.
        path: Utf8PathBuf,
        /// The dependency name.
        name: String,
    },
}
