// Copyright 2026 Oxide Computer Company

//! Extract the pinned webrender revision from a project.
//!
//! The build system needs to know which webrender commit the Rust side of
//! the project is built against. That commit is recorded in one of two
//! places:
//!
//! - `Cargo.lock`, as the fragment of the package's `source`:
//!   `git+https://github.com/servo/webrender?rev=abc#<commit>`.
//! - Before a lock file has been generated, `ports/webrender/Cargo.toml`,
//!   as the `rev` of the `webrender` dependency.
//!
//! The lock file always wins when it exists: the manifest is only read if
//! there is no lock file at all.
//!
//! The main entry point is [`RevisionExtractor`]. The `wr-head-rev` binary
//! wraps it, reading the project root from `$MESON_SOURCE_ROOT` and printing
//! the revision to stdout without a trailing newline.
//!
//! # Examples
//!
//! ```
//! use camino_tempfile::Utf8TempDir;
//! use wr_head_rev::{RevisionExtractor, RevisionOrigin};
//!
//! let root = Utf8TempDir::new().unwrap();
//! std::fs::write(
//!     root.path().join("Cargo.lock"),
//!     r#"
//! [[package]]
//! name = "webrender"
//! version = "0.62.0"
//! source = "git+https://github.com/servo/webrender?rev=abc#deadbeef"
//! "#,
//! )
//! .unwrap();
//!
//! let extracted = RevisionExtractor::new(root.path()).extract().unwrap();
//! assert_eq!(extracted.revision().as_str(), "deadbeef");
//! assert_eq!(extracted.origin(), RevisionOrigin::LockFile);
//! ```

#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/wr-head-rev/0.1.0")]

mod errors;
mod extractor;
mod lock_file;
mod manifest;
mod revision;

pub use errors::{ExtractError, SourceRootEnvError};
pub use extractor::{
    DEFAULT_DEPENDENCY, DEFAULT_MANIFEST_PATH, LOCK_FILE_NAME,
    RevisionExtractor, SOURCE_ROOT_ENV,
};
pub use lock_file::{LockDocument, LockedPackage};
pub use manifest::{DependencySpec, DetailedDependency, ManifestDocument};
pub use revision::{Extracted, Revision, RevisionOrigin};
