// Copyright 2026 Oxide Computer Company

//! Locating and reading the pinned revision.

use crate::{
    DependencySpec, ExtractError, Extracted, LockDocument, ManifestDocument,
    Revision, RevisionOrigin, SourceRootEnvError,
};
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use tracing::debug;

/// The environment variable holding the project root.
pub const SOURCE_ROOT_ENV: &str = "MESON_SOURCE_ROOT";

/// The dependency whose revision is extracted by default.
pub const DEFAULT_DEPENDENCY: &str = "webrender";

/// The lock file name, relative to the project root.
pub const LOCK_FILE_NAME: &str = "Cargo.lock";

/// The manifest consulted when there is no lock file, relative to the
/// project root.
pub const DEFAULT_MANIFEST_PATH: &str = "ports/webrender/Cargo.toml";

/// Reads the project root from `var`.
///
/// An unset or empty variable is an error; there is no fallback to the
/// current directory.
fn read_source_root_env(
    var: &'static str,
) -> Result<Utf8PathBuf, SourceRootEnvError> {
    match std::env::var(var) {
        Ok(s) if s.trim().is_empty() => Err(SourceRootEnvError::Empty { var }),
        Ok(s) => Ok(Utf8PathBuf::from(s)),
        Err(std::env::VarError::NotPresent) => {
            Err(SourceRootEnvError::NotPresent { var })
        }
        Err(std::env::VarError::NotUnicode(value)) => {
            Err(SourceRootEnvError::NonUtf8 { var, value })
        }
    }
}

/// Extracts the pinned revision of a dependency from a project.
///
/// If `Cargo.lock` exists at the project root, the revision is the fragment
/// after `#` in the `source` of the first `[[package]]` with a matching
/// name. Otherwise it is the `rev` of the dependency in the fallback
/// manifest (by default `ports/webrender/Cargo.toml`). Exactly one of the
/// two files is read.
///
/// # Examples
///
/// ```no_run
/// use wr_head_rev::RevisionExtractor;
///
/// let extracted = RevisionExtractor::new("/path/to/project")
///     .extract()
///     .expect("revision found");
/// println!("{}", extracted.revision());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevisionExtractor {
    root: Utf8PathBuf,
    dependency: String,
    manifest_path: Utf8PathBuf,
}

impl RevisionExtractor {
    /// Creates an extractor for the project at `root`, looking for
    /// [`DEFAULT_DEPENDENCY`].
    ///
    /// `root` is relative to the current working directory. (It is also
    /// allowed to be absolute.)
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        RevisionExtractor {
            root: root.into(),
            dependency: DEFAULT_DEPENDENCY.to_owned(),
            manifest_path: Utf8PathBuf::from(DEFAULT_MANIFEST_PATH),
        }
    }

    /// Creates an extractor for the project root named by
    /// `$MESON_SOURCE_ROOT`.
    ///
    /// Returns an error if the variable is unset, empty, or not valid UTF-8.
    /// An empty or whitespace-only value is rejected rather than treated as
    /// the current working directory.
    pub fn from_env() -> Result<Self, SourceRootEnvError> {
        let root = read_source_root_env(SOURCE_ROOT_ENV)?;
        Ok(Self::new(root))
    }

    /// Looks up `name` instead of [`DEFAULT_DEPENDENCY`].
    ///
    /// This does not change the fallback manifest path; use
    /// [`with_manifest_path`](Self::with_manifest_path) for that.
    pub fn with_dependency(mut self, name: impl Into<String>) -> Self {
        self.dependency = name.into();
        self
    }

    /// Overrides the fallback manifest path, relative to the project root.
    pub fn with_manifest_path(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Returns the project root.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    /// Returns the name of the dependency being looked up.
    pub fn dependency(&self) -> &str {
        &self.dependency
    }

    /// Returns the full path to the lock file.
    pub fn lock_path(&self) -> Utf8PathBuf {
        self.root.join(LOCK_FILE_NAME)
    }

    /// Returns the full path to the fallback manifest.
    pub fn manifest_path(&self) -> Utf8PathBuf {
        self.root.join(&self.manifest_path)
    }

    /// Extracts the revision.
    ///
    /// No fallback happens after the lock file is found: if it exists but
    /// does not name the dependency, that is an error, and the manifest is
    /// not consulted.
    pub fn extract(&self) -> Result<Extracted, ExtractError> {
        let lock_path = self.lock_path();
        let lock_exists = lock_path.try_exists().map_err(|error| {
            ExtractError::ProbeLockFile { path: lock_path.clone(), error }
        })?;

        let extracted = if lock_exists {
            self.extract_from_lock(lock_path)?
        } else {
            debug!(path = %lock_path, "lock file not found, using manifest");
            self.extract_from_manifest(self.manifest_path())?
        };

        debug!(
            revision = %extracted.revision(),
            origin = %extracted.origin(),
            path = %extracted.path(),
            "extracted revision of {}",
            self.dependency,
        );
        Ok(extracted)
    }

    fn extract_from_lock(
        &self,
        path: Utf8PathBuf,
    ) -> Result<Extracted, ExtractError> {
        debug!(%path, "reading lock file");
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => return Err(ExtractError::ReadLockFile { path, error }),
        };
        let doc = match LockDocument::parse(&contents) {
            Ok(doc) => doc,
            Err(error) => {
                return Err(ExtractError::ParseLockFile { path, error });
            }
        };

        let Some(package) = doc.find_package(&self.dependency) else {
            return Err(ExtractError::PackageNotFound {
                path,
                name: self.dependency.clone(),
            });
        };
        let Some(source) = package.source.as_deref() else {
            return Err(ExtractError::MissingSource {
                path,
                name: self.dependency.clone(),
            });
        };
        let Some(fragment) = package.revision_fragment() else {
            return Err(ExtractError::MissingRevisionFragment {
                path,
                name: self.dependency.clone(),
                source_url: source.to_owned(),
            });
        };

        Ok(Extracted::new(
            Revision::new(fragment),
            RevisionOrigin::LockFile,
            path,
        ))
    }

    fn extract_from_manifest(
        &self,
        path: Utf8PathBuf,
    ) -> Result<Extracted, ExtractError> {
        debug!(%path, "reading manifest");
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(error) => return Err(ExtractError::ReadManifest { path, error }),
        };
        let doc = match ManifestDocument::parse(&contents) {
            Ok(doc) => doc,
            Err(error) => {
                return Err(ExtractError::ParseManifest { path, error });
            }
        };

        let Some(dependency) = doc.dependency(&self.dependency) else {
            return Err(ExtractError::DependencyNotFound {
                path,
                name: self.dependency.clone(),
            });
        };
        let Some(rev) = dependency.rev() else {
            if let DependencySpec::Simple(version) = dependency {
                debug!(%version, "dependency is declared by version only");
            }
            return Err(ExtractError::MissingRev {
                path,
                name: self.dependency.clone(),
            });
        };

        Ok(Extracted::new(Revision::new(rev), RevisionOrigin::Manifest, path))
    }
}
