// Copyright 2026 Oxide Computer Company

//! Library-level extraction tests.

use crate::fixtures::{
    project_root, write_lock, write_lock_without_webrender, write_manifest,
};
use anyhow::Result;
use std::fs;
use wr_head_rev::{ExtractError, RevisionExtractor, RevisionOrigin};

#[test]
fn test_extract_from_lock() -> Result<()> {
    let temp = project_root()?;
    write_lock(temp.path(), "deadbeef")?;

    let extracted = RevisionExtractor::new(temp.path()).extract()?;
    assert_eq!(extracted.revision().as_str(), "deadbeef");
    assert_eq!(extracted.origin(), RevisionOrigin::LockFile);
    assert_eq!(extracted.path(), temp.path().join("Cargo.lock").as_path());
    Ok(())
}

#[test]
fn test_extract_from_manifest() -> Result<()> {
    let temp = project_root()?;
    write_manifest(temp.path(), "cafef00d")?;

    let extracted = RevisionExtractor::new(temp.path()).extract()?;
    assert_eq!(extracted.revision().as_str(), "cafef00d");
    assert_eq!(extracted.origin(), RevisionOrigin::Manifest);
    assert_eq!(
        extracted.path(),
        temp.path().join("ports/webrender/Cargo.toml").as_path()
    );
    Ok(())
}

#[test]
fn test_lock_takes_precedence_over_manifest() -> Result<()> {
    let temp = project_root()?;
    write_lock(temp.path(), "deadbeef")?;
    write_manifest(temp.path(), "cafef00d")?;

    let extracted = RevisionExtractor::new(temp.path()).extract()?;
    assert_eq!(extracted.revision().as_str(), "deadbeef");
    assert_eq!(extracted.origin(), RevisionOrigin::LockFile);
    Ok(())
}

#[test]
fn test_lock_present_manifest_never_read() -> Result<()> {
    // An unparseable manifest would fail extraction if it were read.
    let temp = project_root()?;
    write_lock(temp.path(), "deadbeef")?;
    let dir = temp.path().join("ports/webrender");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("Cargo.toml"), "this is [not toml")?;

    let extracted = RevisionExtractor::new(temp.path()).extract()?;
    assert_eq!(extracted.revision().as_str(), "deadbeef");
    Ok(())
}

#[test]
fn test_lock_without_package_does_not_fall_back() -> Result<()> {
    let temp = project_root()?;
    write_lock_without_webrender(temp.path())?;
    write_manifest(temp.path(), "cafef00d")?;

    let err = RevisionExtractor::new(temp.path()).extract().unwrap_err();
    match err {
        ExtractError::PackageNotFound { path, name } => {
            assert_eq!(path, temp.path().join("Cargo.lock"));
            assert_eq!(name, "webrender");
        }
        other => panic!("expected PackageNotFound, got {other:?}"),
    }
    Ok(())
}

#[test]
fn test_neither_file_present() -> Result<()> {
    let temp = project_root()?;

    let err = RevisionExtractor::new(temp.path()).extract().unwrap_err();
    assert!(
        matches!(err, ExtractError::ReadManifest { .. }),
        "missing manifest should be a read error, got {err:?}"
    );
    Ok(())
}

#[test]
fn test_malformed_lock() -> Result<()> {
    let temp = project_root()?;
    fs::write(temp.path().join("Cargo.lock"), "[[package]\nname = \"x\"\n")?;

    let err = RevisionExtractor::new(temp.path()).extract().unwrap_err();
    assert!(
        matches!(err, ExtractError::ParseLockFile { .. }),
        "got {err:?}"
    );
    Ok(())
}

#[test]
fn test_manifest_missing_dependency() -> Result<()> {
    let temp = project_root()?;
    let dir = temp.path().join("ports/webrender");
    fs::create_dir_all(&dir)?;
    fs::write(dir.join("Cargo.toml"), "[dependencies]\neuclid = \"0.22\"\n")?;

    let err = RevisionExtractor::new(temp.path()).extract().unwrap_err();
    assert!(
        matches!(err, ExtractError::DependencyNotFound { .. }),
        "got {err:?}"
    );
    Ok(())
}

#[test]
fn test_manifest_missing_rev() -> Result<()> {
    let temp = project_root()?;
    let dir = temp.path().join("ports/webrender");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("Cargo.toml"),
        "[dependencies]\n\
         webrender = { git = \"https://github.com/servo/webrender\" }\n",
    )?;

    let err = RevisionExtractor::new(temp.path()).extract().unwrap_err();
    assert!(matches!(err, ExtractError::MissingRev { .. }), "got {err:?}");
    Ok(())
}

#[test]
fn test_custom_dependency_and_manifest() -> Result<()> {
    let temp = project_root()?;
    let dir = temp.path().join("ports/surfman");
    fs::create_dir_all(&dir)?;
    fs::write(
        dir.join("Cargo.toml"),
        "[dependencies]\n\
         surfman = { git = \"https://github.com/servo/surfman\", rev = \"5ca1ab1e\" }\n",
    )?;

    let extracted = RevisionExtractor::new(temp.path())
        .with_dependency("surfman")
        .with_manifest_path("ports/surfman/Cargo.toml")
        .extract()?;
    assert_eq!(extracted.revision().as_str(), "5ca1ab1e");
    Ok(())
}

#[test]
fn test_extract_is_idempotent() -> Result<()> {
    let temp = project_root()?;
    write_lock(temp.path(), "deadbeef")?;

    let extractor = RevisionExtractor::new(temp.path());
    let first = extractor.extract()?;
    let second = extractor.extract()?;
    assert_eq!(first, second);
    Ok(())
}
