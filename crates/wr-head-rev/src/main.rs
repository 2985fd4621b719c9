// Copyright 2026 Oxide Computer Company

//! Prints the pinned webrender revision for the build system.
//!
//! Reads the project root from `$MESON_SOURCE_ROOT` and writes the revision
//! to stdout with no trailing newline. Diagnostics go to stderr; set
//! `WR_HEAD_REV_LOG=debug` to see which file was read.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;
use wr_head_rev::RevisionExtractor;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("WR_HEAD_REV_LOG")
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let extractor = RevisionExtractor::from_env()?;
    let extracted = extractor.extract().with_context(|| {
        format!("failed to extract {} revision", extractor.dependency())
    })?;

    // Only write once the revision is fully resolved.
    let mut stdout = io::stdout().lock();
    write!(stdout, "{}", extracted.revision())
        .and_then(|()| stdout.flush())
        .context("failed to write revision to stdout")?;

    Ok(())
}
