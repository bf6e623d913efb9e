//! Drift detection: render into a scratch tree and diff it against the real one.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use blueprint_core::Blueprint;
use blueprint_renderer::{Artifact, Renderer};

use crate::{error::io_err, writer::write_all, SyncError};

/// A single artifact that differs between the real and scratch trees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    /// Path relative to the root.
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Result of a drift check.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DriftReport {
    pub diffs: Vec<FileDiff>,
}

impl DriftReport {
    pub fn has_drift(&self) -> bool {
        !self.diffs.is_empty()
    }
}

/// Render `blueprint` into `scratch` and compare every artifact with `root`.
///
/// `scratch` is emptied first. `root` is only read. A missing file on either
/// side reads as empty text, so a stale file for a disabled artifact counts as
/// drift.
pub fn check_drift(
    renderer: &Renderer,
    blueprint: &Blueprint,
    root: &Path,
    scratch: &Path,
) -> Result<DriftReport, SyncError> {
    reset_scratch(scratch)?;
    write_all(renderer, blueprint, scratch)?;

    let mut diffs = Vec::new();
    for artifact in Artifact::all() {
        let relative = artifact.relative_path();
        let real_path = root.join(&relative);
        let scratch_path = scratch.join(&relative);

        let real = read_existing_or_empty(&real_path)?;
        let generated = read_existing_or_empty(&scratch_path)?;
        if real == generated {
            continue;
        }

        let old_header = real_path.display().to_string();
        let new_header = scratch_path.display().to_string();
        let unified = TextDiff::from_lines(&real, &generated)
            .unified_diff()
            .header(&old_header, &new_header)
            .context_radius(3)
            .to_string();

        tracing::debug!("drift: {}", relative.display());
        diffs.push(FileDiff {
            path: relative,
            unified_diff: unified,
        });
    }

    Ok(DriftReport { diffs })
}

fn reset_scratch(scratch: &Path) -> Result<(), SyncError> {
    match std::fs::remove_dir_all(scratch) {
        Ok(()) => tracing::debug!("cleared scratch: {}", scratch.display()),
        Err(err) if err.kind() == ErrorKind::NotFound => {}
        Err(err) => return Err(io_err(scratch, err)),
    }
    std::fs::create_dir_all(scratch).map_err(|e| io_err(scratch, e))
}

fn read_existing_or_empty(path: &Path) -> Result<String, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}
