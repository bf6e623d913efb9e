//! Shared entrypoint: load the blueprint under a root, then write or check.

use std::path::{Path, PathBuf};

use blueprint_core::loader;
use blueprint_renderer::Renderer;

use crate::{check_drift, write_all, DriftReport, SyncError, WriteResult};

/// Scratch directory used by check mode, relative to the root.
pub const SCRATCH_DIR: &str = ".blueprint_shadow";

/// What a pipeline run does with the rendered artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Overwrite the real files under the root.
    #[default]
    Write,
    /// Render into the scratch directory and diff against the root.
    Check,
}

/// Result of a pipeline run.
#[derive(Debug)]
pub enum Outcome {
    Written(Vec<WriteResult>),
    Checked(DriftReport),
}

/// `<root>/.blueprint_shadow`
pub fn scratch_dir(root: &Path) -> PathBuf {
    root.join(SCRATCH_DIR)
}

/// Load the blueprint under `root` and overwrite the real artifacts.
pub fn write(root: &Path) -> Result<Vec<WriteResult>, SyncError> {
    let blueprint = loader::load_at(root)?;
    let renderer = Renderer::new()?;
    write_all(&renderer, &blueprint, root)
}

/// Load the blueprint under `root` and diff a fresh render against it.
pub fn check(root: &Path) -> Result<DriftReport, SyncError> {
    let blueprint = loader::load_at(root)?;
    let renderer = Renderer::new()?;
    check_drift(&renderer, &blueprint, root, &scratch_dir(root))
}

/// Run the pipeline for `root` in the given mode.
///
/// A missing blueprint surfaces as `SyncError::Blueprint(BlueprintError::NotFound)`.
pub fn run(root: &Path, mode: Mode) -> Result<Outcome, SyncError> {
    match mode {
        Mode::Write => write(root).map(Outcome::Written),
        Mode::Check => check(root).map(Outcome::Checked),
    }
}
