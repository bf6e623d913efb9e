//! Error types for blueprint-sync.

use std::path::PathBuf;

use thiserror::Error;

use blueprint_core::BlueprintError;
use blueprint_renderer::RenderError;

/// All errors that can arise from write and check operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// The blueprint could not be loaded.
    #[error(transparent)]
    Blueprint(#[from] BlueprintError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience constructor for [`SyncError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> SyncError {
    SyncError::Io {
        path: path.into(),
        source,
    }
}
