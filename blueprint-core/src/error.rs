//! Error types for blueprint-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while loading a blueprint document.
#[derive(Debug, Error)]
pub enum BlueprintError {
    /// No blueprint document exists at any of the searched locations.
    #[error("blueprint not found at {path}")]
    NotFound { path: PathBuf },

    /// The document exists but could not be read.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON parse error — includes file path and line/column from serde_json.
    #[error("failed to parse blueprint at {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// YAML parse error — includes file path and line context from serde_yaml.
    #[error("failed to parse blueprint at {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

impl BlueprintError {
    /// `true` for either parse variant.
    pub fn is_parse(&self) -> bool {
        matches!(self, BlueprintError::Json { .. } | BlueprintError::Yaml { .. })
    }
}
