//! Blueprint document discovery and parsing.
//!
//! # Lookup order
//!
//! ```text
//! <root>/blueprint.json
//! <root>/blueprint.yaml
//! <root>/blueprint.yml
//! ```
//!
//! The first file that exists wins. The parser is picked from the extension.

use std::path::{Path, PathBuf};

use crate::error::BlueprintError;
use crate::types::Blueprint;

/// Primary file name; reported in "not found" errors.
pub const BLUEPRINT_FILE: &str = "blueprint.json";

const CANDIDATES: &[&str] = &[BLUEPRINT_FILE, "blueprint.yaml", "blueprint.yml"];

/// Return the first existing candidate under `root`, if any. Pure lookup, no parsing.
pub fn locate(root: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Locate and parse the blueprint under `root`.
///
/// Returns `BlueprintError::NotFound` naming `<root>/blueprint.json` when no
/// candidate exists.
pub fn load_at(root: &Path) -> Result<Blueprint, BlueprintError> {
    let path = locate(root).ok_or_else(|| BlueprintError::NotFound {
        path: root.join(BLUEPRINT_FILE),
    })?;
    load_file(&path)
}

/// Parse an explicit blueprint file.
///
/// `.yaml` / `.yml` go through serde_yaml, everything else through serde_json.
pub fn load_file(path: &Path) -> Result<Blueprint, BlueprintError> {
    if !path.exists() {
        return Err(BlueprintError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path).map_err(|source| BlueprintError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(path, &contents)
}

fn parse(path: &Path, contents: &str) -> Result<Blueprint, BlueprintError> {
    if is_yaml(path) {
        serde_yaml::from_str(contents).map_err(|source| BlueprintError::Yaml {
            path: path.to_path_buf(),
            source,
        })
    } else {
        serde_json::from_str(contents).map_err(|source| BlueprintError::Json {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn is_yaml(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}
