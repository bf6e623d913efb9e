//! Atomic writer for rendered artifacts.
//!
//! ## `atomic_write` protocol
//!
//! 1. Ensure the parent directory chain exists.
//! 2. Write content to `<path>.blueprint.tmp`.
//! 3. Rename to the final path (atomic on POSIX), replacing any existing file.
//! 4. On rename failure remove the `.tmp` and leave the original untouched.
//!
//! Artifacts whose content is empty are skipped. Nothing is ever deleted.

use std::path::{Path, PathBuf};

use blueprint_core::Blueprint;
use blueprint_renderer::Renderer;

use crate::error::{io_err, SyncError};

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of an individual artifact. Paths are relative to the write root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (created or overwritten).
    Written { path: PathBuf },
    /// Rendered content was empty; the file was left alone.
    Skipped { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path } | WriteResult::Skipped { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

pub(crate) fn atomic_write(path: &Path, content: &str) -> Result<(), SyncError> {
    let tmp = PathBuf::from(format!("{}.blueprint.tmp", path.display()));
    atomic_write_with_tmp(path, content, &tmp)
}

fn atomic_write_with_tmp(path: &Path, content: &str, tmp: &Path) -> Result<(), SyncError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent() {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// write_all
// ---------------------------------------------------------------------------

/// Render every artifact from `blueprint` and write the enabled ones under `root`.
///
/// Returns one [`WriteResult`] per artifact, in render order.
pub fn write_all(
    renderer: &Renderer,
    blueprint: &Blueprint,
    root: &Path,
) -> Result<Vec<WriteResult>, SyncError> {
    let mut results = Vec::new();
    for rendered in renderer.render_all(blueprint)? {
        if rendered.is_disabled() {
            tracing::debug!("skipped (disabled): {}", rendered.path.display());
            results.push(WriteResult::Skipped {
                path: rendered.path,
            });
            continue;
        }

        let target = root.join(&rendered.path);
        atomic_write(&target, &rendered.content)?;
        tracing::info!("wrote: {}", target.display());
        results.push(WriteResult::Written {
            path: rendered.path,
        });
    }
    Ok(results)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::types::{IssueTemplate, IssuesConfig, OwnerRule, WorkflowConfig};
    use std::fs;
    use tempfile::TempDir;

    fn make_blueprint() -> Blueprint {
        Blueprint {
            owners: vec![OwnerRule {
                path: "/src".into(),
                owners: vec!["@alice".into(), "@bob".into()],
            }],
            workflow: Some(WorkflowConfig::default()),
            issues: IssuesConfig {
                bug: IssueTemplate {
                    enabled: true,
                    title: None,
                },
                feature: IssueTemplate::default(),
            },
            ..Blueprint::default()
        }
    }

    #[test]
    fn first_write_creates_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("CODEOWNERS");
        atomic_write(&path, "hello").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn overwrite_replaces_content() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("file.yml");
        atomic_write(&path, "v1").unwrap();
        atomic_write(&path, "v2").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.yml");
        atomic_write(&path, "data").unwrap();
        let tmp_path = PathBuf::from(format!("{}.blueprint.tmp", path.display()));
        assert!(!tmp_path.exists(), ".blueprint.tmp must be cleaned up");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp
            .path()
            .join(".github")
            .join("ISSUE_TEMPLATE")
            .join("bug.yml");
        atomic_write(&path, "content").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_all_reports_written_and_skipped() {
        let root = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let results = write_all(&renderer, &make_blueprint(), root.path()).unwrap();

        let written: Vec<_> = results
            .iter()
            .filter(|r| matches!(r, WriteResult::Written { .. }))
            .map(|r| r.path().to_path_buf())
            .collect();
        assert_eq!(written.len(), 4);
        assert_eq!(written[0], PathBuf::from("CODEOWNERS"));

        let skipped: Vec<_> = results
            .iter()
            .filter(|r| matches!(r, WriteResult::Skipped { .. }))
            .collect();
        assert_eq!(skipped.len(), 1);
        assert!(skipped[0].path().ends_with("feature.yml"));
        assert!(!root.path().join(skipped[0].path()).exists());

        assert_eq!(
            fs::read_to_string(root.path().join("CODEOWNERS")).unwrap(),
            "/src @alice @bob\n"
        );
    }

    #[test]
    fn empty_owners_still_written_as_newline() {
        let root = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        write_all(&renderer, &Blueprint::default(), root.path()).unwrap();
        assert_eq!(
            fs::read_to_string(root.path().join("CODEOWNERS")).unwrap(),
            "\n"
        );
        assert_eq!(
            fs::read_to_string(root.path().join(".github").join("labels.yml")).unwrap(),
            "\n"
        );
    }

    #[test]
    fn disabling_issue_does_not_delete_existing_file() {
        let root = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let mut bp = make_blueprint();
        write_all(&renderer, &bp, root.path()).unwrap();
        let bug = root.path().join(".github").join("ISSUE_TEMPLATE").join("bug.yml");
        assert!(bug.exists());

        bp.issues.bug.enabled = false;
        let results = write_all(&renderer, &bp, root.path()).unwrap();
        assert!(bug.exists(), "writer must never delete");
        assert!(results
            .iter()
            .any(|r| matches!(r, WriteResult::Skipped { path } if path.ends_with("bug.yml"))));
    }

    #[test]
    fn second_write_is_byte_identical() {
        let root = TempDir::new().unwrap();
        let renderer = Renderer::new().unwrap();
        let bp = make_blueprint();
        write_all(&renderer, &bp, root.path()).unwrap();
        let ci = root.path().join(".github").join("workflows").join("ci.yml");
        let first = fs::read(&ci).unwrap();
        write_all(&renderer, &bp, root.path()).unwrap();
        assert_eq!(fs::read(&ci).unwrap(), first);
    }

    #[test]
    fn rename_onto_directory_fails_and_cleans_tmp() {
        let root = TempDir::new().unwrap();
        let path = root.path().join("CODEOWNERS");
        fs::create_dir_all(&path).unwrap();
        fs::write(path.join("keep"), "original").unwrap();

        let tmp_path = root.path().join("CODEOWNERS.blueprint.tmp");
        let err = atomic_write_with_tmp(&path, "new content", &tmp_path)
            .expect_err("renaming a file onto a non-empty directory must fail");

        assert!(err.to_string().contains("CODEOWNERS"), "got: {err}");
        assert!(path.is_dir(), "target directory should be intact");
        assert_eq!(fs::read_to_string(path.join("keep")).unwrap(), "original");
        assert!(!tmp_path.exists(), ".blueprint.tmp should be cleaned up");
    }
}
