//! Tera rendering engine — [`Artifact`] enum and [`Renderer`].
//!
//! # Path mapping
//!
//! | Artifact     | Output path                          |
//! |--------------|--------------------------------------|
//! | Codeowners   | `CODEOWNERS`                         |
//! | Labels       | `.github/labels.yml`                 |
//! | CiWorkflow   | `.github/workflows/ci.yml`           |
//! | BugIssue     | `.github/ISSUE_TEMPLATE/bug.yml`     |
//! | FeatureIssue | `.github/ISSUE_TEMPLATE/feature.yml` |
//!
//! An empty rendered string means "disabled": the writer skips it.

use std::path::PathBuf;

use tera::Tera;

use blueprint_core::Blueprint;

use crate::context::TemplateContext;
use crate::error::RenderError;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

const TPLS: &[(&str, &str)] = &[
    ("codeowners.tera", include_str!("templates/codeowners.tera")),
    ("labels.yml.tera", include_str!("templates/labels.yml.tera")),
    ("ci.yml.tera", include_str!("templates/ci.yml.tera")),
    ("issue_bug.yml.tera", include_str!("templates/issue_bug.yml.tera")),
    (
        "issue_feature.yml.tera",
        include_str!("templates/issue_feature.yml.tera"),
    ),
];

/// Content of a list file with no entries: a lone newline, never empty.
const EMPTY_LIST: &str = "\n";

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// Every file the blueprint can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    Codeowners,
    Labels,
    CiWorkflow,
    BugIssue,
    FeatureIssue,
}

impl Artifact {
    /// All artifacts in render/write/check order.
    pub fn all() -> &'static [Artifact] {
        &[
            Artifact::Codeowners,
            Artifact::Labels,
            Artifact::CiWorkflow,
            Artifact::BugIssue,
            Artifact::FeatureIssue,
        ]
    }

    /// Embedded template backing this artifact.
    pub fn template_name(&self) -> &'static str {
        match self {
            Artifact::Codeowners => "codeowners.tera",
            Artifact::Labels => "labels.yml.tera",
            Artifact::CiWorkflow => "ci.yml.tera",
            Artifact::BugIssue => "issue_bug.yml.tera",
            Artifact::FeatureIssue => "issue_feature.yml.tera",
        }
    }

    /// Output path relative to the repository root.
    pub fn relative_path(&self) -> PathBuf {
        match self {
            Artifact::Codeowners => PathBuf::from("CODEOWNERS"),
            Artifact::Labels => PathBuf::from(".github").join("labels.yml"),
            Artifact::CiWorkflow => PathBuf::from(".github").join("workflows").join("ci.yml"),
            Artifact::BugIssue => PathBuf::from(".github")
                .join("ISSUE_TEMPLATE")
                .join("bug.yml"),
            Artifact::FeatureIssue => PathBuf::from(".github")
                .join("ISSUE_TEMPLATE")
                .join("feature.yml"),
        }
    }

    /// Short-circuit content for artifacts that bypass their template:
    /// empty lists and disabled sections.
    fn fixed_content(&self, ctx: &TemplateContext) -> Option<&'static str> {
        match self {
            Artifact::Codeowners if ctx.owners.is_empty() => Some(EMPTY_LIST),
            Artifact::Labels if ctx.labels.is_empty() => Some(EMPTY_LIST),
            Artifact::CiWorkflow if ctx.ci.is_none() => Some(""),
            Artifact::BugIssue if !ctx.bug.enabled => Some(""),
            Artifact::FeatureIssue if !ctx.feature.enabled => Some(""),
            _ => None,
        }
    }
}

/// One rendered file: relative path plus content (empty means disabled).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedArtifact {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub content: String,
}

impl RenderedArtifact {
    /// `true` when the artifact should not be written.
    pub fn is_disabled(&self) -> bool {
        self.content.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

fn build_tera() -> Result<Tera, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TPLS.iter().copied())?;
    Ok(tera)
}

/// Tera-based renderer for all artifacts.
///
/// Uses embedded templates only. Create once with [`Renderer::new`] and reuse.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    /// Construct a new [`Renderer`] with embedded templates.
    pub fn new() -> Result<Self, RenderError> {
        Ok(Renderer { tera: build_tera()? })
    }

    /// Render a single artifact from `blueprint`.
    pub fn render(&self, blueprint: &Blueprint, artifact: Artifact) -> Result<String, RenderError> {
        let ctx = TemplateContext::from_blueprint(blueprint);
        self.render_with_context(&ctx, artifact)
    }

    /// Render a single artifact using a caller-provided [`TemplateContext`].
    pub fn render_with_context(
        &self,
        ctx: &TemplateContext,
        artifact: Artifact,
    ) -> Result<String, RenderError> {
        if let Some(fixed) = artifact.fixed_content(ctx) {
            return Ok(fixed.to_string());
        }
        let tera_ctx = ctx.to_tera_context()?;
        Ok(self.tera.render(artifact.template_name(), &tera_ctx)?)
    }

    /// Render every artifact in [`Artifact::all`] order, disabled ones included.
    pub fn render_all(&self, blueprint: &Blueprint) -> Result<Vec<RenderedArtifact>, RenderError> {
        let ctx = TemplateContext::from_blueprint(blueprint);
        Artifact::all()
            .iter()
            .map(|artifact| {
                Ok(RenderedArtifact {
                    artifact: *artifact,
                    path: artifact.relative_path(),
                    content: self.render_with_context(&ctx, *artifact)?,
                })
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
