//! Template context — serializable rendering payload built from [`Blueprint`].
//!
//! Defaults are already resolved here, so templates never branch on missing
//! values.

use serde::{Deserialize, Serialize};

use blueprint_core::types::{
    Blueprint, IssueTemplate, Language, WorkflowConfig, DEFAULT_BUG_TITLE, DEFAULT_FEATURE_TITLE,
};

use crate::error::RenderError;

/// Flat rendering payload shared by every template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateContext {
    pub owners: Vec<OwnerCtx>,
    pub labels: Vec<LabelCtx>,
    /// `None` when the blueprint has no `workflow` section.
    pub ci: Option<CiCtx>,
    pub bug: IssueCtx,
    pub feature: IssueCtx,
}

/// One `CODEOWNERS` line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerCtx {
    pub path: String,
    pub owners: Vec<String>,
}

/// One label block; `description` is empty when not configured.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelCtx {
    pub name: String,
    pub color: String,
    pub description: String,
}

/// CI workflow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CiCtx {
    /// Language exactly as configured.
    pub language: String,
    /// Setup step variant: `node`, `python` or `generic`.
    pub setup: String,
    pub versions: Vec<String>,
    pub os: Vec<String>,
    pub cache: bool,
    pub lint: bool,
    pub test: bool,
}

/// An issue form toggle plus its resolved title.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssueCtx {
    pub enabled: bool,
    pub title: String,
}

impl TemplateContext {
    /// Build a [`TemplateContext`] from a [`Blueprint`].
    pub fn from_blueprint(bp: &Blueprint) -> Self {
        let owners = bp
            .owners
            .iter()
            .map(|rule| OwnerCtx {
                path: rule.path.clone(),
                owners: rule.owners.clone(),
            })
            .collect();

        let labels = bp
            .labels
            .iter()
            .map(|label| LabelCtx {
                name: label.name.clone(),
                color: label.color.clone(),
                description: label.description.clone().unwrap_or_default(),
            })
            .collect();

        TemplateContext {
            owners,
            labels,
            ci: bp.workflow.as_ref().map(CiCtx::from_workflow),
            bug: IssueCtx::new(&bp.issues.bug, DEFAULT_BUG_TITLE),
            feature: IssueCtx::new(&bp.issues.feature, DEFAULT_FEATURE_TITLE),
        }
    }

    /// Convert to a Tera context.
    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}

impl CiCtx {
    fn from_workflow(wf: &WorkflowConfig) -> Self {
        let setup = match wf.ci.language {
            Language::Node => "node",
            Language::Python => "python",
            Language::Other(_) => "generic",
        };
        CiCtx {
            language: wf.ci.language.to_string(),
            setup: setup.to_string(),
            versions: wf.ci.versions.clone(),
            os: wf.ci.os.clone(),
            cache: wf.cache,
            lint: wf.lint,
            test: wf.test,
        }
    }
}

impl IssueCtx {
    fn new(tpl: &IssueTemplate, fallback: &str) -> Self {
        IssueCtx {
            enabled: tpl.enabled,
            title: tpl.title_or(fallback).to_string(),
        }
    }
}
