//! Domain types for the blueprint document.
//!
//! Every field is optional in the source document; defaults are applied by
//! serde at parse time so renderers always see a complete value.
//! All types are serializable/deserializable via serde (JSON and YAML).

use std::fmt;

use serde::{de::Error as _, Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Issue-form title used when `issues.bug.title` is absent.
pub const DEFAULT_BUG_TITLE: &str = "Bug report";
/// Issue-form title used when `issues.feature.title` is absent.
pub const DEFAULT_FEATURE_TITLE: &str = "Feature request";

fn default_versions() -> Vec<String> {
    vec!["20".to_owned()]
}

fn default_os() -> Vec<String> {
    vec!["ubuntu-latest".to_owned()]
}

fn default_true() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Toolchain the CI workflow sets up.
///
/// Any value other than `node` or `python` is kept verbatim and rendered as a
/// generic placeholder step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Language {
    #[default]
    Node,
    Python,
    Other(String),
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        match s.as_str() {
            "node" => Language::Node,
            "python" => Language::Python,
            _ => Language::Other(s),
        }
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        Language::from(s.to_owned())
    }
}

impl From<Language> for String {
    fn from(l: Language) -> Self {
        l.to_string()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Node => write!(f, "node"),
            Language::Python => write!(f, "python"),
            Language::Other(other) => write!(f, "{other}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Sections
// ---------------------------------------------------------------------------

/// One `CODEOWNERS` rule: a path pattern and the identifiers that own it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerRule {
    pub path: String,
    #[serde(default)]
    pub owners: Vec<String>,
}

/// One repository label definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub name: String,
    pub color: String,
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The `workflow.ci` block: toolchain and matrix axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CiConfig {
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_versions", deserialize_with = "scalar_list")]
    pub versions: Vec<String>,
    #[serde(default = "default_os")]
    pub os: Vec<String>,
}

impl Default for CiConfig {
    fn default() -> Self {
        Self {
            language: Language::default(),
            versions: default_versions(),
            os: default_os(),
        }
    }
}

/// The `workflow` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowConfig {
    #[serde(default)]
    pub ci: CiConfig,
    #[serde(default = "default_true")]
    pub cache: bool,
    #[serde(default = "default_true")]
    pub lint: bool,
    #[serde(default = "default_true")]
    pub test: bool,
}

impl Default for WorkflowConfig {
    fn default() -> Self {
        Self {
            ci: CiConfig::default(),
            cache: true,
            lint: true,
            test: true,
        }
    }
}

/// A toggleable issue-intake form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IssueTemplate {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl IssueTemplate {
    /// Configured title, or `fallback` when none was given.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.title.as_deref().unwrap_or(fallback)
    }
}

/// The `issues` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct IssuesConfig {
    #[serde(default)]
    pub bug: IssueTemplate,
    #[serde(default)]
    pub feature: IssueTemplate,
}

// ---------------------------------------------------------------------------
// Document root
// ---------------------------------------------------------------------------

/// The whole blueprint document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Blueprint {
    #[serde(default)]
    pub owners: Vec<OwnerRule>,
    #[serde(default)]
    pub labels: Vec<Label>,
    /// `None` when the document has no `workflow` key; the CI file is then
    /// not generated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workflow: Option<WorkflowConfig>,
    #[serde(default)]
    pub issues: IssuesConfig,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Accepts `["18", 20, "3.10"]`. Integers are kept as written; any other
/// number is rejected because its source text (`3.10`) is already lost.
fn scalar_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Vec::<Scalar>::deserialize(deserializer)?
        .into_iter()
        .map(|s| match s {
            Scalar::Text(t) => Ok(t),
            Scalar::Int(i) => Ok(i.to_string()),
            Scalar::Float(_) => Err(D::Error::custom(
                "non-integer versions must be quoted, e.g. \"3.10\" instead of 3.10",
            )),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let bp: Blueprint = serde_json::from_str("{}").unwrap();
        assert!(bp.owners.is_empty());
        assert!(bp.labels.is_empty());
        assert!(bp.workflow.is_none());
        assert!(!bp.issues.bug.enabled);
        assert!(!bp.issues.feature.enabled);
    }

    #[test]
    fn partial_workflow_fills_in_defaults() {
        let bp: Blueprint = serde_json::from_str(r#"{"workflow": {"lint": false}}"#).unwrap();
        let wf = bp.workflow.expect("workflow present");
        assert_eq!(wf.ci.language, Language::Node);
        assert_eq!(wf.ci.versions, vec!["20"]);
        assert_eq!(wf.ci.os, vec!["ubuntu-latest"]);
        assert!(wf.cache);
        assert!(!wf.lint);
        assert!(wf.test);
    }

    #[test]
    fn unknown_language_is_kept_verbatim() {
        let ci: CiConfig = serde_json::from_str(r#"{"language": "go"}"#).unwrap();
        assert_eq!(ci.language, Language::Other("go".into()));
        assert_eq!(ci.language.to_string(), "go");
    }

    #[test]
    fn integer_versions_are_accepted() {
        let ci: CiConfig = serde_json::from_str(r#"{"versions": ["18", 20, "3.10"]}"#).unwrap();
        assert_eq!(ci.versions, vec!["18", "20", "3.10"]);
    }

    #[test]
    fn unquoted_decimal_version_is_rejected() {
        let err = serde_json::from_str::<CiConfig>(r#"{"versions": [3.10, 3.9]}"#).unwrap_err();
        assert!(err.to_string().contains("must be quoted"), "got: {err}");

        let err = serde_yaml::from_str::<CiConfig>("versions: [3.10, 3.12]\n").unwrap_err();
        assert!(err.to_string().contains("must be quoted"), "got: {err}");
    }

    #[test]
    fn label_desc_alias_is_accepted() {
        let label: Label =
            serde_json::from_str(r#"{"name": "bug", "color": "d73a4a", "desc": "Broken"}"#)
                .unwrap();
        assert_eq!(label.description.as_deref(), Some("Broken"));
    }

    #[test]
    fn issue_title_falls_back() {
        let tpl = IssueTemplate {
            enabled: true,
            title: None,
        };
        assert_eq!(tpl.title_or(DEFAULT_BUG_TITLE), "Bug report");
        let tpl = IssueTemplate {
            enabled: true,
            title: Some("Crash".into()),
        };
        assert_eq!(tpl.title_or(DEFAULT_BUG_TITLE), "Crash");
    }

    #[test]
    fn language_serializes_as_plain_string() {
        let yaml = serde_yaml::to_string(&CiConfig::default()).unwrap();
        assert!(yaml.contains("language: node"), "got: {yaml}");
    }
}
