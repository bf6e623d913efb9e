//! Blueprint core library — configuration types, loading, errors.
//!
//! Public API surface:
//! - [`types`] — the typed blueprint document and its defaults
//! - [`error`] — [`BlueprintError`]
//! - [`loader`] — locate and parse `blueprint.json` / `blueprint.yaml`

pub mod error;
pub mod loader;
pub mod types;

pub use error::BlueprintError;
pub use types::{
    Blueprint, CiConfig, IssueTemplate, IssuesConfig, Label, Language, OwnerRule,
    WorkflowConfig,
};
