//! # blueprint-renderer
//!
//! Tera-based renderer that turns a [`Blueprint`](blueprint_core::Blueprint)
//! into the text of each repository metadata file.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use blueprint_core::Blueprint;
//! use blueprint_renderer::{Artifact, Renderer};
//!
//! fn render_all(blueprint: &Blueprint) {
//!     if let Ok(renderer) = Renderer::new() {
//!         if let Ok(outputs) = renderer.render_all(blueprint) {
//!             for out in outputs {
//!                 println!("{}: {} bytes", out.path.display(), out.content.len());
//!             }
//!         }
//!     }
//!     assert_eq!(Artifact::all().len(), 5);
//! }
//! ```

pub mod context;
pub mod engine;
pub mod error;

pub use context::TemplateContext;
pub use engine::{Artifact, RenderedArtifact, Renderer};
pub use error::RenderError;
