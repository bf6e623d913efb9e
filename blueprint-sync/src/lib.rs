//! # blueprint-sync
//!
//! Writer and drift checker for rendered blueprint artifacts.
//!
//! Call [`write_all`] to materialise every enabled artifact under a root, or
//! [`check_drift`] to compare a checked-in tree against a fresh render.

pub mod drift;
pub mod error;
pub mod pipeline;
pub mod writer;

pub use drift::{check_drift, DriftReport, FileDiff};
pub use error::SyncError;
pub use writer::{write_all, WriteResult};
