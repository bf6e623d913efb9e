//! Blueprint — generate repository metadata from a single blueprint document.
//!
//! # Usage
//!
//! ```text
//! blueprint            # same as --write
//! blueprint --write    # render and overwrite CODEOWNERS, .github/labels.yml, ...
//! blueprint --check    # diff a fresh render against the checked-in files
//! ```
//!
//! The blueprint is read from the current directory.

mod commands;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use blueprint_core::BlueprintError;
use blueprint_sync::{
    pipeline::{self, Mode, Outcome},
    SyncError,
};

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "blueprint",
    version,
    about = "Generate GitHub repository metadata from blueprint.json",
    long_about = None,
)]
struct Cli {
    /// Check drift only (no writes to the repository).
    #[arg(long, conflicts_with = "write")]
    check: bool,

    /// Write files to the repository (default if no flag is given).
    #[arg(long)]
    write: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.check {
            Mode::Check
        } else {
            Mode::Write
        }
    }
}

// ---------------------------------------------------------------------------
// Exit codes
// ---------------------------------------------------------------------------

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Exit {
    Success = 0,
    Drift = 1,
    MissingConfig = 2,
}

impl From<Exit> for ExitCode {
    fn from(exit: Exit) -> Self {
        ExitCode::from(exit as u8)
    }
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match run(&cli) {
        Ok(exit) => exit.into(),
        Err(err) => report_error(&err),
    }
}

fn run(cli: &Cli) -> Result<Exit> {
    let root = std::env::current_dir().context("could not determine working directory")?;
    let outcome = pipeline::run(&root, cli.mode())
        .with_context(|| format!("blueprint run failed in {}", root.display()))?;
    match outcome {
        Outcome::Written(results) => Ok(commands::write::report(&results)),
        Outcome::Checked(report) => Ok(commands::check::report(&report)),
    }
}

fn report_error(err: &anyhow::Error) -> ExitCode {
    if let Some(SyncError::Blueprint(BlueprintError::NotFound { path })) =
        err.downcast_ref::<SyncError>()
    {
        eprintln!("ERROR: blueprint.json not found.");
        eprintln!("  looked for {}", path.display());
        return Exit::MissingConfig.into();
    }
    tracing::debug!("{err:?}");
    eprintln!("error: {err:#}");
    ExitCode::FAILURE
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
