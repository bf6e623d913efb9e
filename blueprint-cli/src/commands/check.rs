//! `blueprint --check` — print drift between the repository and a fresh render.

use colored::Colorize;

use blueprint_sync::DriftReport;

use crate::Exit;

/// Print every unified diff and map the report to an exit code.
pub fn report(report: &DriftReport) -> Exit {
    if !report.has_drift() {
        println!("{}", "No drift detected.".green().bold());
        return Exit::Success;
    }

    println!("{}", "Drift detected (repo vs generated):".red().bold());
    for diff in &report.diffs {
        print!("{}", diff.unified_diff);
        if !diff.unified_diff.ends_with('\n') {
            println!();
        }
    }
    Exit::Drift
}
