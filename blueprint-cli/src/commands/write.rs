//! `blueprint --write` — print what the writer produced.

use blueprint_sync::WriteResult;

use crate::Exit;

/// Print one `wrote <path>` line per written artifact. Skipped ones are silent.
pub fn report(results: &[WriteResult]) -> Exit {
    for result in results {
        if let WriteResult::Written { path } = result {
            println!("wrote {}", path.display());
        }
    }
    Exit::Success
}
