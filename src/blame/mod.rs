//! Turning raw blame output into per-file attribution.
//!
//! Files are parsed from the `git blame --incremental` stream. A file with
//! no blame output at all is attributed to the last commit that touched it
//! instead, so binary and empty files still count toward commits and files.

pub mod fallback;
pub mod parser;

use tracing::trace;

use crate::error::Result;
use crate::git::BlameSource;
use crate::model::{FileBlame, IdentityMode};

pub use fallback::parse_last_commit;
pub use parser::parse_incremental;

/// Retrieve and parse one file. Retrieval errors are returned to the
/// caller, which decides whether the file contributes at all.
pub fn blame_file(
    source: &(impl BlameSource + ?Sized),
    path: &str,
    mode: IdentityMode,
) -> Result<FileBlame> {
    let raw = source.blame(path)?;
    if !raw.trim().is_empty() {
        let blame = parse_incremental(&raw, mode);
        trace!(
            path,
            identities = blame.len(),
            lines = blame.total_lines(),
            "parsed blame"
        );
        return Ok(blame);
    }

    trace!(path, "no blame output, falling back to log");
    let record = source.last_commit(path)?;
    Ok(parse_last_commit(&record, mode))
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
