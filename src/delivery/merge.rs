//! Merge algorithm for existing destinations
//!
//! ## Files
//!
//! Appends the source after the existing destination content, separated by a
//! blank line, a horizontal rule and another blank line:
//!
//! ```text
//! Existing: "# Team rules"
//! Source:   "# Shared rules"
//!
//! Result:
//! # Team rules
//!
//! ---
//!
//! # Shared rules
//! ```
//!
//! The merge is append-only. It never deduplicates, diffs or reconciles
//! overlapping sections, so merging the same source into the same destination
//! twice leaves two copies of the source.
//!
//! If the destination disappeared after the caller's existence check, the merge
//! degenerates to a plain copy and reports [`Action::Created`]; no separator is
//! written in that case.
//!
//! ## Directories
//!
//! Skill directories merge file by file: a source file whose name also exists in
//! the destination is merged with the file rule above, any other source file is
//! copied verbatim. Subdirectories are merged the same way, recursively. Files
//! that only exist in the destination are left alone, so the result is always a
//! superset of both sides by file name.

use std::path::Path;

use tracing::debug;

use super::fs::Filesystem;
use crate::domain::Action;
use crate::error::Result;
use crate::error::fs::read_failed;

/// Bytes written between existing content and appended source content
pub const SEPARATOR: &str = "\n\n---\n\n";

/// Concatenate existing content, the separator and incoming content
pub fn merge_contents(existing: &[u8], incoming: &[u8]) -> Vec<u8> {
    let mut merged = Vec::with_capacity(existing.len() + SEPARATOR.len() + incoming.len());
    merged.extend_from_slice(existing);
    merged.extend_from_slice(SEPARATOR.as_bytes());
    merged.extend_from_slice(incoming);
    merged
}

/// Merge a single source file into `destination`
pub fn merge_file(fs: &dyn Filesystem, source: &Path, destination: &Path) -> Result<Action> {
    let incoming = fs.read(source)?;

    if !fs.exists(destination) {
        debug!(destination = %destination.display(), "merge target vanished, copying instead");
        fs.write(destination, &incoming)?;
        return Ok(Action::Created);
    }

    let existing = fs.read(destination)?;
    fs.write(destination, &merge_contents(&existing, &incoming))?;
    Ok(Action::Merged)
}

/// Merge a source directory into `destination`
pub fn merge_dir(fs: &dyn Filesystem, source: &Path, destination: &Path) -> Result<Action> {
    if !fs.is_dir(source) {
        return Err(read_failed(
            source.display().to_string(),
            "source directory does not exist",
        ));
    }

    if !fs.exists(destination) {
        debug!(destination = %destination.display(), "merge target vanished, copying instead");
        fs.copy_dir(source, destination)?;
        return Ok(Action::Created);
    }

    merge_entries(fs, source, destination)?;
    Ok(Action::Merged)
}

fn merge_entries(fs: &dyn Filesystem, source: &Path, destination: &Path) -> Result<()> {
    for entry in fs.read_dir(source)? {
        let from = source.join(&entry.name);
        let to = destination.join(&entry.name);

        match (entry.is_dir, fs.exists(&to)) {
            (true, true) => merge_entries(fs, &from, &to)?,
            (true, false) => fs.copy_dir(&from, &to)?,
            (false, true) => {
                let existing = fs.read(&to)?;
                let incoming = fs.read(&from)?;
                fs.write(&to, &merge_contents(&existing, &incoming))?;
            }
            (false, false) => fs.copy_file(&from, &to)?,
        }
    }

    Ok(())
}
