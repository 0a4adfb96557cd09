//! Source directory detection
//!
//! The source root is, in order: an explicit path, `~/.ac`, or the first
//! `.agents` directory found in the start directory or up to two parents.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{AcError, Result, source::not_found};

/// Home-level source directory name
pub const HOME_SOURCE_DIR: &str = ".ac";

/// Project-level source directory name
pub const PROJECT_SOURCE_DIR: &str = ".agents";

/// How many parents of the start directory are searched for `.agents`
const PARENT_SEARCH_DEPTH: usize = 2;

/// `~/.ac`, if a home directory is known
pub fn home_source_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(HOME_SOURCE_DIR))
}

/// Find a source directory without an explicit path
///
/// `home_source` is checked first; then `.agents` in `start` and its parents.
pub fn find_from(start: &Path, home_source: Option<&Path>) -> Option<PathBuf> {
    if let Some(home) = home_source.filter(|p| p.is_dir()) {
        return Some(home.to_path_buf());
    }

    start
        .ancestors()
        .take(PARENT_SEARCH_DEPTH + 1)
        .map(|dir| dir.join(PROJECT_SOURCE_DIR))
        .find(|candidate| candidate.is_dir())
}

/// Resolve the source root to an absolute directory
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    let found = match explicit {
        Some(path) => {
            let path = cwd.join(path);
            if !path.is_dir() {
                return Err(not_found(path.display().to_string()));
            }
            path
        }
        None => find_from(cwd, home_source_dir().as_deref()).ok_or(AcError::SourceDirNotFound)?,
    };

    let canonical = dunce::canonicalize(&found).unwrap_or(found);
    debug!(source = %canonical.display(), "resolved source directory");
    Ok(canonical)
}
