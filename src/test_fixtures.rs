//! Test fixtures shared by unit tests.
//!
//! ```ignore
//! use crate::test_fixtures::{create_source_tree, create_temp_dir};
//!
//! let temp = create_temp_dir();
//! let source = create_source_tree(&temp);
//! ```

use std::cell::Cell;
use std::collections::VecDeque;
use std::env;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::delivery::ConflictResolver;
use crate::delivery::fs::{DirEntry, Filesystem, OsFilesystem};
use crate::domain::{ArtifactKind, Resolution};
use crate::error::{AcError, Result};

/// Absolute base for temp dirs, so a relative TMPDIR never lands inside the repo
fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        PathBuf::from("/tmp")
    }
}

/// Create a temp directory in the system temp location.
///
/// # Panics
///
/// Panics if the temp directory cannot be created.
#[must_use]
pub fn create_temp_dir() -> TempDir {
    TempDir::new_in(temp_dir_base()).expect("Failed to create temp directory")
}

/// Create test files in a directory.
///
/// Paths are relative to the temp dir; parent directories are created.
///
/// # Panics
///
/// Panics if any file cannot be created.
pub fn create_test_files(temp: &TempDir, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = temp.path().join(path);
        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&full_path, content).expect("Failed to write test file");
    }
}

/// Populate `<temp>/source` with a small but complete source tree.
///
/// Contains `AGENTS.md`, two skills (`review` with a valid `SKILL.md`,
/// `notes` without one) and one subagent `planner`.
pub fn create_source_tree(temp: &TempDir) -> PathBuf {
    create_test_files(
        temp,
        &[
            ("source/AGENTS.md", "# Shared rules"),
            (
                "source/skills/review/SKILL.md",
                "---\nname: review\ndescription: Review code\n---\n\nReview carefully.",
            ),
            ("source/skills/review/checklist.md", "- tests"),
            ("source/skills/notes/README.md", "notes"),
            ("source/subagents/planner.md", "# Planner"),
        ],
    );
    temp.path().join("source")
}

/// [`Filesystem`] wrapper that counts every call before delegating to [`OsFilesystem`]
#[derive(Default)]
pub struct CountingFilesystem {
    calls: Cell<usize>,
}

impl CountingFilesystem {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn tick(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl Filesystem for CountingFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.tick();
        OsFilesystem.exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.tick();
        OsFilesystem.is_dir(path)
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        self.tick();
        OsFilesystem.read(path)
    }

    fn write(&self, path: &Path, contents: &[u8]) -> Result<()> {
        self.tick();
        OsFilesystem.write(path, contents)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<()> {
        self.tick();
        OsFilesystem.copy_file(from, to)
    }

    fn copy_dir(&self, from: &Path, to: &Path) -> Result<()> {
        self.tick();
        OsFilesystem.copy_dir(from, to)
    }

    fn read_dir(&self, dir: &Path) -> Result<Vec<DirEntry>> {
        self.tick();
        OsFilesystem.read_dir(dir)
    }
}

/// Resolver that replays a fixed list of answers and fails once they run out
pub struct ScriptedResolver {
    answers: VecDeque<Resolution>,
    calls: usize,
}

impl ScriptedResolver {
    pub fn new(answers: Vec<Resolution>) -> Self {
        Self {
            answers: answers.into(),
            calls: 0,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl ConflictResolver for ScriptedResolver {
    fn resolve(&mut self, destination: &Path, _kind: ArtifactKind) -> Result<Resolution> {
        self.calls += 1;
        self.answers.pop_front().ok_or_else(|| AcError::PromptFailed {
            message: format!("no scripted answer for {}", destination.display()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir() {
        let temp = create_temp_dir();
        assert!(temp.path().exists());
        assert!(temp.path().is_absolute());
    }

    #[test]
    fn test_create_test_files() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("skills/review/SKILL.md", "# Review")]);

        let content =
            std::fs::read_to_string(temp.path().join("skills/review/SKILL.md")).expect("read");
        assert_eq!(content, "# Review");
    }

    #[test]
    fn test_create_source_tree() {
        let temp = create_temp_dir();
        let source = create_source_tree(&temp);

        assert!(source.join("AGENTS.md").is_file());
        assert!(source.join("skills/review/SKILL.md").is_file());
        assert!(source.join("subagents/planner.md").is_file());
    }

    #[test]
    fn test_counting_filesystem_counts() {
        let temp = create_temp_dir();
        let fs = CountingFilesystem::default();

        fs.exists(temp.path());
        fs.read_dir(temp.path()).expect("list");
        assert_eq!(fs.calls(), 2);
    }

    #[test]
    fn test_scripted_resolver_runs_out() {
        let mut resolver = ScriptedResolver::new(vec![Resolution::Skip]);
        let path = Path::new("CLAUDE.md");

        assert_eq!(
            resolver.resolve(path, ArtifactKind::Document).ok(),
            Some(Resolution::Skip)
        );
        assert!(resolver.resolve(path, ArtifactKind::Document).is_err());
        assert_eq!(resolver.calls(), 2);
    }
}
