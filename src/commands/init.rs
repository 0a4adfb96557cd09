//! Init command implementation
//!
//! Seeds the home source directory (`~/.ac`) from a project source so that
//! `ac copy` works from any directory.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::info;

use crate::cli::InitArgs;
use crate::delivery::{Filesystem, OsFilesystem};
use crate::error::{AcError, Result};
use crate::source::{SKILLS_DIR, SUBAGENTS_DIR, SourceInventory, detection};
use crate::ui::prompt;

/// Run init command
pub fn run(args: InitArgs) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let from = resolve_from(args.from.as_deref(), &cwd)?;
    let dest = match args.dest {
        Some(dest) => cwd.join(dest),
        None => detection::home_source_dir().ok_or_else(|| AcError::IoError {
            message: "Cannot determine home directory".to_string(),
        })?,
    };

    if OsFilesystem.exists(&dest) && !args.yes {
        if !prompt::is_interactive() {
            return Err(AcError::PromptFailed {
                message: format!(
                    "{} already exists and no terminal is available to ask",
                    dest.display()
                ),
            });
        }
        let message = format!("{} already exists. Overwrite?", dest.display());
        if !prompt::confirm(&message)? {
            println!("Init cancelled.");
            return Ok(());
        }
    }

    let copied = seed(&OsFilesystem, &from, &dest)?;
    for line in &copied {
        println!("  {} Copied {line}", Style::new().green().apply_to("✓"));
    }
    println!(
        "\n{}",
        Style::new().green().bold().apply_to("✓ ac initialized successfully!")
    );
    println!("Source directory: {}", dest.display());
    Ok(())
}

/// `--from`, else the nearest `.agents` directory
fn resolve_from(flag: Option<&Path>, cwd: &Path) -> Result<PathBuf> {
    match flag {
        Some(path) => detection::resolve(Some(path), cwd),
        None => detection::find_from(cwd, None).ok_or(AcError::SourceDirNotFound),
    }
}

/// Copy every component of `from` into `dest`, returning one label per copy
///
/// Existing files at the same path are replaced; other files in `dest` stay.
fn seed(fs: &dyn Filesystem, from: &Path, dest: &Path) -> Result<Vec<String>> {
    let inventory = SourceInventory::discover_non_empty(fs, from)?;
    let same_dir = match (dunce::canonicalize(dest), dunce::canonicalize(from)) {
        (Ok(dest), Ok(from)) => dest == from,
        _ => false,
    };
    if same_dir {
        return Err(AcError::IoError {
            message: format!("{} is already the source directory", dest.display()),
        });
    }
    info!(from = %from.display(), dest = %dest.display(), "seeding source directory");

    let mut copied = Vec::new();
    for document in &inventory.documents {
        fs.copy_file(&document.path, &dest.join(&document.name))?;
        copied.push(document.name.clone());
    }
    for bundle in &inventory.bundles {
        let relative = Path::new(SKILLS_DIR).join(&bundle.name);
        fs.copy_dir(&bundle.path, &dest.join(relative))?;
        copied.push(format!("skill: {}", bundle.name));
    }
    for subagent in &inventory.subagents {
        let target = match subagent.path.strip_prefix(from) {
            Ok(relative) => dest.join(relative),
            Err(_) => dest.join(SUBAGENTS_DIR).join(subagent.file_name()),
        };
        fs.copy_file(&subagent.path, &target)?;
        copied.push(format!("subagent: {}", subagent.name));
    }
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{create_source_tree, create_temp_dir, create_test_files};

    #[test]
    fn test_seed_copies_all_components() {
        let temp = create_temp_dir();
        let source = create_source_tree(&temp);
        let dest = temp.path().join("home/.ac");

        let copied = seed(&OsFilesystem, &source, &dest).unwrap();

        assert_eq!(
            copied,
            vec![
                "AGENTS.md",
                "skill: notes",
                "skill: review",
                "subagent: planner",
            ]
        );
        assert!(dest.join("AGENTS.md").is_file());
        assert!(dest.join("skills/review/checklist.md").is_file());
        assert!(dest.join("subagents/planner.md").is_file());
    }

    #[test]
    fn test_seed_keeps_unrelated_files() {
        let temp = create_temp_dir();
        let source = create_source_tree(&temp);
        create_test_files(
            &temp,
            &[("home/.ac/AGENTS.md", "old"), ("home/.ac/skills/mine/SKILL.md", "mine")],
        );
        let dest = temp.path().join("home/.ac");

        seed(&OsFilesystem, &source, &dest).unwrap();

        assert_eq!(
            std::fs::read_to_string(dest.join("AGENTS.md")).unwrap(),
            "# Shared rules"
        );
        assert!(dest.join("skills/mine/SKILL.md").exists());
    }

    #[test]
    fn test_seed_empty_source() {
        let temp = create_temp_dir();
        let result = seed(&OsFilesystem, temp.path(), &temp.path().join("dest"));
        assert!(matches!(result, Err(AcError::NoComponents { .. })));
    }

    #[test]
    fn test_resolve_from_finds_agents_dir() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[(".agents/AGENTS.md", "x")]);
        let nested = temp.path().join("src");
        std::fs::create_dir_all(&nested).unwrap();

        let from = resolve_from(None, &nested).unwrap();
        assert!(from.ends_with(".agents"));
    }
}
