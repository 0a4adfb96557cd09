//! Source discovery
//!
//! A source root holds up to three kinds of components:
//!
//! ```text
//! <source>/
//!   AGENTS.md, AGENTS_*.md     documents
//!   skills/<name>/...          bundles
//!   subagents/<name>.md        subagents
//!   subagents/<name>/<name>.md subagents (directory form)
//! ```
//!
//! Hidden entries are ignored. Everything is listed in name order.

pub mod detection;

use std::path::{Path, PathBuf};

use tracing::debug;
use wax::{Glob, Pattern};

use crate::delivery::fs::Filesystem;
use crate::domain::{ArtifactKind, Bundle, Document, Subagent};
use crate::error::{Result, source::artifact_not_found, source::no_components};

pub const SKILLS_DIR: &str = "skills";
pub const SUBAGENTS_DIR: &str = "subagents";

/// Components discovered in a source root
#[derive(Debug, Clone, Default)]
pub struct SourceInventory {
    pub root: PathBuf,
    pub documents: Vec<Document>,
    pub bundles: Vec<Bundle>,
    pub subagents: Vec<Subagent>,
}

fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

fn is_document_name(name: &str) -> bool {
    name.starts_with("AGENTS") && name.ends_with(".md")
}

fn has_glob_syntax(pattern: &str) -> bool {
    pattern.contains(['*', '?', '[', '{'])
}

impl SourceInventory {
    /// Enumerate the components under `root`
    pub fn discover(fs: &dyn Filesystem, root: &Path) -> Result<Self> {
        let documents = fs
            .read_dir(root)?
            .into_iter()
            .filter(|e| !e.is_dir && !is_hidden(&e.name) && is_document_name(&e.name))
            .map(|e| Document::new(e.name.clone(), root.join(&e.name)))
            .collect();

        let skills_root = root.join(SKILLS_DIR);
        let mut bundles = Vec::new();
        for entry in fs.read_dir(&skills_root)? {
            if !entry.is_dir || is_hidden(&entry.name) {
                continue;
            }
            let path = skills_root.join(&entry.name);
            let files = fs
                .read_dir(&path)?
                .into_iter()
                .filter(|f| !f.is_dir && !is_hidden(&f.name))
                .map(|f| f.name)
                .collect();
            bundles.push(Bundle::new(entry.name, path, files));
        }

        let subagents_root = root.join(SUBAGENTS_DIR);
        let mut subagents = Vec::new();
        for entry in fs.read_dir(&subagents_root)? {
            if is_hidden(&entry.name) {
                continue;
            }
            if entry.is_dir {
                let file = subagents_root
                    .join(&entry.name)
                    .join(format!("{}.md", entry.name));
                if fs.exists(&file) {
                    subagents.push(Subagent::new(entry.name, file));
                } else {
                    debug!(dir = %entry.name, "subagent directory without matching markdown file");
                }
            } else if let Some(name) = entry.name.strip_suffix(".md") {
                subagents.push(Subagent::new(name, subagents_root.join(&entry.name)));
            }
        }

        let inventory = Self {
            root: root.to_path_buf(),
            documents,
            bundles,
            subagents,
        };
        debug!(
            documents = inventory.documents.len(),
            bundles = inventory.bundles.len(),
            subagents = inventory.subagents.len(),
            "discovered source components"
        );
        Ok(inventory)
    }

    /// Discover and fail with `NoComponents` when the source is empty
    pub fn discover_non_empty(fs: &dyn Filesystem, root: &Path) -> Result<Self> {
        let inventory = Self::discover(fs, root)?;
        if inventory.is_empty() {
            return Err(no_components(root.display().to_string()));
        }
        Ok(inventory)
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty() && self.bundles.is_empty() && self.subagents.is_empty()
    }

    pub fn document(&self, name: &str) -> Result<&Document> {
        self.documents
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| artifact_not_found(ArtifactKind::Document.label(), name))
    }

    pub fn subagent(&self, name: &str) -> Result<&Subagent> {
        self.subagents
            .iter()
            .find(|s| s.name == name)
            .ok_or_else(|| artifact_not_found(ArtifactKind::Subagent.label(), name))
    }

    /// Bundles matching each pattern, in pattern order without duplicates
    ///
    /// A pattern is an exact name or a glob (`review*`, `{plan,test}`). Every
    /// pattern must match at least one bundle.
    pub fn select_bundles(&self, patterns: &[String]) -> Result<Vec<Bundle>> {
        let mut selected: Vec<Bundle> = Vec::new();

        for pattern in patterns {
            let matched: Vec<&Bundle> = if has_glob_syntax(pattern) {
                match Glob::new(pattern) {
                    Ok(glob) => self
                        .bundles
                        .iter()
                        .filter(|b| glob.is_match(b.name.as_str()))
                        .collect(),
                    Err(_) => self.bundles.iter().filter(|b| &b.name == pattern).collect(),
                }
            } else {
                self.bundles.iter().filter(|b| &b.name == pattern).collect()
            };

            if matched.is_empty() {
                return Err(artifact_not_found(ArtifactKind::Bundle.label(), pattern));
            }
            for bundle in matched {
                if !selected.iter().any(|b| b.name == bundle.name) {
                    selected.push(bundle.clone());
                }
            }
        }

        Ok(selected)
    }

    /// Subagents by name, in the given order without duplicates
    pub fn select_subagents(&self, names: &[String]) -> Result<Vec<Subagent>> {
        let mut selected: Vec<Subagent> = Vec::new();
        for name in names {
            let subagent = self.subagent(name)?;
            if !selected.iter().any(|s| s.name == subagent.name) {
                selected.push(subagent.clone());
            }
        }
        Ok(selected)
    }

    pub fn bundle_names(&self) -> Vec<String> {
        self.bundles.iter().map(|b| b.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::delivery::fs::OsFilesystem;
    use crate::error::AcError;
    use crate::test_fixtures::{create_source_tree, create_temp_dir, create_test_files};

    #[test]
    fn test_discover_source_tree() {
        let temp = create_temp_dir();
        let source = create_source_tree(&temp);

        let inventory = SourceInventory::discover(&OsFilesystem, &source).unwrap();

        let docs: Vec<_> = inventory.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(docs, vec!["AGENTS.md"]);
        assert_eq!(inventory.bundle_names(), vec!["notes", "review"]);
        let review = &inventory.bundles[1];
        assert_eq!(review.files, vec!["SKILL.md", "checklist.md"]);
        assert!(review.has_file("SKILL.md"));
        assert_eq!(inventory.subagents.len(), 1);
        assert_eq!(inventory.subagents[0].name, "planner");
    }

    #[test]
    fn test_discover_filters_names() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("AGENTS.md", "a"),
                ("AGENTS_STRICT.md", "b"),
                ("README.md", "c"),
                ("AGENTS.txt", "d"),
                ("skills/.hidden/SKILL.md", "e"),
                ("skills/stray.md", "f"),
            ],
        );

        let inventory = SourceInventory::discover(&OsFilesystem, temp.path()).unwrap();

        let docs: Vec<_> = inventory.documents.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(docs, vec!["AGENTS.md", "AGENTS_STRICT.md"]);
        assert!(inventory.bundles.is_empty());
    }

    #[test]
    fn test_discover_subagent_layouts() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("subagents/flat.md", "flat"),
                ("subagents/nested/nested.md", "nested"),
                ("subagents/empty/other.md", "ignored"),
                ("subagents/notes.txt", "ignored"),
            ],
        );

        let inventory = SourceInventory::discover(&OsFilesystem, temp.path()).unwrap();

        let names: Vec<_> = inventory.subagents.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["flat", "nested"]);
        assert!(inventory.subagents[1].path.ends_with("nested/nested.md"));
    }

    #[test]
    fn test_empty_source_has_no_components() {
        let temp = create_temp_dir();
        let result = SourceInventory::discover_non_empty(&OsFilesystem, temp.path());
        assert!(matches!(result, Err(AcError::NoComponents { .. })));
    }

    #[test]
    fn test_select_bundles_exact_and_glob() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[
                ("skills/plan/SKILL.md", ""),
                ("skills/review-code/SKILL.md", ""),
                ("skills/review-docs/SKILL.md", ""),
            ],
        );
        let inventory = SourceInventory::discover(&OsFilesystem, temp.path()).unwrap();

        let selected = inventory
            .select_bundles(&["review*".to_string(), "plan".to_string(), "review-docs".to_string()])
            .unwrap();

        let names: Vec<_> = selected.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["review-code", "review-docs", "plan"]);
    }

    #[test]
    fn test_select_unknown_bundle() {
        let temp = create_temp_dir();
        let source = create_source_tree(&temp);
        let inventory = SourceInventory::discover(&OsFilesystem, &source).unwrap();

        let result = inventory.select_bundles(&["missing".to_string()]);
        assert!(matches!(
            result,
            Err(AcError::ArtifactNotFound { ref name, .. }) if name == "missing"
        ));
    }

    #[test]
    fn test_lookup_document_and_subagent() {
        let temp = create_temp_dir();
        let source = create_source_tree(&temp);
        let inventory = SourceInventory::discover(&OsFilesystem, &source).unwrap();

        assert!(inventory.document("AGENTS.md").is_ok());
        assert!(inventory.document("AGENTS_X.md").is_err());
        assert_eq!(
            inventory.select_subagents(&["planner".to_string()]).unwrap().len(),
            1
        );
        assert!(inventory.subagent("ghost").is_err());
    }
}
