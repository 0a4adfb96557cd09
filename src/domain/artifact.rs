//! Artifact domain types
//!
//! Read-only views over source content that has already been discovered. An artifact
//! knows its identity and where its source lives; content is read at delivery time.

use std::fmt;
use std::path::{Path, PathBuf};

/// Kind of artifact being delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Primary instructions file (AGENTS.md and variants)
    Document,
    /// Skill directory
    Bundle,
    /// Name-qualified subagent file
    Subagent,
}

impl ArtifactKind {
    /// Whether the artifact is delivered as a directory rather than a single file
    pub fn is_directory(self) -> bool {
        matches!(self, ArtifactKind::Bundle)
    }

    /// Human readable label used in messages
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Document => "Agent file",
            ArtifactKind::Bundle => "Skill",
            ArtifactKind::Subagent => "Subagent",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identity of an artifact, unique within its kind for a given source
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactId {
    pub kind: ArtifactKind,
    pub name: String,
}

impl ArtifactId {
    pub fn new(kind: ArtifactKind, name: &str) -> Self {
        Self {
            kind,
            name: name.to_string(),
        }
    }
}

impl fmt::Display for ArtifactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.kind.label().to_lowercase(), self.name)
    }
}

/// Singleton instructions document, identified by its file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// File name in the source root (e.g., "AGENTS.md")
    pub name: String,
    /// Absolute path to the source file
    pub path: PathBuf,
}

impl Document {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    pub fn id(&self) -> ArtifactId {
        ArtifactId::new(ArtifactKind::Document, &self.name)
    }
}

/// Skill bundle: a named directory of files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bundle {
    /// Directory name under the source `skills/` directory
    pub name: String,
    /// Absolute path to the bundle directory
    pub path: PathBuf,
    /// Top-level file names in discovery order
    pub files: Vec<String>,
}

impl Bundle {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>, files: Vec<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            files,
        }
    }

    /// Whether the bundle carries a file with the given name at its top level
    pub fn has_file(&self, file_name: &str) -> bool {
        self.files.iter().any(|f| f == file_name)
    }

    pub fn id(&self) -> ArtifactId {
        ArtifactId::new(ArtifactKind::Bundle, &self.name)
    }
}

/// Subagent definition: a markdown file delivered as `<name>.md`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subagent {
    pub name: String,
    /// Absolute path to the source markdown file
    pub path: PathBuf,
}

impl Subagent {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// File name used at the destination
    pub fn file_name(&self) -> String {
        format!("{}.md", self.name)
    }

    pub fn id(&self) -> ArtifactId {
        ArtifactId::new(ArtifactKind::Subagent, &self.name)
    }
}

/// Any deliverable artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Artifact {
    Document(Document),
    Bundle(Bundle),
    Subagent(Subagent),
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Artifact::Document(_) => ArtifactKind::Document,
            Artifact::Bundle(_) => ArtifactKind::Bundle,
            Artifact::Subagent(_) => ArtifactKind::Subagent,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Artifact::Document(d) => &d.name,
            Artifact::Bundle(b) => &b.name,
            Artifact::Subagent(s) => &s.name,
        }
    }

    pub fn source_path(&self) -> &Path {
        match self {
            Artifact::Document(d) => &d.path,
            Artifact::Bundle(b) => &b.path,
            Artifact::Subagent(s) => &s.path,
        }
    }

    pub fn id(&self) -> ArtifactId {
        ArtifactId::new(self.kind(), self.name())
    }
}
