//! Delivery domain types
//!
//! Merge policy, per-delivery options, and the outcome record produced once per
//! (artifact, platform) pair.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::artifact::{ArtifactId, ArtifactKind};
use crate::error::{AcError, platform::invalid_merge_policy};

/// How an existing destination is reconciled with incoming source content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Replace the destination with the source
    Overwrite,
    /// Leave the destination untouched
    Skip,
    /// Append the source to the destination
    Merge,
    /// Ask once per conflicting artifact
    #[default]
    Ask,
}

impl MergePolicy {
    /// The non-interactive resolution this policy stands for, if any
    pub fn resolution(self) -> Option<Resolution> {
        match self {
            MergePolicy::Overwrite => Some(Resolution::Overwrite),
            MergePolicy::Skip => Some(Resolution::Skip),
            MergePolicy::Merge => Some(Resolution::Merge),
            MergePolicy::Ask => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MergePolicy::Overwrite => "overwrite",
            MergePolicy::Skip => "skip",
            MergePolicy::Merge => "merge",
            MergePolicy::Ask => "ask",
        }
    }
}

impl FromStr for MergePolicy {
    type Err = AcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "overwrite" => Ok(MergePolicy::Overwrite),
            "skip" => Ok(MergePolicy::Skip),
            "merge" => Ok(MergePolicy::Merge),
            "ask" => Ok(MergePolicy::Ask),
            _ => Err(invalid_merge_policy(s)),
        }
    }
}

impl fmt::Display for MergePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decision for one conflicting destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Merge,
    Overwrite,
    Skip,
}

/// Run-wide delivery options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryOptions {
    pub policy: MergePolicy,
    pub dry_run: bool,
    pub user_level: bool,
}

/// Action taken (or, for a dry run, that would be taken) for one delivery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Created,
    Overwritten,
    Merged,
    Skipped,
    Unsupported,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Created => "created",
            Action::Overwritten => "overwritten",
            Action::Merged => "merged",
            Action::Skipped => "skipped",
            Action::Unsupported => "unsupported",
        };
        f.write_str(s)
    }
}

/// Terminal result of reconciling one artifact against one platform's destination
#[derive(Debug)]
pub struct DeliveryOutcome {
    pub artifact: ArtifactId,
    pub action: Action,
    /// Destination path; absent when the platform cannot receive the artifact
    pub destination: Option<PathBuf>,
    /// I/O failure that aborted this delivery
    pub error: Option<AcError>,
    /// Whether this outcome only describes a planned action
    pub dry_run: bool,
    /// Explanation attached to unsupported or planned outcomes
    pub note: Option<String>,
    /// Non-fatal structural findings about the delivered artifact
    pub warnings: Vec<String>,
}

impl DeliveryOutcome {
    pub fn completed(artifact: ArtifactId, action: Action, destination: PathBuf) -> Self {
        Self {
            artifact,
            action,
            destination: Some(destination),
            error: None,
            dry_run: false,
            note: None,
            warnings: Vec::new(),
        }
    }

    pub fn planned(artifact: ArtifactId, action: Action, destination: PathBuf) -> Self {
        Self {
            dry_run: true,
            ..Self::completed(artifact, action, destination)
        }
    }

    pub fn failed(artifact: ArtifactId, action: Action, destination: PathBuf, error: AcError) -> Self {
        Self {
            error: Some(error),
            ..Self::completed(artifact, action, destination)
        }
    }

    pub fn unsupported(kind: ArtifactKind, name: &str, message: impl Into<String>) -> Self {
        Self {
            artifact: ArtifactId::new(kind, name),
            action: Action::Unsupported,
            destination: None,
            error: None,
            dry_run: false,
            note: Some(message.into()),
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_warnings(mut self, warnings: Vec<String>) -> Self {
        self.warnings = warnings;
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn destination(&self) -> Option<&Path> {
        self.destination.as_deref()
    }
}
