//! Destination platforms
//!
//! This module handles:
//! - Platform descriptors (paths and capability flags, via [`PlatformDescriptor`])
//! - The shared delivery contract (via the [`Platform`] trait)
//! - Skill manifest checks for platforms that read `SKILL.md` (via [`manifest`])
//! - Structural validation of a target (via [`validate`])
//! - Name lookup (via [`registry`])

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::delivery::fs::Filesystem;
use crate::delivery::{DeliveryRequest, Reconciler};
use crate::domain::{
    Artifact, ArtifactKind, Bundle, DeliveryOptions, DeliveryOutcome, Document, Subagent,
};
use crate::error::Result;

pub use registry::{all, get};
pub use validate::ValidationReport;

pub mod amp;
pub mod claude;
pub mod manifest;
pub mod registry;
pub mod standard;
pub mod validate;

/// Immutable per-platform paths and capabilities
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformDescriptor {
    /// Registry key (e.g., "claude", "amp")
    pub name: String,

    /// Display label used in messages (e.g., "Claude")
    pub label: String,

    /// Document file name relative to the target (e.g., "CLAUDE.md")
    pub document: String,

    /// Workspace skills directory relative to the target
    pub skills_dir: String,

    /// Home-level skills directory; `~` expands to the home directory
    pub user_skills_dir: Option<String>,

    /// Subagents directory relative to the target
    pub subagents_dir: Option<String>,

    pub supports_bundles: bool,
    pub supports_subagents: bool,
}

impl PlatformDescriptor {
    /// Create a descriptor that supports bundles but not subagents
    pub fn new(
        name: impl Into<String>,
        label: impl Into<String>,
        document: impl Into<String>,
        skills_dir: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            document: document.into(),
            skills_dir: skills_dir.into(),
            user_skills_dir: None,
            subagents_dir: None,
            supports_bundles: true,
            supports_subagents: false,
        }
    }

    pub fn with_user_skills(mut self, dir: impl Into<String>) -> Self {
        self.user_skills_dir = Some(dir.into());
        self
    }

    /// Enable subagents, stored under `dir`
    pub fn with_subagents(mut self, dir: impl Into<String>) -> Self {
        self.subagents_dir = Some(dir.into());
        self.supports_subagents = true;
        self
    }

    pub fn without_bundles(mut self) -> Self {
        self.supports_bundles = false;
        self
    }

    pub fn document_path(&self, target: &Path) -> PathBuf {
        target.join(&self.document)
    }

    /// Skills root, at home level when `user_level` is set and the platform has one
    pub fn skills_root(&self, target: &Path, user_level: bool) -> PathBuf {
        if user_level {
            if let Some(dir) = self.user_skills_dir.as_deref().and_then(expand_home) {
                return dir;
            }
        }
        target.join(&self.skills_dir)
    }

    pub fn bundle_path(&self, target: &Path, name: &str, user_level: bool) -> PathBuf {
        self.skills_root(target, user_level).join(name)
    }

    /// Subagent destination, `None` when subagents are unsupported
    pub fn subagent_path(&self, target: &Path, name: &str) -> Option<PathBuf> {
        if !self.supports_subagents {
            return None;
        }
        self.subagents_dir
            .as_ref()
            .map(|dir| target.join(dir).join(format!("{name}.md")))
    }
}

/// Expand a leading `~` to the home directory
fn expand_home(path: &str) -> Option<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir().map(|home| home.join(rest)),
        None if path == "~" => dirs::home_dir(),
        None => Some(PathBuf::from(path)),
    }
}

/// A destination platform
///
/// Delivery and validation are shared; platforms only specialize
/// [`Platform::check_bundle`].
pub trait Platform: Send + Sync {
    fn descriptor(&self) -> &PlatformDescriptor;

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    /// Read-only structural check of one bundle directory, returning warnings
    ///
    /// An `Err` means a file could not be read.
    fn check_bundle(&self, _fs: &dyn Filesystem, _dir: &Path, _name: &str) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn deliver_document(
        &self,
        reconciler: &mut Reconciler<'_>,
        document: &Document,
        target: &Path,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome {
        let request = DeliveryRequest::new(
            document.id(),
            &document.path,
            self.descriptor().document_path(target),
            options,
        );
        reconciler.deliver(request)
    }

    fn deliver_bundle(
        &self,
        reconciler: &mut Reconciler<'_>,
        bundle: &Bundle,
        target: &Path,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome {
        let descriptor = self.descriptor();
        if !descriptor.supports_bundles {
            return DeliveryOutcome::unsupported(
                ArtifactKind::Bundle,
                &bundle.name,
                format!("{} does not support skills", descriptor.label),
            );
        }

        let warnings = match self.check_bundle(reconciler.fs(), &bundle.path, &bundle.name) {
            Ok(warnings) => warnings,
            Err(err) => vec![err.to_string()],
        };
        for warning in &warnings {
            warn!(platform = %descriptor.name, "{warning}");
        }

        let request = DeliveryRequest::new(
            bundle.id(),
            &bundle.path,
            descriptor.bundle_path(target, &bundle.name, options.user_level),
            options,
        );
        reconciler.deliver(request).with_warnings(warnings)
    }

    fn deliver_subagent(
        &self,
        reconciler: &mut Reconciler<'_>,
        subagent: &Subagent,
        target: &Path,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome {
        let descriptor = self.descriptor();
        let Some(destination) = descriptor.subagent_path(target, &subagent.name) else {
            return DeliveryOutcome::unsupported(
                ArtifactKind::Subagent,
                &subagent.name,
                format!("{} does not support subagents", descriptor.label),
            );
        };

        let request = DeliveryRequest::new(subagent.id(), &subagent.path, destination, options);
        reconciler.deliver(request)
    }

    /// Deliver any artifact through its kind-specific method
    fn deliver(
        &self,
        reconciler: &mut Reconciler<'_>,
        artifact: &Artifact,
        target: &Path,
        options: &DeliveryOptions,
    ) -> DeliveryOutcome {
        match artifact {
            Artifact::Document(document) => {
                self.deliver_document(reconciler, document, target, options)
            }
            Artifact::Bundle(bundle) => self.deliver_bundle(reconciler, bundle, target, options),
            Artifact::Subagent(subagent) => {
                self.deliver_subagent(reconciler, subagent, target, options)
            }
        }
    }

    /// Check the workspace layout under `target`
    fn validate(&self, fs: &dyn Filesystem, target: &Path) -> ValidationReport {
        let mut report = validate::check_layout(self.descriptor(), fs, target);

        if self.descriptor().supports_bundles {
            let root = self.descriptor().skills_root(target, false);
            match fs.read_dir(&root) {
                Ok(entries) => {
                    for entry in entries.iter().filter(|e| e.is_dir && !e.name.starts_with('.')) {
                        match self.check_bundle(fs, &root.join(&entry.name), &entry.name) {
                            Ok(warnings) => report.warnings.extend(warnings),
                            Err(err) => report.errors.push(err.to_string()),
                        }
                    }
                }
                Err(err) => report.errors.push(err.to_string()),
            }
        }

        report
    }
}
