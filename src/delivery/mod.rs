//! Reconciliation engine
//!
//! Decides, for one artifact and one destination, whether to create, skip,
//! overwrite or merge, and performs the write. Rules are evaluated in a fixed
//! order:
//!
//! 1. Dry run: report the would-be action, touch nothing.
//! 2. Destination missing: create it from the source, whatever the policy.
//! 3. `skip`: leave the destination alone.
//! 4. `overwrite`: replace files; directories are copied over the destination
//!    without deleting files that only exist there.
//! 5. `merge`: delegate to [`merge`].
//! 6. `ask`: ask the [`ConflictResolver`] once for this destination, then apply
//!    rule 3, 4 or 5.
//!
//! The engine keeps no state between deliveries. I/O failures are recorded on the
//! returned [`DeliveryOutcome`] and never escape a delivery.

pub mod fs;
pub mod merge;

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::domain::{
    Action, ArtifactId, ArtifactKind, DeliveryOptions, DeliveryOutcome, MergePolicy, Resolution,
};
use crate::error::Result;

pub use fs::{Filesystem, OsFilesystem};

/// Resolves a single conflict interactively
pub trait ConflictResolver {
    /// Choose what to do with an existing destination
    fn resolve(&mut self, destination: &Path, kind: ArtifactKind) -> Result<Resolution>;
}

/// Everything needed to reconcile one artifact against one destination
#[derive(Debug, Clone)]
pub struct DeliveryRequest {
    pub artifact: ArtifactId,
    pub source: PathBuf,
    pub destination: PathBuf,
    pub policy: MergePolicy,
    pub dry_run: bool,
    pub user_level: bool,
}

impl DeliveryRequest {
    pub fn new(
        artifact: ArtifactId,
        source: impl Into<PathBuf>,
        destination: impl Into<PathBuf>,
        options: &DeliveryOptions,
    ) -> Self {
        Self {
            artifact,
            source: source.into(),
            destination: destination.into(),
            policy: options.policy,
            dry_run: options.dry_run,
            user_level: options.user_level,
        }
    }
}

/// Applies the reconciliation rules through a [`Filesystem`]
pub struct Reconciler<'a> {
    fs: &'a dyn Filesystem,
    resolver: &'a mut dyn ConflictResolver,
}

impl<'a> Reconciler<'a> {
    pub fn new(fs: &'a dyn Filesystem, resolver: &'a mut dyn ConflictResolver) -> Self {
        Self { fs, resolver }
    }

    /// Filesystem used for deliveries, for read-only inspection by platforms
    pub fn fs(&self) -> &'a dyn Filesystem {
        self.fs
    }

    /// Reconcile one artifact against its destination
    pub fn deliver(&mut self, request: DeliveryRequest) -> DeliveryOutcome {
        let exists = self.fs.exists(&request.destination);
        debug!(
            artifact = %request.artifact,
            destination = %request.destination.display(),
            exists,
            policy = %request.policy,
            user_level = request.user_level,
            "reconciling"
        );

        if request.dry_run {
            return plan(request, exists);
        }

        if !exists {
            return self.apply(request, None);
        }

        let resolution = match request.policy.resolution() {
            Some(resolution) => resolution,
            None => match self.resolver.resolve(&request.destination, request.artifact.kind) {
                Ok(resolution) => resolution,
                Err(err) => {
                    warn!(destination = %request.destination.display(), "conflict not resolved: {err}");
                    return DeliveryOutcome::failed(
                        request.artifact,
                        Action::Skipped,
                        request.destination,
                        err,
                    );
                }
            },
        };

        self.apply(request, Some(resolution))
    }

    /// Perform the write for a resolved conflict, or a fresh create when `resolution` is `None`
    fn apply(&self, request: DeliveryRequest, resolution: Option<Resolution>) -> DeliveryOutcome {
        let DeliveryRequest {
            artifact,
            source,
            destination,
            ..
        } = request;
        let kind = artifact.kind;

        let intended = match resolution {
            None => Action::Created,
            Some(Resolution::Skip) => Action::Skipped,
            Some(Resolution::Overwrite) => Action::Overwritten,
            Some(Resolution::Merge) => Action::Merged,
        };

        let result = match resolution {
            None | Some(Resolution::Overwrite) => {
                self.copy(kind, &source, &destination).map(|()| intended)
            }
            Some(Resolution::Skip) => Ok(Action::Skipped),
            Some(Resolution::Merge) if kind.is_directory() => {
                merge::merge_dir(self.fs, &source, &destination)
            }
            Some(Resolution::Merge) => merge::merge_file(self.fs, &source, &destination),
        };

        match result {
            Ok(action) => {
                debug!(artifact = %artifact, %action, "delivered");
                DeliveryOutcome::completed(artifact, action, destination)
            }
            Err(err) => {
                warn!(artifact = %artifact, destination = %destination.display(), "delivery failed: {err}");
                DeliveryOutcome::failed(artifact, intended, destination, err)
            }
        }
    }

    fn copy(&self, kind: ArtifactKind, source: &Path, destination: &Path) -> Result<()> {
        if kind.is_directory() {
            self.fs.copy_dir(source, destination)
        } else {
            self.fs.copy_file(source, destination)
        }
    }
}

/// Describe what a delivery would do without writing anything
fn plan(request: DeliveryRequest, exists: bool) -> DeliveryOutcome {
    let action = if exists {
        match request.policy.resolution() {
            Some(Resolution::Skip) | None => Action::Skipped,
            Some(Resolution::Overwrite) => Action::Overwritten,
            Some(Resolution::Merge) => Action::Merged,
        }
    } else {
        Action::Created
    };

    let outcome = DeliveryOutcome::planned(request.artifact, action, request.destination);
    if exists && request.policy == MergePolicy::Ask {
        outcome.with_note("destination exists; would ask to merge, overwrite or skip")
    } else {
        outcome
    }
}
