//! Copy operation: deliver the selected artifacts to every selected platform
//!
//! Deliveries run strictly in order: platforms as listed, and within a
//! platform the document, then bundles, then subagents, each in selection
//! order. A failed delivery is recorded and the run continues.

use std::path::PathBuf;

use tracing::{info, trace};

use crate::delivery::Reconciler;
use crate::domain::{
    Action, Artifact, Bundle, DeliveryOptions, DeliveryOutcome, Document, Subagent,
};
use crate::error::{AcError, Result};
use crate::platform::Platform;
use crate::ui::progress::ProgressReporter;
use crate::ui::report::outcome_lines;

/// Everything selected for one run
pub struct CopyPlan {
    pub platforms: Vec<&'static dyn Platform>,
    pub target: PathBuf,
    pub document: Option<Document>,
    pub bundles: Vec<Bundle>,
    pub subagents: Vec<Subagent>,
    pub options: DeliveryOptions,
}

impl CopyPlan {
    /// Number of (artifact, platform) deliveries the plan will perform
    pub fn delivery_count(&self) -> usize {
        let per_platform =
            usize::from(self.document.is_some()) + self.bundles.len() + self.subagents.len();
        per_platform * self.platforms.len()
    }

    /// Artifacts in delivery order: the document, then bundles, then subagents
    pub fn artifacts(&self) -> Vec<Artifact> {
        self.document
            .iter()
            .cloned()
            .map(Artifact::Document)
            .chain(self.bundles.iter().cloned().map(Artifact::Bundle))
            .chain(self.subagents.iter().cloned().map(Artifact::Subagent))
            .collect()
    }
}

/// Outcomes for one platform, in delivery order
#[derive(Debug)]
pub struct PlatformOutcomes {
    pub platform: String,
    pub outcomes: Vec<DeliveryOutcome>,
}

/// Aggregated outcomes of a run
#[derive(Debug, Default)]
pub struct CopyReport {
    pub platforms: Vec<PlatformOutcomes>,
}

impl CopyReport {
    pub fn outcomes(&self) -> impl Iterator<Item = &DeliveryOutcome> {
        self.platforms.iter().flat_map(|p| p.outcomes.iter())
    }

    pub fn total(&self) -> usize {
        self.outcomes().count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes().filter(|o| o.is_error()).count()
    }

    pub fn count(&self, action: Action) -> usize {
        self.outcomes()
            .filter(|o| !o.is_error() && o.action == action)
            .count()
    }

    /// Succeeds only if no delivery recorded an error
    pub fn is_success(&self) -> bool {
        self.failed() == 0
    }

    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(AcError::DeliveryFailed {
                failed: self.failed(),
                total: self.total(),
            })
        }
    }
}

/// Runs a [`CopyPlan`] through the reconciliation engine
pub struct CopyOperation<'a> {
    reconciler: Reconciler<'a>,
    progress: &'a mut dyn ProgressReporter,
}

impl<'a> CopyOperation<'a> {
    pub fn new(reconciler: Reconciler<'a>, progress: &'a mut dyn ProgressReporter) -> Self {
        Self {
            reconciler,
            progress,
        }
    }

    pub fn execute(&mut self, plan: &CopyPlan) -> CopyReport {
        let mut report = CopyReport::default();
        let artifacts = plan.artifacts();

        for platform in &plan.platforms {
            info!(platform = platform.name(), target = %plan.target.display(), "copying");
            self.progress.start_platform(platform.name());

            let mut outcomes = Vec::new();
            for artifact in &artifacts {
                trace!(
                    artifact = %artifact.id(),
                    source = %artifact.source_path().display(),
                    "delivering"
                );
                let outcome =
                    platform.deliver(&mut self.reconciler, artifact, &plan.target, &plan.options);
                outcomes.push(self.record(outcome));
            }

            report.platforms.push(PlatformOutcomes {
                platform: platform.name().to_string(),
                outcomes,
            });
        }

        self.progress.finish();
        report
    }

    fn record(&mut self, outcome: DeliveryOutcome) -> DeliveryOutcome {
        for line in outcome_lines(&outcome) {
            self.progress.println(&line);
        }
        self.progress.inc();
        outcome
    }
}
