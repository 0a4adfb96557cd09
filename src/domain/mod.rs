//! Domain models for ac
//!
//! Pure value types shared by the delivery engine, the platforms and the orchestrator.

pub mod artifact;
pub mod delivery;

pub use artifact::{Artifact, ArtifactId, ArtifactKind, Bundle, Document, Subagent};
pub use delivery::{Action, DeliveryOptions, DeliveryOutcome, MergePolicy, Resolution};
