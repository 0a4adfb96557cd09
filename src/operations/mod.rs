//! High-level operations
//!
//! - CopyOperation: deliver a [`copy::CopyPlan`] to every selected platform
//!   and collect a [`copy::CopyReport`]

pub mod copy;
