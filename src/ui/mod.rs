//! Terminal presentation layer
//!
//! This module handles:
//! - Progress reporting over deliveries (via [`progress`])
//! - Prompts and the interactive conflict resolver (via [`prompt`])
//! - Rendering of outcomes, inventories and validation reports (via [`report`])

pub mod progress;
pub mod prompt;
pub mod report;
