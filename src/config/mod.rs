//! Settings file handling for ac
//!
//! This module contains:
//! - `config.yaml` - optional user defaults (via [`settings`])

pub mod settings;

pub use settings::Settings;
