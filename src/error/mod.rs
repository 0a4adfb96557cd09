//! Error types and handling for ac
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostic codes and help text.
//!
//! This module is organized into sub-modules by error domain:
//! - [`source`]: Source directory and artifact lookup errors
//! - [`config`]: Settings file errors
//! - [`platform`]: Platform and merge policy errors
//! - [`fs`]: File system errors
//!
//! Only the errors in the "run" group abort a whole `copy` invocation. File system
//! failures during a single delivery are recorded on that delivery's outcome instead.

pub mod config;
pub mod fs;
pub mod platform;
pub mod source;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for ac operations
#[derive(Error, Diagnostic, Debug)]
pub enum AcError {
    // Source errors
    #[error("Source directory not found: {path}")]
    #[diagnostic(
        code(ac::source::not_found),
        help("Check the --source path, or run 'ac init' to create ~/.ac")
    )]
    SourceNotFound { path: String },

    #[error("Could not find a .agents directory")]
    #[diagnostic(
        code(ac::source::not_detected),
        help("Please specify --source, or run 'ac init' to create ~/.ac")
    )]
    SourceDirNotFound,

    #[error("No components found in source directory: {path}")]
    #[diagnostic(
        code(ac::source::empty),
        help("A source needs AGENTS*.md files, a skills/ directory or a subagents/ directory")
    )]
    NoComponents { path: String },

    #[error("{kind} '{name}' not found in source")]
    #[diagnostic(code(ac::source::artifact_not_found))]
    ArtifactNotFound { kind: String, name: String },

    // Platform errors
    #[error("Unknown platform: {name}")]
    #[diagnostic(
        code(ac::platform::unknown),
        help("Supported platforms: claude, codex, amp, opencode, droid")
    )]
    UnknownPlatform { name: String },

    #[error("Invalid merge strategy: {value}")]
    #[diagnostic(
        code(ac::platform::invalid_merge),
        help("Valid strategies: overwrite, skip, merge, ask")
    )]
    InvalidMergePolicy { value: String },

    #[error("No platforms selected")]
    #[diagnostic(
        code(ac::platform::none_selected),
        help("Pass one or more platform names, e.g. 'ac copy claude amp'")
    )]
    NoPlatformsSelected,

    #[error("Validation failed for {platform}")]
    #[diagnostic(code(ac::platform::validation_failed))]
    ValidationFailed { platform: String },

    // Run errors
    #[error("{failed} of {total} deliveries failed")]
    #[diagnostic(
        code(ac::copy::deliveries_failed),
        help("See the failed lines above; the other deliveries were completed")
    )]
    DeliveryFailed { failed: usize, total: usize },

    #[error("Prompt failed: {message}")]
    #[diagnostic(
        code(ac::ui::prompt_failed),
        help("Run in an interactive terminal, or pass --merge and --yes to avoid prompts")
    )]
    PromptFailed { message: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(ac::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(ac::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(ac::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(ac::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(ac::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for AcError {
    fn from(err: std::io::Error) -> Self {
        AcError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for AcError {
    fn from(err: serde_yaml::Error) -> Self {
        AcError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for AcError {
    fn from(err: inquire::InquireError) -> Self {
        AcError::PromptFailed {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AcError>;
