//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - copy: Copy command arguments
//! - list: List command arguments
//! - validate: Validate command arguments
//! - init: Init command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};

pub mod completions;
pub mod copy;
pub mod init;
pub mod list;
pub mod validate;

pub use completions::CompletionsArgs;
pub use copy::CopyArgs;
pub use init::InitArgs;
pub use list::ListArgs;
pub use validate::ValidateArgs;

/// ac - agent configuration copier
///
/// Copy AGENTS.md, skills and subagents from one source into each coding agent's layout.
#[derive(Parser, Debug)]
#[command(
    name = "ac",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Copy agent instructions, skills and subagents to AI coding platforms",
    long_about = "ac keeps one canonical set of agent files (AGENTS.md, skills/, subagents/) \
                  and copies it into the layout each platform expects (Claude, Codex, Amp, \
                  OpenCode, Droid), merging with or skipping what is already there.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  ac copy claude                      \x1b[90m# Copy to Claude in the current directory\x1b[0m\n   \
                  ac copy claude amp --merge skip     \x1b[90m# Keep existing files\x1b[0m\n   \
                  ac copy claude --skill 'review*'    \x1b[90m# Copy matching skills only\x1b[0m\n   \
                  ac validate claude                  \x1b[90m# Check a Claude setup\x1b[0m\n   \
                  ac init                             \x1b[90m# Create ~/.ac from ./.agents\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(long, short = 'v', global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Copy agent files and skills to platforms
    Copy(CopyArgs),

    /// List platforms and the detected source
    List(ListArgs),

    /// Validate a platform setup
    Validate(ValidateArgs),

    /// Create the ~/.ac source directory
    Init(InitArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
