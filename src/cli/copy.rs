use std::path::PathBuf;

use clap::Parser;

/// Arguments for the copy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Copy everything to Claude:\n    ac copy claude\n\n\
                  Copy to several platforms, keeping existing files:\n    ac copy claude amp --merge skip\n\n\
                  Copy selected skills only:\n    ac copy amp --skills-only --skill plan --skill 'review*'\n\n\
                  Preview without writing:\n    ac copy claude --dry-run")]
pub struct CopyArgs {
    /// Platforms to copy to (claude, codex, amp, opencode, droid)
    #[arg(value_name = "PLATFORM")]
    pub platforms: Vec<String>,

    /// Target project directory (defaults to current directory)
    #[arg(long, short = 't', env = "AC_TARGET", value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Source directory (defaults to ~/.ac, then the nearest .agents)
    #[arg(long, short = 's', env = "AC_SOURCE", value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Show what would be copied without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Copy only the agent file
    #[arg(long, conflicts_with = "skills_only")]
    pub agents_only: bool,

    /// Copy only skills
    #[arg(long)]
    pub skills_only: bool,

    /// Agent file to copy (e.g., AGENTS_STRICT.md)
    #[arg(long, value_name = "FILE")]
    pub agent_file: Option<String>,

    /// Skill to copy; exact name or glob pattern (repeatable)
    #[arg(long = "skill", short = 'k', value_name = "NAME")]
    pub skills: Vec<String>,

    /// Subagent to copy (repeatable)
    #[arg(long = "subagent", value_name = "NAME")]
    pub subagents: Vec<String>,

    /// What to do with existing files: overwrite, skip, merge or ask
    #[arg(long, value_name = "STRATEGY")]
    pub merge: Option<String>,

    /// Copy skills to the user-level skills directory
    #[arg(long)]
    pub user_level: bool,

    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}
