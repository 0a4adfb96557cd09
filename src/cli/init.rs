use std::path::PathBuf;

use clap::Parser;

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Create ~/.ac from the nearest .agents directory:\n    ac init\n\n\
                  Create it from a specific directory without prompting:\n    ac init --from ./agents --yes")]
pub struct InitArgs {
    /// Directory to copy from (defaults to the nearest .agents)
    #[arg(long, value_name = "DIR")]
    pub from: Option<PathBuf>,

    /// Directory to create (defaults to ~/.ac)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Replace an existing destination without asking
    #[arg(long, short = 'y')]
    pub yes: bool,
}
