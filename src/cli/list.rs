use std::path::PathBuf;

use clap::Parser;

/// Arguments for the list command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  List platforms and the detected source:\n    ac list\n\n\
                  List a specific source:\n    ac list --source ~/dotfiles/agents")]
pub struct ListArgs {
    /// Source directory (defaults to ~/.ac, then the nearest .agents)
    #[arg(long, short = 's', env = "AC_SOURCE", value_name = "DIR")]
    pub source: Option<PathBuf>,
}
