use std::path::PathBuf;

use clap::Parser;

/// Arguments for the validate command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Validate Claude in the current directory:\n    ac validate claude\n\n\
                  Validate another project as JSON:\n    ac validate opencode --target ../app --json")]
pub struct ValidateArgs {
    /// Platform to validate
    pub platform: String,

    /// Target project directory (defaults to current directory)
    #[arg(long, short = 't', env = "AC_TARGET", value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}
