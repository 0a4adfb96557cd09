//! ac - agent configuration copier
//!
//! A command line tool that keeps one canonical set of agent instructions,
//! skills and subagents and copies it into the layout each AI coding platform
//! expects (Claude, Codex, Amp, OpenCode, Droid).

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod cli;
mod commands;
mod config;
mod delivery;
mod domain;
mod error;
mod operations;
mod platform;
mod source;
mod ui;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

/// Environment variable overriding the `-v` log filter
const LOG_ENV: &str = "AC_LOG";

fn default_filter(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Logs go to stderr so stdout stays clean for `--json` and completions
fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Copy(args) => commands::copy::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Validate(args) => commands::validate::run(args),
        Commands::Init(args) => commands::init::run(args),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  {help}");
        }
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_levels() {
        assert_eq!(default_filter(0), "warn");
        assert_eq!(default_filter(1), "info");
        assert_eq!(default_filter(2), "debug");
        assert_eq!(default_filter(3), "trace");
        assert_eq!(default_filter(9), "trace");
    }
}
