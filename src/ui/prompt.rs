//! Interactive prompts
//!
//! Every prompt blocks until answered; there is no timeout.

use std::io::IsTerminal;
use std::path::Path;

use indicatif::ProgressBar;
use inquire::{Confirm, MultiSelect, Select};

use crate::delivery::ConflictResolver;
use crate::domain::{ArtifactKind, Resolution};
use crate::error::{AcError, Result};

const RESOLUTIONS: [(&str, Resolution); 3] = [
    ("Merge (append source below existing content)", Resolution::Merge),
    ("Overwrite", Resolution::Overwrite),
    ("Skip", Resolution::Skip),
];

/// Whether stdin and stdout are both attached to a terminal
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
}

/// Asks the user about each conflict, pausing the progress bar meanwhile
#[derive(Default)]
pub struct PromptResolver {
    progress: Option<ProgressBar>,
}

impl PromptResolver {
    pub fn new(progress: Option<ProgressBar>) -> Self {
        Self { progress }
    }
}

impl ConflictResolver for PromptResolver {
    fn resolve(&mut self, destination: &Path, kind: ArtifactKind) -> Result<Resolution> {
        let message = format!(
            "{} already exists at {}",
            kind.label(),
            destination.display()
        );
        let options: Vec<&str> = RESOLUTIONS.iter().map(|(label, _)| *label).collect();
        let ask = || {
            Select::new(&message, options)
                .with_help_message("  ↑↓ navigate  enter confirm  esc cancel")
                .raw_prompt()
        };

        let choice = match &self.progress {
            Some(bar) => bar.suspend(ask),
            None => ask(),
        }?;

        Ok(RESOLUTIONS[choice.index].1)
    }
}

/// Resolver for runs without a terminal: every conflict fails its delivery
#[derive(Default)]
pub struct NonInteractiveResolver;

impl ConflictResolver for NonInteractiveResolver {
    fn resolve(&mut self, destination: &Path, _kind: ArtifactKind) -> Result<Resolution> {
        Err(AcError::PromptFailed {
            message: format!(
                "{} already exists and no terminal is available to ask",
                destination.display()
            ),
        })
    }
}

/// Pick target platforms; choosing none is an error
pub fn select_platforms(names: Vec<String>) -> Result<Vec<String>> {
    println!();
    let selected = MultiSelect::new("Select platforms to copy to", names)
        .with_page_size(10)
        .with_help_message("  ↑↓ navigate  space select  enter confirm  type to filter")
        .prompt()?;

    if selected.is_empty() {
        return Err(AcError::NoPlatformsSelected);
    }
    Ok(selected)
}

/// Pick skills, all preselected
pub fn select_skills(names: Vec<String>) -> Result<Vec<String>> {
    let all: Vec<usize> = (0..names.len()).collect();
    let selected = MultiSelect::new("Select skills to copy", names)
        .with_default(&all)
        .with_page_size(15)
        .with_help_message("  ↑↓ navigate  space toggle  enter confirm  type to filter")
        .prompt()?;
    Ok(selected)
}

pub fn select_agent_file(names: Vec<String>) -> Result<String> {
    let selected = Select::new("Select agent file to copy", names).prompt()?;
    Ok(selected)
}

pub fn confirm(message: &str) -> Result<bool> {
    let confirmed = Confirm::new(message)
        .with_default(true)
        .with_help_message("Press Enter to confirm, or 'n' to cancel")
        .prompt()?;
    Ok(confirmed)
}
