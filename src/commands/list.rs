//! List command implementation

use console::Style;

use crate::cli::ListArgs;
use crate::config::Settings;
use crate::delivery::OsFilesystem;
use crate::error::{AcError, Result};
use crate::platform;
use crate::source::{SourceInventory, detection};
use crate::ui::report;

/// Run list command
pub fn run(args: ListArgs) -> Result<()> {
    report::print_platforms(platform::all());
    println!();

    let settings = Settings::load()?;
    let cwd = std::env::current_dir()?;
    let explicit = args.source.or_else(|| settings.source_path());

    let source = match detection::resolve(explicit.as_deref(), &cwd) {
        Ok(source) => source,
        Err(AcError::SourceDirNotFound) => {
            println!(
                "{}",
                Style::new().dim().apply_to("No .agents directory found nearby.")
            );
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let inventory = SourceInventory::discover(&OsFilesystem, &source)?;
    if inventory.is_empty() {
        println!("Found source directory: {}", source.display());
        println!("{}", Style::new().dim().apply_to("No components found."));
        return Ok(());
    }
    report::print_inventory(&inventory, true);
    Ok(())
}
