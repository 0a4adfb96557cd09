//! Validate command implementation

use crate::cli::ValidateArgs;
use crate::delivery::OsFilesystem;
use crate::error::{AcError, Result};
use crate::platform;
use crate::ui::report;

/// Run validate command
///
/// Fails when the report carries any error or warning.
pub fn run(args: ValidateArgs) -> Result<()> {
    let platform = platform::get(&args.platform)?;
    let cwd = std::env::current_dir()?;
    let target = match args.target {
        Some(path) => cwd.join(path),
        None => cwd,
    };
    let target = dunce::canonicalize(&target).unwrap_or(target);

    let validation = platform.validate(&OsFilesystem, &target);

    if args.json {
        let json = serde_json::to_string_pretty(&validation.to_json())
            .map_err(|e| AcError::IoError {
                message: e.to_string(),
            })?;
        println!("{json}");
    } else {
        report::print_validation(&validation);
    }

    if validation.is_valid() {
        Ok(())
    } else {
        Err(AcError::ValidationFailed {
            platform: validation.platform,
        })
    }
}
