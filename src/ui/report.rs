//! Console rendering of outcomes, inventories and validation reports

use console::Style;

use crate::domain::{Action, DeliveryOutcome};
use crate::operations::copy::CopyReport;
use crate::platform::manifest::MANIFEST_FILE;
use crate::platform::{Platform, ValidationReport};
use crate::source::SourceInventory;

/// Lines describing one outcome: the outcome itself, then its note and warnings
pub fn outcome_lines(outcome: &DeliveryOutcome) -> Vec<String> {
    let id = format!("{} {}", outcome.artifact.kind.label(), outcome.artifact.name);
    let dest = outcome
        .destination()
        .map(|p| p.display().to_string())
        .unwrap_or_default();
    let prefix = if outcome.dry_run { "[DRY RUN] " } else { "" };

    let mut lines = Vec::new();

    if let Some(err) = &outcome.error {
        lines.push(format!(
            "  {} {prefix}{id}: {err}",
            Style::new().red().apply_to("✗")
        ));
    } else {
        let text = match (outcome.dry_run, outcome.action) {
            (_, Action::Unsupported) => format!("{id} not copied"),
            (true, Action::Created) => format!("Would create {id} at {dest}"),
            (true, Action::Overwritten) => format!("Would overwrite {id} at {dest}"),
            (true, Action::Merged) => format!("Would merge {id} into {dest}"),
            (true, Action::Skipped) => format!("Would skip {id} ({dest} already exists)"),
            (false, Action::Created) => format!("Created {id} at {dest}"),
            (false, Action::Overwritten) => format!("Overwrote {id} at {dest}"),
            (false, Action::Merged) => format!("Merged {id} into {dest}"),
            (false, Action::Skipped) => format!("Skipped {id} ({dest} already exists)"),
        };
        let symbol = match outcome.action {
            Action::Created | Action::Overwritten | Action::Merged => {
                Style::new().green().apply_to("✓")
            }
            Action::Skipped | Action::Unsupported => Style::new().dim().apply_to("-"),
        };
        lines.push(format!("  {symbol} {prefix}{text}"));
    }

    if let Some(note) = &outcome.note {
        lines.push(format!("      {}", Style::new().dim().apply_to(note)));
    }
    for warning in &outcome.warnings {
        lines.push(format!("      {} {warning}", Style::new().yellow().apply_to("⚠")));
    }

    lines
}

/// One-line tally of a finished run
pub fn summary_line(report: &CopyReport) -> String {
    let mut parts = Vec::new();
    for (action, label) in [
        (Action::Created, "created"),
        (Action::Overwritten, "overwritten"),
        (Action::Merged, "merged"),
        (Action::Skipped, "skipped"),
        (Action::Unsupported, "unsupported"),
    ] {
        let n = report.count(action);
        if n > 0 {
            parts.push(format!("{n} {label}"));
        }
    }
    if report.failed() > 0 {
        parts.push(format!("{} failed", report.failed()));
    }
    if parts.is_empty() {
        "Nothing to copy".to_string()
    } else {
        parts.join(", ")
    }
}

pub fn print_copy_summary(report: &CopyReport) {
    println!("\n{}", summary_line(report));
    if report.is_success() {
        println!(
            "\n{}",
            Style::new().green().bold().apply_to("✓ Copy completed successfully!")
        );
    }
}

/// Components found in a source, names listed when `detailed`
pub fn print_inventory(inventory: &SourceInventory, detailed: bool) {
    println!("Found source directory: {}", inventory.root.display());

    if !inventory.documents.is_empty() {
        println!("\n{}", Style::new().bold().apply_to("Found agent files:"));
        for document in &inventory.documents {
            println!("  {} {}", Style::new().green().apply_to("✓"), document.name);
        }
    }

    if !inventory.bundles.is_empty() {
        println!("\nFound {} skill(s)", inventory.bundles.len());
        if detailed {
            for bundle in &inventory.bundles {
                let manifest = if bundle.has_file(MANIFEST_FILE) {
                    String::new()
                } else {
                    format!(", no {MANIFEST_FILE}")
                };
                println!(
                    "  - {} {}",
                    Style::new().cyan().apply_to(&bundle.name),
                    Style::new()
                        .dim()
                        .apply_to(format!("({} files{manifest})", bundle.files.len()))
                );
            }
        }
    }

    if !inventory.subagents.is_empty() {
        println!("\nFound {} subagent(s)", inventory.subagents.len());
        if detailed {
            for subagent in &inventory.subagents {
                println!("  - {}", Style::new().cyan().apply_to(subagent.file_name()));
            }
        }
    }
}

/// Supported platforms and where each puts its artifacts
pub fn print_platforms<'a>(platforms: impl Iterator<Item = &'a dyn Platform>) {
    println!("{}", Style::new().bold().apply_to("Supported platforms:"));
    for platform in platforms {
        let d = platform.descriptor();
        let yes_no = |b: bool| if b { "yes" } else { "no" };
        println!(
            "  {:<10} {:<10} skills: {:<4} subagents: {}",
            Style::new().yellow().apply_to(&d.name),
            d.document,
            yes_no(d.supports_bundles),
            yes_no(d.supports_subagents),
        );
    }
}

pub fn print_validation(report: &ValidationReport) {
    println!(
        "Validating {} setup at {}...",
        report.platform,
        report.target.display()
    );

    if report.is_valid() {
        println!("\n{}", Style::new().green().apply_to("✓ Validation passed!"));
    } else {
        println!("\n{}", Style::new().red().apply_to("✗ Validation failed!"));
    }

    if !report.errors.is_empty() {
        println!("\nErrors:");
        for error in &report.errors {
            println!("  {} {error}", Style::new().red().apply_to("✗"));
        }
    }

    if !report.warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &report.warnings {
            println!("  {} {warning}", Style::new().yellow().apply_to("⚠"));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::domain::{ArtifactId, ArtifactKind};
    use crate::error::fs::write_failed;

    fn plain(lines: Vec<String>) -> Vec<String> {
        lines
            .iter()
            .map(|l| console::strip_ansi_codes(l).into_owned())
            .collect()
    }

    fn id() -> ArtifactId {
        ArtifactId::new(ArtifactKind::Bundle, "review")
    }

    #[test]
    fn test_created_line() {
        let outcome =
            DeliveryOutcome::completed(id(), Action::Created, PathBuf::from("/t/.claude/skills/review"));
        assert_eq!(
            plain(outcome_lines(&outcome)),
            vec!["  ✓ Created Skill review at /t/.claude/skills/review"]
        );
    }

    #[test]
    fn test_dry_run_line_is_prefixed() {
        let outcome = DeliveryOutcome::planned(id(), Action::Merged, PathBuf::from("/t/x"));
        let lines = plain(outcome_lines(&outcome));
        assert_eq!(lines[0], "  ✓ [DRY RUN] Would merge Skill review into /t/x");
    }

    #[test]
    fn test_error_line() {
        let outcome = DeliveryOutcome::failed(
            id(),
            Action::Overwritten,
            PathBuf::from("/t/x"),
            write_failed("/t/x/SKILL.md", "permission denied"),
        );
        let lines = plain(outcome_lines(&outcome));
        assert!(lines[0].starts_with("  ✗ Skill review: Failed to write file"));
    }

    #[test]
    fn test_unsupported_line_carries_note() {
        let outcome =
            DeliveryOutcome::unsupported(ArtifactKind::Subagent, "planner", "Amp does not support subagents");
        assert_eq!(
            plain(outcome_lines(&outcome)),
            vec![
                "  - Subagent planner not copied",
                "      Amp does not support subagents",
            ]
        );
    }

    #[test]
    fn test_warnings_are_indented() {
        let outcome = DeliveryOutcome::completed(id(), Action::Created, PathBuf::from("/t/x"))
            .with_warnings(vec!["Claude skill review missing SKILL.md".to_string()]);
        let lines = plain(outcome_lines(&outcome));
        assert_eq!(lines[1], "      ⚠ Claude skill review missing SKILL.md");
    }

    #[test]
    fn test_summary_line() {
        assert_eq!(summary_line(&CopyReport::default()), "Nothing to copy");
    }
}
