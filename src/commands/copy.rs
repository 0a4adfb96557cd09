//! Copy command implementation
//!
//! Resolves every input (source, target, policy, platforms, selections) up
//! front so that unknown names and missing artifacts fail before the first
//! delivery, then hands a [`CopyPlan`] to the copy operation.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::debug;

use crate::cli::CopyArgs;
use crate::config::Settings;
use crate::delivery::{ConflictResolver, OsFilesystem, Reconciler};
use crate::domain::{Bundle, DeliveryOptions, Document, MergePolicy, Subagent};
use crate::error::{AcError, Result};
use crate::operations::copy::{CopyOperation, CopyPlan};
use crate::platform::{self, registry::resolve_all};
use crate::source::{SourceInventory, detection};
use crate::ui::progress::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};
use crate::ui::prompt::{self, NonInteractiveResolver, PromptResolver};
use crate::ui::report;

/// Agent file used when several exist and nobody can be asked
const DEFAULT_DOCUMENT: &str = "AGENTS.md";

/// Run copy command
pub fn run(args: CopyArgs) -> Result<()> {
    let settings = Settings::load()?;
    let interactive = prompt::is_interactive();
    let cwd = std::env::current_dir()?;

    let policy = resolve_policy(args.merge.as_deref(), &settings)?;

    let names = if args.platforms.is_empty() {
        settings.platforms.clone()
    } else {
        args.platforms.clone()
    };
    let mut platforms = resolve_all(&names)?;

    let source_arg = args.source.clone().or_else(|| settings.source_path());
    let source = detection::resolve(source_arg.as_deref(), &cwd)?;
    let inventory = SourceInventory::discover_non_empty(&OsFilesystem, &source)?;
    report::print_inventory(&inventory, false);

    let target = resolve_target(args.target.as_deref(), &cwd);

    if platforms.is_empty() {
        if !interactive {
            return Err(AcError::NoPlatformsSelected);
        }
        let all: Vec<String> = platform::all().map(|p| p.name().to_string()).collect();
        platforms = resolve_all(&prompt::select_platforms(all)?)?;
    }

    let document = select_document(&args, &inventory, interactive)?;
    let bundles = select_bundles(&args, &inventory, interactive)?;
    let subagents = select_subagents(&args, &inventory)?;

    let plan = CopyPlan {
        platforms,
        target,
        document,
        bundles,
        subagents,
        options: DeliveryOptions {
            policy,
            dry_run: args.dry_run,
            user_level: args.user_level || settings.user_level,
        },
    };
    debug!(
        deliveries = plan.delivery_count(),
        policy = %policy,
        dry_run = args.dry_run,
        "copy plan ready"
    );

    if interactive && !args.yes && !args.dry_run && !confirm_plan(&plan)? {
        println!("Copy cancelled.");
        return Ok(());
    }

    let use_bar = interactive && !args.dry_run;
    let mut interactive_progress;
    let mut silent_progress = SilentProgressReporter;
    let (progress, bar): (&mut dyn ProgressReporter, _) = if use_bar {
        interactive_progress = InteractiveProgressReporter::new(plan.delivery_count() as u64);
        let bar = interactive_progress.bar();
        (&mut interactive_progress, Some(bar))
    } else {
        (&mut silent_progress, None)
    };

    let mut prompt_resolver;
    let mut fallback_resolver = NonInteractiveResolver;
    let resolver: &mut dyn ConflictResolver = if interactive {
        prompt_resolver = PromptResolver::new(bar);
        &mut prompt_resolver
    } else {
        &mut fallback_resolver
    };

    let reconciler = Reconciler::new(&OsFilesystem, resolver);
    let copy_report = CopyOperation::new(reconciler, progress).execute(&plan);

    report::print_copy_summary(&copy_report);
    copy_report.into_result().map(|_| ())
}

/// `--merge`, else the settings file, else ask
fn resolve_policy(flag: Option<&str>, settings: &Settings) -> Result<MergePolicy> {
    match flag {
        Some(value) => value.parse(),
        None => Ok(settings.merge.unwrap_or_default()),
    }
}

fn resolve_target(flag: Option<&Path>, cwd: &Path) -> PathBuf {
    let target = match flag {
        Some(path) => cwd.join(path),
        None => cwd.to_path_buf(),
    };
    dunce::canonicalize(&target).unwrap_or(target)
}

/// Explicit `--agent-file`, else the only one, else ask, else `AGENTS.md`
fn select_document(
    args: &CopyArgs,
    inventory: &SourceInventory,
    interactive: bool,
) -> Result<Option<Document>> {
    if args.skills_only {
        return Ok(None);
    }
    if let Some(name) = &args.agent_file {
        return inventory.document(name).cloned().map(Some);
    }

    match inventory.documents.as_slice() {
        [] => Ok(None),
        [only] => Ok(Some(only.clone())),
        many if interactive => {
            let names = many.iter().map(|d| d.name.clone()).collect();
            let chosen = prompt::select_agent_file(names)?;
            inventory.document(&chosen).cloned().map(Some)
        }
        many => Ok(many
            .iter()
            .find(|d| d.name == DEFAULT_DOCUMENT)
            .or_else(|| many.first())
            .cloned()),
    }
}

/// Explicit `--skill` patterns, else ask, else every skill
fn select_bundles(
    args: &CopyArgs,
    inventory: &SourceInventory,
    interactive: bool,
) -> Result<Vec<Bundle>> {
    if args.agents_only {
        return Ok(Vec::new());
    }
    if !args.skills.is_empty() {
        return inventory.select_bundles(&args.skills);
    }
    if interactive && !args.yes && inventory.bundles.len() > 1 {
        let chosen = prompt::select_skills(inventory.bundle_names())?;
        return inventory.select_bundles(&chosen);
    }
    Ok(inventory.bundles.clone())
}

/// Explicit `--subagent` names, else every subagent
fn select_subagents(args: &CopyArgs, inventory: &SourceInventory) -> Result<Vec<Subagent>> {
    if args.agents_only || args.skills_only {
        return Ok(Vec::new());
    }
    if !args.subagents.is_empty() {
        return inventory.select_subagents(&args.subagents);
    }
    Ok(inventory.subagents.clone())
}

fn confirm_plan(plan: &CopyPlan) -> Result<bool> {
    let names: Vec<&str> = plan.platforms.iter().map(|p| p.name()).collect();
    println!();
    println!("{}", Style::new().bold().apply_to("Ready to copy:"));
    println!("  Platforms: {}", names.join(", "));
    println!("  Target:    {}", plan.target.display());
    if let Some(document) = &plan.document {
        println!("  Agent file: {}", document.name);
    }
    println!("  Skills:    {}", plan.bundles.len());
    println!("  Subagents: {}", plan.subagents.len());
    println!("  Strategy:  {}", plan.options.policy);
    println!();

    prompt::confirm("Proceed?")
}
