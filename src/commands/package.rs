//! Package commands: install, uninstall, list, available and info
//!
//! One implementation serves `packs`, `prompts` and `rules`; the
//! [`PackageKind`] picked by the CLI decides directories and manifests.

use std::path::PathBuf;
use std::sync::Arc;

use console::Style;

use crate::cli::{PackageArgs, PackageCommand};
use crate::error::Result;
use crate::package::{PackageKind, PackageManager};
use crate::ui::progress::InteractiveProgressReporter;
use crate::ui::{display, logger};

use super::helpers::resolve_project_path;

/// Run a package subcommand for `kind`
pub fn run(
    kind: PackageKind,
    project: Option<PathBuf>,
    registry: Option<&str>,
    args: &PackageArgs,
) -> Result<()> {
    let project_root = resolve_project_path(project)?;
    let manager = PackageManager::for_project(kind, &project_root, registry)?
        .with_progress(Arc::new(InteractiveProgressReporter::new()));
    logger::debug(format!(
        "{} packages in {} from {}",
        kind,
        manager.packages_dir().display(),
        manager.source_location()
    ));

    match &args.command {
        PackageCommand::Install { name } => install(&manager, name),
        PackageCommand::Uninstall { name } => uninstall(&manager, name),
        PackageCommand::List => list(&manager),
        PackageCommand::Available => available(&manager),
        PackageCommand::Info { name, verbose } => info(&manager, name, *verbose),
    }
}

fn install(manager: &PackageManager, name: &str) -> Result<()> {
    let kind = manager.kind();
    logger::info(format!("Installing {kind} '{name}'..."));
    manager.install(name)?;
    logger::success(format!(
        "Installed {kind} '{name}' to {}",
        manager.packages_dir().display()
    ));
    Ok(())
}

fn uninstall(manager: &PackageManager, name: &str) -> Result<()> {
    manager.uninstall(name)?;
    logger::success(format!("Uninstalled {} '{name}'", manager.kind()));
    Ok(())
}

fn list(manager: &PackageManager) -> Result<()> {
    let kind = manager.kind();
    let installed = manager.list_installed()?;
    if installed.is_empty() {
        logger::info(format!("No {}s installed.", kind.kind));
        logger::info(format!(
            "Run 'cco {} available' to browse the registry.",
            display::command_for(kind)
        ));
        return Ok(());
    }

    logger::info(format!(
        "Installed {}s ({}):",
        kind.kind,
        installed.len()
    ));
    for bundle in &installed {
        let version = manager
            .read_installed_manifest(bundle)
            .ok()
            .and_then(|manifest| manifest.version)
            .unwrap_or_else(|| "unknown".to_string());
        logger::info(format!(
            "  {} {}",
            Style::new().bold().yellow().apply_to(bundle),
            Style::new().dim().apply_to(format!("v{version}"))
        ));
    }
    Ok(())
}

fn available(manager: &PackageManager) -> Result<()> {
    let kind = manager.kind();
    let summaries = manager.list_available()?;
    if summaries.is_empty() {
        logger::info(format!(
            "No {}s available in {}",
            kind.kind,
            manager.source_location()
        ));
        return Ok(());
    }

    logger::info(format!("Available {}s:\n", kind.kind));
    for summary in &summaries {
        display::print_summary(kind, summary, manager.is_installed(&summary.bundle));
    }
    logger::info(format!(
        "Install with: cco {} install -n <name>",
        display::command_for(kind)
    ));
    Ok(())
}

fn info(manager: &PackageManager, name: &str, verbose: bool) -> Result<()> {
    let manifest = manager.get_metadata(name)?;
    display::print_metadata(manager.kind(), &manifest, verbose)
}
