//! Init command implementation

use std::path::{Path, PathBuf};
use std::sync::Arc;

use console::Style;
use inquire::Confirm;

use crate::cli::InitArgs;
use crate::config::CONFIG_DIR;
use crate::error::Result;
use crate::package::{PackageKind, PackageManager};
use crate::project::init::{self, BASE_PACK, InitOptions, InitOutcome};
use crate::ui::logger;
use crate::ui::progress::InteractiveProgressReporter;

use super::helpers::resolve_project_path;

/// Run init command
pub fn run(project: Option<PathBuf>, registry: Option<&str>, args: &InitArgs) -> Result<()> {
    let project_root = resolve_project_path(project)?;
    let manager = PackageManager::for_project(PackageKind::WORKFLOW, &project_root, registry)?
        .with_progress(Arc::new(InteractiveProgressReporter::new()));

    let options = InitOptions {
        assume_yes: args.yes,
        skip_base: args.skip_base,
    };

    if !args.skip_base {
        logger::info(format!(
            "Installing '{BASE_PACK}' pack from {}",
            manager.source_location()
        ));
    }

    let outcome = init::initialize(&project_root, &options, &manager, |message| {
        Ok(Confirm::new(message).with_default(false).prompt()?)
    })?;

    match outcome {
        InitOutcome::Cancelled => logger::info("Initialization cancelled."),
        InitOutcome::Initialized { base_installed, .. } => {
            logger::success("cursor-companion initialized");
            print_tree(&project_root, base_installed);
            print_next_steps(base_installed);
        }
    }
    Ok(())
}

fn print_tree(project_root: &Path, base_installed: bool) {
    let dim = Style::new().dim();
    logger::info(format!("\n{}", project_root.join(CONFIG_DIR).display()));
    let last = PackageKind::ALL.len() - 1;
    for (index, kind) in PackageKind::ALL.iter().enumerate() {
        let branch = if index == last { "└──" } else { "├──" };
        logger::info(format!("{} {}/", dim.apply_to(branch), kind.subdirectory));
        if base_installed && *kind == PackageKind::WORKFLOW {
            logger::info(format!("{}   └── {BASE_PACK}/", dim.apply_to("│")));
        }
    }
}

fn print_next_steps(base_installed: bool) {
    let bold = Style::new().bold();
    logger::info(format!("\n{}", bold.apply_to("Next steps:")));
    if base_installed {
        logger::info("  Reference the base workflows from Cursor chat with @.cursor/workflows/base");
    }
    logger::info("  cco packs available      browse workflow packs");
    logger::info("  cco prompts available    browse prompts");
    logger::info("  cco rules available      browse rules");
}
