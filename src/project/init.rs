//! Project initialization
//!
//! Creates `.cursor/{workflows,prompts,rules}` and installs the `base`
//! workflow pack.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{Result, fs as fs_error};
use crate::package::{PackageKind, PackageManager};

use super::{config_dir, is_initialized};

/// Workflow pack installed by `init`
pub const BASE_PACK: &str = "base";

#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Overwrite an existing initialization without asking
    pub assume_yes: bool,
    /// Do not install the base pack
    pub skip_base: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized { base_installed: bool, replaced: bool },
    Cancelled,
}

/// Initialize `project_root`.
///
/// `confirm` is asked before an existing `.cursor/workflows` is replaced;
/// `manager` installs the base pack.
pub fn initialize<F>(
    project_root: &Path,
    options: &InitOptions,
    manager: &PackageManager,
    confirm: F,
) -> Result<InitOutcome>
where
    F: FnOnce(&str) -> Result<bool>,
{
    let replaced = is_initialized(project_root);
    if replaced {
        if !options.assume_yes
            && !confirm("cursor-companion is already initialized. Overwrite?")?
        {
            return Ok(InitOutcome::Cancelled);
        }
        let workflows = config_dir(project_root).join(PackageKind::WORKFLOW.subdirectory);
        fs::remove_dir_all(&workflows).map_err(|e| fs_error::write_failed(&workflows, e))?;
        info!(path = %workflows.display(), "removed existing workflows");
    }

    for kind in PackageKind::ALL {
        let dir = config_dir(project_root).join(kind.subdirectory);
        fs::create_dir_all(&dir).map_err(|e| fs_error::write_failed(&dir, e))?;
    }

    if options.skip_base {
        return Ok(InitOutcome::Initialized {
            base_installed: false,
            replaced,
        });
    }

    manager.install(BASE_PACK)?;
    Ok(InitOutcome::Initialized {
        base_installed: true,
        replaced,
    })
}
