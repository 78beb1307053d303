//! Command helper utilities

use std::path::PathBuf;

use crate::error::{Result, fs as fs_error};
use crate::project;

/// Resolve and validate the project directory.
///
/// If a project path is provided, use it. Otherwise, resolve to the
/// current directory.
pub fn resolve_project_path(project: Option<PathBuf>) -> Result<PathBuf> {
    let path = match project {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| fs_error::io_error(format!("Failed to get current directory: {e}")))?,
    };
    project::validate_project_dir(&path)
}
