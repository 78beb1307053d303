//! Project directory handling
//!
//! A project is any writable directory; it becomes initialized once
//! `.cursor/workflows/` exists.

pub mod init;

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CONFIG_DIR;
use crate::error::{CompanionError, Result};
use crate::package::PackageKind;

/// Check that `path` is an existing, writable directory and return its
/// canonical form.
pub fn validate_project_dir(path: &Path) -> Result<PathBuf> {
    let invalid = |reason: String| CompanionError::InvalidProjectDir {
        path: path.display().to_string(),
        reason,
    };

    let metadata = fs::metadata(path).map_err(|e| invalid(e.to_string()))?;
    if !metadata.is_dir() {
        return Err(invalid("not a directory".to_string()));
    }
    if metadata.permissions().readonly() {
        return Err(invalid("directory is not writable".to_string()));
    }

    dunce::canonicalize(path).map_err(|e| invalid(e.to_string()))
}

/// `<projectRoot>/.cursor`
pub fn config_dir(project_root: &Path) -> PathBuf {
    project_root.join(CONFIG_DIR)
}

/// Whether `init` has already run for this project
pub fn is_initialized(project_root: &Path) -> bool {
    config_dir(project_root)
        .join(PackageKind::WORKFLOW.subdirectory)
        .is_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_validate_existing_directory() {
        let temp = TempDir::new().unwrap();
        let canonical = validate_project_dir(temp.path()).unwrap();
        assert!(canonical.is_absolute());
    }

    #[test]
    fn test_validate_missing_directory() {
        let temp = TempDir::new().unwrap();
        let err = validate_project_dir(&temp.path().join("missing")).unwrap_err();
        assert!(matches!(err, CompanionError::InvalidProjectDir { .. }));
    }

    #[test]
    fn test_validate_file_is_rejected() {
        let temp = TempDir::new().unwrap();
        let file = temp.path().join("file.txt");
        fs::write(&file, "x").unwrap();
        let err = validate_project_dir(&file).unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }

    #[test]
    fn test_is_initialized() {
        let temp = TempDir::new().unwrap();
        assert!(!is_initialized(temp.path()));
        fs::create_dir_all(temp.path().join(".cursor/workflows")).unwrap();
        assert!(is_initialized(temp.path()));
    }
}
