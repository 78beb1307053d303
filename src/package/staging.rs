//! Atomic installation directories
//!
//! Content is written into `<dest>.tmp` and only moved onto `<dest>` once
//! everything is in place:
//!
//! ```ignore
//! let staged = StagedInstall::begin(&dest)?;
//! staged.write_file("pack.json", bytes)?;
//! staged.commit()?; // dropping without commit removes `<dest>.tmp`
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::{Result, fs as fs_error};

/// Suffix of the directory content is staged in
pub const STAGING_SUFFIX: &str = ".tmp";

/// Suffix the previous installation is parked under during the swap
pub const BACKUP_SUFFIX: &str = ".old";

/// An installation being assembled next to its final location
#[derive(Debug)]
pub struct StagedInstall {
    destination: PathBuf,
    staging: PathBuf,
    committed: bool,
}

impl StagedInstall {
    /// Create a fresh staging directory for `destination`.
    ///
    /// Creates the destination's parent if needed and discards leftovers of
    /// an earlier interrupted install.
    pub fn begin(destination: &Path) -> Result<Self> {
        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, e))?;
        }

        let staging = sibling(destination, STAGING_SUFFIX);
        if staging.exists() {
            fs::remove_dir_all(&staging).map_err(|e| fs_error::write_failed(&staging, e))?;
        }
        fs::create_dir_all(&staging).map_err(|e| fs_error::write_failed(&staging, e))?;

        Ok(Self {
            destination: destination.to_path_buf(),
            staging,
            committed: false,
        })
    }

    pub fn path(&self) -> &Path {
        &self.staging
    }

    /// Write `contents` at `relative` inside the staging directory
    pub fn write_file(&self, relative: &str, contents: &[u8]) -> Result<()> {
        let path = self.staging.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| fs_error::write_failed(parent, e))?;
        }
        fs::write(&path, contents).map_err(|e| fs_error::write_failed(&path, e))
    }

    /// Move the staged tree onto the destination, replacing what was there.
    ///
    /// A previous installation is parked under `<dest>.old` and restored if
    /// the final rename fails.
    pub fn commit(mut self) -> Result<()> {
        let backup = sibling(&self.destination, BACKUP_SUFFIX);
        if backup.exists() {
            fs::remove_dir_all(&backup).map_err(|e| fs_error::write_failed(&backup, e))?;
        }

        let had_previous = self.destination.exists();
        if had_previous {
            fs::rename(&self.destination, &backup)
                .map_err(|e| fs_error::write_failed(&self.destination, e))?;
        }

        if let Err(e) = fs::rename(&self.staging, &self.destination) {
            if had_previous {
                if let Err(restore) = fs::rename(&backup, &self.destination) {
                    warn!(
                        "failed to restore {} from {}: {}",
                        self.destination.display(),
                        backup.display(),
                        restore
                    );
                }
            }
            return Err(fs_error::write_failed(&self.destination, e));
        }

        self.committed = true;

        if had_previous {
            if let Err(e) = fs::remove_dir_all(&backup) {
                warn!("failed to remove {}: {}", backup.display(), e);
            }
        }
        Ok(())
    }
}

impl Drop for StagedInstall {
    fn drop(&mut self) {
        if !self.committed && self.staging.exists() {
            if let Err(e) = fs::remove_dir_all(&self.staging) {
                warn!("failed to clean up {}: {}", self.staging.display(), e);
            }
        }
    }
}

/// `<path><suffix>` in the same directory
fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}
