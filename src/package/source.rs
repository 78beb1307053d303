//! Where package content comes from
//!
//! The manager only talks to a [`PackageSource`]; the HTTP registry and a
//! local package tree are two implementations of it.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use walkdir::WalkDir;

use crate::config::RegistryLocation;
use crate::error::{Result, fs as fs_error, package};

use super::kind::PackageKind;
use super::manifest::Manifest;
use super::registry::RegistryClient;

/// Read access to a collection of bundles
pub trait PackageSource: Send + Sync {
    /// Human-readable location, for logs
    fn location(&self) -> String;

    /// Fetch a bundle's manifest; `NotFound` when the bundle has none
    fn fetch_manifest(&self, kind: &PackageKind, bundle: &str) -> Result<Manifest>;

    /// Fetch one content file of a bundle
    fn fetch_file(&self, kind: &PackageKind, bundle: &str, path: &str) -> Result<Vec<u8>>;

    /// Files making up a full-bundle install
    fn bundle_files(
        &self,
        _kind: &PackageKind,
        _bundle: &str,
        manifest: &Manifest,
    ) -> Result<Vec<String>> {
        Ok(manifest.files.clone().unwrap_or_default())
    }

    /// Candidate bundle names for a kind
    fn list_bundles(&self, kind: &PackageKind) -> Result<Vec<String>>;
}

/// Open the source a registry location points at
pub fn open(location: &RegistryLocation) -> Result<Arc<dyn PackageSource>> {
    match location {
        RegistryLocation::Remote {
            content_url,
            api_url,
        } => Ok(Arc::new(RegistryClient::new(content_url, api_url)?)),
        RegistryLocation::Local(root) => Ok(Arc::new(LocalSource::new(root))),
    }
}

/// Bundles laid out on disk as `<root>/<subdirectory>/<bundle>/`
#[derive(Debug, Clone)]
pub struct LocalSource {
    root: PathBuf,
}

impl LocalSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn bundle_dir(&self, kind: &PackageKind, bundle: &str) -> PathBuf {
        self.root.join(kind.subdirectory).join(bundle)
    }
}

impl PackageSource for LocalSource {
    fn location(&self) -> String {
        self.root.display().to_string()
    }

    fn fetch_manifest(&self, kind: &PackageKind, bundle: &str) -> Result<Manifest> {
        let path = self.bundle_dir(kind, bundle).join(kind.manifest_file);
        if !path.is_file() {
            return Err(package::not_found(kind.kind, bundle));
        }
        let bytes = fs::read(&path).map_err(|e| fs_error::read_failed(&path, e))?;
        Manifest::from_slice(&bytes, bundle)
    }

    fn fetch_file(&self, kind: &PackageKind, bundle: &str, path: &str) -> Result<Vec<u8>> {
        let full = self.bundle_dir(kind, bundle).join(path);
        fs::read(&full).map_err(|e| fs_error::read_failed(&full, e))
    }

    /// Every regular file in the bundle directory except the manifest itself
    fn bundle_files(
        &self,
        kind: &PackageKind,
        bundle: &str,
        _manifest: &Manifest,
    ) -> Result<Vec<String>> {
        let dir = self.bundle_dir(kind, bundle);
        let mut files = Vec::new();

        for entry in WalkDir::new(&dir).follow_links(false) {
            let entry = entry.map_err(|e| fs_error::read_failed(&dir, e))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(relative) = relative_slash_path(&dir, entry.path()) else {
                continue;
            };
            if relative == kind.manifest_file {
                continue;
            }
            files.push(relative);
        }

        files.sort();
        Ok(files)
    }

    fn list_bundles(&self, kind: &PackageKind) -> Result<Vec<String>> {
        let dir = self.root.join(kind.subdirectory);
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| fs_error::read_failed(&dir, e))? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }

        names.sort();
        Ok(names)
    }
}

/// `path` relative to `base`, joined with `/` on every platform
fn relative_slash_path(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Option<Vec<&str>> = relative.components().map(|c| c.as_os_str().to_str()).collect();
    Some(parts?.join("/"))
}
