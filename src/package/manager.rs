//! Package lifecycle: install, uninstall, list and describe packages of one kind

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::{CONFIG_DIR, RegistryLocation};
use crate::error::{Result, fs as fs_error, package};
use crate::ui::progress::{ProgressReporter, SilentProgressReporter};

use super::kind::PackageKind;
use super::manifest::{Manifest, PackageSummary, check_relative_path};
use super::name::PackageName;
use super::source::{self, PackageSource};
use super::staging::{BACKUP_SUFFIX, STAGING_SUFFIX, StagedInstall};

/// Manages installations of one package kind inside one project
pub struct PackageManager {
    kind: PackageKind,
    project_root: PathBuf,
    source: Arc<dyn PackageSource>,
    progress: Arc<dyn ProgressReporter>,
}

impl PackageManager {
    pub fn new(
        kind: PackageKind,
        project_root: impl Into<PathBuf>,
        source: Arc<dyn PackageSource>,
    ) -> Self {
        Self {
            kind,
            project_root: project_root.into(),
            source,
            progress: Arc::new(SilentProgressReporter),
        }
    }

    /// Manager using the registry configured for `project_root`
    pub fn for_project(
        kind: PackageKind,
        project_root: &Path,
        registry_override: Option<&str>,
    ) -> Result<Self> {
        let location = RegistryLocation::resolve(project_root, registry_override);
        let source = source::open(&location)?;
        Ok(Self::new(kind, project_root, source))
    }

    #[must_use]
    pub fn with_progress(mut self, progress: Arc<dyn ProgressReporter>) -> Self {
        self.progress = progress;
        self
    }

    pub fn kind(&self) -> &PackageKind {
        &self.kind
    }

    pub fn source_location(&self) -> String {
        self.source.location()
    }

    /// `<projectRoot>/.cursor/<subdirectory>`
    pub fn packages_dir(&self) -> PathBuf {
        self.project_root
            .join(CONFIG_DIR)
            .join(self.kind.subdirectory)
    }

    fn install_dir(&self, bundle: &str) -> PathBuf {
        self.packages_dir().join(bundle)
    }

    fn manifest_path(&self, bundle: &str) -> PathBuf {
        self.install_dir(bundle).join(self.kind.manifest_file)
    }

    pub fn is_installed(&self, bundle: &str) -> bool {
        self.manifest_path(bundle).is_file()
    }

    /// Install `bundle` or `bundle/component`.
    ///
    /// Full-bundle installs refuse to replace an existing installation;
    /// component installs replace it with a manifest narrowed to that one
    /// component.
    pub fn install(&self, name: &str) -> Result<()> {
        let name = PackageName::parse(name, &self.kind)?;
        let bundle = name.bundle();

        if name.component().is_none() && self.is_installed(bundle) {
            return Err(package::already_installed(self.kind.kind, bundle));
        }

        self.install_from_source(&name).map_err(|e| {
            e.with_operation(&format!("Failed to install {} '{}'", self.kind, name))
        })
    }

    fn install_from_source(&self, name: &PackageName) -> Result<()> {
        let bundle = name.bundle();
        let mut manifest = self.source.fetch_manifest(&self.kind, bundle)?;

        let mut files = match name.component() {
            Some(component) => {
                let component = manifest.narrow_to_component(&self.kind, component, bundle)?;
                vec![component.file_path().to_string()]
            }
            None => self.source.bundle_files(&self.kind, bundle, &manifest)?,
        };
        files.retain(|file| file != self.kind.manifest_file);
        files.sort();
        files.dedup();
        for file in &files {
            check_relative_path(file, bundle)?;
        }

        info!(
            kind = self.kind.kind,
            package = %name,
            source = %self.source.location(),
            files = files.len(),
            "installing"
        );

        let destination = self.install_dir(bundle);
        let staged = StagedInstall::begin(&destination)?;
        staged.write_file(self.kind.manifest_file, manifest.to_json_pretty()?.as_bytes())?;

        self.progress.start(bundle, files.len() as u64);
        let fetched = files.par_iter().try_for_each(|file| -> Result<()> {
            let contents = self.source.fetch_file(&self.kind, bundle, file)?;
            staged.write_file(file, &contents)?;
            self.progress.file_done(file);
            Ok(())
        });

        if let Err(e) = fetched {
            self.progress.abandon();
            return Err(e);
        }

        staged.commit()?;
        self.progress.finish();
        Ok(())
    }

    /// Remove an installed bundle
    pub fn uninstall(&self, name: &str) -> Result<()> {
        let name = PackageName::parse_bundle(name, &self.kind)?;
        let bundle = name.bundle();

        if !self.is_installed(bundle) {
            return Err(package::not_installed(self.kind.kind, bundle));
        }

        let dir = self.install_dir(bundle);
        debug!(path = %dir.display(), "removing installation");
        fs::remove_dir_all(&dir).map_err(|e| fs_error::write_failed(&dir, e))
    }

    /// Names of installed bundles, sorted
    pub fn list_installed(&self) -> Result<Vec<String>> {
        let dir = self.packages_dir();
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(&dir).map_err(|e| fs_error::read_failed(&dir, e))? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            let Some(name) = entry.file_name().to_str().map(str::to_string) else {
                continue;
            };
            if name.ends_with(STAGING_SUFFIX) || name.ends_with(BACKUP_SUFFIX) {
                continue;
            }
            if entry.path().join(self.kind.manifest_file).is_file() {
                names.push(name);
            }
        }

        names.sort();
        Ok(names)
    }

    /// Summaries of bundles offered by the source.
    ///
    /// A bundle whose manifest cannot be fetched is left out; only a failing
    /// enumeration fails the whole listing.
    pub fn list_available(&self) -> Result<Vec<PackageSummary>> {
        let bundles = self.source.list_bundles(&self.kind)?;
        debug!(count = bundles.len(), "registry candidates");

        Ok(bundles
            .par_iter()
            .filter_map(
                |bundle| match self.source.fetch_manifest(&self.kind, bundle) {
                    Ok(manifest) => Some(manifest.summary(&self.kind, bundle)),
                    Err(e) => {
                        debug!(bundle = %bundle, error = %e, "skipping registry entry");
                        None
                    }
                },
            )
            .collect())
    }

    /// Manifest for `bundle` or `bundle/component`, installed copy first.
    ///
    /// Registry failures of any sort surface as `NotFound`.
    pub fn get_metadata(&self, name: &str) -> Result<Manifest> {
        let name = PackageName::parse(name, &self.kind)?;
        let bundle = name.bundle();

        let mut manifest = if self.is_installed(bundle) {
            self.read_installed_manifest(bundle)?
        } else {
            self.source
                .fetch_manifest(&self.kind, bundle)
                .map_err(|e| {
                    debug!(bundle, error = %e, "registry lookup failed");
                    package::not_found(self.kind.kind, bundle)
                })?
        };

        if let Some(component) = name.component() {
            manifest.narrow_to_component(&self.kind, component, bundle)?;
        }
        Ok(manifest)
    }

    /// Read the manifest of an installed bundle
    pub fn read_installed_manifest(&self, bundle: &str) -> Result<Manifest> {
        let path = self.manifest_path(bundle);
        let bytes = fs::read(&path).map_err(|e| fs_error::read_failed(&path, e))?;
        Manifest::from_slice(&bytes, bundle)
    }
}
