//! Registry resolution
//!
//! Precedence for the content location: explicit override (`--registry` /
//! `CCO_REGISTRY`) > `.cursor/config.json` > the public default.

use std::path::{Path, PathBuf};

use super::{DEFAULT_REGISTRY_API, DEFAULT_REGISTRY_URL, ProjectConfig};

/// Where packages are fetched from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryLocation {
    /// HTTP registry: raw content host plus directory-listing API
    Remote { content_url: String, api_url: String },
    /// Package tree on disk laid out like the registry
    Local(PathBuf),
}

impl RegistryLocation {
    pub fn resolve(project_root: &Path, registry_override: Option<&str>) -> Self {
        let config = ProjectConfig::load_or_default(project_root);
        let registry = registry_override
            .map(str::to_string)
            .or(config.registry)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_REGISTRY_URL.to_string());
        let api = config
            .registry_api
            .unwrap_or_else(|| DEFAULT_REGISTRY_API.to_string());

        Self::from_value(&registry, &api, project_root)
    }

    /// Interpret a configured registry value.
    ///
    /// `http(s)://` values are remote; anything else is a directory, with a
    /// `file://` prefix stripped and relative paths taken from the project root.
    pub fn from_value(registry: &str, api: &str, project_root: &Path) -> Self {
        let registry = registry.trim();
        if registry.starts_with("http://") || registry.starts_with("https://") {
            return Self::Remote {
                content_url: registry.trim_end_matches('/').to_string(),
                api_url: api.trim().trim_end_matches('/').to_string(),
            };
        }

        let path = PathBuf::from(registry.strip_prefix("file://").unwrap_or(registry));
        if path.is_absolute() {
            Self::Local(path)
        } else {
            Self::Local(project_root.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config() {
        let temp = TempDir::new().unwrap();
        assert_eq!(
            RegistryLocation::resolve(temp.path(), None),
            RegistryLocation::Remote {
                content_url: DEFAULT_REGISTRY_URL.to_string(),
                api_url: DEFAULT_REGISTRY_API.to_string(),
            }
        );
    }

    #[test]
    fn test_config_registry_is_used() {
        let temp = TempDir::new().unwrap();
        ProjectConfig {
            registry: Some("https://mirror.example.com/".to_string()),
            registry_api: Some("https://api.example.com/contents".to_string()),
            ..ProjectConfig::default()
        }
        .save(temp.path())
        .unwrap();

        assert_eq!(
            RegistryLocation::resolve(temp.path(), None),
            RegistryLocation::Remote {
                content_url: "https://mirror.example.com".to_string(),
                api_url: "https://api.example.com/contents".to_string(),
            }
        );
    }

    #[test]
    fn test_override_wins_over_config() {
        let temp = TempDir::new().unwrap();
        ProjectConfig {
            registry: Some("https://mirror.example.com".to_string()),
            ..ProjectConfig::default()
        }
        .save(temp.path())
        .unwrap();

        let location = RegistryLocation::resolve(temp.path(), Some("./templates"));
        assert_eq!(
            location,
            RegistryLocation::Local(temp.path().join("templates"))
        );
    }

    #[test]
    fn test_file_url_is_local() {
        let root = Path::new("/project");
        assert_eq!(
            RegistryLocation::from_value("file:///srv/packs", DEFAULT_REGISTRY_API, root),
            RegistryLocation::Local(PathBuf::from("/srv/packs"))
        );
    }
}
