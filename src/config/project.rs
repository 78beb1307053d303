//! `.cursor/config.json` loading and saving

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{CompanionError, Result, fs as fs_error};
use crate::ui::logger;

use super::{CONFIG_DIR, CONFIG_FILE};

/// Per-project settings.
///
/// Keys other than the registry settings belong to other tools and are
/// written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registry_api: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ProjectConfig {
    pub fn path(project_root: &Path) -> PathBuf {
        project_root.join(CONFIG_DIR).join(CONFIG_FILE)
    }

    /// Load the config; a missing file yields the defaults
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = Self::path(project_root);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| fs_error::read_failed(&path, e))?;
        serde_json::from_str(&content).map_err(|e| CompanionError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Load the config, falling back to defaults when it cannot be read
    pub fn load_or_default(project_root: &Path) -> Self {
        Self::load(project_root).unwrap_or_else(|e| {
            logger::warning(format!("ignoring project config: {e}"));
            Self::default()
        })
    }

    /// Save the config.
    ///
    /// Writes `config.json.tmp` and renames it into place so readers never
    /// observe a half-written file.
    pub fn save(&self, project_root: &Path) -> Result<()> {
        let path = Self::path(project_root);
        let dir = project_root.join(CONFIG_DIR);
        fs::create_dir_all(&dir).map_err(|e| fs_error::write_failed(&dir, e))?;

        let mut content = serde_json::to_string_pretty(self)?;
        content.push('\n');

        let tmp_path = dir.join(format!("{CONFIG_FILE}.tmp"));
        fs::write(&tmp_path, &content).map_err(|e| fs_error::write_failed(&tmp_path, e))?;
        fs::rename(&tmp_path, &path).map_err(|e| fs_error::write_failed(&path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_is_default() {
        let temp = TempDir::new().unwrap();
        assert_eq!(ProjectConfig::load(temp.path()).unwrap(), ProjectConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let config = ProjectConfig {
            registry: Some("https://example.com/registry".to_string()),
            ..ProjectConfig::default()
        };
        config.save(temp.path()).unwrap();

        let raw = fs::read_to_string(temp.path().join(".cursor/config.json")).unwrap();
        assert!(raw.contains("\"registry\": \"https://example.com/registry\""));
        assert!(!temp.path().join(".cursor/config.json.tmp").exists());
        assert_eq!(ProjectConfig::load(temp.path()).unwrap(), config);
    }

    #[test]
    fn test_unknown_keys_survive_rewrite() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".cursor")).unwrap();
        fs::write(
            temp.path().join(".cursor/config.json"),
            r#"{"theme": "dark", "registryApi": "https://api.example.com"}"#,
        )
        .unwrap();

        let mut config = ProjectConfig::load(temp.path()).unwrap();
        assert_eq!(config.registry_api.as_deref(), Some("https://api.example.com"));
        config.registry = Some("https://example.com".to_string());
        config.save(temp.path()).unwrap();

        let value: Value =
            serde_json::from_str(&fs::read_to_string(ProjectConfig::path(temp.path())).unwrap())
                .unwrap();
        assert_eq!(value["theme"], "dark");
        assert_eq!(value["registry"], "https://example.com");
        assert_eq!(value["registryApi"], "https://api.example.com");
    }

    #[test]
    fn test_malformed_config() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join(".cursor")).unwrap();
        fs::write(temp.path().join(".cursor/config.json"), "{oops").unwrap();

        assert!(matches!(
            ProjectConfig::load(temp.path()),
            Err(CompanionError::ConfigParseFailed { .. })
        ));
        assert_eq!(ProjectConfig::load_or_default(temp.path()), ProjectConfig::default());
    }
}
