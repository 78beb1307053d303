//! Package manifest model
//!
//! The component list lives under a kind-specific key (`workflows`,
//! `prompts`, `rules`), so it is kept in the flattened remainder of the
//! document and accessed through the kind. Keys this crate does not know
//! about survive a read/write cycle untouched.

use std::path::{Component as PathComponent, Path};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, package};

use super::kind::PackageKind;

/// Metadata document stored next to a package's content
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One named item inside a bundle
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patterns: Option<Vec<String>>,
    /// Content file for this component; defaults to the component name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl Component {
    pub fn file_path(&self) -> &str {
        self.file.as_deref().unwrap_or(&self.name)
    }
}

/// Lightweight listing entry for registry packages
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackageSummary {
    /// Registry directory name; what `install` and `is_installed` take
    pub bundle: String,
    /// Display name from the manifest, the bundle name when absent
    pub name: String,
    pub version: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub tags: Vec<String>,
    pub component_count: usize,
}

impl Manifest {
    /// Parse manifest bytes; `label` names the package in errors
    pub fn from_slice(bytes: &[u8], label: &str) -> Result<Self> {
        serde_json::from_slice(bytes)
            .map_err(|e| package::invalid_manifest(label, format!("malformed JSON: {e}")))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Components listed under the kind's key.
    ///
    /// A missing key means no components; a key holding something other than
    /// a list of components is an invalid manifest.
    pub fn components(&self, kind: &PackageKind) -> Result<Vec<Component>> {
        match self.extra.get(&kind.component_key()) {
            None | Some(Value::Null) => Ok(Vec::new()),
            Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
                package::invalid_manifest(
                    self.name.as_deref().unwrap_or("<unnamed>"),
                    format!("'{}' is not a component list: {e}", kind.component_key()),
                )
            }),
        }
    }

    pub fn component_count(&self, kind: &PackageKind) -> usize {
        match self.extra.get(&kind.component_key()) {
            Some(Value::Array(items)) => items.len(),
            _ => 0,
        }
    }

    /// Keep only `component` in the component list.
    ///
    /// The original JSON entry is kept as-is so unknown component fields
    /// survive. Returns the matched component.
    pub fn narrow_to_component(
        &mut self,
        kind: &PackageKind,
        component: &str,
        bundle: &str,
    ) -> Result<Component> {
        let key = kind.component_key();
        let entries = match self.extra.get(&key) {
            Some(Value::Array(items)) => items.clone(),
            _ => Vec::new(),
        };

        let entry = entries
            .into_iter()
            .find(|entry| entry.get("name").and_then(Value::as_str) == Some(component))
            .ok_or_else(|| package::component_not_found(kind.kind, component, bundle))?;

        let parsed: Component = serde_json::from_value(entry.clone())
            .map_err(|e| package::invalid_manifest(bundle, e.to_string()))?;

        self.extra.insert(key, Value::Array(vec![entry]));
        Ok(parsed)
    }

    /// Summary for listings of the registry directory `bundle`
    pub fn summary(&self, kind: &PackageKind, bundle: &str) -> PackageSummary {
        PackageSummary {
            bundle: bundle.to_string(),
            name: self.name.clone().unwrap_or_else(|| bundle.to_string()),
            version: self.version.clone(),
            author: self.author.clone(),
            description: self.description.clone(),
            tags: self.tags.clone().unwrap_or_default(),
            component_count: self.component_count(kind),
        }
    }
}

/// Reject listed paths that would escape the installation directory
pub fn check_relative_path(path: &str, bundle: &str) -> Result<()> {
    let candidate = Path::new(path);
    let escapes = path.is_empty()
        || candidate
            .components()
            .any(|c| !matches!(c, PathComponent::Normal(_) | PathComponent::CurDir));
    if escapes {
        return Err(package::invalid_manifest(
            bundle,
            format!("file path '{path}' must be relative and stay inside the package"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompanionError;
    use serde_json::json;

    fn prompt_manifest() -> Manifest {
        serde_json::from_value(json!({
            "name": "base",
            "version": "1.0.0",
            "author": "someone",
            "description": "Base prompts",
            "tags": ["core"],
            "prompts": [
                {"name": "review", "description": "Code review", "x-extra": 1},
                {"name": "plan", "description": "Planning", "file": "plan.md"}
            ],
            "homepage": "https://example.com"
        }))
        .unwrap()
    }

    #[test]
    fn test_components_read_from_kind_key() {
        let manifest = prompt_manifest();
        let components = manifest.components(&PackageKind::PROMPT).unwrap();
        assert_eq!(components.len(), 2);
        assert_eq!(components[1].file_path(), "plan.md");
        assert_eq!(components[0].file_path(), "review");
        assert!(manifest.components(&PackageKind::RULE).unwrap().is_empty());
    }

    #[test]
    fn test_components_rejects_non_list() {
        let manifest: Manifest = serde_json::from_value(json!({"rules": "nope"})).unwrap();
        assert!(matches!(
            manifest.components(&PackageKind::RULE),
            Err(CompanionError::InvalidManifest { .. })
        ));
    }

    #[test]
    fn test_narrow_keeps_only_component_and_unknown_fields() {
        let mut manifest = prompt_manifest();
        let component = manifest
            .narrow_to_component(&PackageKind::PROMPT, "review", "base")
            .unwrap();
        assert_eq!(component.name, "review");

        let value = serde_json::to_value(&manifest).unwrap();
        assert_eq!(value["prompts"], json!([{"name": "review", "description": "Code review", "x-extra": 1}]));
        assert_eq!(value["homepage"], "https://example.com");
        assert_eq!(value["version"], "1.0.0");
    }

    #[test]
    fn test_narrow_missing_component() {
        let mut manifest = prompt_manifest();
        let err = manifest
            .narrow_to_component(&PackageKind::PROMPT, "missing", "base")
            .unwrap_err();
        assert!(matches!(err, CompanionError::ComponentNotFound { .. }));
        assert_eq!(manifest.component_count(&PackageKind::PROMPT), 2);
    }

    #[test]
    fn test_round_trip_preserves_document() {
        let raw = json!({"name": "demo", "version": "1.0.0", "files": ["a.md"]});
        let manifest: Manifest = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(serde_json::to_value(&manifest).unwrap(), raw);
    }

    #[test]
    fn test_summary() {
        let summary = prompt_manifest().summary(&PackageKind::PROMPT, "dir-name");
        assert_eq!(summary.bundle, "dir-name");
        assert_eq!(summary.name, "base");
        assert_eq!(summary.component_count, 2);
        assert_eq!(summary.tags, vec!["core"]);

        let unnamed = Manifest::default().summary(&PackageKind::PROMPT, "dir-name");
        assert_eq!(unnamed.bundle, "dir-name");
        assert_eq!(unnamed.name, "dir-name");
        assert_eq!(unnamed.component_count, 0);
    }

    #[test]
    fn test_from_slice_reports_malformed_json() {
        let err = Manifest::from_slice(b"{not json", "demo").unwrap_err();
        assert!(err.to_string().contains("demo"));
    }

    #[test]
    fn test_check_relative_path() {
        assert!(check_relative_path("a.md", "b").is_ok());
        assert!(check_relative_path("docs/a.md", "b").is_ok());
        assert!(check_relative_path("../a.md", "b").is_err());
        assert!(check_relative_path("/etc/passwd", "b").is_err());
        assert!(check_relative_path("", "b").is_err());
    }
}
