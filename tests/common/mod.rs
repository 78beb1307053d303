//! Common test utilities for cursor-companion integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A project directory plus a local registry, both in one temp dir
pub struct TestProject {
    pub temp: TempDir,
    /// Project root passed with `-p`
    pub path: PathBuf,
    /// Local registry root passed with `--registry`
    pub registry: PathBuf,
}

impl TestProject {
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("project");
        let registry = temp.path().join("registry");
        std::fs::create_dir_all(&path).expect("Failed to create project directory");
        std::fs::create_dir_all(&registry).expect("Failed to create registry directory");
        Self {
            temp,
            path,
            registry,
        }
    }

    /// Write a file under the registry root
    pub fn write_registry_file(&self, path: &str, content: &str) {
        write(&self.registry.join(path), content);
    }

    /// Add a workflow pack with one markdown file per entry in `files`
    pub fn add_workflow_pack(&self, name: &str, version: &str, files: &[&str]) {
        self.write_registry_file(
            &format!("workflows/{name}/pack.json"),
            &format!(
                r#"{{"name": "{name}", "version": "{version}", "author": "tests", "description": "{name} pack"}}"#
            ),
        );
        for file in files {
            self.write_registry_file(&format!("workflows/{name}/{file}"), &format!("# {file}"));
        }
    }

    /// Add a prompt bundle with components `review` and `refactor`
    pub fn add_prompt_bundle(&self, name: &str) {
        self.write_registry_file(
            &format!("prompts/{name}/prompt_manifest.json"),
            &format!(
                r#"{{
  "name": "{name}",
  "version": "1.0.0",
  "prompts": [
    {{"name": "review", "description": "Review code", "patterns": ["**/*.rs"]}},
    {{"name": "refactor", "description": "Refactor code"}}
  ]
}}"#
            ),
        );
        self.write_registry_file(&format!("prompts/{name}/review"), "Review this");
        self.write_registry_file(&format!("prompts/{name}/refactor"), "Refactor this");
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        write(&self.path.join(path), content);
    }

    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// `cco` pointed at this project and its local registry
    pub fn cco_cmd(&self) -> Command {
        let mut cmd = cco_cmd();
        cmd.arg("-p").arg(&self.path);
        cmd.arg("--registry").arg(&self.registry);
        cmd
    }
}

/// `cco` with developer overrides removed
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn cco_cmd() -> Command {
    let mut cmd = Command::cargo_bin("cco").expect("cco binary should be built");
    cmd.env_remove("CCO_REGISTRY");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    std::fs::write(path, content).expect("Failed to write file");
}
