//! Package kinds
//!
//! Workflow packs, prompts and rules share one lifecycle; a kind only decides
//! where installations live and which manifest file marks them.

use std::fmt;

/// Configuration record describing one kind of package
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageKind {
    /// Singular identifier used in messages (`workflow`)
    pub kind: &'static str,
    /// Subdirectory under the project config dir and under the registry root
    pub subdirectory: &'static str,
    /// File whose presence marks a directory as an installed package
    pub manifest_file: &'static str,
}

impl PackageKind {
    pub const WORKFLOW: PackageKind = PackageKind {
        kind: "workflow",
        subdirectory: "workflows",
        manifest_file: "pack.json",
    };

    pub const PROMPT: PackageKind = PackageKind {
        kind: "prompt",
        subdirectory: "prompts",
        manifest_file: "prompt_manifest.json",
    };

    pub const RULE: PackageKind = PackageKind {
        kind: "rule",
        subdirectory: "rules",
        manifest_file: "rule_manifest.json",
    };

    /// All kinds, in the order `init` creates their directories
    pub const ALL: [PackageKind; 3] = [Self::WORKFLOW, Self::PROMPT, Self::RULE];

    /// Manifest key holding the component list (`workflows`, `prompts`, `rules`)
    pub fn component_key(&self) -> String {
        format!("{}s", self.kind)
    }

    /// Capitalized label for headings
    pub fn label(&self) -> String {
        let mut chars = self.kind.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for PackageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind)
    }
}
