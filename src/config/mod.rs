//! Project configuration handling
//!
//! This module contains:
//! - `.cursor/config.json` - per-project settings, most importantly the registry
//! - [`RegistryLocation`] - where packages are fetched from

pub mod project;
pub mod registry;

pub use project::ProjectConfig;
pub use registry::RegistryLocation;

/// Project configuration directory, relative to the project root
pub const CONFIG_DIR: &str = ".cursor";

/// Config filename inside [`CONFIG_DIR`]
pub const CONFIG_FILE: &str = "config.json";

/// Default raw-content base of the public registry
pub const DEFAULT_REGISTRY_URL: &str =
    "https://raw.githubusercontent.com/jeremytoce/cursor-companion-library/main";

/// Default directory-listing API of the public registry
pub const DEFAULT_REGISTRY_API: &str =
    "https://api.github.com/repos/jeremytoce/cursor-companion-library/contents";

/// Environment variable overriding the registry for one invocation
pub const REGISTRY_ENV: &str = "CCO_REGISTRY";
