//! Package Manager for workflow packs, prompts and rules
//!
//! One generic [`PackageManager`] handles every [`PackageKind`]; kinds differ
//! only in their subdirectory and manifest file name.

pub mod kind;
pub mod manager;
pub mod manifest;
pub mod name;
pub mod registry;
pub mod source;
pub mod staging;

pub use kind::PackageKind;
pub use manager::PackageManager;
pub use manifest::{Component, Manifest, PackageSummary};
pub use name::PackageName;
pub use registry::RegistryClient;
pub use source::{LocalSource, PackageSource};
