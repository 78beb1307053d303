//! Package lifecycle errors

use super::{CompanionError, NameError};

/// Creates an invalid name error
pub fn invalid_name(kind: &str, name: impl Into<String>, reason: NameError) -> CompanionError {
    CompanionError::InvalidName {
        kind: kind.to_string(),
        name: name.into(),
        reason,
    }
}

/// Creates a package not found error
pub fn not_found(kind: &str, name: impl Into<String>) -> CompanionError {
    CompanionError::NotFound {
        kind: kind.to_string(),
        name: name.into(),
    }
}

/// Creates a component-not-in-bundle error
pub fn component_not_found(
    kind: &str,
    component: impl Into<String>,
    bundle: impl Into<String>,
) -> CompanionError {
    CompanionError::ComponentNotFound {
        kind: kind.to_string(),
        component: component.into(),
        bundle: bundle.into(),
    }
}

/// Creates an already installed error
pub fn already_installed(kind: &str, name: impl Into<String>) -> CompanionError {
    CompanionError::AlreadyInstalled {
        kind: kind.to_string(),
        name: name.into(),
    }
}

/// Creates a not installed error
pub fn not_installed(kind: &str, name: impl Into<String>) -> CompanionError {
    CompanionError::NotInstalled {
        kind: kind.to_string(),
        name: name.into(),
    }
}

/// Creates an invalid manifest error
pub fn invalid_manifest(name: impl Into<String>, reason: impl Into<String>) -> CompanionError {
    CompanionError::InvalidManifest {
        name: name.into(),
        reason: reason.into(),
    }
}
