//! Error types and handling for cursor-companion
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Constructors are grouped by error domain:
//! - [`package`]: name validation and package lifecycle errors
//! - [`fs`]: file system errors

pub mod fs;
pub mod package;

use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// Why a package name was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameError {
    /// Name is empty or whitespace only
    Empty,
    /// More than one `/` separator
    TooManySegments,
    /// A segment on either side of `/` is empty
    EmptySegment,
    /// A segment contains characters outside `[A-Za-z0-9._-]`
    IllegalCharacters,
    /// A segment is `.` or `..`, or the bundle ends in `.tmp` / `.old`
    Reserved,
    /// `bundle/component` given where only a bundle name is accepted
    ComponentNotAllowed,
}

impl fmt::Display for NameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            NameError::Empty => "name is required",
            NameError::TooManySegments => "invalid format, use bundle or bundle/component",
            NameError::EmptySegment => "bundle and component names must not be empty",
            NameError::IllegalCharacters => {
                "can only contain letters, numbers, hyphens, dots and underscores"
            }
            NameError::Reserved => {
                "'.', '..' and bundle names ending in '.tmp' or '.old' are reserved"
            }
            NameError::ComponentNotAllowed => "expected a bundle name without a component",
        };
        f.write_str(reason)
    }
}

/// Main error type for cursor-companion operations
#[derive(Error, Diagnostic, Debug)]
pub enum CompanionError {
    // Package errors
    #[error("Invalid {kind} name '{name}': {reason}")]
    #[diagnostic(
        code(cco::package::invalid_name),
        help("Names use letters, digits, '-', '.', '_' and an optional '/component' suffix")
    )]
    InvalidName {
        kind: String,
        name: String,
        reason: NameError,
    },

    #[error("{kind} '{name}' not found locally or in registry")]
    #[diagnostic(
        code(cco::package::not_found),
        help("Run 'cco <packs|prompts|rules> available' to see what the registry offers")
    )]
    NotFound { kind: String, name: String },

    #[error("{kind} '{component}' not found in bundle '{bundle}'")]
    #[diagnostic(code(cco::package::component_not_found))]
    ComponentNotFound {
        kind: String,
        component: String,
        bundle: String,
    },

    #[error("{kind} '{name}' is already installed")]
    #[diagnostic(
        code(cco::package::already_installed),
        help("Uninstall it first to reinstall the whole bundle")
    )]
    AlreadyInstalled { kind: String, name: String },

    #[error("{kind} '{name}' is not installed")]
    #[diagnostic(code(cco::package::not_installed))]
    NotInstalled { kind: String, name: String },

    #[error("Invalid manifest for '{name}': {reason}")]
    #[diagnostic(code(cco::package::invalid_manifest))]
    InvalidManifest { name: String, reason: String },

    // Registry errors
    #[error("Registry not accessible: {url}")]
    #[diagnostic(
        code(cco::registry::unreachable),
        help("Check your network connection or the configured registry ('cco registry get')")
    )]
    NetworkUnreachable { url: String },

    #[error("Registry API error ({status}): {url}")]
    #[diagnostic(code(cco::registry::api))]
    RegistryApi { status: u16, url: String },

    #[error("Registry error: {url}: {reason}")]
    #[diagnostic(code(cco::registry::http))]
    Http { url: String, reason: String },

    // Project errors
    #[error("Invalid project directory '{path}': {reason}")]
    #[diagnostic(code(cco::project::invalid_dir))]
    InvalidProjectDir { path: String, reason: String },

    // Configuration errors
    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(cco::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(cco::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(cco::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(cco::fs::io_error))]
    IoError { message: String },

    #[error("Unsupported shell: {shell}")]
    #[diagnostic(
        code(cco::cli::unsupported_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnsupportedShell { shell: String },

    #[error("Prompt failed: {message}")]
    #[diagnostic(code(cco::ui::prompt))]
    Prompt { message: String },
}

impl CompanionError {
    /// Wrap unclassified failures with the operation that was running.
    ///
    /// Classified errors (name, lookup, registry) pass through unchanged so
    /// callers can still match on them.
    pub fn with_operation(self, operation: &str) -> Self {
        match self {
            CompanionError::IoError { .. }
            | CompanionError::FileReadFailed { .. }
            | CompanionError::FileWriteFailed { .. } => CompanionError::IoError {
                message: format!("{operation}: {self}"),
            },
            other => other,
        }
    }
}

impl From<std::io::Error> for CompanionError {
    fn from(err: std::io::Error) -> Self {
        CompanionError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CompanionError {
    fn from(err: serde_json::Error) -> Self {
        CompanionError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<inquire::InquireError> for CompanionError {
    fn from(err: inquire::InquireError) -> Self {
        CompanionError::Prompt {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, CompanionError>;
