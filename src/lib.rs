//! cursor-companion - workflow packs, prompts and rules for Cursor
//!
//! Installs packages from a registry (HTTP or a local directory) into a
//! project's `.cursor` directory. The [`package::PackageManager`] carries the
//! lifecycle; the `cco` binary is a thin CLI over it.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod package;
pub mod project;
pub mod ui;
