//! Command implementations for the cco CLI

pub mod completions;
pub mod helpers;
pub mod init;
pub mod package;
pub mod registry;
pub mod version;
