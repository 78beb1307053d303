//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::REGISTRY_ENV;

/// cursor-companion - workflow packs, prompts and rules for Cursor
#[derive(Parser, Debug)]
#[command(
    name = "cco",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Install and manage workflow packs, prompts and rules for Cursor",
    long_about = "cursor-companion installs workflow packs, prompts and rules from a registry \
                  into a project's .cursor directory.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  cco init\n    \
                  cco packs available\n    \
                  cco packs install -n base\n    \
                  cco prompts install -n base/review\n    \
                  cco rules list\n    \
                  cco registry set -u https://example.com/registry"
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'p', global = true)]
    pub project: Option<PathBuf>,

    /// Registry URL or local directory for this invocation
    #[arg(long, global = true, env = REGISTRY_ENV)]
    pub registry: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short = 'v', global = true, action = ArgAction::Count)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize cursor-companion in the project
    Init(InitArgs),

    /// Manage workflow packs
    Packs(PackageArgs),

    /// Manage prompts
    Prompts(PackageArgs),

    /// Manage rules
    Rules(PackageArgs),

    /// Show or change the package registry
    Registry(RegistryArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the init command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Initialize with the base pack:\n    cco init\n\n\
                   Re-initialize without asking:\n    cco init --yes\n\n\
                   Only create the directories:\n    cco init --skip-base")]
pub struct InitArgs {
    /// Overwrite an existing initialization without asking
    #[arg(long, short = 'y')]
    pub yes: bool,

    /// Do not install the base workflow pack
    #[arg(long)]
    pub skip_base: bool,
}

/// Arguments shared by the packs, prompts and rules commands
#[derive(Parser, Debug)]
pub struct PackageArgs {
    #[command(subcommand)]
    pub command: PackageCommand,
}

#[derive(Subcommand, Debug)]
pub enum PackageCommand {
    /// Install a bundle or a single component (bundle/component)
    Install {
        /// Package name
        #[arg(long, short = 'n')]
        name: String,
    },

    /// Remove an installed bundle
    Uninstall {
        /// Bundle name
        #[arg(long, short = 'n')]
        name: String,
    },

    /// List installed bundles
    List,

    /// List bundles offered by the registry
    Available,

    /// Show package details
    Info {
        /// Package name
        #[arg(long, short = 'n')]
        name: String,

        /// Also list the files in the bundle
        #[arg(long)]
        verbose: bool,
    },
}

/// Arguments for the registry command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Show the current registry:\n    cco registry get\n\n\
                   Use a fork:\n    cco registry set -u https://raw.githubusercontent.com/me/library/main\n\n\
                   Use a local directory:\n    cco registry set -u ./my-registry\n\n\
                   Back to the default:\n    cco registry reset")]
pub struct RegistryArgs {
    #[command(subcommand)]
    pub command: RegistryCommand,
}

#[derive(Subcommand, Debug)]
pub enum RegistryCommand {
    /// Print the registry in effect
    Get,

    /// Store a registry in .cursor/config.json
    Set {
        /// Registry URL or directory
        #[arg(long, short = 'u')]
        url: String,
    },

    /// Remove the stored registry
    Reset,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
