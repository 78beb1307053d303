//! cco - cursor-companion command line

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use cursor_companion::cli::{Cli, Commands};
use cursor_companion::commands;
use cursor_companion::error::Result;
use cursor_companion::package::PackageKind;
use cursor_companion::ui::logger;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbosity);

    if let Err(e) = run(cli) {
        logger::error(e.to_string());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let registry = cli.registry.as_deref();
    match &cli.command {
        Commands::Init(args) => commands::init::run(cli.project, registry, args),
        Commands::Packs(args) => {
            commands::package::run(PackageKind::WORKFLOW, cli.project, registry, args)
        }
        Commands::Prompts(args) => {
            commands::package::run(PackageKind::PROMPT, cli.project, registry, args)
        }
        Commands::Rules(args) => commands::package::run(PackageKind::RULE, cli.project, registry, args),
        Commands::Registry(args) => commands::registry::run(cli.project, registry, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

/// Log to stderr; `RUST_LOG` wins over `-v`
fn init_tracing(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info,cursor_companion=debug",
        _ => "debug,cursor_companion=trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}
