//! Console logger for user-facing messages
//!
//! `info`/`success` go to stdout, `warning`/`error` to stderr; `debug`
//! is routed through `tracing` so `-v` / `RUST_LOG` control it.

use console::Style;

pub fn info(message: impl AsRef<str>) {
    println!("{}", message.as_ref());
}

pub fn success(message: impl AsRef<str>) {
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("✓"),
        Style::new().green().apply_to(message.as_ref())
    );
}

pub fn warning(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().for_stderr().yellow().bold().apply_to("Warning:"),
        message.as_ref()
    );
}

pub fn error(message: impl AsRef<str>) {
    eprintln!(
        "{} {}",
        Style::new().for_stderr().red().bold().apply_to("Error:"),
        message.as_ref()
    );
}

pub fn debug(message: impl AsRef<str>) {
    tracing::debug!("{}", message.as_ref());
}
