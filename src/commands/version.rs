//! Version command implementation

use crate::error::Result;
use crate::ui::logger;

/// Print version and build details
pub fn run() -> Result<()> {
    logger::info(format!("cco {}", env!("CARGO_PKG_VERSION")));
    logger::info(format!("  Minimum Rust: {}", env!("CARGO_PKG_RUST_VERSION")));
    logger::info(format!(
        "  Profile: {}",
        if cfg!(debug_assertions) { "debug" } else { "release" }
    ));
    Ok(())
}
