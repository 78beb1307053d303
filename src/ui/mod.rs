//! Terminal presentation layer
//!
//! - [`logger`]: leveled user-facing messages
//! - [`display`]: metadata and listing formatting
//! - [`progress`]: download progress through the `ProgressReporter` trait

pub mod display;
pub mod logger;
pub mod progress;
