//! Progress reporting for file downloads during install
//!
//! All progress goes through the [`ProgressReporter`] trait so the library
//! stays silent unless the CLI opts into a progress bar.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for one install at a time.
///
/// Methods take `&self` because files are fetched in parallel.
pub trait ProgressReporter: Send + Sync {
    /// A bundle install with `total_files` content files is starting
    fn start(&self, bundle: &str, total_files: u64);

    /// One file has been written to the staging directory
    fn file_done(&self, path: &str);

    /// Install committed
    fn finish(&self);

    /// Install failed
    fn abandon(&self);
}

/// Progress bar on stderr using indicatif
pub struct InteractiveProgressReporter {
    file_pb: ProgressBar,
}

impl InteractiveProgressReporter {
    pub fn new() -> Self {
        let style = ProgressStyle::default_bar()
            .template("  [{bar:40.green/yellow}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▉▊▋▌▍▎▏  ");

        let file_pb = ProgressBar::new(0);
        file_pb.set_style(style);
        Self { file_pb }
    }
}

impl Default for InteractiveProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn start(&self, bundle: &str, total_files: u64) {
        self.file_pb.reset();
        self.file_pb.set_length(total_files);
        self.file_pb.set_message(bundle.to_string());
    }

    fn file_done(&self, path: &str) {
        // Truncate long paths for display
        let display_path = if path.len() > 50 {
            let cut = path
                .char_indices()
                .map(|(i, _)| i)
                .find(|&i| path.len() - i <= 47)
                .unwrap_or(0);
            format!("...{}", &path[cut..])
        } else {
            path.to_string()
        };
        self.file_pb.set_message(display_path);
        self.file_pb.inc(1);
    }

    fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    fn abandon(&self) {
        self.file_pb.abandon();
    }
}

/// No-op reporter for library callers and tests
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn start(&self, _bundle: &str, _total_files: u64) {}

    fn file_done(&self, _path: &str) {}

    fn finish(&self) {}

    fn abandon(&self) {}
}
