//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown on stderr while a table is compiled
pub struct ProgressReporter {
    spinner: Option<ProgressBar>,
    quiet: bool,
}

impl ProgressReporter {
    /// Create a new progress reporter
    pub fn new(quiet: bool) -> Self {
        Self {
            spinner: None,
            quiet,
        }
    }

    /// Start the spinner with a message
    pub fn start(&mut self, message: &str) {
        if self.quiet {
            return;
        }

        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner} [{elapsed_precise}] {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(100));

        self.spinner = Some(spinner);
    }

    /// Finish and clear the spinner
    pub fn finish(&mut self) {
        if let Some(spinner) = self.spinner.take() {
            spinner.finish_and_clear();
        }
    }

    /// Whether a spinner is currently shown
    pub fn is_active(&self) -> bool {
        self.spinner.is_some()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quiet_reporter_stays_idle() {
        let mut reporter = ProgressReporter::new(true);
        reporter.start("Compiling");
        assert!(!reporter.is_active());
        reporter.finish();
    }

    #[test]
    fn test_start_and_finish() {
        let mut reporter = ProgressReporter::new(false);
        reporter.start("Compiling");
        assert!(reporter.is_active());
        reporter.finish();
        assert!(!reporter.is_active());
    }
}
